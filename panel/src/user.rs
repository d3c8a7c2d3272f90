//! Account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emails::Emails;
use crate::groups::{GroupPermissions, Permissions};

/// Kind of mailbox behind an account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    Individual,
    /// Shared mailbox owned by a group of people
    Group,
}

/// Profile of the authenticated user as served by `/api/me`
///
/// This is the view the panel reasons about when deciding what the current
/// user may do; it is refreshed together with the session and cleared with
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub active: bool,
    pub backup_email: Option<String>,
    // Group details
    pub group_id: i64,
    pub group_name: String,
    pub group_permissions: GroupPermissions,
    pub primary_email: Option<String>,
    pub created: DateTime<Utc>,
}

impl Permissions for PanelUser {
    fn can_manage_users(&self) -> bool {
        self.group_permissions.can_manage_users()
    }

    fn can_manage_system(&self) -> bool {
        self.group_permissions.can_manage_system()
    }
}

/// One row of the account list
///
/// Carries the primary email address when the account has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSimple {
    pub id: i64,
    pub username: String,
    pub description: String,
    pub account_type: AccountType,
    pub primary_email: Option<String>,
}

/// Complete account record as served by `/api/accounts/get/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub description: String,
    pub require_password_change: bool,
    pub quota: i64,
    pub account_type: AccountType,
    pub active: bool,
    pub backup_email: Option<String>,
    pub created: DateTime<Utc>,
    // Group details
    pub group_id: i64,
    pub group_name: String,
    pub group_permissions: GroupPermissions,
    /// Only populated when the emails were requested; the backend omits the
    /// field entirely when empty
    #[serde(default, skip_serializing_if = "Emails::is_empty")]
    pub emails: Emails,
}

/// Payload for `PUT /api/accounts/new`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub description: String,
    pub password: String,
    pub quota: i64,
    pub require_password_change: bool,
    pub account_type: AccountType,
    pub backup_email: Option<String>,
    /// Group the account starts in
    pub group: i64,
    pub send_a_password_reset_email: bool,
}

/// Partial update for `PUT /api/accounts/update/{id}/core`
///
/// Only fields that are set are touched. `backup_email` is doubly optional
/// so the address can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_email: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_user_predicates_follow_group_permissions() {
        let user = PanelUser {
            id: 1,
            name: "Jo Admin".to_owned(),
            username: "jo".to_owned(),
            active: true,
            backup_email: None,
            group_id: 2,
            group_name: "admins".to_owned(),
            group_permissions: GroupPermissions {
                modify_accounts: true,
                manage_system: false,
            },
            primary_email: Some("jo@example.com".to_owned()),
            created: Utc::now(),
        };

        assert!(user.can_manage_users());
        assert!(!user.can_manage_system());
    }

    #[test]
    fn panel_user_ignores_fields_it_does_not_track() {
        // The backend serializes a couple of extra fields; the client must
        // not choke on them.
        let user: PanelUser = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "Sam",
                "username": "sam",
                "active": true,
                "backup_email": null,
                "group_id": 1,
                "group_name": "users",
                "group_permissions": { "modify_accounts": false, "manage_system": false },
                "primary_email": "sam@example.com",
                "created": "2024-01-10T09:30:00Z",
                "quota": 1024
            }"#,
        )
        .unwrap();

        assert_eq!(user.username, "sam");
        assert!(!user.can_manage_users());
    }

    #[test]
    fn update_account_serializes_only_set_fields() {
        let update = UpdateAccount {
            quota: Some(2048),
            ..UpdateAccount::default()
        };

        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"quota":2048}"#
        );
    }

    #[test]
    fn update_account_can_clear_backup_email() {
        let update = UpdateAccount {
            backup_email: Some(None),
            ..UpdateAccount::default()
        };

        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"backup_email":null}"#
        );
    }

    #[test]
    fn full_user_without_emails_field() {
        let user: FullUser = serde_json::from_str(
            r#"{
                "id": 9,
                "name": "Lists",
                "username": "lists",
                "description": "shared inbox",
                "require_password_change": false,
                "quota": 0,
                "account_type": "Group",
                "active": true,
                "backup_email": null,
                "created": "2023-11-02T08:00:00Z",
                "group_id": 1,
                "group_name": "users",
                "group_permissions": { "modify_accounts": false, "manage_system": false }
            }"#,
        )
        .unwrap();

        assert_eq!(user.account_type, AccountType::Group);
        assert!(user.emails.is_empty());
    }
}
