//! Groups and their permission sets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permissions attached to a group
///
/// Every account belongs to exactly one group; what the account may do in
/// the panel is fully determined by these flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPermissions {
    /// May list, view and modify other accounts and groups
    pub modify_accounts: bool,
    /// May manage system-level settings such as domains
    pub manage_system: bool,
}

impl GroupPermissions {
    pub fn new_admin() -> Self {
        Self {
            modify_accounts: true,
            manage_system: true,
        }
    }
}

/// Authorization predicates derived from group permissions
///
/// Implemented for everything that carries a permission set so call sites
/// gate on the predicate rather than on raw flags.
pub trait Permissions {
    /// The "user manager" predicate gating account and group management
    fn can_manage_users(&self) -> bool;

    fn can_manage_system(&self) -> bool;
}

impl Permissions for GroupPermissions {
    fn can_manage_users(&self) -> bool {
        self.modify_accounts
    }

    fn can_manage_system(&self) -> bool {
        self.manage_system
    }
}

/// Group as served by `/api/groups/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub group_name: String,
    pub permissions: GroupPermissions,
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_permissions_deny_everything() {
        let perms = GroupPermissions::default();
        assert!(!perms.can_manage_users());
        assert!(!perms.can_manage_system());
    }

    #[test]
    fn admin_permissions_allow_everything() {
        let perms = GroupPermissions::new_admin();
        assert!(perms.can_manage_users());
        assert!(perms.can_manage_system());
    }

    #[test]
    fn group_deserializes_from_backend_shape() {
        let group: Group = serde_json::from_str(
            r#"{
                "id": 2,
                "group_name": "admins",
                "permissions": { "modify_accounts": true, "manage_system": true },
                "created": "2024-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(group.group_name, "admins");
        assert!(group.permissions.can_manage_users());
    }
}
