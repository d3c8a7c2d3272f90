//! Email addresses attached to accounts

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an address on an account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailType {
    /// The address the account is primarily known by; at most one
    #[default]
    Primary,
    Alias,
    /// Mailing list address delivering to the account
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: i64,
    /// Owning account id
    pub account: i64,
    pub email_address: String,
    pub email_type: EmailType,
    pub created: DateTime<Utc>,
}

/// Addresses of a single account, primary first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emails(Vec<Email>);

impl Emails {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_primary(&self) -> Option<&Email> {
        self.0.iter().find(|e| e.email_type == EmailType::Primary)
    }

    pub fn get_aliases(&self) -> Vec<&Email> {
        self.0
            .iter()
            .filter(|e| e.email_type == EmailType::Alias)
            .collect()
    }

    pub fn get_lists(&self) -> Vec<&Email> {
        self.0
            .iter()
            .filter(|e| e.email_type == EmailType::List)
            .collect()
    }
}

impl Deref for Emails {
    type Target = [Email];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Email>> for Emails {
    fn from(emails: Vec<Email>) -> Self {
        Self(emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: i64, address: &str, email_type: EmailType) -> Email {
        Email {
            id,
            account: 7,
            email_address: address.to_owned(),
            email_type,
            created: Utc::now(),
        }
    }

    #[test]
    fn primary_and_aliases_are_split() {
        let emails = Emails::from(vec![
            email(1, "me@example.com", EmailType::Primary),
            email(2, "other@example.com", EmailType::Alias),
            email(3, "all@example.com", EmailType::List),
        ]);

        assert_eq!(
            emails.get_primary().map(|e| e.email_address.as_str()),
            Some("me@example.com")
        );
        assert_eq!(emails.get_aliases().len(), 1);
        assert_eq!(emails.get_lists().len(), 1);
        assert_eq!(emails.len(), 3);
    }

    #[test]
    fn email_type_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&EmailType::Primary).unwrap(),
            r#""Primary""#
        );
        let parsed: EmailType = serde_json::from_str(r#""List""#).unwrap();
        assert_eq!(parsed, EmailType::List);
    }
}
