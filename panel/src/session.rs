//! Session data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-issued proof of authentication
///
/// Returned by the login endpoint next to the user profile. A session is
/// only trusted while `expires` lies in the future; there is no background
/// timer, the check happens lazily wherever the session is about to be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account this session belongs to
    pub user_id: i64,
    /// Opaque server-side identifier, sent back as the `session` cookie
    pub session_id: String,
    /// Instant after which the session must not be used
    pub expires: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl Session {
    /// Whether the session is still valid at the given instant
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }

    /// Whether the session has passed its expiry
    pub fn is_expired(&self) -> bool {
        !self.is_valid_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn session(expires: DateTime<Utc>) -> Session {
        Session {
            user_id: 1,
            session_id: "abc".to_owned(),
            expires,
            created: expires - TimeDelta::days(1),
        }
    }

    #[test]
    fn validity_is_strict() {
        let now = Utc::now();

        assert!(session(now + TimeDelta::hours(1)).is_valid_at(now));
        assert!(!session(now - TimeDelta::hours(1)).is_valid_at(now));
        // Expiring exactly now is already invalid
        assert!(!session(now).is_valid_at(now));
    }

    #[test]
    fn expired_session_detected() {
        assert!(session(Utc::now() - TimeDelta::seconds(1)).is_expired());
        assert!(!session(Utc::now() + TimeDelta::days(1)).is_expired());
    }
}
