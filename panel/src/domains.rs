//! Mail domains managed by the system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain as served by `/api/system/domains/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub domain: String,
    pub created: DateTime<Utc>,
}
