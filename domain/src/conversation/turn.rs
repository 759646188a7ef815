//! Turn entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful exchange (Entity)
///
/// `sequence` is the logical clock of the session: it starts at 1 and
/// increases by one for every appended turn. `created_at` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub sequence: u64,
    pub user: String,
    pub assistant: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(sequence: u64, user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            sequence,
            user: user.into(),
            assistant: assistant.into(),
            created_at: Utc::now(),
        }
    }
}
