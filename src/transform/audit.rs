//! transform::audit
//!
//! Audit table entries mapping rewritten vertex keys back to originals.

use serde::{Deserialize, Serialize};

/// One line of the audit table: `{"_key": <new key>, "k": <original key>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Rewritten vertex key
    #[serde(rename = "_key")]
    pub key: String,

    /// Original vertex key
    #[serde(rename = "k")]
    pub original: String,
}

impl AuditEntry {
    /// Pair a rewritten key with the key it replaced.
    pub fn new(key: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            original: original.into(),
        }
    }
}
