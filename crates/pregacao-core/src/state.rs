//! UI-agnostic session state types
//!
//! These are what a front end (CLI, desktop shell, web view) renders. They
//! carry no behavior beyond composition.

use crate::sermon::{SermonRequest, SermonResponse};
use serde::{Deserialize, Serialize};

/// A generated sermon together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SermonRecord {
    #[serde(flatten)]
    pub sermon: SermonResponse,
    pub request: SermonRequest,
}

/// A past sermon kept for quick re-display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: SermonRecord,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}
