//! Shared types for the drafting pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::templates::Category;

/// Result of running one email through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedReply {
    /// Unique id for this draft.
    pub id: Uuid,
    /// Category whose template was used.
    pub category: Category,
    /// True when the caller chose the category instead of the classifier.
    pub forced: bool,
    /// Extracted sender name.
    pub sender: String,
    /// Extracted topic.
    pub topic: String,
    /// The drafted reply.
    pub reply: String,
    /// When drafting completed.
    pub processed_at: DateTime<Utc>,
}
