//! Reply drafting pipeline.
//!
//! Every email flows through:
//! 1. `Classifier::classify()` — keyword match against the template table
//! 2. `extractor::extract()` — sender name + topic
//! 3. `Composer::compose()` — template fill, first occurrence per token
//!
//! `ReplyProcessor` wires the three together. The pipeline is pure and
//! synchronous; it never fails.

pub mod classifier;
pub mod composer;
pub mod extractor;
pub mod processor;
pub mod responses;
pub mod types;

pub use processor::ReplyProcessor;
pub use types::ProcessedReply;
