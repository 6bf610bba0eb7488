//! Reply Drafter — keyword-classified template replies for inbound email.

pub mod api;
pub mod channels;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod templates;
