//! Command and query handlers for content records.

pub mod command_handlers;
pub mod query_handlers;
