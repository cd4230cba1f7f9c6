//! Route modules.

pub mod contents;
pub mod health;
pub mod root;
