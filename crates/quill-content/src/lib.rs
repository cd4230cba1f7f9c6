//! Quill — content application layer.
//!
//! Turns decoded request payloads into validated store operations: id
//! parsing and title checks happen here, before any store call.

pub mod application;
pub mod domain;
