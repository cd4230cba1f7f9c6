//! Quill Core — shared domain abstractions.
//!
//! This crate defines the content model, the storage trait every backend
//! implements, and the error types shared by the application and HTTP layers.
//! It contains no infrastructure code.

pub mod error;
pub mod model;
pub mod store;
