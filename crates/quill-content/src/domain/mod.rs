//! Request payloads and their validation rules.

pub mod commands;
