//! # Strings Module
//!
//! Centralizes user-facing strings, log lines, help text and the built-in tip catalog.

pub mod help;
pub mod logs;
pub mod messages;
pub mod tips;
