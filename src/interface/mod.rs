//! # Interface Layer
//!
//! Entry points for users and operators: chat command handlers and the command line.

pub mod cli;
pub mod commands;
