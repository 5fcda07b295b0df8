//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes tip rotation, formatting, scheduling, command routing and health reporting.

pub mod formatter;
pub mod health;
pub mod logging;
pub mod poster;
pub mod router;
pub mod scheduler;
pub mod tracker;
