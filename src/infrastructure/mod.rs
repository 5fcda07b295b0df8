//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., ChatProvider, RandomSource).

pub mod health_server;
pub mod matrix;
pub mod random;
#[cfg(test)]
pub mod testing;
