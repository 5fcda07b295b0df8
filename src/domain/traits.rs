//! # Domain Traits
//!
//! Abstract interfaces for the pluggable edges of the bot (chat delivery, randomness).
//! Allows the Infrastructure layer to supply Matrix and `rand`, and tests to supply fakes.

use async_trait::async_trait;

use crate::domain::types::TipPayload;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a formatted tip to the room
    async fn send_tip(&self, payload: &TipPayload) -> Result<String, String>;

    /// Send a notice meant for the requester (not highlighted, not a tip)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Source of uniform choices. Production wiring uses a real RNG; tests pin the choice.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. `len` is always at least 1.
    fn pick_index(&mut self, len: usize) -> usize;
}
