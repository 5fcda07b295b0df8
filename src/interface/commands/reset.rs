//! # Reset Command
//!
//! Handles `.reset` (alias `.reset-tips`). Clears the cycle and confirms privately.

use anyhow::Result;

use crate::application::tracker::TipTracker;
use crate::domain::traits::ChatProvider;
use crate::strings::{logs, messages};

pub async fn handle_reset(tracker: &TipTracker, chat: &impl ChatProvider) -> Result<()> {
    tracker.reset();

    if let Err(e) = chat.send_notification(messages::RESET_CONFIRMED).await {
        tracing::error!("{}", logs::command_failed(".reset", &e));
        super::send_fallback(chat, messages::RESET_FAILED).await;
    }
    Ok(())
}
