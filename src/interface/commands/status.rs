//! # Status Command
//!
//! Handles `.status` (alias `.tip-status`). Reports cycle progress privately.

use anyhow::Result;

use crate::application::tracker::TipTracker;
use crate::domain::traits::ChatProvider;
use crate::strings::{logs, messages};

pub async fn handle_status(tracker: &TipTracker, chat: &impl ChatProvider) -> Result<()> {
    let msg = messages::tip_status(&tracker.status());

    if let Err(e) = chat.send_notification(&msg).await {
        tracing::error!("{}", logs::command_failed(".status", &e));
        super::send_fallback(chat, messages::STATUS_FAILED).await;
    }
    Ok(())
}
