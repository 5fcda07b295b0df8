//! # Tip Command
//!
//! Handles `.tip` (alias `.pragmatic-tip`).
//! Posts the next unused tip to the room for everyone to see.

use anyhow::Result;

use crate::application::formatter::TipFormatter;
use crate::application::poster::post_tip;
use crate::application::tracker::TipTracker;
use crate::domain::traits::ChatProvider;
use crate::strings::{logs, messages};

pub async fn handle_tip(
    tracker: &TipTracker,
    formatter: &TipFormatter,
    chat: &impl ChatProvider,
) -> Result<()> {
    if let Err(e) = post_tip(tracker, formatter, chat).await {
        tracing::error!("{}", logs::command_failed(".tip", &e.to_string()));
        super::send_fallback(chat, messages::TIP_FAILED).await;
    }
    Ok(())
}
