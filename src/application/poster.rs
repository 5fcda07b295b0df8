//! # Tip Poster
//!
//! Pick, format, send. Shared by the scheduled trigger and the `.tip` command.

use anyhow::{Result, anyhow};

use crate::application::formatter::TipFormatter;
use crate::application::tracker::TipTracker;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Tip;
use crate::strings::logs;

/// Picks the next unused tip and sends it to the chat.
/// The tip counts as used even when delivery fails.
pub async fn post_tip(
    tracker: &TipTracker,
    formatter: &TipFormatter,
    chat: &impl ChatProvider,
) -> Result<Tip> {
    let tip = tracker.pick_unused();
    let payload = formatter.render(&tip);

    chat.send_tip(&payload).await.map_err(|e| anyhow!(e))?;

    tracing::info!("{}", logs::tip_posted(tip.id, &tip.title));
    Ok(tip)
}

/// Scheduled entry point. Errors are logged and swallowed; there is no retry.
pub async fn post_daily_tip(tracker: &TipTracker, formatter: &TipFormatter, chat: &impl ChatProvider) {
    tracing::info!("{}", logs::POSTING_DAILY);
    if let Err(e) = post_tip(tracker, formatter, chat).await {
        tracing::error!("{}", logs::tip_post_failed(&e.to_string()));
    }
}
