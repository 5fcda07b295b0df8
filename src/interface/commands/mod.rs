//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., .tip, .reset, .status).
//! These handlers are invoked by the Router.

pub mod help;
pub mod reset;
pub mod status;
pub mod tip;

use crate::domain::traits::ChatProvider;
use crate::strings::logs;

/// Private apology after a failed command. Nothing left to do if this fails too.
pub(crate) async fn send_fallback(chat: &impl ChatProvider, text: &str) {
    if let Err(e) = chat.send_notification(text).await {
        tracing::error!("{}", logs::fallback_failed(&e));
    }
}
