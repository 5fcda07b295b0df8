//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `.tip`) and dispatches it with the shared tracker and formatter.

use anyhow::Result;
use std::sync::Arc;

use crate::application::formatter::TipFormatter;
use crate::application::tracker::TipTracker;
use crate::domain::traits::ChatProvider;
use crate::interface::commands;

#[derive(Clone)]
pub struct CommandRouter {
    tracker: Arc<TipTracker>,
    formatter: Arc<TipFormatter>,
}

impl CommandRouter {
    pub fn new(tracker: Arc<TipTracker>, formatter: Arc<TipFormatter>) -> Self {
        Self { tracker, formatter }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        if !msg.starts_with('.') {
            return Ok(());
        }

        let (cmd, args) = match msg.find(char::is_whitespace) {
            Some(idx) => (&msg[..idx], msg[idx..].trim()),
            None => (msg, ""),
        };
        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}'",
            cmd,
            args,
            sender
        );

        match cmd.to_lowercase().as_str() {
            ".tip" | ".pragmatic-tip" => {
                commands::tip::handle_tip(&self.tracker, &self.formatter, chat).await?;
            }
            ".reset" | ".reset-tips" => {
                commands::reset::handle_reset(&self.tracker, chat).await?;
            }
            ".status" | ".tip-status" => {
                commands::status::handle_status(&self.tracker, chat).await?;
            }
            ".help" => {
                commands::help::handle_help(chat).await?;
            }
            _ => {
                chat.send_notification(crate::strings::messages::UNKNOWN_COMMAND)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
        }
        Ok(())
    }
}
