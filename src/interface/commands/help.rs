//! # Help Command
//!
//! Handles the `.help` command.
//! Displays the command list to the requester.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider) -> Result<()> {
    chat.send_notification(crate::strings::help::MAIN)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
