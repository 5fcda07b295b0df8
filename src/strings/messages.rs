//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes tip layout text, status summaries and apologetic fallbacks.

use crate::domain::types::TipStatus;

pub const TIP_ATTRIBUTION: &str =
    "📖 From _The Pragmatic Programmer_ by Andrew Hunt & David Thomas";

pub fn tip_header(emoji: &str, id: u32) -> String {
    format!("{emoji} Daily Tip #{id}")
}

pub const RESET_CONFIRMED: &str =
    "🔄 Tip cycle has been reset! All tips are now available again.";

pub fn tip_status(status: &TipStatus) -> String {
    format!(
        "📊 **Tip Status**\n• Used tips: {}/{}\n• Remaining tips: {}\n• Progress: {}%",
        status.used, status.total, status.remaining, status.percent
    )
}

pub const TIP_FAILED: &str = "Sorry, there was an error getting your tip! 😞";
pub const RESET_FAILED: &str = "Sorry, there was an error resetting the tips! 😞";
pub const STATUS_FAILED: &str = "Sorry, there was an error getting the tip status! 😞";

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Try `.help`.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_status_summary() {
        let msg = tip_status(&TipStatus::new(12, 53));
        assert_eq!(
            msg,
            "📊 **Tip Status**\n• Used tips: 12/53\n• Remaining tips: 41\n• Progress: 23%"
        );
    }

    #[test]
    fn test_tip_header() {
        assert_eq!(tip_header("🧠", 53), "🧠 Daily Tip #53");
    }
}
