//! # Help Text
//!
//! Displayed to the user via the `.help` command.

pub const MAIN: &str = concat!(
    "**📖 Daily Tip Help**\n",
    "Use: .command\n",
    "\n",
    "* tip: Get a random tip (also `.pragmatic-tip`)\n",
    "* reset: Reset the tip cycle (also `.reset-tips`)\n",
    "* status: Check tip progress (also `.tip-status`)\n",
    "* help: Show this message\n"
);
