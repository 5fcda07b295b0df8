//! # Tip Formatter
//!
//! Turns a `Tip` into a platform-neutral `TipPayload` (header, section, context, divider).
//! `format` is pure; the only randomness is the emoji choice, which goes through an
//! injected `RandomSource`.

use std::sync::Mutex;

use crate::domain::traits::RandomSource;
use crate::domain::types::{Block, Tip, TipPayload};
use crate::strings::messages;

pub const EMOJIS: [&str; 8] = ["💡", "🚀", "⚡", "🎯", "🔧", "📚", "💪", "🧠"];

pub struct TipFormatter {
    rng: Mutex<Box<dyn RandomSource>>,
}

impl TipFormatter {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn format(tip: &Tip, emoji: &str) -> TipPayload {
        TipPayload {
            blocks: vec![
                Block::Header(messages::tip_header(emoji, tip.id)),
                Block::Section {
                    title: tip.title.clone(),
                    body: tip.body.clone(),
                },
                Block::Context(messages::TIP_ATTRIBUTION.to_string()),
                Block::Divider,
            ],
        }
    }

    pub fn random_emoji(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = rng.pick_index(EMOJIS.len()).min(EMOJIS.len() - 1);
        EMOJIS[index]
    }

    /// Formats with a freshly chosen emoji.
    pub fn render(&self, tip: &Tip) -> TipPayload {
        Self::format(tip, self.random_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(usize);

    impl RandomSource for FixedSource {
        fn pick_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn sample_tip() -> Tip {
        Tip::new(
            15,
            "DRY - Don't Repeat Yourself",
            "Every piece of knowledge should exist only once in the system.",
        )
    }

    #[test]
    fn test_format_layout() {
        let payload = TipFormatter::format(&sample_tip(), "🎯");

        assert_eq!(payload.blocks.len(), 4);
        assert_eq!(payload.blocks[0], Block::Header("🎯 Daily Tip #15".to_string()));
        assert_eq!(
            payload.blocks[1],
            Block::Section {
                title: "DRY - Don't Repeat Yourself".to_string(),
                body: "Every piece of knowledge should exist only once in the system.".to_string(),
            }
        );
        assert_eq!(payload.blocks[2], Block::Context(messages::TIP_ATTRIBUTION.to_string()));
        assert_eq!(payload.blocks[3], Block::Divider);
    }

    #[test]
    fn test_format_contains_tip_verbatim() {
        let tip = sample_tip();
        let markdown = TipFormatter::format(&tip, "💡").to_markdown();

        assert!(markdown.contains("#15"));
        assert!(markdown.contains(&format!("**{}**", tip.title)));
        assert!(markdown.contains(&tip.body));
        assert!(markdown.contains("The Pragmatic Programmer"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let tip = sample_tip();
        assert_eq!(TipFormatter::format(&tip, "⚡"), TipFormatter::format(&tip, "⚡"));
        assert_ne!(TipFormatter::format(&tip, "⚡"), TipFormatter::format(&tip, "🔧"));
    }

    #[test]
    fn test_injected_emoji_choice() {
        let formatter = TipFormatter::new(Box::new(FixedSource(5)));
        assert_eq!(formatter.random_emoji(), "📚");

        let payload = formatter.render(&sample_tip());
        assert_eq!(payload.header(), Some("📚 Daily Tip #15"));
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let formatter = TipFormatter::new(Box::new(FixedSource(99)));
        assert_eq!(formatter.random_emoji(), "🧠");
    }
}
