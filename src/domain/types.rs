//! # Domain Types
//!
//! Common data structures shared by the tracker, the formatter and the delivery shells.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tip {
    pub id: u32,
    pub title: String,
    #[serde(alias = "summary")]
    pub body: String,
}

impl Tip {
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Snapshot of rotation progress.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TipStatus {
    pub used: usize,
    pub total: usize,
    pub remaining: usize,
    pub percent: u32,
}

impl TipStatus {
    pub fn new(used: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((used as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            used,
            total,
            remaining: total.saturating_sub(used),
            percent,
        }
    }
}

/// One visual block of a display payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(String),
    Section { title: String, body: String },
    Context(String),
    Divider,
}

/// Platform-neutral rendering of a tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipPayload {
    pub blocks: Vec<Block>,
}

impl TipPayload {
    /// Markdown suitable for `RoomMessageEventContent::text_markdown`.
    pub fn to_markdown(&self) -> String {
        let parts: Vec<String> = self
            .blocks
            .iter()
            .map(|block| match block {
                Block::Header(text) => format!("### {text}"),
                Block::Section { title, body } => format!("**{title}**\n\n{body}"),
                Block::Context(text) => text.clone(),
                Block::Divider => "---".to_string(),
            })
            .collect();
        parts.join("\n\n")
    }

    pub fn header(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Header(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
