//! In-memory `ChatProvider` that records everything sent through it.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::traits::ChatProvider;
use crate::domain::types::TipPayload;

#[derive(Default)]
pub struct RecordingChat {
    fail_sends: bool,
    fail_notices: bool,
    tips: Mutex<Vec<TipPayload>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tips fail; notices still go through.
    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn broken() -> Self {
        Self {
            fail_sends: true,
            fail_notices: true,
            ..Self::default()
        }
    }

    pub fn tips(&self) -> Vec<TipPayload> {
        self.tips.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_tip(&self, payload: &TipPayload) -> Result<String, String> {
        if self.fail_sends {
            return Err("send failed".to_string());
        }
        let mut tips = self.tips.lock().unwrap();
        tips.push(payload.clone());
        Ok(format!("$tip{}", tips.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        if self.fail_notices {
            return Err("notice failed".to_string());
        }
        self.notices.lock().unwrap().push(content.to_string());
        Ok(())
    }

    fn room_id(&self) -> String {
        "!test:example.org".to_string()
    }
}
