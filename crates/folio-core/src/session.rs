//! Per-visit UI state. Nothing here is persisted; a page reload starts over.

use crate::content::FILTER_ALL;
use serde::{Deserialize, Serialize};

/// First transcript entry shown when the chat widget opens.
pub const GREETING: &str =
    "Hi! I'm J. \u{2728} Ask me anything about Janikashree's design skills, tools, or projects!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Ordered chat transcript, seeded with the assistant greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: text.into(),
        });
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }
}

/// Everything the rendered page tracks besides the document itself.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub dark_mode: bool,
    pub active_category: String,
    pub selected_project: Option<i64>,
    pub pin_modal_open: bool,
    pub admin_panel_open: bool,
    pub chat_open: bool,
    pub transcript: ChatTranscript,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            active_category: FILTER_ALL.to_string(),
            selected_project: None,
            pin_modal_open: false,
            admin_panel_open: false,
            chat_open: false,
            transcript: ChatTranscript::default(),
        }
    }
}
