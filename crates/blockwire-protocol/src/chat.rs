//! Chat messages returned by `pollChat`.

use serde::{Deserialize, Serialize};

use crate::{ProtocolError, join_fields, split_fields};

/// One message written to the in-game chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender_name: String,
    pub text: String,
}

impl ChatMessage {
    /// Decodes `sender:text`. Only the first `:` separates the two, so the
    /// text may contain colons.
    pub fn from_wire(raw: &str) -> Result<Self, ProtocolError> {
        let (sender, text) =
            raw.split_once(':').ok_or_else(|| ProtocolError::Malformed {
                model: "chat message",
                record: raw.to_string(),
            })?;
        Ok(Self {
            sender_name: sender.to_string(),
            text: text.to_string(),
        })
    }

    pub fn to_wire(&self) -> String {
        format!("{}:{}", self.sender_name, self.text)
    }
}

/// Decodes a `pollChat` response: empty, or separator-joined messages.
pub fn parse_chat(text: &str) -> Result<Vec<ChatMessage>, ProtocolError> {
    split_fields(text)
        .filter(|r| !r.is_empty())
        .map(ChatMessage::from_wire)
        .collect()
}

/// Encodes messages the way `pollChat` returns them.
pub fn encode_chat(messages: &[ChatMessage]) -> String {
    join_fields(messages.iter().map(ChatMessage::to_wire))
}
