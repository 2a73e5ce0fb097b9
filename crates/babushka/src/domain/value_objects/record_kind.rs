//! RecordKind - Direction of a conversation record

use serde::{Deserialize, Serialize};

/// Who produced a conversation record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    UserMessage,
    BotResponse,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::UserMessage => "user_message",
            RecordKind::BotResponse => "bot_response",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_message" => Ok(RecordKind::UserMessage),
            "bot_response" => Ok(RecordKind::BotResponse),
            _ => Err(format!("Unknown record kind: {}", s)),
        }
    }
}
