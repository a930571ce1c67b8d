use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum BotEvent {
    /// Raw message text as received by the host
    Message {
        id: Uuid,
        text: String,
        source: TextSource,
    },
    /// Plain-text reply to the message with the same id
    Reply {
        id: Uuid,
        text: String,
    },
    Shutdown,
}

impl BotEvent {
    pub fn message(text: impl Into<String>, source: TextSource) -> Self {
        BotEvent::Message {
            id: Uuid::new_v4(),
            text: text.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Stdin,
    CommandLine,
}

/// One completed translation, as stored in the history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "time")]
    pub timestamp: String,
    #[serde(rename = "source")]
    pub source_text: String,
    #[serde(rename = "target")]
    pub translated_text: String,
    /// Provider code of the target language
    #[serde(rename = "lang")]
    pub target_lang: String,
}
