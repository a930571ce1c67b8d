use std::sync::Arc;

use fanyi_core::LanguageCatalog;
use fanyi_history::{HistoryStore, record_now};
use fanyi_translator::{TranslateOutcome, Translator};

pub mod parse;
pub mod replies;

#[cfg(test)]
mod tests;

pub use parse::{Command, parse};

/// Turns one command line into one reply.
///
/// Every path ends in a reply string; provider and storage failures are
/// reported to the user or logged, never returned.
pub struct CommandInterpreter {
    catalog: &'static LanguageCatalog,
    translator: Arc<dyn Translator>,
    history: HistoryStore,
}

impl CommandInterpreter {
    pub fn new(translator: Arc<dyn Translator>, history: HistoryStore) -> Self {
        Self {
            catalog: LanguageCatalog::builtin(),
            translator,
            history,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub async fn handle(&self, message: &str) -> String {
        let command = parse(self.catalog, message);
        tracing::debug!("Parsed command: {:?}", command);

        match command {
            Command::Empty => replies::NO_MESSAGE.to_string(),
            Command::Help => replies::HELP.to_string(),
            Command::Codes => replies::code_table(self.catalog),
            Command::History { count } => self.show_history(count).await,
            Command::Translate { text, to } => self.translate(text, &to).await,
            Command::Usage => replies::USAGE.to_string(),
        }
    }

    async fn show_history(&self, count: usize) -> String {
        let records = self.history.load().await;
        if records.is_empty() {
            return replies::NO_HISTORY.to_string();
        }

        let shown = count.min(records.len());
        replies::history(self.catalog, &records[records.len() - shown..])
    }

    async fn translate(&self, text: &str, to: &str) -> String {
        let outcome = TranslateOutcome::from(self.translator.translate(text, to).await);

        match outcome {
            TranslateOutcome::Success(translation) => {
                tracing::info!(
                    "Translated {} -> {} ({} chars)",
                    translation.detected_source,
                    translation.to,
                    text.chars().count()
                );
                let record = record_now(text, &translation.text, to);
                if let Err(e) = self.history.append(record).await {
                    tracing::warn!("Failed to save translation history: {}", e);
                }
                translation.text
            }
            TranslateOutcome::TransportFailure(e) => {
                tracing::warn!("Translation service unreachable: {}", e);
                replies::UNREACHABLE.to_string()
            }
            TranslateOutcome::OtherFailure(e) => {
                tracing::error!("Translation failed: {}", e);
                replies::translation_failed(&e)
            }
        }
    }
}
