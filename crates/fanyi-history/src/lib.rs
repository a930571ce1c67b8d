use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fanyi_types::HistoryRecord;
use tokio::fs;

/// Records kept on disk; older ones are dropped on append
pub const MAX_RECORDS: usize = 20;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Build a record stamped with the current local time
pub fn record_now(source: &str, translated: &str, lang: &str) -> HistoryRecord {
    HistoryRecord {
        timestamp: chrono::Local::now().format(TIME_FORMAT).to_string(),
        source_text: source.to_string(),
        translated_text: translated.to_string(),
        target_lang: lang.to_string(),
    }
}

/// Size-capped translation log stored as one JSON array.
///
/// Every append rewrites the whole file. Appends from concurrent callers are
/// not serialized, so the last writer wins.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Use `path` as the history file, creating its parent directories
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored records, oldest first. Missing or corrupt data reads as empty.
    pub async fn load(&self) -> Vec<HistoryRecord> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read history {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Ignoring corrupt history {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Append a record and persist the most recent `MAX_RECORDS`
    pub async fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let mut records = self.load().await;
        records.push(record);
        if records.len() > MAX_RECORDS {
            records.drain(..records.len() - MAX_RECORDS);
        }

        let json = serde_json::to_string_pretty(&records)?;

        // Write beside the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;

        tracing::debug!("History now holds {} records", records.len());
        Ok(())
    }
}
