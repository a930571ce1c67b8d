use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("data/plugin_data/translate/history.json")
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// JSON file holding the recent translations
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let path = env::var("HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
