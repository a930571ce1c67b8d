use std::env;

use serde::{Deserialize, Serialize};

use self::command::CommandConfig;
use self::history::HistoryConfig;
use self::translator::TranslatorConfig;

pub mod command;
pub mod history;
pub mod translator;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub history: HistoryConfig,
    pub command: CommandConfig,

    /// Emit logs as JSON lines instead of human readable text
    pub log_json: bool,
    /// Capacity of the host's inbound and outbound channels
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let log_json = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            translator: TranslatorConfig::new(),
            history: HistoryConfig::new(),
            command: CommandConfig::default(),

            log_json,
            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
