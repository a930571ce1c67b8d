use serde::{Deserialize, Serialize};

/// Names the translate command is registered under
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandConfig {
    pub name: String,
    pub aliases: Vec<String>,
}

impl CommandConfig {
    /// Whether `word` invokes the command. A leading `/` is optional.
    pub fn matches(&self, word: &str) -> bool {
        let word = word.strip_prefix('/').unwrap_or(word);
        word == self.name || self.aliases.iter().any(|alias| alias == word)
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            name: "tl".to_string(),
            aliases: vec!["翻译".to_string(), "fy".to_string()],
        }
    }
}
