use std::sync::Arc;

use fanyi_command::CommandInterpreter;
use fanyi_config::Config;
use fanyi_history::HistoryStore;
use fanyi_translator::{GoogleTranslator, Translator};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub interpreter: CommandInterpreter,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new(&config.translator)?);
        let history = HistoryStore::open(config.history.path.clone()).await?;
        tracing::info!(
            "Translating with {} ({}), history at {}",
            translator.metadata().name,
            config.translator.api_url,
            history.path().display()
        );
        let interpreter = CommandInterpreter::new(translator, history);

        Ok(Self::with_interpreter(config, interpreter))
    }

    pub fn with_interpreter(config: Config, interpreter: CommandInterpreter) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            interpreter,
        }
    }
}
