use fanyi_config::command::CommandConfig;
use fanyi_core::split_args;
use fanyi_types::TextSource;
use uuid::Uuid;

use crate::state::AppState;

/// Whether the first word of `text` invokes the translate command
pub fn is_translate_command(command: &CommandConfig, text: &str) -> bool {
    split_args(text, 2)
        .first()
        .is_some_and(|word| command.matches(word))
}

/// Run the interpreter for messages addressed to the command; others get no reply
pub async fn handle_translate_command(
    state: &AppState,
    id: Uuid,
    text: &str,
    source: TextSource,
) -> Option<String> {
    tracing::debug!("Message {} from {:?}", id, source);

    let routed = {
        let config = state.config.read().await;
        is_translate_command(&config.command, text)
    };

    if !routed {
        tracing::debug!("Message {} is not a translate command, ignoring", id);
        return None;
    }

    let reply = state.interpreter.handle(text).await;
    tracing::info!("Replying to message {} ({} chars)", id, reply.chars().count());
    Some(reply)
}
