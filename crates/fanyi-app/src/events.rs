use std::sync::Arc;

use fanyi_types::BotEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod translate_command;

use translate_command::handle_translate_command;

/// App's main loop. Messages are handled one at a time, in arrival order.
pub async fn event_loop(
    state: Arc<AppState>,
    inbound_rx: AsyncReceiver<BotEvent>,
    outbound_tx: AsyncSender<BotEvent>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for messages");
    loop {
        let event = inbound_rx.recv().await?;

        match event {
            BotEvent::Message { id, text, source } => {
                if let Some(reply) = handle_translate_command(&state, id, &text, source).await {
                    outbound_tx.send(BotEvent::Reply { id, text: reply }).await?;
                }
            }
            BotEvent::Reply { .. } => {
                // Replies only travel outbound
            }
            BotEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown received");
                outbound_tx.send(BotEvent::Shutdown).await?;
                break;
            }
        }
    }

    Ok(())
}
