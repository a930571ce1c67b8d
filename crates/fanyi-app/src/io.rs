use std::io::Write;

use fanyi_types::{BotEvent, TextSource};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

/// Whether stdin is an interactive terminal
pub fn interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

fn print_prompt() {
    if interactive() {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

/// Read messages from stdin until EOF or cancellation, then ask the event
/// loop to shut down
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<BotEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Starting stdin watcher");
    print_prompt();

    tokio::select! {
        result = fanyi_io::stdin::watch_stdin(|text| {
            let tx = event_tx.clone();
            async move {
                if let Err(e) = tx.send(BotEvent::message(text, TextSource::Stdin)).await {
                    tracing::error!("Failed to send stdin text to app: {}", e);
                }
            }
        }) => {
            if let Err(e) = result {
                tracing::error!("Stdin watcher error: {}", e);
            }
            tracing::info!("Stdin closed");
        }
        _ = cancel.cancelled() => {
            tracing::info!("Stdin watcher stopping");
        }
    }

    event_tx.send(BotEvent::Shutdown).await?;
    Ok(())
}

/// Print replies until the event loop shuts down
pub async fn reply_loop(outbound_rx: AsyncReceiver<BotEvent>) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    loop {
        match outbound_rx.recv().await? {
            BotEvent::Reply { id, text } => {
                tracing::debug!("Writing reply {}", id);
                fanyi_io::stdout::write_reply(&mut stdout, &text).await?;
                print_prompt();
            }
            BotEvent::Shutdown => break,
            BotEvent::Message { .. } => {}
        }
    }

    Ok(())
}
