use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fanyi_config::Config;
use fanyi_types::TextSource;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;


use self::controller::AppController;
use self::events::translate_command::handle_translate_command;
use self::state::AppState;

/// Translate chat messages through the `/tl` command
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Where translation history is stored
    #[arg(long)]
    history_path: Option<PathBuf>,

    /// Handle a single message, print the reply and exit
    #[arg(long)]
    message: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(path) = cli.history_path {
        config.history.path = path;
    }
    config.log_json |= cli.log_json;

    init_tracing(config.log_json);

    let capacity = config.channel_capacity.max(1);
    let state = Arc::new(AppState::new(config).await?);

    if let Some(message) = cli.message {
        return run_once(&state, message).await;
    }

    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        _ = drain(&mut tasks) => {}
    }

    // Let the watcher's shutdown notice flow through the loops
    drain(&mut tasks).await;
    Ok(())
}

async fn run_once(state: &AppState, message: String) -> anyhow::Result<()> {
    let id = Uuid::new_v4();

    match handle_translate_command(state, id, &message, TextSource::CommandLine).await {
        Some(reply) => println!("{reply}"),
        None => tracing::warn!("Not a translate command: {}", message),
    }
    Ok(())
}

async fn drain(tasks: &mut tokio::task::JoinSet<anyhow::Result<()>>) {
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => tracing::debug!("task finished"),
            Ok(Err(e)) => tracing::error!("task exited: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }
}
