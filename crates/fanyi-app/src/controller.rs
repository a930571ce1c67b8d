use std::sync::Arc;

use fanyi_types::BotEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{reply_loop, watcher_io};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub inbound: (AsyncSender<BotEvent>, AsyncReceiver<BotEvent>),
    pub outbound: (AsyncSender<BotEvent>, AsyncReceiver<BotEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            inbound: kanal::bounded_async(capacity),
            outbound: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.inbound.1.clone(),
            self.channels.outbound.0.clone(),
        ));

        // Reply printer
        tasks.spawn(reply_loop(self.channels.outbound.1.clone()));

        // Stdin watcher
        tasks.spawn(watcher_io(
            self.cancel_token.child_token(),
            self.channels.inbound.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
