//! Cloneable façade for transports.
//!
//! [`RuntimeHandle`] forwards player commands to the game service and lets a
//! transport stream notifications from specific topics.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use game_core::PlayerId;

use super::command::Command;
use super::errors::Result;
use super::reply::Reply;
use crate::events::{Event, EventBus, Topic};
use crate::service::GameService;
use crate::workers::TickKind;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    service: Arc<GameService>,
}

impl RuntimeHandle {
    pub(crate) fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }

    /// Run one player command and return the reply to render.
    pub async fn dispatch(&self, player: PlayerId, command: Command) -> Result<Reply> {
        self.service.dispatch(player, command).await
    }

    /// Run a scheduled tick immediately, outside its interval.
    ///
    /// Returns the number of players the tick processed.
    pub async fn tick(&self, kind: TickKind) -> Result<usize> {
        kind.run(&self.service).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Sector` - random sector events from the event tick
    /// - `Topic::Mission` - mission assignments and completions
    /// - `Topic::Battle` - battle results
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut battles = handle.subscribe(Topic::Battle);
    /// while let Ok(event) = battles.recv().await {
    ///     // notify the player
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.service.events().subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.service.events().subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        self.service.events()
    }
}
