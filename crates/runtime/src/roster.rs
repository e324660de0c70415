//! Sources of the active player roster for scheduled ticks.

use std::sync::Arc;

use async_trait::async_trait;
use game_core::PlayerId;

use crate::api::Result;
use crate::clock::Clock;
use crate::repository::GameStore;

/// Reports the player ids a tick should visit.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn active_players(&self) -> Result<Vec<PlayerId>>;
}

/// Players who issued a command within a trailing window.
pub struct RecentActivityRoster {
    store: Arc<dyn GameStore>,
    clock: Arc<dyn Clock>,
    window_secs: i64,
}

impl RecentActivityRoster {
    pub fn new(store: Arc<dyn GameStore>, clock: Arc<dyn Clock>, window_secs: i64) -> Self {
        Self {
            store,
            clock,
            window_secs,
        }
    }
}

#[async_trait]
impl RosterProvider for RecentActivityRoster {
    async fn active_players(&self) -> Result<Vec<PlayerId>> {
        let since = self.clock.now().saturating_sub(self.window_secs);
        Ok(self.store.active_player_ids(since)?)
    }
}

/// Fixed roster, for tests and scripted runs.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    players: Vec<PlayerId>,
}

impl StaticRoster {
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }
}

#[async_trait]
impl RosterProvider for StaticRoster {
    async fn active_players(&self) -> Result<Vec<PlayerId>> {
        Ok(self.players.clone())
    }
}
