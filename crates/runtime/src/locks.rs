//! Per-player mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use game_core::PlayerId;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per player id.
///
/// Every read-modify-write of a player's records runs while holding that
/// player's guard. Guards for different players never contend.
#[derive(Default)]
pub struct PlayerLocks {
    locks: Mutex<HashMap<PlayerId, Arc<AsyncMutex<()>>>>,
}

impl PlayerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `player`.
    pub async fn lock(&self, player: PlayerId) -> OwnedMutexGuard<()> {
        let lock = {
            // the map only ever gains entries, so a poisoned map is still valid
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(player).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of players that have been locked at least once.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_player_is_serialized() {
        let locks = Arc::new(PlayerLocks::new());
        let guard = locks.lock(PlayerId(1)).await;

        let waiter = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.lock(PlayerId(1)).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        drop(guard);
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn different_players_do_not_contend() {
        let locks = PlayerLocks::new();
        let _a = locks.lock(PlayerId(1)).await;
        let _b = tokio::time::timeout(Duration::from_millis(100), locks.lock(PlayerId(2)))
            .await
            .expect("second player should lock immediately");
        assert_eq!(locks.len(), 2);
    }
}
