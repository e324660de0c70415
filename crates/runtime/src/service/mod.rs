//! Command orchestration.
//!
//! [`GameService`] is the single writer of player state. Each dispatched
//! command and each tick visit holds the player's lock for the whole
//! load-mutate-save cycle. Handlers are synchronous; the only await points
//! are lock acquisition and roster lookups, so no store or RNG guard is ever
//! held across an `.await`.

mod commands;
mod ticks;

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use game_core::{
    GameConfig, GameError, Player, PlayerId, RandomSource, RecordKind, Resource, ShipState,
    Timestamp,
};

use crate::api::{Command, Reply, Result, RuntimeError};
use crate::clock::Clock;
use crate::events::EventBus;
use crate::locks::PlayerLocks;
use crate::oracle::OracleManager;
use crate::repository::{GameStore, WriteBatch};
use crate::roster::RosterProvider;

/// Name given to players first seen through a command other than `/start`.
const UNKNOWN_PLAYER_NAME: &str = "Unknown";

/// Name given to players who `/start` without a transport name.
const DEFAULT_START_NAME: &str = "Player";

/// Game orchestrator shared by the transport handle and the tick workers.
pub struct GameService {
    oracles: OracleManager,
    store: Arc<dyn GameStore>,
    roster: Arc<dyn RosterProvider>,
    clock: Arc<dyn Clock>,
    rng: Mutex<Box<dyn RandomSource>>,
    locks: PlayerLocks,
    events: EventBus,
}

impl GameService {
    pub fn new(
        oracles: OracleManager,
        store: Arc<dyn GameStore>,
        roster: Arc<dyn RosterProvider>,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RandomSource>,
        events: EventBus,
    ) -> Self {
        Self {
            oracles,
            store,
            roster,
            clock,
            rng: Mutex::new(rng),
            locks: PlayerLocks::new(),
            events,
        }
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn store(&self) -> &Arc<dyn GameStore> {
        &self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn config(&self) -> &GameConfig {
        self.oracles.config()
    }

    /// Run one command for `player` and build the reply.
    ///
    /// Refusals (not enough fuel, unknown item) come back as `Ok` replies and
    /// leave every record untouched. `Err` means storage failed or a rule
    /// reported an internal error.
    pub async fn dispatch(&self, player: PlayerId, command: Command) -> Result<Reply> {
        let _guard = self.locks.lock(player).await;
        let now = self.clock.now();
        debug!(player = %player, command = %command, "dispatching command");

        let name = match &command {
            Command::Start { name } => name.as_deref().unwrap_or(DEFAULT_START_NAME),
            _ => UNKNOWN_PLAYER_NAME,
        };
        let mut record = self.enter(player, name, now)?;

        match self.handle(&mut record, command, now) {
            Err(RuntimeError::Game(err)) if !err.severity().is_internal() => {
                info!(player = %player, error = %err, "command refused");
                Ok(refusal(&err))
            }
            other => other,
        }
    }

    /// Load the player (registering it on first contact) and mark it active.
    fn enter(&self, id: PlayerId, name: &str, now: Timestamp) -> Result<Player> {
        if let Some(player) = self.store.touch_player(id, now)? {
            return Ok(player);
        }
        info!(player = %id, name, "registering new player");
        let player = Player::new(id, name, self.config(), now);
        self.store.save_player(&player)?;
        Ok(player)
    }

    /// Load the player's ship, creating and saving a default one if missing.
    fn ship(&self, player: PlayerId) -> Result<ShipState> {
        if let Some(ship) = self.store.load_ship(player)? {
            return Ok(ship);
        }
        let ship = ShipState::new(self.config());
        self.store.save_ship(player, &ship)?;
        Ok(ship)
    }

    /// Borrow the shared random source.
    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        // a panic mid-draw leaves the generator in a valid state
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(rng.as_mut())
    }

    /// Apply a credit cost under the debit policy. Refuses without mutation.
    fn charge(&self, player: &mut Player, amount: u32) -> Result<()> {
        if self.config().charges_credits() {
            player.debit(amount)?;
        }
        Ok(())
    }

    /// Commit `batch`, adding the player record when credits are tracked.
    fn commit_charged(&self, player: &Player, batch: WriteBatch) -> Result<()> {
        let batch = if self.config().charges_credits() {
            batch.player(player)
        } else {
            batch
        };
        Ok(self.store.commit(batch)?)
    }

    /// Apply credit earnings under the debit policy. Returns whether the
    /// balance moved.
    fn pay(&self, player: &mut Player, amount: u32) -> bool {
        if self.config().charges_credits() {
            player.credit(amount);
            return true;
        }
        false
    }
}

/// Player-facing text for a refused command.
fn refusal(err: &GameError) -> Reply {
    let text = match err {
        GameError::InsufficientResource {
            resource: Resource::Fuel,
            ..
        } => "Not enough fuel to travel.".to_string(),
        GameError::InsufficientResource {
            resource: Resource::Credits,
            needed,
            available,
        } => format!("Not enough credits: need {needed}, have {available}."),
        GameError::NotFound {
            kind: RecordKind::ShopItem,
            ..
        } => "Selected item not found.".to_string(),
        GameError::NotFound {
            kind: RecordKind::Mission,
            id,
        } => format!("Mission {id} not found."),
        GameError::NotFound {
            kind: RecordKind::Alliance,
            id,
        } => format!("Alliance {id} not found."),
        GameError::NotFound {
            kind: RecordKind::Player,
            ..
        } => "Player not found.".to_string(),
        GameError::InvalidInput(message) => message.clone(),
    };
    Reply::text(text)
}
