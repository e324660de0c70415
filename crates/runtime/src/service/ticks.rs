//! Scheduled sweeps over the active roster.
//!
//! Each tick asks the roster provider for player ids, then visits them one
//! at a time under that player's lock. A failure for one player is logged
//! and the sweep moves on; only a roster failure aborts the tick.

use tracing::{debug, info, warn};

use game_core::{EventLogEntry, Mission, Player, PlayerId, Timestamp};

use super::GameService;
use crate::api::Result;
use crate::events::{Event, MissionEvent, SectorNotice};
use crate::repository::WriteBatch;

impl GameService {
    /// Resolve one random sector event per active player.
    ///
    /// Returns the number of players that received an event.
    pub async fn event_tick(&self) -> Result<usize> {
        self.sweep("events", |player, now| {
            let event = self.with_rng(|rng| self.oracles.events().select_event(rng));
            self.store.append_event(&EventLogEntry::new(
                player,
                event.kind,
                event.description.as_str(),
                now,
            ))?;
            debug!(player = %player, kind = %event.kind, description = %event.description, "sector event");
            self.events
                .publish(Event::Sector(SectorNotice::new(player, &event)));
            Ok(true)
        })
        .await
    }

    /// Regenerate energy and oxygen for every active player with a ship.
    pub async fn regen_tick(&self) -> Result<usize> {
        self.sweep("regen", |player, _now| {
            let Some(mut ship) = self.store.load_ship(player)? else {
                return Ok(false);
            };
            ship.regenerate(self.config());
            self.store.save_ship(player, &ship)?;
            Ok(true)
        })
        .await
    }

    /// Advance missions: each active mission completes on a fair coin flip;
    /// a player with no active mission is assigned one.
    pub async fn mission_tick(&self) -> Result<usize> {
        self.sweep("missions", |player, now| {
            let active = self.store.active_missions(player)?;
            if active.is_empty() {
                self.assign_mission(player, now)?;
                return Ok(true);
            }

            let mut record = self.store.load_player(player)?;
            for mission in active {
                if !self.with_rng(|rng| rng.coin()) {
                    continue;
                }
                self.settle_completion(record.as_mut(), &mission)?;
            }
            Ok(true)
        })
        .await
    }

    /// Draft a mission from the board and persist it as active.
    pub(super) fn assign_mission(&self, player: PlayerId, now: Timestamp) -> Result<Mission> {
        let rules = &self.config().missions;
        let draft = self.with_rng(|rng| self.oracles.missions().draft(rng, rules));
        let mission = self.store.add_mission(player, draft, now)?;
        info!(player = %player, mission = %mission.id, reward = mission.reward, "mission assigned");
        self.events.publish(Event::Mission(MissionEvent::Assigned {
            mission: mission.clone(),
        }));
        Ok(mission)
    }

    /// Mark `mission` completed, pay out under the debit policy, and announce
    /// it.
    ///
    /// Only a mission that was still active pays its reward. The mission and
    /// the credited player are stored in one write.
    pub(super) fn settle_completion(
        &self,
        player: Option<&mut Player>,
        mission: &Mission,
    ) -> Result<()> {
        let mut done = mission.clone();
        let was_active = done.complete();
        let mut batch = WriteBatch::new().mission(&done);
        if let Some(player) = player {
            if was_active && self.pay(player, mission.reward) {
                batch = batch.player(player);
            }
        }
        self.store.commit(batch)?;

        info!(player = %mission.player, mission = %mission.id, "mission completed");
        self.events.publish(Event::Mission(MissionEvent::Completed {
            player: mission.player,
            mission: mission.id,
            reward: mission.reward,
        }));
        Ok(())
    }

    async fn sweep<F>(&self, tick: &'static str, visit: F) -> Result<usize>
    where
        F: Fn(PlayerId, Timestamp) -> Result<bool>,
    {
        let players = self.roster.active_players().await?;
        let mut processed = 0;
        for player in players {
            let _guard = self.locks.lock(player).await;
            match visit(player, self.clock.now()) {
                Ok(true) => processed += 1,
                Ok(false) => {}
                Err(err) => warn!(tick, player = %player, error = %err, "tick failed for player"),
            }
        }
        debug!(tick, processed, "tick finished");
        Ok(processed)
    }
}
