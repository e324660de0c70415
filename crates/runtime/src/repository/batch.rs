//! Multi-record writes.
//!
//! A command that both charges the player and changes another record (a ship
//! upgrade, an alliance membership, a completed mission) commits both in one
//! [`WriteBatch`], so a failed save never leaves the effect without the
//! charge.

use game_core::{AllianceMembership, Mission, Player, PlayerId, ShipState};

use super::Tables;

/// Records stored together by [`super::BatchRepository::commit`].
#[derive(Clone, Debug, Default)]
pub struct WriteBatch {
    players: Vec<Player>,
    ships: Vec<(PlayerId, ShipState)>,
    missions: Vec<Mission>,
    memberships: Vec<AllianceMembership>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, player: &Player) -> Self {
        self.players.push(player.clone());
        self
    }

    pub fn ship(mut self, player: PlayerId, ship: &ShipState) -> Self {
        self.ships.push((player, *ship));
        self
    }

    pub fn mission(mut self, mission: &Mission) -> Self {
        self.missions.push(mission.clone());
        self
    }

    pub fn membership(mut self, membership: AllianceMembership) -> Self {
        self.memberships.push(membership);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
            && self.ships.is_empty()
            && self.missions.is_empty()
            && self.memberships.is_empty()
    }

    /// Apply every record to `tables`, later entries winning.
    pub(crate) fn apply(self, tables: &mut Tables) {
        for player in self.players {
            tables.players.insert(player.id, player);
        }
        for (player, ship) in self.ships {
            tables.ships.insert(player, ship);
        }
        for mission in &self.missions {
            tables.upsert_mission(mission);
        }
        tables.memberships.extend(self.memberships);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AllianceId, GameConfig};

    #[test]
    fn apply_writes_every_record() {
        let config = GameConfig::default();
        let mut player = Player::new(PlayerId(4), "Lyra", &config, 10);
        player.credits = 30;
        let ship = ShipState {
            weapons: 15,
            ..ShipState::default()
        };

        let batch = WriteBatch::new()
            .player(&player)
            .ship(PlayerId(4), &ship)
            .membership(AllianceMembership {
                player: PlayerId(4),
                alliance: AllianceId(1),
                joined_at: 11,
            });
        assert!(!batch.is_empty());

        let mut tables = Tables::default();
        batch.apply(&mut tables);
        assert_eq!(tables.players[&PlayerId(4)].credits, 30);
        assert_eq!(tables.ships[&PlayerId(4)].weapons, 15);
        assert_eq!(tables.memberships.len(), 1);
        assert!(WriteBatch::new().is_empty());
    }
}
