//! Battle state machine.
//!
//! ```text
//! InProgress ──(enemy hull hits 0 on player attack)──▶ Won
//!     │
//!     └──────(player hull hits 0 on enemy attack)───▶ Lost
//! ```
//!
//! Every hit removes at least one point from a pool, so [`Battle::run`]
//! always reaches a terminal state.

use crate::config::BattleRules;
use crate::rng::RandomSource;

use super::damage::{apply_damage, roll_damage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStatus {
    InProgress,
    Won,
    Lost,
}

impl BattleStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum BattleOutcome {
    Win,
    Loss,
}

/// Everything a transport needs to present a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub enemy: String,
    pub outcome: BattleOutcome,
    pub turns: u32,
    pub player_health: u32,
    pub enemy_health: u32,
    /// Turn markers, hits and the closing line, in order.
    pub log: Vec<String>,
}

/// One battle instance.
#[derive(Clone, Debug)]
pub struct Battle {
    enemy: String,
    rules: BattleRules,
    turn: u32,
    player_health: u32,
    enemy_health: u32,
    status: BattleStatus,
    log: Vec<String>,
}

impl Battle {
    /// Start a battle: the player at full hull, the enemy at a rolled hull.
    pub fn new(
        enemy: impl Into<String>,
        rules: &BattleRules,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> Self {
        let enemy_health = rng.range(rules.enemy_health.min, rules.enemy_health.max);
        Self {
            enemy: enemy.into(),
            rules: rules.clone(),
            turn: 0,
            player_health: rules.player_health,
            enemy_health,
            status: BattleStatus::InProgress,
            log: Vec::new(),
        }
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player_health(&self) -> u32 {
        self.player_health
    }

    pub fn enemy_health(&self) -> u32 {
        self.enemy_health
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Execute one turn. Does nothing once the battle is over.
    pub fn execute_turn(&mut self, rng: &mut (impl RandomSource + ?Sized)) -> BattleStatus {
        if self.status.is_over() {
            return self.status;
        }

        self.turn += 1;
        self.log.push(format!("--- Turn {} ---", self.turn));

        let damage = roll_damage(self.rules.player_damage, rng).max(1);
        self.enemy_health = apply_damage(self.enemy_health, damage);
        self.log.push(format!(
            "Player attacked {} for {} damage. Enemy hull: {}",
            self.enemy, damage, self.enemy_health
        ));
        if self.enemy_health == 0 {
            // the enemy does not fire back on the turn it dies
            self.status = BattleStatus::Won;
            return self.status;
        }

        let damage = roll_damage(self.rules.enemy_damage, rng).max(1);
        self.player_health = apply_damage(self.player_health, damage);
        self.log.push(format!(
            "Enemy {} attacked for {} damage. Player hull: {}",
            self.enemy, damage, self.player_health
        ));
        if self.player_health == 0 {
            self.status = BattleStatus::Lost;
        }

        self.status
    }

    /// Run turns until the battle ends and produce the report.
    pub fn run(mut self, rng: &mut (impl RandomSource + ?Sized)) -> BattleReport {
        while !self.status.is_over() {
            self.execute_turn(rng);
        }

        let outcome = if self.status == BattleStatus::Won {
            self.log.push(format!("Enemy {} defeated!", self.enemy));
            BattleOutcome::Win
        } else {
            self.log.push("Player defeated!".to_string());
            BattleOutcome::Loss
        };

        BattleReport {
            enemy: self.enemy,
            outcome,
            turns: self.turn,
            player_health: self.player_health,
            enemy_health: self.enemy_health,
            log: self.log,
        }
    }
}
