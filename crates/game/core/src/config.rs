//! Game configuration constants and tunable parameters.
//!
//! Everything the rules need (starting resources, costs, roll ranges, table
//! weights) is injected through [`GameConfig`] at startup. `Default` mirrors
//! the reference balance values.

use crate::state::CrewSkill;

/// Inclusive integer range used for random rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Whether credit costs and earnings touch the player's balance.
///
/// The reference flows quote prices but never move credits; `Debit` wires the
/// balance in and enforces sufficiency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CreditPolicy {
    /// Costs are reported only; the balance never changes.
    #[default]
    Ledgerless,
    /// Costs are checked and debited; earnings are credited.
    Debit,
}

/// Resources a freshly registered ship starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingResources {
    pub fuel: u32,
    pub oxygen: u32,
    pub energy: u32,
    pub cargo: u32,
    pub weapons: u32,
    pub shields: u32,
    pub crew: u32,
    pub credits: u32,
}

impl Default for StartingResources {
    fn default() -> Self {
        Self {
            fuel: 100,
            oxygen: 100,
            energy: 100,
            cargo: 0,
            weapons: 10,
            shields: 50,
            crew: 3,
            credits: 100,
        }
    }
}

/// Combat tuning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleRules {
    pub player_health: u32,
    pub enemy_health: RollRange,
    pub player_damage: RollRange,
    pub enemy_damage: RollRange,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            player_health: 100,
            enemy_health: RollRange::new(50, 120),
            player_damage: RollRange::new(10, 30),
            enemy_damage: RollRange::new(5, 25),
        }
    }
}

/// Mission generation tuning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MissionRules {
    pub reward: RollRange,
    pub time_limit_secs: RollRange,
}

impl Default for MissionRules {
    fn default() -> Self {
        Self {
            reward: RollRange::new(20, 100),
            time_limit_secs: RollRange::new(60, 300),
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub starting: StartingResources,
    /// Fuel burned per sector travelled.
    pub fuel_cost_per_sector: u32,
    /// Multiplier applied to `(level + 1)` when pricing an upgrade.
    pub upgrade_cost_multiplier: f64,
    /// Upper bound for oxygen, energy and shields.
    pub resource_cap: u32,
    pub energy_regen: u32,
    pub oxygen_regen: u32,
    pub battle: BattleRules,
    pub missions: MissionRules,
    pub crew_skills: Vec<CrewSkill>,
    pub alliance_join_cost: u32,
    pub ship_repair_cost: u32,
    pub trade_earnings: RollRange,
    /// A steal attempt succeeds when a d100 roll exceeds this value.
    pub steal_threshold: u32,
    pub credit_policy: CreditPolicy,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FUEL_COST_PER_SECTOR: u32 = 5;
    pub const DEFAULT_UPGRADE_COST_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_RESOURCE_CAP: u32 = 100;
    pub const DEFAULT_ALLIANCE_JOIN_COST: u32 = 50;
    pub const DEFAULT_SHIP_REPAIR_COST: u32 = 20;
    pub const DEFAULT_STEAL_THRESHOLD: u32 = 50;

    pub fn new() -> Self {
        Self {
            starting: StartingResources::default(),
            fuel_cost_per_sector: Self::DEFAULT_FUEL_COST_PER_SECTOR,
            upgrade_cost_multiplier: Self::DEFAULT_UPGRADE_COST_MULTIPLIER,
            resource_cap: Self::DEFAULT_RESOURCE_CAP,
            energy_regen: 2,
            oxygen_regen: 1,
            battle: BattleRules::default(),
            missions: MissionRules::default(),
            crew_skills: CrewSkill::ALL.to_vec(),
            alliance_join_cost: Self::DEFAULT_ALLIANCE_JOIN_COST,
            ship_repair_cost: Self::DEFAULT_SHIP_REPAIR_COST,
            trade_earnings: RollRange::new(5, 50),
            steal_threshold: Self::DEFAULT_STEAL_THRESHOLD,
            credit_policy: CreditPolicy::Ledgerless,
        }
    }

    pub fn with_credit_policy(mut self, policy: CreditPolicy) -> Self {
        self.credit_policy = policy;
        self
    }

    pub fn with_fuel_cost_per_sector(mut self, cost: u32) -> Self {
        self.fuel_cost_per_sector = cost;
        self
    }

    pub fn charges_credits(&self) -> bool {
        self.credit_policy == CreditPolicy::Debit
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
