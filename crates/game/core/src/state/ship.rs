//! Spaceship resource ledger.
//!
//! [`ShipState`] is the seven-field attribute set of a player's ship. The
//! methods here are the only arithmetic applied to it: travel burns fuel,
//! upgrades raise a stat, repairs and regeneration refill capped pools.
//!
//! None of these methods persist anything. The orchestrator saves the ship
//! after every successful mutation.

use core::fmt;
use core::num::NonZeroU32;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult, Resource};

/// Per-player ship attributes.
///
/// All fields are non-negative by type. `oxygen`, `energy` and `shields` stay
/// at or below [`GameConfig::resource_cap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub fuel: u32,
    pub oxygen: u32,
    pub energy: u32,
    pub cargo: u32,
    pub weapons: u32,
    pub shields: u32,
    pub crew: u32,
}

/// Ship system targeted by an upgrade.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipSystem {
    Engines,
    Shields,
    Weapons,
    /// Any system the rules do not know about.
    Other(String),
}

impl ShipSystem {
    /// Systems offered in the upgrade menu.
    pub const UPGRADABLE: [ShipSystem; 3] = [Self::Engines, Self::Shields, Self::Weapons];

    /// Parse a system name. Unknown names become [`ShipSystem::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "engines" | "engine" => Self::Engines,
            "shields" | "shield" => Self::Shields,
            "weapons" | "weapon" => Self::Weapons,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Engines => "engines",
            Self::Shields => "shields",
            Self::Weapons => "weapons",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ShipSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`ShipState::upgrade`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeOutcome {
    /// Credits the upgrade is priced at.
    pub cost: u32,
    /// Value of the upgraded stat afterwards (1 for unknown systems).
    pub new_level: u32,
}

impl ShipState {
    /// Flat price quoted for systems without a level field.
    pub const UNKNOWN_SYSTEM_COST: u32 = 100;

    pub fn new(config: &GameConfig) -> Self {
        let start = &config.starting;
        let cap = config.resource_cap;
        Self {
            fuel: start.fuel,
            oxygen: start.oxygen.min(cap),
            energy: start.energy.min(cap),
            cargo: start.cargo,
            weapons: start.weapons,
            shields: start.shields.min(cap),
            crew: start.crew,
        }
    }

    /// Fuel needed to cross `sectors`.
    pub fn travel_cost(sectors: NonZeroU32, config: &GameConfig) -> u32 {
        sectors.get().saturating_mul(config.fuel_cost_per_sector)
    }

    /// Burn fuel for a jump of `sectors`.
    ///
    /// Returns the fuel used. Refuses without touching the ship when the tank
    /// holds less than the cost.
    pub fn travel(&mut self, sectors: NonZeroU32, config: &GameConfig) -> GameResult<u32> {
        let cost = Self::travel_cost(sectors, config);
        if self.fuel < cost {
            return Err(GameError::InsufficientResource {
                resource: Resource::Fuel,
                needed: cost,
                available: self.fuel,
            });
        }
        self.fuel -= cost;
        Ok(cost)
    }

    /// Price an upgrade of `system` against the current ship.
    ///
    /// `round_half_up((level + 1) * multiplier)`, where level is fuel for
    /// engines, shields for shields and weapons for weapons. Unknown systems
    /// cost a flat [`Self::UNKNOWN_SYSTEM_COST`].
    pub fn upgrade_cost(&self, system: &ShipSystem, config: &GameConfig) -> u32 {
        let level = match system {
            ShipSystem::Engines => self.fuel,
            ShipSystem::Shields => self.shields,
            ShipSystem::Weapons => self.weapons,
            ShipSystem::Other(_) => return Self::UNKNOWN_SYSTEM_COST,
        };
        let raw = f64::from(level.saturating_add(1)) * config.upgrade_cost_multiplier;
        // f64::round rounds half away from zero, i.e. half-up for positive values
        raw.round().clamp(0.0, f64::from(u32::MAX)) as u32
    }

    /// Apply an upgrade and return its price.
    ///
    /// Engines add 10 fuel, shields add 10 (capped), weapons add 5. Unknown
    /// systems change nothing. The price is computed before the stat moves.
    pub fn upgrade(&mut self, system: &ShipSystem, config: &GameConfig) -> UpgradeOutcome {
        let cost = self.upgrade_cost(system, config);
        let new_level = match system {
            ShipSystem::Engines => {
                self.fuel = self.fuel.saturating_add(10);
                self.fuel
            }
            ShipSystem::Shields => {
                self.shields = self.shields.saturating_add(10).min(config.resource_cap);
                self.shields
            }
            ShipSystem::Weapons => {
                self.weapons = self.weapons.saturating_add(5);
                self.weapons
            }
            ShipSystem::Other(_) => 1,
        };
        UpgradeOutcome { cost, new_level }
    }

    /// Add fuel. The tank has no upper bound.
    pub fn refuel(&mut self, amount: u32) -> u32 {
        self.fuel = self.fuel.saturating_add(amount);
        self.fuel
    }

    /// Recharge shields, clamped to the cap.
    pub fn repair_shields(&mut self, amount: u32, config: &GameConfig) -> u32 {
        self.shields = self.shields.saturating_add(amount).min(config.resource_cap);
        self.shields
    }

    /// One regeneration tick: energy and oxygen refill toward the cap.
    pub fn regenerate(&mut self, config: &GameConfig) {
        let cap = config.resource_cap;
        self.energy = self.energy.saturating_add(config.energy_regen).min(cap);
        self.oxygen = self.oxygen.saturating_add(config.oxygen_regen).min(cap);
    }

    /// Seven-line human readable report.
    pub fn status_report(&self) -> String {
        format!(
            "Fuel: {}\nOxygen: {}\nEnergy: {}\nCargo: {}\nWeapons: {}\nShields: {}\nCrew: {}\n",
            self.fuel, self.oxygen, self.energy, self.cargo, self.weapons, self.shields, self.crew
        )
    }
}

impl Default for ShipState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sectors(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn ship_with_fuel(fuel: u32) -> ShipState {
        ShipState {
            fuel,
            ..ShipState::default()
        }
    }

    #[test]
    fn travel_burns_exact_fuel() {
        let config = GameConfig::default();
        let mut ship = ship_with_fuel(100);

        assert_eq!(ship.travel(sectors(3), &config), Ok(15));
        assert_eq!(ship.fuel, 85);
    }

    #[test]
    fn travel_refuses_when_short_and_keeps_fuel() {
        let config = GameConfig::default();
        let mut ship = ship_with_fuel(10);

        let err = ship.travel(sectors(3), &config).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientResource {
                resource: Resource::Fuel,
                needed: 15,
                available: 10
            }
        ));
        assert_eq!(ship.fuel, 10);
    }

    #[test]
    fn travel_succeeds_iff_fuel_covers_cost() {
        let config = GameConfig::default().with_fuel_cost_per_sector(7);
        for fuel in 0..60 {
            for s in 1..8 {
                let mut ship = ship_with_fuel(fuel);
                let cost = s * 7;
                match ship.travel(sectors(s), &config) {
                    Ok(used) => {
                        assert!(fuel >= cost);
                        assert_eq!(used, cost);
                        assert_eq!(ship.fuel, fuel - cost);
                    }
                    Err(_) => {
                        assert!(fuel < cost);
                        assert_eq!(ship.fuel, fuel);
                    }
                }
            }
        }
    }

    #[test]
    fn shield_upgrade_rounds_half_up() {
        let config = GameConfig::default();
        let mut ship = ShipState {
            shields: 50,
            ..ShipState::default()
        };

        let outcome = ship.upgrade(&ShipSystem::Shields, &config);
        assert_eq!(outcome.cost, 77);
        assert_eq!(outcome.new_level, 60);
        assert_eq!(ship.shields, 60);
    }

    #[test]
    fn engine_and_weapon_upgrades_raise_their_fields() {
        let config = GameConfig::default();
        let mut ship = ShipState::default();

        let engines = ship.upgrade(&ShipSystem::Engines, &config);
        assert_eq!(engines.cost, 152); // (100 + 1) * 1.5 = 151.5
        assert_eq!(ship.fuel, 110);

        let weapons = ship.upgrade(&ShipSystem::Weapons, &config);
        assert_eq!(weapons.cost, 17); // (10 + 1) * 1.5 = 16.5
        assert_eq!(ship.weapons, 15);
    }

    #[test]
    fn unknown_system_costs_flat_price_and_mutates_nothing() {
        let config = GameConfig::default();
        let mut ship = ShipState::default();
        let before = ship;

        let outcome = ship.upgrade(&ShipSystem::parse("hyperdrive"), &config);
        assert_eq!(outcome.cost, 100);
        assert_eq!(outcome.new_level, 1);
        assert_eq!(ship, before);
    }

    #[test]
    fn shield_upgrade_respects_cap() {
        let config = GameConfig::default();
        let mut ship = ShipState {
            shields: 95,
            ..ShipState::default()
        };
        ship.upgrade(&ShipSystem::Shields, &config);
        assert_eq!(ship.shields, 100);
    }

    #[test]
    fn repair_clamps_to_cap() {
        let config = GameConfig::default();
        for current in [0, 1, 50, 99, 100] {
            for amount in [0, 1, 30, 100, u32::MAX] {
                let mut ship = ShipState {
                    shields: current,
                    ..ShipState::default()
                };
                let result = ship.repair_shields(amount, &config);
                assert_eq!(result, current.saturating_add(amount).min(100));
                assert!(result <= 100);
            }
        }
    }

    #[test]
    fn refuel_has_no_upper_bound() {
        let mut ship = ship_with_fuel(95);
        assert_eq!(ship.refuel(50), 145);
    }

    #[test]
    fn regeneration_converges_to_cap() {
        let config = GameConfig::default();
        let mut ship = ShipState {
            energy: 3,
            oxygen: 0,
            ..ShipState::default()
        };
        for _ in 0..200 {
            ship.regenerate(&config);
            assert!(ship.energy <= 100 && ship.oxygen <= 100);
        }
        assert_eq!(ship.energy, 100);
        assert_eq!(ship.oxygen, 100);
    }

    #[test]
    fn single_regeneration_step() {
        let config = GameConfig::default();
        let mut ship = ShipState {
            energy: 90,
            oxygen: 99,
            ..ShipState::default()
        };
        ship.regenerate(&config);
        assert_eq!((ship.energy, ship.oxygen), (92, 100));
    }

    #[test]
    fn status_report_lists_all_fields() {
        let report = ShipState::default().status_report();
        assert_eq!(report.lines().count(), 7);
        assert!(report.starts_with("Fuel: 100\n"));
        assert!(report.contains("Shields: 50\n"));
    }

    #[test]
    fn parse_system_names() {
        assert_eq!(ShipSystem::parse("Engines"), ShipSystem::Engines);
        assert_eq!(ShipSystem::parse("shield"), ShipSystem::Shields);
        assert_eq!(
            ShipSystem::parse("cloak"),
            ShipSystem::Other("cloak".to_string())
        );
    }
}
