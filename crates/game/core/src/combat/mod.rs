//! Turn-based ship combat.
//!
//! A [`Battle`] pits the player's hull against a single enemy. Each turn the
//! player fires first; a surviving enemy answers. The battle runs to
//! completion synchronously and yields a [`BattleReport`] whose log a
//! transport can replay at whatever pace it likes.
mod battle;
mod damage;

pub use battle::{Battle, BattleOutcome, BattleReport, BattleStatus};
pub use damage::{apply_damage, roll_damage};
