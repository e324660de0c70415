//! Damage rolls and application.

use crate::config::RollRange;
use crate::rng::RandomSource;

/// Roll a damage value uniformly within `range`.
pub fn roll_damage(range: RollRange, rng: &mut (impl RandomSource + ?Sized)) -> u32 {
    rng.range(range.min, range.max)
}

/// Apply damage to a health pool.
///
/// # Returns
///
/// New health value (clamped to 0)
pub fn apply_damage(current: u32, damage: u32) -> u32 {
    current.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    #[test]
    fn damage_never_underflows() {
        assert_eq!(apply_damage(10, 25), 0);
        assert_eq!(apply_damage(30, 25), 5);
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = SequenceRng::new([0, 20, 21]);
        let range = RollRange::new(10, 30);
        assert_eq!(roll_damage(range, &mut rng), 10);
        assert_eq!(roll_damage(range, &mut rng), 30);
        assert_eq!(roll_damage(range, &mut rng), 10);
    }
}
