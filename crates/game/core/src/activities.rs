//! Single-roll player activities: scanning, stealing and recruiting.

use crate::events::{WeightedTable, conditions};
use crate::rng::{RandomSource, choose};
use crate::state::CrewSkill;

/// Category of a scan result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScanFinding {
    Resource,
    Danger,
    Mission,
    Nothing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOutcome {
    pub finding: ScanFinding,
    pub weight: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanReport {
    pub finding: ScanFinding,
    pub description: String,
    /// Local atmospheric descriptor.
    pub condition: &'static str,
}

/// Weighted scan outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanTable {
    outcomes: WeightedTable<ScanOutcome>,
}

impl ScanTable {
    pub fn new(outcomes: Vec<ScanOutcome>) -> Self {
        Self {
            outcomes: outcomes
                .into_iter()
                .map(|o| {
                    let w = o.weight;
                    (o, w)
                })
                .collect(),
        }
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &ScanOutcome> {
        self.outcomes.iter().map(|(o, _)| o)
    }

    pub fn scan(&self, rng: &mut (impl RandomSource + ?Sized)) -> ScanReport {
        let (finding, description) = match self.outcomes.select(rng) {
            Some(outcome) => (outcome.finding, outcome.description.clone()),
            None => (
                ScanFinding::Nothing,
                "No significant anomalies in the vicinity.".to_string(),
            ),
        };
        let condition = rng
            .index(conditions::count())
            .map_or_else(|| conditions::condition(0), conditions::condition);
        ScanReport {
            finding,
            description,
            condition,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StealAttempt {
    pub roll: u32,
    pub success: bool,
}

/// Roll a d100; the attempt succeeds when the roll exceeds `threshold`.
pub fn attempt_steal(rng: &mut (impl RandomSource + ?Sized), threshold: u32) -> StealAttempt {
    let roll = rng.roll_d100();
    StealAttempt {
        roll,
        success: roll > threshold,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recruit {
    pub name: String,
    pub skill: CrewSkill,
}

/// Pick a recruit name and skill uniformly. `None` when either pool is empty.
pub fn roll_recruit(
    rng: &mut (impl RandomSource + ?Sized),
    names: &[String],
    skills: &[CrewSkill],
) -> Option<Recruit> {
    let name = choose(rng, names)?.clone();
    let skill = *choose(rng, skills)?;
    Some(Recruit { name, skill })
}
