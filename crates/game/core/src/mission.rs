//! Mission generation.
//!
//! Offers are ephemeral: [`MissionBoard::draft`] produces a [`MissionDraft`]
//! and only [`MissionDraft::accept`] turns it into a stored [`Mission`] record.

use crate::config::MissionRules;
use crate::rng::{RandomSource, choose};
use crate::state::{Mission, MissionId, MissionStatus, PlayerId, Timestamp};

/// Description used when the board has no templates.
const FALLBACK_DESCRIPTION: &str = "Patrol the local sector.";

/// A mission offer that has not been persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionDraft {
    pub description: String,
    pub reward: u32,
    pub time_limit_secs: u32,
}

impl MissionDraft {
    /// Turn the offer into an active mission owned by `player`.
    pub fn accept(self, id: MissionId, player: PlayerId, now: Timestamp) -> Mission {
        Mission {
            id,
            player,
            description: self.description,
            reward: self.reward,
            status: MissionStatus::Active,
            time_limit_secs: self.time_limit_secs,
            created_at: now,
        }
    }
}

/// Fixed set of mission descriptions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MissionBoard {
    templates: Vec<String>,
}

impl MissionBoard {
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Draw a description uniformly, then a reward and a time limit from the
    /// configured ranges.
    pub fn draft(&self, rng: &mut (impl RandomSource + ?Sized), rules: &MissionRules) -> MissionDraft {
        let description = choose(rng, &self.templates)
            .map_or(FALLBACK_DESCRIPTION, String::as_str)
            .to_string();
        let reward = rng.range(rules.reward.min, rules.reward.max);
        let time_limit_secs = rng.range(rules.time_limit_secs.min, rules.time_limit_secs.max);
        MissionDraft {
            description,
            reward,
            time_limit_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRng, SequenceRng};

    fn board() -> MissionBoard {
        MissionBoard::new([
            "Rescue the stranded astronauts.",
            "Collect rare minerals from the asteroid belt.",
            "Investigate a suspicious derelict spacecraft.",
        ])
    }

    #[test]
    fn drafts_stay_within_configured_ranges() {
        let rules = MissionRules::default();
        let board = board();
        let mut rng = PcgRng::seeded(31);
        for _ in 0..2_000 {
            let draft = board.draft(&mut rng, &rules);
            assert!(rules.reward.contains(draft.reward));
            assert!(rules.time_limit_secs.contains(draft.time_limit_secs));
            assert!(board.templates().contains(&draft.description));
        }
    }

    #[test]
    fn accepted_missions_start_active() {
        let mut rng = SequenceRng::new([1, 0, 240]);
        let mission = board()
            .draft(&mut rng, &MissionRules::default())
            .accept(MissionId(4), PlayerId(9), 1_700_000_000);

        assert_eq!(mission.description, "Collect rare minerals from the asteroid belt.");
        assert_eq!(mission.reward, 20);
        assert_eq!(mission.time_limit_secs, 300);
        assert_eq!(mission.status, MissionStatus::Active);
        assert_eq!(mission.player, PlayerId(9));
        assert_eq!(mission.created_at, 1_700_000_000);
    }

    #[test]
    fn empty_board_still_drafts() {
        let mut rng = PcgRng::seeded(2);
        let draft = MissionBoard::default().draft(&mut rng, &MissionRules::default());
        assert_eq!(draft.description, FALLBACK_DESCRIPTION);
    }
}
