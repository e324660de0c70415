//! Event payloads for each topic.

use game_core::{BattleOutcome, EventKind, Mission, MissionId, PlayerId, SectorEvent};
use serde::{Deserialize, Serialize};

/// A random sector event resolved by the event tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorNotice {
    pub player: PlayerId,
    pub kind: EventKind,
    pub description: String,
}

impl SectorNotice {
    pub fn new(player: PlayerId, event: &SectorEvent) -> Self {
        Self {
            player,
            kind: event.kind,
            description: event.description.clone(),
        }
    }
}

/// Mission lifecycle changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionEvent {
    /// A mission was assigned, either on request or by the mission tick.
    Assigned { mission: Mission },

    /// A mission moved to `completed`.
    Completed {
        player: PlayerId,
        mission: MissionId,
        reward: u32,
    },
}

impl MissionEvent {
    pub fn player(&self) -> PlayerId {
        match self {
            Self::Assigned { mission } => mission.player,
            Self::Completed { player, .. } => *player,
        }
    }
}

/// Summary of a finished battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEvent {
    pub player: PlayerId,
    pub enemy: String,
    pub outcome: BattleOutcome,
    pub turns: u32,
}
