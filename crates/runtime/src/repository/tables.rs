//! Plain table set shared by every store backend.

use std::collections::{BTreeMap, HashMap};

use game_core::{
    Alliance, AllianceId, AllianceMembership, CrewId, CrewMember, CrewSkill, EventLogEntry,
    Mission, MissionDraft, MissionId, Player, PlayerId, ShipState, Timestamp, UpgradeRecord,
};
use serde::{Deserialize, Serialize};

/// Mutable game records, excluding the journal.
///
/// This is the unit written by snapshot-based backends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    pub players: BTreeMap<PlayerId, Player>,
    pub ships: HashMap<PlayerId, ShipState>,
    pub crew: Vec<CrewMember>,
    pub missions: Vec<Mission>,
    pub alliances: Vec<Alliance>,
    pub memberships: Vec<AllianceMembership>,
    next_crew: u64,
    next_mission: u64,
    next_alliance: u64,
}

impl Tables {
    pub fn insert_crew(&mut self, player: PlayerId, name: &str, skill: CrewSkill) -> CrewMember {
        self.next_crew += 1;
        let member = CrewMember::new(CrewId(self.next_crew), player, name, skill);
        self.crew.push(member.clone());
        member
    }

    pub fn insert_mission(
        &mut self,
        player: PlayerId,
        draft: MissionDraft,
        now: Timestamp,
    ) -> Mission {
        self.next_mission += 1;
        let mission = draft.accept(MissionId(self.next_mission), player, now);
        self.missions.push(mission.clone());
        mission
    }

    pub fn mission(&self, id: MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    /// Overwrite a stored mission. Unknown ids are appended.
    pub fn upsert_mission(&mut self, mission: &Mission) {
        match self.missions.iter_mut().find(|m| m.id == mission.id) {
            Some(slot) => *slot = mission.clone(),
            None => {
                self.next_mission = self.next_mission.max(mission.id.0);
                self.missions.push(mission.clone());
            }
        }
    }

    pub fn insert_alliance(&mut self, name: &str, now: Timestamp) -> Alliance {
        self.next_alliance += 1;
        let alliance = Alliance {
            id: AllianceId(self.next_alliance),
            name: name.to_string(),
            created_at: now,
        };
        self.alliances.push(alliance.clone());
        alliance
    }

    pub fn active_player_ids(&self, since: Timestamp) -> Vec<PlayerId> {
        self.players
            .values()
            .filter(|p| p.last_active >= since)
            .map(|p| p.id)
            .collect()
    }
}

/// One line of the append-only journal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalLine {
    Event(EventLogEntry),
    Upgrade(UpgradeRecord),
}

impl JournalLine {
    pub fn player(&self) -> PlayerId {
        match self {
            Self::Event(entry) => entry.player,
            Self::Upgrade(record) => record.player,
        }
    }
}
