use super::{MissionId, PlayerId, Timestamp};

/// Mission status. `Completed` and `Expired` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Completed,
    /// Reachable through [`Mission::expire`]; no default flow drives it yet.
    Expired,
}

impl MissionStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A mission accepted by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub id: MissionId,
    pub player: PlayerId,
    pub description: String,
    pub reward: u32,
    pub status: MissionStatus,
    /// Stored for display; no code path enforces it.
    pub time_limit_secs: u32,
    pub created_at: Timestamp,
}

impl Mission {
    pub fn is_active(&self) -> bool {
        self.status == MissionStatus::Active
    }

    /// Mark the mission completed regardless of its current status.
    ///
    /// Returns whether the mission was active beforehand.
    pub fn complete(&mut self) -> bool {
        let was_active = self.is_active();
        self.status = MissionStatus::Completed;
        was_active
    }

    /// Move an active mission to `Expired`. Terminal missions are left alone.
    pub fn expire(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = MissionStatus::Expired;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(status: MissionStatus) -> Mission {
        Mission {
            id: MissionId(1),
            player: PlayerId(1),
            description: "Rescue the stranded astronauts.".into(),
            reward: 50,
            status,
            time_limit_secs: 120,
            created_at: 1_000,
        }
    }

    #[test]
    fn complete_overwrites_any_status() {
        let mut m = mission(MissionStatus::Active);
        assert!(m.complete());
        assert_eq!(m.status, MissionStatus::Completed);

        let mut m = mission(MissionStatus::Expired);
        assert!(!m.complete());
        assert_eq!(m.status, MissionStatus::Completed);
    }

    #[test]
    fn expire_only_moves_active_missions() {
        let mut m = mission(MissionStatus::Active);
        assert!(m.expire());
        assert_eq!(m.status, MissionStatus::Expired);

        let mut m = mission(MissionStatus::Completed);
        assert!(!m.expire());
        assert_eq!(m.status, MissionStatus::Completed);
    }
}
