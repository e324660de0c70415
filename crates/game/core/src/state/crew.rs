use super::{CrewId, PlayerId};

/// Fixed set of crew specialisations.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CrewSkill {
    Pilot,
    Engineer,
    Gunner,
    Scientist,
    Medic,
}

impl CrewSkill {
    pub const ALL: [CrewSkill; 5] = [
        Self::Pilot,
        Self::Engineer,
        Self::Gunner,
        Self::Scientist,
        Self::Medic,
    ];
}

/// A recruited crew member. Belongs to exactly one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrewMember {
    pub id: CrewId,
    pub player: PlayerId,
    pub name: String,
    pub skill: CrewSkill,
    /// Starts at 1; only explicit leveling raises it.
    pub level: u32,
}

impl CrewMember {
    pub fn new(id: CrewId, player: PlayerId, name: impl Into<String>, skill: CrewSkill) -> Self {
        Self {
            id,
            player,
            name: name.into(),
            skill,
            level: 1,
        }
    }

    pub fn level_up(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn skills_parse_case_insensitively() {
        assert_eq!(CrewSkill::from_str("Gunner"), Ok(CrewSkill::Gunner));
        assert_eq!(CrewSkill::Medic.to_string(), "medic");
        assert!(CrewSkill::from_str("cook").is_err());
    }

    #[test]
    fn recruits_start_at_level_one() {
        let mut member = CrewMember::new(CrewId(1), PlayerId(2), "Riley", CrewSkill::Pilot);
        assert_eq!(member.level, 1);
        assert_eq!(member.level_up(), 2);
    }
}
