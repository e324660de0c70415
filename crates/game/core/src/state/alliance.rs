use super::{AllianceId, PlayerId, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alliance {
    pub id: AllianceId,
    pub name: String,
    pub created_at: Timestamp,
}

impl Alliance {
    /// Name used when a player creates an alliance without choosing one.
    pub fn default_name(founder: &str) -> String {
        format!("Alliance_{founder}")
    }
}

/// Player ↔ alliance join row.
///
/// Memberships are an append-only log: joining twice records two rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllianceMembership {
    pub player: PlayerId,
    pub alliance: AllianceId,
    pub joined_at: Timestamp,
}
