//! Append-only history records.

use super::{PlayerId, ShipSystem, Timestamp};

/// Category of a journal entry or sector event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EventKind {
    Info,
    Battle,
    Disaster,
    Resource,
    Mission,
    Steal,
    Trade,
    Other,
    /// Event selection found no outcome.
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLogEntry {
    pub player: PlayerId,
    pub kind: EventKind,
    pub detail: String,
    pub timestamp: Timestamp,
}

impl EventLogEntry {
    pub fn new(
        player: PlayerId,
        kind: EventKind,
        detail: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            player,
            kind,
            detail: detail.into(),
            timestamp,
        }
    }
}

/// History of applied upgrades. Informational only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeRecord {
    pub player: PlayerId,
    pub system: ShipSystem,
    pub new_level: u32,
    pub cost: u32,
    pub timestamp: Timestamp,
}
