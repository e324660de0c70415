//! Persistent per-player records.
//!
//! These structures are what the storage layer loads and saves. Rules that
//! mutate them (travel, upgrade, regeneration, mission transitions) live next
//! to the type they operate on.
mod alliance;
mod crew;
mod ids;
mod journal;
mod mission;
mod player;
mod ship;

pub use alliance::{Alliance, AllianceMembership};
pub use crew::{CrewMember, CrewSkill};
pub use ids::{AllianceId, CrewId, ItemId, MissionId, PlayerId};
pub use journal::{EventKind, EventLogEntry, UpgradeRecord};
pub use mission::{Mission, MissionStatus};
pub use player::Player;
pub use ship::{ShipState, ShipSystem, UpgradeOutcome};

/// Seconds since the Unix epoch.
///
/// The rules never read the clock; callers stamp records with the current time.
pub type Timestamp = i64;
