//! Repository contracts for loading and saving per-player records.
//!
//! Every method is a short synchronous call; callers serialize access per
//! player (see [`crate::PlayerLocks`]), so implementations only need to be
//! internally consistent under concurrent calls for different players.

use game_core::{
    Alliance, AllianceId, AllianceMembership, CrewMember, CrewSkill, EventLogEntry, Mission,
    MissionDraft, MissionId, Player, PlayerId, ShipState, Timestamp, UpgradeRecord,
};

use super::{Result, WriteBatch};

/// Player records.
pub trait PlayerRepository: Send + Sync {
    fn load_player(&self, id: PlayerId) -> Result<Option<Player>>;

    fn save_player(&self, player: &Player) -> Result<()>;

    /// Set `last_active` of a stored player and return the updated record.
    ///
    /// Returns `None` for unknown ids. Backends may defer persisting the
    /// timestamp until their next write.
    fn touch_player(&self, id: PlayerId, now: Timestamp) -> Result<Option<Player>>;

    /// Ids of players whose `last_active` is at or after `since`, ascending.
    fn active_player_ids(&self, since: Timestamp) -> Result<Vec<PlayerId>>;
}

/// One ship per player.
pub trait ShipRepository: Send + Sync {
    fn load_ship(&self, player: PlayerId) -> Result<Option<ShipState>>;

    fn save_ship(&self, player: PlayerId, ship: &ShipState) -> Result<()>;
}

pub trait CrewRepository: Send + Sync {
    /// Store a new level-1 crew member and return it with its id.
    fn add_crew_member(&self, player: PlayerId, name: &str, skill: CrewSkill)
    -> Result<CrewMember>;

    fn list_crew(&self, player: PlayerId) -> Result<Vec<CrewMember>>;
}

pub trait MissionRepository: Send + Sync {
    /// Persist an accepted offer as an active mission.
    fn add_mission(&self, player: PlayerId, draft: MissionDraft, now: Timestamp)
    -> Result<Mission>;

    fn load_mission(&self, id: MissionId) -> Result<Option<Mission>>;

    /// Active missions of `player` in insertion order.
    fn active_missions(&self, player: PlayerId) -> Result<Vec<Mission>>;
}

pub trait AllianceRepository: Send + Sync {
    /// Create an alliance with `founder` as its first member, in one write.
    fn create_alliance(&self, name: &str, founder: PlayerId, now: Timestamp) -> Result<Alliance>;

    fn load_alliance(&self, id: AllianceId) -> Result<Option<Alliance>>;

    fn list_alliances(&self) -> Result<Vec<Alliance>>;

    fn memberships(&self, player: PlayerId) -> Result<Vec<AllianceMembership>>;
}

/// Append-only history. Nothing in the game reads it back.
pub trait JournalRepository: Send + Sync {
    fn append_event(&self, entry: &EventLogEntry) -> Result<()>;

    fn append_upgrade(&self, record: &UpgradeRecord) -> Result<()>;

    /// Journal entries of `player`, oldest first.
    fn events_for(&self, player: PlayerId) -> Result<Vec<EventLogEntry>>;

    fn upgrades_for(&self, player: PlayerId) -> Result<Vec<UpgradeRecord>>;
}

/// Atomic writes spanning several records.
pub trait BatchRepository: Send + Sync {
    /// Store every record of `batch`, or none of them.
    fn commit(&self, batch: WriteBatch) -> Result<()>;
}

/// Everything the game service needs from storage.
pub trait GameStore:
    BatchRepository
    + PlayerRepository
    + ShipRepository
    + CrewRepository
    + MissionRepository
    + AllianceRepository
    + JournalRepository
{
}

impl<T> GameStore for T where
    T: BatchRepository
        + PlayerRepository
        + ShipRepository
        + CrewRepository
        + MissionRepository
        + AllianceRepository
        + JournalRepository
{
}
