//! Table-backed store shared by the in-memory and file backends.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError, RwLock};

use game_core::{
    Alliance, AllianceId, AllianceMembership, CrewMember, CrewSkill, EventLogEntry, Mission,
    MissionDraft, MissionId, Player, PlayerId, ShipState, Timestamp, UpgradeRecord,
};

use super::traits::{
    AllianceRepository, BatchRepository, CrewRepository, JournalRepository, MissionRepository,
    PlayerRepository, ShipRepository,
};
use super::{JournalLine, RepositoryError, Result, Tables, WriteBatch};

/// Journal lines kept by [`Volatile`] before the oldest are dropped.
pub const DEFAULT_JOURNAL_RETENTION: usize = 10_000;

/// Durability hook invoked by [`TableStore`] before a change becomes visible.
///
/// If a hook fails the store keeps its previous tables, so readers never see
/// a value that was not persisted. The journal lives entirely in the backend.
pub trait Persistence: Send + Sync {
    /// Persist the full table set after a mutation.
    fn persist_tables(&self, tables: &Tables) -> Result<()>;

    /// Persist one journal line.
    fn append_journal(&self, line: &JournalLine) -> Result<()>;

    /// Journal lines of `player`, oldest first.
    fn journal_for(&self, player: PlayerId) -> Result<Vec<JournalLine>>;
}

/// Backend that keeps nothing beyond process memory.
///
/// Tables are never written anywhere. The journal is a ring of the most
/// recent lines.
#[derive(Debug)]
pub struct Volatile {
    journal: Mutex<VecDeque<JournalLine>>,
    retention: usize,
}

impl Volatile {
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_JOURNAL_RETENTION)
    }

    /// Keep at most `lines` journal lines.
    pub fn with_retention(lines: usize) -> Self {
        Self {
            journal: Mutex::new(VecDeque::new()),
            retention: lines,
        }
    }
}

impl Default for Volatile {
    fn default() -> Self {
        Self::new()
    }
}

impl Persistence for Volatile {
    fn persist_tables(&self, _tables: &Tables) -> Result<()> {
        Ok(())
    }

    fn append_journal(&self, line: &JournalLine) -> Result<()> {
        // lines are plain data, a poisoned ring is still consistent
        let mut journal = self.journal.lock().unwrap_or_else(PoisonError::into_inner);
        journal.push_back(line.clone());
        while journal.len() > self.retention {
            journal.pop_front();
        }
        Ok(())
    }

    fn journal_for(&self, player: PlayerId) -> Result<Vec<JournalLine>> {
        let journal = self.journal.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(journal
            .iter()
            .filter(|line| line.player() == player)
            .cloned()
            .collect())
    }
}

/// Game store over a [`Tables`] set and a persistence backend.
///
/// Reads are served from memory. Writes are applied to a copy, handed to the
/// backend, and swapped in only once the backend accepts them. `last_active`
/// touches are the exception: they update the live tables in place and reach
/// the backend with the next persisted write.
pub struct TableStore<P> {
    tables: RwLock<Tables>,
    backend: P,
}

/// In-memory store for tests and local runs.
pub type InMemoryStore = TableStore<Volatile>;

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_backend(Tables::default(), Volatile::new())
    }

    /// In-memory store keeping at most `lines` journal lines.
    pub fn with_journal_retention(lines: usize) -> Self {
        Self::with_backend(Tables::default(), Volatile::with_retention(lines))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Persistence> TableStore<P> {
    pub fn with_backend(tables: Tables, backend: P) -> Self {
        Self {
            tables: RwLock::new(tables),
            backend,
        }
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    /// Copy of the current tables.
    pub fn snapshot(&self) -> Result<Tables> {
        self.read(Tables::clone)
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(f(&tables))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut next = tables.clone();
        let out = f(&mut next);
        self.backend.persist_tables(&next)?;
        *tables = next;
        Ok(out)
    }

    fn journal_for<T>(
        &self,
        player: PlayerId,
        pick: impl Fn(JournalLine) -> Option<T>,
    ) -> Result<Vec<T>> {
        Ok(self
            .backend
            .journal_for(player)?
            .into_iter()
            .filter_map(pick)
            .collect())
    }
}

impl<P: Persistence> BatchRepository for TableStore<P> {
    fn commit(&self, batch: WriteBatch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        self.write(|t| batch.apply(t))
    }
}

impl<P: Persistence> PlayerRepository for TableStore<P> {
    fn load_player(&self, id: PlayerId) -> Result<Option<Player>> {
        self.read(|t| t.players.get(&id).cloned())
    }

    fn save_player(&self, player: &Player) -> Result<()> {
        self.write(|t| {
            t.players.insert(player.id, player.clone());
        })
    }

    fn touch_player(&self, id: PlayerId, now: Timestamp) -> Result<Option<Player>> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.players.get_mut(&id).map(|player| {
            player.touch(now);
            player.clone()
        }))
    }

    fn active_player_ids(&self, since: Timestamp) -> Result<Vec<PlayerId>> {
        self.read(|t| t.active_player_ids(since))
    }
}

impl<P: Persistence> ShipRepository for TableStore<P> {
    fn load_ship(&self, player: PlayerId) -> Result<Option<ShipState>> {
        self.read(|t| t.ships.get(&player).copied())
    }

    fn save_ship(&self, player: PlayerId, ship: &ShipState) -> Result<()> {
        self.write(|t| {
            t.ships.insert(player, *ship);
        })
    }
}

impl<P: Persistence> CrewRepository for TableStore<P> {
    fn add_crew_member(
        &self,
        player: PlayerId,
        name: &str,
        skill: CrewSkill,
    ) -> Result<CrewMember> {
        self.write(|t| t.insert_crew(player, name, skill))
    }

    fn list_crew(&self, player: PlayerId) -> Result<Vec<CrewMember>> {
        self.read(|t| {
            t.crew
                .iter()
                .filter(|c| c.player == player)
                .cloned()
                .collect()
        })
    }
}

impl<P: Persistence> MissionRepository for TableStore<P> {
    fn add_mission(
        &self,
        player: PlayerId,
        draft: MissionDraft,
        now: Timestamp,
    ) -> Result<Mission> {
        self.write(|t| t.insert_mission(player, draft, now))
    }

    fn load_mission(&self, id: MissionId) -> Result<Option<Mission>> {
        self.read(|t| t.mission(id).cloned())
    }

    fn active_missions(&self, player: PlayerId) -> Result<Vec<Mission>> {
        self.read(|t| {
            t.missions
                .iter()
                .filter(|m| m.player == player && m.is_active())
                .cloned()
                .collect()
        })
    }
}

impl<P: Persistence> AllianceRepository for TableStore<P> {
    fn create_alliance(&self, name: &str, founder: PlayerId, now: Timestamp) -> Result<Alliance> {
        self.write(|t| {
            let alliance = t.insert_alliance(name, now);
            t.memberships.push(AllianceMembership {
                player: founder,
                alliance: alliance.id,
                joined_at: now,
            });
            alliance
        })
    }

    fn load_alliance(&self, id: AllianceId) -> Result<Option<Alliance>> {
        self.read(|t| t.alliances.iter().find(|a| a.id == id).cloned())
    }

    fn list_alliances(&self) -> Result<Vec<Alliance>> {
        self.read(|t| t.alliances.clone())
    }

    fn memberships(&self, player: PlayerId) -> Result<Vec<AllianceMembership>> {
        self.read(|t| {
            t.memberships
                .iter()
                .filter(|m| m.player == player)
                .cloned()
                .collect()
        })
    }
}

impl<P: Persistence> JournalRepository for TableStore<P> {
    fn append_event(&self, entry: &EventLogEntry) -> Result<()> {
        self.backend
            .append_journal(&JournalLine::Event(entry.clone()))
    }

    fn append_upgrade(&self, record: &UpgradeRecord) -> Result<()> {
        self.backend
            .append_journal(&JournalLine::Upgrade(record.clone()))
    }

    fn events_for(&self, player: PlayerId) -> Result<Vec<EventLogEntry>> {
        self.journal_for(player, |line| match line {
            JournalLine::Event(entry) => Some(entry),
            JournalLine::Upgrade(_) => None,
        })
    }

    fn upgrades_for(&self, player: PlayerId) -> Result<Vec<UpgradeRecord>> {
        self.journal_for(player, |line| match line {
            JournalLine::Upgrade(record) => Some(record),
            JournalLine::Event(_) => None,
        })
    }
}
