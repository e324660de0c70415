//! Repository layer for per-player game data.
//!
//! Repositories handle data that CHANGES during gameplay:
//! - Players and their ships
//! - Crew, missions and alliance memberships
//! - The append-only event and upgrade journal
//!
//! Static content (shop items, event tables, templates) is handled by the
//! oracle, not by repositories.

mod batch;
mod error;
mod file;
mod memory;
mod tables;
mod traits;

pub use batch::WriteBatch;
pub use error::{RepositoryError, Result};
pub use file::{FileBacking, FileStore};
pub use memory::{
    DEFAULT_JOURNAL_RETENTION, InMemoryStore, Persistence, TableStore, Volatile,
};
pub use tables::{JournalLine, Tables};
pub use traits::{
    AllianceRepository, BatchRepository, CrewRepository, GameStore, JournalRepository,
    MissionRepository, PlayerRepository, ShipRepository,
};
