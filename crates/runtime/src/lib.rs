//! Runtime orchestration for the starship game.
//!
//! This crate wires the game rules to storage, scheduling and notification.
//! Transports embed [`Runtime`], dispatch parsed [`Command`]s through
//! [`RuntimeHandle`], render the returned [`Reply`], and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`repository`] persists per-player records, in memory or on disk
//! - [`oracle`] gives shared read-only access to content and configuration
//! - [`replay`] paces battle logs for presentation
//! - `service` and `workers` stay internal to the crate
pub mod api;
pub mod clock;
pub mod events;
pub mod locks;
pub mod oracle;
pub mod replay;
pub mod repository;
pub mod roster;
pub mod runtime;

mod service;
mod workers;

pub use api::{
    Button, Command, ParseCommandError, Reply, Result, RuntimeError, RuntimeHandle,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{BattleEvent, Event, EventBus, MissionEvent, SectorNotice, Topic};
pub use locks::PlayerLocks;
pub use oracle::OracleManager;
pub use replay::BattleReplay;
pub use repository::{
    AllianceRepository, BatchRepository, CrewRepository, FileStore, GameStore, InMemoryStore,
    JournalRepository, MissionRepository, Persistence, PlayerRepository, RepositoryError,
    ShipRepository, TableStore, WriteBatch,
};
pub use roster::{RecentActivityRoster, RosterProvider, StaticRoster};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use service::GameService;
pub use workers::{TickKind, TickSchedule};
