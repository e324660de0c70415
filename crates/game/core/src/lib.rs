//! Deterministic starship game rules and data types.
//!
//! `game-core` owns the arithmetic of the game: the ship resource ledger,
//! the battle engine, weighted event tables, mission drafting and the shop
//! catalog. Nothing here performs I/O; randomness flows through
//! [`RandomSource`] and persistence is the runtime's concern.
pub mod activities;
pub mod combat;
pub mod config;
pub mod error;
pub mod events;
pub mod mission;
pub mod rng;
pub mod shop;
pub mod state;

pub use activities::{
    Recruit, ScanFinding, ScanOutcome, ScanReport, ScanTable, StealAttempt, attempt_steal,
    roll_recruit,
};
pub use combat::{Battle, BattleOutcome, BattleReport, BattleStatus};
pub use config::{
    BattleRules, CreditPolicy, GameConfig, MissionRules, RollRange, StartingResources,
};
pub use error::{ErrorSeverity, GameError, GameResult, RecordKind, Resource};
pub use events::{EventOutcome, EventTable, SectorEvent, WeightedTable};
pub use mission::{MissionBoard, MissionDraft};
pub use rng::{PcgRng, RandomSource, SequenceRng};
pub use shop::{ShopCatalog, ShopItem};
pub use state::{
    Alliance, AllianceId, AllianceMembership, CrewId, CrewMember, CrewSkill, EventKind,
    EventLogEntry, ItemId, Mission, MissionId, MissionStatus, Player, PlayerId, ShipState,
    ShipSystem, Timestamp, UpgradeOutcome, UpgradeRecord,
};
