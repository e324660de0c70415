//! Topic-based event bus for runtime notifications.
//!
//! The game service publishes events here after a change has been saved; a
//! transport subscribes to the topics it wants to push to players.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleEvent, MissionEvent, SectorNotice};
