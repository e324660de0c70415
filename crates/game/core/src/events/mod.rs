//! Random sector events.
//!
//! - [`WeightedTable`] is the generic weighted picker used by every table in
//!   the game (sector events, scans).
//! - [`EventTable`] maps named outcomes to categories and flavor text.
//! - [`conditions`] is a pure lookup of atmospheric descriptors.
pub mod conditions;
mod selector;
mod table;

pub use conditions::condition;
pub use selector::WeightedTable;
pub use table::{EventOutcome, EventTable, SectorEvent};
