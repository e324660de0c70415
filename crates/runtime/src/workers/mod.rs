//! Background tasks that back the runtime.
//!
//! Each tick worker drives one scheduled sweep of the game service at a fixed
//! interval until shutdown is signalled.

mod scheduler;

pub use scheduler::{TickKind, TickSchedule, TickWorker};
