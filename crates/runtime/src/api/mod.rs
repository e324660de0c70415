//! Public runtime API surface.
//!
//! This module gathers the types exposed to transports: the command and
//! reply records, the error type, and the cloneable [`RuntimeHandle`].

pub mod command;
pub mod errors;
pub mod handle;
pub mod reply;

pub use command::{Command, ParseCommandError};
pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use reply::{Button, Reply};
