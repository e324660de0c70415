//! Unified error types surfaced by the runtime API.
//!
//! Refusals the player can act on (not enough fuel, unknown item) are not
//! errors at this level: the service turns them into reply text. What
//! reaches callers as `Err` is storage or worker failure.
use thiserror::Error;

use game_core::GameError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] RepositoryError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires game content to be configured before building")]
    MissingContent,
}
