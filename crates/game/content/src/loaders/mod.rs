//! Content loaders for reading game data from files.
//!
//! Each loader reads one file; [`ContentFactory`] assembles them into a
//! [`GameContent`](crate::GameContent), falling back to built-ins for files
//! that are absent.

pub mod config;
pub mod crew;
pub mod events;
pub mod factory;
pub mod missions;
pub mod shop;

pub use config::ConfigLoader;
pub use crew::CrewLoader;
pub use events::{EventLoader, LoadedEvents};
pub use factory::ContentFactory;
pub use missions::MissionLoader;
pub use shop::ShopLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
