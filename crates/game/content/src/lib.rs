//! Static game content and data-file loaders.
//!
//! This crate houses the built-in content of the starship game and loaders
//! that override it from a data directory:
//! - Shop catalog (data-driven via RON)
//! - Sector event and scan tables (data-driven via RON)
//! - Mission templates and crew names (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime's oracle and never appears in stored
//! player state.

pub mod builtin;
mod content;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use content::GameContent;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CrewLoader, EventLoader, LoadResult, LoadedEvents, MissionLoader,
    ShopLoader,
};
