//! Read-only access to static game content.
//!
//! [`OracleManager`] bundles the configuration and content tables behind an
//! `Arc` so the service, workers and handles can share them cheaply. The data
//! is immutable at runtime; dynamic state lives in repositories.

use std::sync::Arc;

use game_content::GameContent;
use game_core::{EventTable, GameConfig, MissionBoard, ScanTable, ShopCatalog};

/// Shared handle to the loaded content.
#[derive(Clone, Debug)]
pub struct OracleManager {
    content: Arc<GameContent>,
}

impl OracleManager {
    pub fn new(content: GameContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    /// Built-in content with default configuration.
    pub fn builtin() -> Self {
        Self::new(GameContent::builtin())
    }

    pub fn config(&self) -> &GameConfig {
        &self.content.config
    }

    pub fn events(&self) -> &EventTable {
        &self.content.events
    }

    pub fn scans(&self) -> &ScanTable {
        &self.content.scans
    }

    pub fn missions(&self) -> &MissionBoard {
        &self.content.missions
    }

    pub fn shop(&self) -> &ShopCatalog {
        &self.content.shop
    }

    pub fn enemies(&self) -> &[String] {
        &self.content.enemies
    }

    pub fn crew_names(&self) -> &[String] {
        &self.content.crew_names
    }
}

impl From<GameContent> for OracleManager {
    fn from(content: GameContent) -> Self {
        Self::new(content)
    }
}
