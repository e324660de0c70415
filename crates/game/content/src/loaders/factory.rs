//! Content factory for assembling game content from data files.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, MissionBoard, ShopCatalog};
use tracing::debug;

use crate::builtin;
use crate::content::GameContent;
use crate::loaders::events::LoadedEvents;
use crate::loaders::{ConfigLoader, CrewLoader, EventLoader, LoadResult, MissionLoader, ShopLoader};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── events.ron
/// ├── shop.ron
/// ├── missions.ron
/// └── crew.ron
/// ```
///
/// Every file is optional. A missing file keeps the built-in content; a
/// present but malformed file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        self.load_or("config.toml", ConfigLoader::load, GameConfig::default)
    }

    /// Load event and scan tables from `events.ron`.
    pub fn load_events(&self) -> LoadResult<LoadedEvents> {
        self.load_or("events.ron", EventLoader::load, || LoadedEvents {
            events: builtin::event_table(),
            scans: builtin::scan_table(),
            enemies: builtin::enemy_factions(),
        })
    }

    /// Load the shop catalog from `shop.ron`.
    pub fn load_shop(&self) -> LoadResult<ShopCatalog> {
        self.load_or("shop.ron", ShopLoader::load, builtin::shop_catalog)
    }

    /// Load mission templates from `missions.ron`.
    pub fn load_missions(&self) -> LoadResult<MissionBoard> {
        self.load_or("missions.ron", MissionLoader::load, builtin::mission_board)
    }

    /// Load recruitable crew names from `crew.ron`.
    pub fn load_crew_names(&self) -> LoadResult<Vec<String>> {
        self.load_or("crew.ron", CrewLoader::load, builtin::crew_names)
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        let LoadedEvents {
            events,
            scans,
            enemies,
        } = self.load_events()?;

        Ok(GameContent {
            config: self.load_config()?,
            events,
            scans,
            missions: self.load_missions()?,
            shop: self.load_shop()?,
            enemies,
            crew_names: self.load_crew_names()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_or<T>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<T>,
        fallback: impl FnOnce() -> T,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if path.exists() {
            debug!(path = %path.display(), "loading content file");
            load(&path)
        } else {
            debug!(path = %path.display(), "content file absent, using built-in");
            Ok(fallback())
        }
    }
}
