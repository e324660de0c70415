use game_core::{EventTable, GameConfig, MissionBoard, ScanTable, ShopCatalog};

use crate::builtin;

/// Everything the runtime needs besides stored state.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub config: GameConfig,
    pub events: EventTable,
    pub scans: ScanTable,
    pub missions: MissionBoard,
    pub shop: ShopCatalog,
    pub enemies: Vec<String>,
    pub crew_names: Vec<String>,
}

impl GameContent {
    /// Default configuration with the compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            config: GameConfig::default(),
            events: builtin::event_table(),
            scans: builtin::scan_table(),
            missions: builtin::mission_board(),
            shop: builtin::shop_catalog(),
            enemies: builtin::enemy_factions(),
            crew_names: builtin::crew_names(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for GameContent {
    fn default() -> Self {
        Self::builtin()
    }
}
