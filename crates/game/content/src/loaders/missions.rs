//! Mission template loader.

use std::path::Path;

use game_core::MissionBoard;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionFile {
    pub templates: Vec<String>,
}

/// Loader for mission templates from RON files.
pub struct MissionLoader;

impl MissionLoader {
    pub fn load(path: &Path) -> LoadResult<MissionBoard> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MissionBoard> {
        let file: MissionFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mission templates RON: {}", e))?;

        if file.templates.is_empty() {
            anyhow::bail!("Mission template list is empty");
        }

        Ok(MissionBoard::new(file.templates))
    }
}
