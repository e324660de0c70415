//! Crew name loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewFile {
    pub names: Vec<String>,
}

/// Loader for recruitable crew names from RON files.
pub struct CrewLoader;

impl CrewLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<String>> {
        let content = read_file(path)?;
        let file: CrewFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse crew names RON: {}", e))?;

        if file.names.is_empty() {
            anyhow::bail!("Crew name list is empty");
        }

        Ok(file.names)
    }
}
