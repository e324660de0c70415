//! Sector event and scan table loader.

use std::path::Path;

use game_core::{EventOutcome, EventTable, ScanOutcome, ScanTable};
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::loaders::{LoadResult, read_file};

/// Event catalog structure for RON files.
///
/// `scans` and `enemies` may be omitted to keep the built-in values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCatalog {
    pub outcomes: Vec<EventOutcome>,
    #[serde(default = "builtin::scan_outcomes")]
    pub scans: Vec<ScanOutcome>,
    #[serde(default = "builtin::enemy_factions")]
    pub enemies: Vec<String>,
}

/// Tables assembled from an [`EventCatalog`].
#[derive(Debug, Clone)]
pub struct LoadedEvents {
    pub events: EventTable,
    pub scans: ScanTable,
    pub enemies: Vec<String>,
}

/// Loader for event tables from RON files.
pub struct EventLoader;

impl EventLoader {
    pub fn load(path: &Path) -> LoadResult<LoadedEvents> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LoadedEvents> {
        let catalog: EventCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse event catalog RON: {}", e))?;

        if catalog.outcomes.iter().all(|o| o.weight == 0) {
            anyhow::bail!("Event catalog has no outcome with a positive weight");
        }

        Ok(LoadedEvents {
            events: EventTable::new(catalog.outcomes),
            scans: ScanTable::new(catalog.scans),
            enemies: catalog.enemies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EventKind, PcgRng};

    #[test]
    fn parses_outcomes_and_keeps_builtin_scans() {
        let loaded = EventLoader::parse(
            r#"(
                outcomes: [
                    (
                        key: "meteor_shower",
                        weight: 5,
                        kind: disaster,
                        templates: ["A meteor shower batters the {subject}!"],
                        subjects: ["hull"],
                    ),
                ],
            )"#,
        )
        .unwrap();

        let mut rng = PcgRng::seeded(1);
        let event = loaded.events.select_event(&mut rng);
        assert_eq!(event.kind, EventKind::Disaster);
        assert_eq!(event.description, "A meteor shower batters the hull!");
        assert_eq!(loaded.scans.outcomes().count(), 4);
        assert_eq!(loaded.enemies.len(), 3);
    }

    #[test]
    fn weightless_catalog_is_rejected() {
        let result = EventLoader::parse(
            r#"(outcomes: [(key: "x", weight: 0, kind: info, templates: [])])"#,
        );
        assert!(result.is_err());
    }
}
