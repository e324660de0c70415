//! File-backed game store.
//!
//! # File Format
//!
//! ```text
//! {base_dir}/
//!   ├── tables.bin     bincode snapshot of every mutable table
//!   └── journal.jsonl  one JSON object per journal line, append-only
//! ```
//!
//! The snapshot is written to `tables.bin.tmp` and renamed over the previous
//! one, so a crash mid-write leaves the last good snapshot in place.
//!
//! The journal is never loaded into memory. Per-player queries scan the file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::memory::{Persistence, TableStore};
use game_core::PlayerId;

use super::{JournalLine, RepositoryError, Result, Tables};

const SNAPSHOT_FILE: &str = "tables.bin";
const JOURNAL_FILE: &str = "journal.jsonl";

/// Snapshot-plus-journal persistence under one directory.
pub struct FileBacking {
    base_dir: PathBuf,
    journal: Mutex<File>,
}

/// Durable store: [`TableStore`] over [`FileBacking`].
pub type FileStore = TableStore<FileBacking>;

impl FileStore {
    /// Open (or create) a store rooted at `base_dir`.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;

        let tables = load_snapshot(&base_dir.join(SNAPSHOT_FILE))?;
        let journal_path = base_dir.join(JOURNAL_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&journal_path)
            .map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Opened file store at {} ({} players)",
            base_dir.display(),
            tables.players.len()
        );

        let backing = FileBacking {
            base_dir,
            journal: Mutex::new(file),
        };
        Ok(TableStore::with_backend(tables, backing))
    }
}

impl FileBacking {
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn snapshot_path(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE)
    }

    fn journal_path(&self) -> PathBuf {
        self.base_dir.join(JOURNAL_FILE)
    }
}

impl Persistence for FileBacking {
    fn persist_tables(&self, tables: &Tables) -> Result<()> {
        let path = self.snapshot_path();
        let temp_path = path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(tables).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved tables to {}", path.display());

        Ok(())
    }

    fn append_journal(&self, line: &JournalLine) -> Result<()> {
        let mut json =
            serde_json::to_string(line).map_err(|e| RepositoryError::Json(e.to_string()))?;
        json.push('\n');

        let mut file = self
            .journal
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        file.write_all(json.as_bytes())
            .map_err(RepositoryError::Io)?;
        file.flush().map_err(RepositoryError::Io)?;

        Ok(())
    }

    fn journal_for(&self, player: PlayerId) -> Result<Vec<JournalLine>> {
        // hold the writer so no half-written line is read
        let _writer = self
            .journal
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        scan_journal(&self.journal_path(), |line| line.player() == player)
    }
}

fn load_snapshot(path: &Path) -> Result<Tables> {
    if !path.exists() {
        return Ok(Tables::default());
    }

    let bytes = fs::read(path).map_err(RepositoryError::Io)?;
    bincode::deserialize(&bytes).map_err(|e| {
        RepositoryError::CorruptedData(format!("snapshot {}: {}", path.display(), e))
    })
}

fn scan_journal(path: &Path, keep: impl Fn(&JournalLine) -> bool) -> Result<Vec<JournalLine>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path).map_err(RepositoryError::Io)?);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(RepositoryError::Io)?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: JournalLine = serde_json::from_str(&line).map_err(|e| {
            RepositoryError::CorruptedData(format!("journal line {}: {}", index + 1, e))
        })?;
        if keep(&parsed) {
            lines.push(parsed);
        }
    }
    Ok(lines)
}
