// Storage backends for the task list

use crate::error::StoreError;
use crate::task::Task;
use eyre::{Context, eyre};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

pub const DEFAULT_FILENAME: &str = ".tasks.json";

/// Durable backend for the full task sequence.
///
/// The persisted value is a single JSON array of tasks; every save rewrites
/// it in full.
pub trait Storage {
    /// Read the persisted sequence. A missing value is an empty sequence,
    /// not an error.
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    /// Persist the full sequence.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// JSON file storage, one array per file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Storage at `~/.tasks.json`, falling back to the current directory
    /// when the home directory cannot be determined.
    pub fn default_location() -> Self {
        let path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_FILENAME);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "Task file does not exist yet");
            return Ok(Vec::new());
        }

        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open task file {:?}", self.path))
            .map_err(StoreError::Persistence)?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read task file")
            .map_err(StoreError::Persistence)?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)
            .context("Invalid task file format, expected a JSON array of tasks")
            .map_err(StoreError::Persistence)?;

        debug!(path = ?self.path, count = tasks.len(), "Loaded tasks from file");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open task file {:?} for writing", self.path))
            .map_err(StoreError::Persistence)?;

        // Exclusive lock for the whole rewrite
        file.lock_exclusive()
            .context("Failed to acquire file lock")
            .map_err(StoreError::Persistence)?;

        let json = serde_json::to_string_pretty(tasks)
            .context("Failed to serialize tasks")
            .map_err(StoreError::Persistence)?;

        file.set_len(0)
            .context("Failed to truncate task file")
            .map_err(StoreError::Persistence)?;
        file.write_all(json.as_bytes())
            .context("Failed to write task file")
            .map_err(StoreError::Persistence)?;
        file.sync_all()
            .context("Failed to flush task file")
            .map_err(StoreError::Persistence)?;

        // Lock is released when the file is dropped
        debug!(path = ?self.path, count = tasks.len(), "Saved tasks to file");
        Ok(())
    }
}

/// In-memory storage for tests and embedders that manage durability
/// themselves.
#[derive(Default)]
pub struct MemoryStorage {
    tasks: Mutex<Vec<Task>>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that makes every subsequent `save` fail, for exercising the
    /// best-effort persistence path.
    pub fn failure_switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.fail_saves)
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(StoreError::Persistence(eyre!("simulated storage failure")));
        }
        *self.tasks.lock().unwrap_or_else(|e| e.into_inner()) = tasks.to_vec();
        Ok(())
    }
}
