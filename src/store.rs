// TaskStore: owns the task sequence, persists after every mutation

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::stats::{self, CategoryStat, PriorityStat, Stats};
use crate::storage::Storage;
use crate::task::{Task, TaskPriority, TaskStatus, now};
use tracing::{debug, info, warn};

/// Owner of the task list.
///
/// All mutations go through `&mut self`, so a store has a single in-flight
/// mutation at a time and the id-uniqueness and status invariants hold by
/// construction. Every mutating operation persists before it returns; a
/// persistence failure comes back as [`StoreError::Persistence`] with the
/// in-memory change already applied (best-effort persistence, the session
/// state stays authoritative).
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn Storage>,
    config: StoreConfig,
}

impl TaskStore {
    /// Open a store over the given backend, loading whatever it holds.
    ///
    /// Load failures are not fatal: a missing or unreadable value is logged
    /// and treated as "no tasks yet".
    pub fn open(storage: Box<dyn Storage>, config: StoreConfig) -> Self {
        let mut store = Self {
            tasks: Vec::new(),
            storage,
            config,
        };
        store.load();
        store
    }

    /// Reload the task list from storage, replacing the in-memory state.
    pub fn load(&mut self) {
        match self.storage.load() {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
            }
            Err(e) => {
                warn!(error = ?e, "Failed to load tasks, starting empty");
                self.tasks = Vec::new();
            }
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        self.storage.save(&self.tasks)
    }

    /// Add a new pending task and persist.
    ///
    /// Returns [`StoreError::Validation`] when the description trims to
    /// empty, before any mutation.
    pub fn add(
        &mut self,
        description: &str,
        priority: Option<TaskPriority>,
        category: Option<&str>,
    ) -> Result<Task, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::Validation(
                "Task description cannot be empty".to_string(),
            ));
        }

        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            description: description.to_string(),
            status: TaskStatus::Pending,
            category: category
                .map(str::to_string)
                .unwrap_or_else(|| self.config.default_category.clone()),
            priority: priority.unwrap_or(self.config.default_priority),
            created_at: now(),
            completed_at: None,
        };

        info!(id, description, "Adding task");
        self.tasks.push(task.clone());
        self.save()?;
        Ok(task)
    }

    /// Mark a pending task done, setting its completion timestamp.
    ///
    /// Returns `Ok(false)` when the id is unknown or the task is already
    /// done; neither case mutates or persists anything.
    pub fn mark_done(&mut self, id: u64) -> Result<bool, StoreError> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.status != TaskStatus::Done => {
                task.status = TaskStatus::Done;
                task.completed_at = Some(now());
                info!(id, "Task marked done");
                self.save()?;
                Ok(true)
            }
            _ => {
                debug!(id, "mark_done was a no-op");
                Ok(false)
            }
        }
    }

    /// Remove the task with the given id, reporting whether one was removed.
    pub fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                info!(id, "Task deleted");
                self.save()?;
                Ok(true)
            }
            None => {
                debug!(id, "delete was a no-op");
                Ok(false)
            }
        }
    }

    /// Remove every done task, reporting whether the count decreased.
    /// Pending tasks keep their relative order.
    pub fn clear_completed(&mut self) -> Result<bool, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.status != TaskStatus::Done);
        let cleared = before - self.tasks.len();
        info!(cleared, "Cleared completed tasks");
        self.save()?;
        Ok(cleared > 0)
    }

    /// Overall counts and completion rate.
    pub fn stats(&self) -> Stats {
        stats::stats(&self.tasks)
    }

    /// Per-category counts with display colors, sorted descending by count.
    pub fn category_breakdown(&self) -> Vec<CategoryStat> {
        stats::category_breakdown(&self.tasks)
    }

    /// Per-priority counts with the fixed label/color mapping.
    pub fn priority_breakdown(&self) -> Vec<PriorityStat> {
        stats::priority_breakdown(&self.tasks)
    }

    /// True when the pending backlog exceeds the configured threshold.
    pub fn is_overloaded(&self) -> bool {
        stats::is_overloaded(&self.tasks, self.config.overload_threshold)
    }

    /// The task sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
