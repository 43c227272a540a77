// taskpad - a small to-do store with durable persistence and aggregate statistics

pub mod config;
pub mod error;
pub mod report;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::StoreConfig;
pub use error::StoreError;
pub use stats::{CategoryStat, PriorityStat, Stats};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use store::TaskStore;
pub use task::{Task, TaskPriority, TaskStatus};
