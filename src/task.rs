// Task record and its enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Field names on the wire are camelCase and timestamps are ISO-8601
/// strings, so files written by older clients stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: TaskStatus,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub priority: TaskPriority,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    "General".to_string()
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

/// Task priority. Serialized capitalized (`"High"`, `"Medium"`, `"Low"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            other => Err(format!("unknown priority: {other} (expected high, medium or low)")),
        }
    }
}

/// Current timestamp for `created_at`/`completed_at` fields.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 1,
            description: "Write the report".to_string(),
            status: TaskStatus::Pending,
            category: "Work".to_string(),
            priority: TaskPriority::High,
            created_at: now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&TaskStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn test_priority_serialization_is_capitalized() {
        assert_eq!(serde_json::to_string(&TaskPriority::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&TaskPriority::Medium).unwrap(), "\"Medium\"");
        assert_eq!(serde_json::to_string(&TaskPriority::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn test_task_wire_format_is_camel_case() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"completedAt\":null"));
        assert!(!json.contains("\"created_at\""));
    }

    #[test]
    fn test_task_roundtrip() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.description, task.description);
        assert_eq!(back.status, task.status);
        assert_eq!(back.priority, task.priority);
    }

    #[test]
    fn test_missing_category_and_priority_default() {
        // Records written before categories/priorities existed.
        let json = r#"{"id":3,"description":"old task","status":"pending","createdAt":"2024-01-01T00:00:00Z","completedAt":null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.category, "General");
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!("MEDIUM".parse::<TaskPriority>().unwrap(), TaskPriority::Medium);
        assert!("urgent".parse::<TaskPriority>().is_err());
    }
}
