// Aggregate statistics over the task sequence

use crate::task::{Task, TaskPriority, TaskStatus};
use serde::Serialize;

/// Display palette cycled through category groups in the order the
/// categories are first encountered.
pub const CATEGORY_PALETTE: [&str; 5] = ["#1890ff", "#52c41a", "#fa8c16", "#eb2f96", "#722ed1"];

/// Overall counts and completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage of completed tasks, rounded to 2 decimal places.
    /// Zero when the store is empty.
    pub completion_rate: f64,
}

/// One category group of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
    /// Share of all tasks, formatted to one decimal place.
    pub percentage: String,
    pub color: &'static str,
}

/// One priority group of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityStat {
    pub priority: TaskPriority,
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// Compute the overall stats for a task sequence.
pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
    let pending = tasks.iter().filter(|t| t.status == TaskStatus::Pending).count();
    let completion_rate = if total == 0 {
        0.0
    } else {
        round2(completed as f64 / total as f64 * 100.0)
    };

    Stats {
        total,
        completed,
        pending,
        completion_rate,
    }
}

/// Group tasks by category, sorted descending by count.
///
/// Colors cycle through [`CATEGORY_PALETTE`] in the order categories are
/// first encountered while walking the sequence, and the descending sort is
/// stable, so ties keep that first-appearance order.
pub fn category_breakdown(tasks: &[Task]) -> Vec<CategoryStat> {
    let total = tasks.len();
    let mut groups: Vec<(String, usize)> = Vec::new();

    for task in tasks {
        match groups.iter_mut().find(|(name, _)| *name == task.category) {
            Some((_, count)) => *count += 1,
            None => groups.push((task.category.clone(), 1)),
        }
    }

    let mut breakdown: Vec<CategoryStat> = groups
        .into_iter()
        .enumerate()
        .map(|(i, (category, count))| {
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            CategoryStat {
                category,
                count,
                percentage: format!("{percentage:.1}"),
                color: CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()],
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

/// Count tasks per priority, in order of first appearance.
pub fn priority_breakdown(tasks: &[Task]) -> Vec<PriorityStat> {
    let mut groups: Vec<(TaskPriority, usize)> = Vec::new();

    for task in tasks {
        match groups.iter_mut().find(|(p, _)| *p == task.priority) {
            Some((_, count)) => *count += 1,
            None => groups.push((task.priority, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(priority, count)| {
            let (label, color) = priority_display(priority);
            PriorityStat {
                priority,
                label,
                count,
                color,
            }
        })
        .collect()
}

fn priority_display(priority: TaskPriority) -> (&'static str, &'static str) {
    match priority {
        TaskPriority::High => ("High", "#ff4d4f"),
        TaskPriority::Medium => ("Medium", "#fa8c16"),
        TaskPriority::Low => ("Low", "#52c41a"),
    }
}

/// True when the pending backlog exceeds the threshold.
pub fn is_overloaded(tasks: &[Task], threshold: usize) -> bool {
    stats(tasks).pending > threshold
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::now;

    fn task(id: u64, category: &str, priority: TaskPriority, done: bool) -> Task {
        Task {
            id,
            description: format!("task {id}"),
            status: if done { TaskStatus::Done } else { TaskStatus::Pending },
            category: category.to_string(),
            priority,
            created_at: now(),
            completed_at: done.then(now),
        }
    }

    #[test]
    fn test_stats_empty() {
        let s = stats(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.completed, 0);
        assert_eq!(s.pending, 0);
        assert_eq!(s.completion_rate, 0.0);
    }

    #[test]
    fn test_stats_one_of_four_done() {
        let tasks = vec![
            task(1, "General", TaskPriority::Medium, true),
            task(2, "General", TaskPriority::Medium, false),
            task(3, "General", TaskPriority::Medium, false),
            task(4, "General", TaskPriority::Medium, false),
        ];
        let s = stats(&tasks);
        assert_eq!(s.total, 4);
        assert_eq!(s.completed, 1);
        assert_eq!(s.pending, 3);
        assert_eq!(s.completion_rate, 25.00);
    }

    #[test]
    fn test_completion_rate_rounds_to_two_decimals() {
        let tasks = vec![
            task(1, "General", TaskPriority::Medium, true),
            task(2, "General", TaskPriority::Medium, false),
            task(3, "General", TaskPriority::Medium, false),
        ];
        // 1/3 = 33.333... -> 33.33
        assert_eq!(stats(&tasks).completion_rate, 33.33);
    }

    #[test]
    fn test_category_breakdown_counts_and_sort() {
        let tasks = vec![
            task(1, "Work", TaskPriority::Medium, false),
            task(2, "Work", TaskPriority::Medium, false),
            task(3, "Life", TaskPriority::Medium, false),
        ];
        let breakdown = category_breakdown(&tasks);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Work");
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].percentage, "66.7");
        assert_eq!(breakdown[1].category, "Life");
        assert_eq!(breakdown[1].count, 1);
        assert_eq!(breakdown[1].percentage, "33.3");
    }

    #[test]
    fn test_category_colors_follow_first_appearance() {
        // "Life" is seen first, so it gets the first palette color even
        // though "Work" sorts first by count.
        let tasks = vec![
            task(1, "Life", TaskPriority::Medium, false),
            task(2, "Work", TaskPriority::Medium, false),
            task(3, "Work", TaskPriority::Medium, false),
        ];
        let breakdown = category_breakdown(&tasks);
        assert_eq!(breakdown[0].category, "Work");
        assert_eq!(breakdown[0].color, CATEGORY_PALETTE[1]);
        assert_eq!(breakdown[1].category, "Life");
        assert_eq!(breakdown[1].color, CATEGORY_PALETTE[0]);
    }

    #[test]
    fn test_category_palette_wraps_past_five() {
        let tasks: Vec<Task> = (0..6)
            .map(|i| task(i + 1, &format!("cat{i}"), TaskPriority::Medium, false))
            .collect();
        let breakdown = category_breakdown(&tasks);
        assert_eq!(breakdown.len(), 6);
        // Sixth distinct category cycles back to the first color. Counts are
        // all 1, and the stable sort keeps first-appearance order.
        assert_eq!(breakdown[5].category, "cat5");
        assert_eq!(breakdown[5].color, CATEGORY_PALETTE[0]);
    }

    #[test]
    fn test_priority_breakdown() {
        let tasks = vec![
            task(1, "General", TaskPriority::Low, false),
            task(2, "General", TaskPriority::High, false),
            task(3, "General", TaskPriority::High, true),
        ];
        let breakdown = priority_breakdown(&tasks);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].priority, TaskPriority::Low);
        assert_eq!(breakdown[0].count, 1);
        assert_eq!(breakdown[0].label, "Low");
        assert_eq!(breakdown[0].color, "#52c41a");
        assert_eq!(breakdown[1].priority, TaskPriority::High);
        assert_eq!(breakdown[1].count, 2);
        assert_eq!(breakdown[1].color, "#ff4d4f");
    }

    #[test]
    fn test_overload_threshold_is_strict() {
        let tasks: Vec<Task> = (0..5)
            .map(|i| task(i + 1, "General", TaskPriority::Medium, false))
            .collect();
        assert!(!is_overloaded(&tasks, 5));
        assert!(is_overloaded(&tasks, 4));
    }
}
