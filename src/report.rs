// Plain-text report formatting for the CLI

use crate::stats::{CategoryStat, PriorityStat, Stats};
use crate::task::Task;

/// One task as a list line: `[3] buy milk (Medium, Life, pending)`.
pub fn format_task(task: &Task) -> String {
    format!(
        "[{}] {} ({}, {}, {})",
        task.id, task.description, task.priority, task.category, task.status
    )
}

pub fn format_stats(stats: &Stats) -> String {
    let lines = [
        format!("Total tasks: {}", stats.total),
        format!("Completed: {}", stats.completed),
        format!("Pending: {}", stats.pending),
        format!("Completion rate: {:.2}%", stats.completion_rate),
    ];
    lines.join("\n")
}

pub fn format_category_breakdown(breakdown: &[CategoryStat]) -> String {
    let mut lines = vec!["By category:".to_string()];
    for entry in breakdown {
        lines.push(format!("- {}: {} ({}%)", entry.category, entry.count, entry.percentage));
    }
    lines.join("\n")
}

pub fn format_priority_breakdown(breakdown: &[PriorityStat]) -> String {
    let mut lines = vec!["By priority:".to_string()];
    for entry in breakdown {
        lines.push(format!("- {}: {}", entry.label, entry.count));
    }
    lines.join("\n")
}
