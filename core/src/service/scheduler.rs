use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::model::task::Task;
use crate::time::parse_due_date;

/// Urgency rank for a task, higher is more urgent.
///
/// A non-empty `priority_label` wins over the numeric field; labels outside
/// the vocabulary rank 0 instead of erroring, so one sloppy client record
/// cannot fail the whole batch. The raw `priority` field is left untouched.
pub fn resolve_priority(task: &Task) -> i64 {
    match task.priority_label.as_deref() {
        Some(label) if !label.is_empty() => match label.to_lowercase().as_str() {
            "urgent" => 3,
            "high" => 2,
            "medium" => 1,
            "low" => 0,
            _ => 0,
        },
        _ => task.priority,
    }
}

/// Comparable due date for a task.
///
/// Missing or unparseable dates resolve to the maximum representable
/// instant, which puts them after every real deadline without the
/// comparator ever having to handle a parse error.
pub fn resolve_due_date(task: &Task) -> DateTime<Utc> {
    task.due_date
        .as_deref()
        .and_then(|s| parse_due_date(s).ok())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Composite sort key:
/// 1. Uncompleted tasks first
/// 2. Then by descending resolved priority
/// 3. Then by due date (earlier first, missing/invalid last)
/// 4. Then alphabetically by title, case-insensitive
pub fn sort_key(task: &Task) -> (bool, Reverse<i64>, DateTime<Utc>, String) {
    (
        task.completed,
        Reverse(resolve_priority(task)),
        resolve_due_date(task),
        task.title.to_lowercase(),
    )
}

/// Reorders the tasks in place under the composite key. The sort is stable,
/// so tasks tied on all four keys keep their input order.
pub fn schedule_tasks(tasks: &mut [Task]) {
    tasks.sort_by_cached_key(sort_key);
}
