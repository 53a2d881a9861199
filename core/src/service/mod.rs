pub mod scheduler;

// Re-export
pub use scheduler::{resolve_due_date, resolve_priority, schedule_tasks, sort_key};
