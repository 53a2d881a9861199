pub mod model;
pub mod service;
pub mod time;

pub use model::task::Task;
pub use service::scheduler::{resolve_due_date, resolve_priority, schedule_tasks, sort_key};
pub use time::parse_due_date;
