use serde::{Deserialize, Serialize};

/// A task as handed over by the task-manager API.
///
/// `id` and `list_id` are references to documents owned by the main API;
/// the scheduler carries them through untouched and never interprets them.
/// `due_date` stays a raw string here: parsing happens at ordering time so
/// a malformed value degrades that one task instead of failing the batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub list_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub priority_label: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    pub fn new(title: String, list_id: String) -> Self {
        Self {
            id: None,
            title,
            list_id,
            completed: false,
            priority: 0,
            priority_label: None,
            due_date: None,
        }
    }
}
