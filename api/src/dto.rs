use schedly_core::Task;
use serde::{Deserialize, Serialize};

/// Wire shape of a task.
///
/// The main API stores Mongo documents, so identifiers travel under the
/// underscore-prefixed names the front-end already uses (`_id`, `_listId`)
/// and the remaining fields are camelCase. The plain spellings are accepted
/// on input too; responses always emit the prefixed/camelCase form so the
/// caller gets back the shape it sent. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskPayload {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "_listId", alias = "listId")]
    pub list_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: i64,
    #[serde(rename = "priorityLabel", default)]
    pub priority_label: Option<String>,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Task {
            id: payload.id,
            title: payload.title,
            list_id: payload.list_id,
            completed: payload.completed,
            priority: payload.priority,
            priority_label: payload.priority_label,
            due_date: payload.due_date,
        }
    }
}

impl From<Task> for TaskPayload {
    fn from(task: Task) -> Self {
        TaskPayload {
            id: task.id,
            title: task.title,
            list_id: task.list_id,
            completed: task.completed,
            priority: task.priority,
            priority_label: task.priority_label,
            due_date: task.due_date,
        }
    }
}
