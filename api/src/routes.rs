use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use schedly_core::{schedule_tasks, Task};

use crate::dto::TaskPayload;

#[derive(Deserialize, Debug)]
pub struct ScheduleRequest {
    pub tasks: Vec<TaskPayload>,
}

#[derive(Serialize, Debug)]
pub struct ScheduleResponse {
    pub scheduled: Vec<TaskPayload>,
}

pub fn router() -> Router {
    Router::new().route("/api/schedule", post(schedule))
}

// Pure plumbing: map wire -> core, sort, map back. Structurally invalid
// payloads never reach the core, the Json extractor rejects them first.
async fn schedule(Json(request): Json<ScheduleRequest>) -> Json<ScheduleResponse> {
    let mut tasks: Vec<Task> = request.tasks.into_iter().map(Task::from).collect();
    debug!(count = tasks.len(), "scheduling tasks");
    schedule_tasks(&mut tasks);
    let scheduled = tasks.into_iter().map(TaskPayload::from).collect();
    Json(ScheduleResponse { scheduled })
}
