//! Task endpoints of the API.

use super::ApiClient;
use crate::libs::filter::TaskFilter;
use crate::libs::task::{Priority, RecurrencePattern, Task};
use anyhow::Result;
use serde::Serialize;

const TASKS_URL: &str = "api/tasks";

/// Body for `POST /api/tasks`. Unset optional fields are omitted so the
/// server applies its own defaults.
#[derive(Serialize, Debug, Default)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

/// Body for `PATCH /api/tasks/{id}`. Partial update: only fields the user
/// supplied are serialized.
#[derive(Serialize, Debug, Default)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.is_recurring.is_none()
            && self.recurrence_pattern.is_none()
            && self.reminder_time.is_none()
    }
}

pub struct TaskApi {
    client: ApiClient,
}

impl TaskApi {
    pub fn new() -> Result<Self> {
        Ok(Self { client: ApiClient::new()? })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let query = filter.to_query();
        if query.is_empty() {
            self.client.get(TASKS_URL).await
        } else {
            self.client.get_with_query(TASKS_URL, &query).await
        }
    }

    pub async fn create(&self, task: &TaskCreate) -> Result<Task> {
        self.client.post(TASKS_URL, Some(task)).await
    }

    pub async fn update(&self, id: &str, update: &TaskUpdate) -> Result<Task> {
        self.client.patch(&format!("{}/{}", TASKS_URL, id), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}/{}", TASKS_URL, id)).await
    }
}
