//! Task model and in-memory collection state.
//!
//! The server is the system of record; `TaskCollection` only mirrors what
//! the server has acknowledged. List fetches replace the collection
//! wholesale, create prepends the returned task, update swaps the matching
//! entry in place, delete removes it. There are no optimistic mutations: a
//! failed request leaves the collection untouched.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl Display for RecurrencePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecurrencePattern::Daily => write!(f, "daily"),
            RecurrencePattern::Weekly => write!(f, "weekly"),
            RecurrencePattern::Monthly => write!(f, "monthly"),
        }
    }
}

/// A task as returned by the server. Timestamps are kept as the RFC 3339
/// strings the server sends; this client never computes with them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub reminder_time: Option<String>,
}

/// The task list for the current session.
#[derive(Debug, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Replaces the entire collection with server results. No merging.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Prepends a server-acknowledged task. The server owns generated
    /// fields (id, timestamps), so the task is stored as received.
    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Replaces the entry with a matching id by the server's returned
    /// representation, keeping its position. Returns false when the id is
    /// not present.
    pub fn apply_update(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(entry) => {
                *entry = task;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id after server confirmation.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
