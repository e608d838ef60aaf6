//! Filter and sort parameters for task listing.
//!
//! Pure translation of UI selections into query parameters. The one
//! invariant: absent or empty selections are omitted from the outgoing
//! query, never sent as empty strings. Values themselves are not validated
//! here; malformed filters are the server's to reject.

use super::task::Priority;
use chrono::Local;
use clap::ValueEnum;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    DueDate,
    Priority,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::Pending => write!(f, "pending"),
            StatusFilter::Completed => write!(f, "completed"),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortField::DueDate => write!(f, "due_date"),
            SortField::Priority => write!(f, "priority"),
            SortField::Title => write!(f, "title"),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Optional filter/sort selections for one list request.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl TaskFilter {
    /// Builds the query pairs for `GET /api/tasks`, skipping every unset or
    /// empty selection.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(priority) = &self.priority {
            query.push(("priority", priority.to_string()));
        }
        if let Some(due) = self.due_date.as_deref().filter(|s| !s.is_empty()) {
            query.push(("due_date", due.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sort_by", sort_by.to_string()));
        }
        if let Some(order) = &self.sort_order {
            query.push(("sort_order", order.to_string()));
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

/// Expands the due-date bucket shorthands against today's date. `today`,
/// `overdue` and `upcoming` become `on:`/`before:`/`after:` buckets; any
/// other value is passed through verbatim for the server to interpret.
pub fn due_bucket(value: &str) -> String {
    let today = Local::now().date_naive().format("%Y-%m-%d");
    match value {
        "today" => format!("on:{}", today),
        "overdue" => format!("before:{}", today),
        "upcoming" => format!("after:{}", today),
        other => other.to_string(),
    }
}
