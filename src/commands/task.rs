//! Task management commands.
//!
//! Every subcommand works the same way the dashboard does: fetch the
//! current list into a [`TaskCollection`], issue the mutation, apply the
//! server's acknowledged result to the collection, render the result. A
//! failed request leaves the collection as fetched and reports the error;
//! nothing is mutated optimistically.

use crate::api::tasks::{TaskCreate, TaskUpdate};
use crate::api::{error_detail, ApiError, TaskApi};
use crate::libs::filter::{due_bucket, SortField, SortOrder, StatusFilter, TaskFilter};
use crate::libs::messages::Message;
use crate::libs::task::{Priority, RecurrencePattern, Task, TaskCollection};
use crate::libs::validate;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use reqwest::StatusCode;

#[derive(Debug, Subcommand)]
pub enum TaskCommands {
    #[command(about = "List tasks with optional filtering and sorting")]
    Ls(LsArgs),
    #[command(about = "Show one task in detail")]
    Show(ShowArgs),
    #[command(about = "Create a new task")]
    New(NewArgs),
    #[command(about = "Edit fields of an existing task")]
    Edit(EditArgs),
    #[command(about = "Mark a task as completed")]
    Done(DoneArgs),
    #[command(about = "Delete a task")]
    Rm(RmArgs),
}

#[derive(Debug, Args)]
pub struct LsArgs {
    /// Keyword search in title and description
    #[arg(short, long)]
    search: Option<String>,

    /// Filter by completion status
    #[arg(long, value_enum)]
    status: Option<StatusFilter>,

    /// Filter by priority level
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Due date bucket: today, overdue, upcoming, or before:/after:/on:<date>
    #[arg(short, long)]
    due: Option<String>,

    /// Sort field
    #[arg(long, value_enum)]
    sort_by: Option<SortField>,

    /// Sort direction
    #[arg(short, long, value_enum)]
    order: Option<SortOrder>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Identifier of the task to show
    #[arg(required = true)]
    id: String,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Task title; prompted interactively when omitted
    title: Option<String>,

    /// Task description
    #[arg(long)]
    description: Option<String>,

    /// Priority level (server defaults to medium)
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Due date/time, RFC 3339
    #[arg(short, long)]
    due: Option<String>,

    /// Mark the task as recurring
    #[arg(short, long)]
    recurring: bool,

    /// Recurrence pattern; implies --recurring
    #[arg(long, value_enum)]
    pattern: Option<RecurrencePattern>,

    /// Reminder time, RFC 3339
    #[arg(long)]
    reminder: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Identifier of the task to edit
    #[arg(required = true)]
    id: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    completed: Option<bool>,

    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    #[arg(short, long)]
    due: Option<String>,

    #[arg(short, long)]
    recurring: Option<bool>,

    #[arg(long, value_enum)]
    pattern: Option<RecurrencePattern>,

    #[arg(long)]
    reminder: Option<String>,
}

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Identifier of the task to complete
    #[arg(required = true)]
    id: String,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Identifier of the task to delete
    #[arg(required = true)]
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(command: TaskCommands) -> Result<()> {
    match command {
        TaskCommands::Ls(args) => ls(args).await,
        TaskCommands::Show(args) => show(args).await,
        TaskCommands::New(args) => new(args).await,
        TaskCommands::Edit(args) => edit(args).await,
        TaskCommands::Done(args) => done(args).await,
        TaskCommands::Rm(args) => rm(args).await,
    }
}

async fn ls(args: LsArgs) -> Result<()> {
    let filter = TaskFilter {
        search: args.search,
        status: args.status,
        priority: args.priority,
        due_date: args.due.map(|d| due_bucket(&d)),
        sort_by: args.sort_by,
        sort_order: args.order,
    };

    let api = TaskApi::new()?;
    let mut collection = TaskCollection::new();
    collection.replace_all(fetch_tasks(&api, &filter).await?);

    if collection.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }
    View::tasks(collection.tasks())
}

async fn show(args: ShowArgs) -> Result<()> {
    let api = TaskApi::new()?;
    let mut collection = TaskCollection::new();
    collection.replace_all(fetch_tasks(&api, &TaskFilter::default()).await?);

    match collection.get(&args.id) {
        Some(task) => View::task(task),
        None => Err(msg_error_anyhow!(Message::TaskNotFound(args.id))),
    }
}

async fn new(args: NewArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let title = match validate::title(&title) {
        Ok(title) => title,
        Err(msg) => msg_bail_anyhow!(msg),
    };

    let description = match args.description {
        Some(description) => Some(description),
        None => {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            (!input.is_empty()).then_some(input)
        }
    };
    if let Some(description) = &description {
        if let Err(msg) = validate::description(description) {
            msg_bail_anyhow!(msg);
        }
    }

    let is_recurring = args.recurring || args.pattern.is_some();
    let request = TaskCreate {
        title,
        description: description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()),
        priority: args.priority,
        due_date: args.due,
        is_recurring: is_recurring.then_some(true),
        recurrence_pattern: args.pattern,
        reminder_time: args.reminder,
    };

    let api = TaskApi::new()?;
    let mut collection = TaskCollection::new();
    collection.replace_all(fetch_tasks(&api, &TaskFilter::default()).await?);

    match api.create(&request).await {
        Ok(task) => {
            msg_success!(Message::TaskCreated(task.title.clone()));
            collection.insert(task);
            View::tasks(collection.tasks())
        }
        Err(err) => Err(msg_error_anyhow!(Message::TaskCreateFailed(error_detail(&err)))),
    }
}

async fn edit(args: EditArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => match validate::title(&title) {
            Ok(title) => Some(title),
            Err(msg) => msg_bail_anyhow!(msg),
        },
        None => None,
    };
    if let Some(description) = &args.description {
        if let Err(msg) = validate::description(description) {
            msg_bail_anyhow!(msg);
        }
    }

    let update = TaskUpdate {
        title,
        description: args.description,
        completed: args.completed,
        priority: args.priority,
        due_date: args.due,
        is_recurring: args.recurring.or(args.pattern.map(|_| true)),
        recurrence_pattern: args.pattern,
        reminder_time: args.reminder,
    };
    if update.is_empty() {
        msg_bail_anyhow!(Message::NoChangesRequested);
    }

    apply_update(&args.id, &update).await
}

async fn done(args: DoneArgs) -> Result<()> {
    let update = TaskUpdate {
        completed: Some(true),
        ..Default::default()
    };
    apply_update(&args.id, &update).await
}

async fn rm(args: RmArgs) -> Result<()> {
    let api = TaskApi::new()?;
    let mut collection = TaskCollection::new();
    collection.replace_all(fetch_tasks(&api, &TaskFilter::default()).await?);

    let title = match collection.get(&args.id) {
        Some(task) => task.title.clone(),
        None => msg_bail_anyhow!(Message::TaskNotFound(args.id)),
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match api.delete(&args.id).await {
        Ok(()) => {
            collection.remove(&args.id);
            msg_success!(Message::TaskDeleted(args.id));
            if !collection.is_empty() {
                View::tasks(collection.tasks())?;
            }
            Ok(())
        }
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(api_err) if api_err.status == StatusCode::NOT_FOUND => {
                Err(msg_error_anyhow!(Message::TaskNotFound(args.id)))
            }
            _ => Err(msg_error_anyhow!(Message::TaskDeleteFailed(error_detail(&err)))),
        },
    }
}

/// Shared PATCH path for `edit` and `done`.
async fn apply_update(id: &str, update: &TaskUpdate) -> Result<()> {
    let api = TaskApi::new()?;
    let mut collection = TaskCollection::new();
    collection.replace_all(fetch_tasks(&api, &TaskFilter::default()).await?);

    match api.update(id, update).await {
        Ok(task) => {
            msg_success!(Message::TaskUpdated(task.title.clone()));
            collection.apply_update(task);
            View::tasks(collection.tasks())
        }
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(api_err) if api_err.status == StatusCode::NOT_FOUND => {
                Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())))
            }
            _ => Err(msg_error_anyhow!(Message::TaskUpdateFailed(error_detail(&err)))),
        },
    }
}

async fn fetch_tasks(api: &TaskApi, filter: &TaskFilter) -> Result<Vec<Task>> {
    api.list(filter)
        .await
        .map_err(|err| msg_error_anyhow!(Message::TaskFetchFailed(error_detail(&err))))
}
