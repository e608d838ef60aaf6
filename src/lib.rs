//! # Taskmate
//!
//! A command-line client for a personal task management API.
//!
//! ## Features
//!
//! - **Accounts**: Sign up, sign in, sign out against the task server
//! - **Session Persistence**: Bearer token mirrored in a local cookie file
//! - **Task Management**: Create, edit, complete, and delete tasks
//! - **Filtering & Sorting**: Search, status/priority/due-date filters,
//!   sortable listings
//! - **Advanced Fields**: Priorities, due dates, recurrence, reminders
//!
//! The server is the system of record; this client validates input, talks
//! JSON over HTTP, and renders what the server acknowledges.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
