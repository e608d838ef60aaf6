//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Every `Message` variant
//! is converted to its terminal representation here, which keeps wording
//! consistent and makes the text trivially greppable.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === AUTH MESSAGES ===
            Message::SignupSuccess(email) => format!("Account created for {}. You are now signed in.", email),
            Message::SigninSuccess(email) => format!("Signed in as {}", email),
            Message::SignoutSuccess => "Signed out".to_string(),
            Message::SignoutNotifyFailed(err) => format!("Logout notification failed: {}", err),
            Message::SignupFailed(detail) => format!("Failed to create account: {}", detail),
            Message::SigninFailed(detail) => format!("Failed to sign in: {}", detail),
            Message::InvalidCredentials => "Invalid email or password".to_string(),
            Message::EmailAlreadyRegistered => "Email already registered".to_string(),
            Message::NotAuthenticated(command) => {
                format!("You are not signed in. Run 'taskmate signin' first, then retry 'taskmate {}'", command)
            }
            Message::AuthStatusSignedIn => "Signed in (session token present)".to_string(),
            Message::AuthStatusSignedOut => "Not signed in".to_string(),

            // === VALIDATION MESSAGES ===
            Message::EmailRequired => "Email is required".to_string(),
            Message::EmailInvalid => "Please enter a valid email address".to_string(),
            Message::PasswordRequired => "Password is required".to_string(),
            Message::PasswordTooShort(min) => format!("Password must be at least {} characters long", min),
            Message::PasswordMismatch => "Passwords do not match".to_string(),
            Message::TitleRequired => "Title is required".to_string(),
            Message::TitleTooLong(max) => format!("Title must be less than {} characters", max),
            Message::DescriptionTooLong(max) => format!("Description must be less than {} characters", max),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TaskCreateFailed(detail) => format!("Failed to create task: {}", detail),
            Message::TaskUpdateFailed(detail) => format!("Failed to update task: {}", detail),
            Message::TaskDeleteFailed(detail) => format!("Failed to delete task: {}", detail),
            Message::TaskFetchFailed(detail) => format!("Failed to fetch tasks: {}", detail),
            Message::NoChangesRequested => "No changes requested".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === API MESSAGES ===
            Message::ApiConnectionFailed => "Failed to connect to the task server".to_string(),
            Message::ApiErrorGeneric => "An error occurred".to_string(),
            Message::ApiValidationError => "Validation error".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigServerSection => "Task server settings".to_string(),

            // === PROMPTS ===
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password (at least 8 characters)".to_string(),
            Message::PromptPasswordConfirm => "Confirm password".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptServerApiUrl => "Enter the task server API URL".to_string(),
        };
        write!(f, "{}", text)
    }
}
