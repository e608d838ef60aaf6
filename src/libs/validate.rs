//! Client-side form validation.
//!
//! Mirrors the server's rules so obviously bad input is rejected before any
//! network call. Each check returns the field-specific `Message` used for
//! inline error display; the server remains the enforcement boundary.

use super::messages::Message;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const TITLE_MAX_LEN: usize = 1000;
pub const DESCRIPTION_MAX_LEN: usize = 10000;

/// Validates an email address: one `@`, non-empty local part, domain with a
/// dot, no whitespace anywhere.
pub fn email(value: &str) -> Result<(), Message> {
    if value.is_empty() {
        return Err(Message::EmailRequired);
    }
    if !is_valid_email(value) {
        return Err(Message::EmailInvalid);
    }
    Ok(())
}

pub fn password(value: &str) -> Result<(), Message> {
    if value.is_empty() {
        return Err(Message::PasswordRequired);
    }
    if value.len() < PASSWORD_MIN_LEN {
        return Err(Message::PasswordTooShort(PASSWORD_MIN_LEN));
    }
    Ok(())
}

pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), Message> {
    if password != confirmation {
        return Err(Message::PasswordMismatch);
    }
    Ok(())
}

/// Validates a task title and returns its trimmed form, which is what gets
/// sent to the server.
pub fn title(value: &str) -> Result<String, Message> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Message::TitleRequired);
    }
    if value.len() > TITLE_MAX_LEN {
        return Err(Message::TitleTooLong(TITLE_MAX_LEN));
    }
    Ok(trimmed.to_string())
}

pub fn description(value: &str) -> Result<(), Message> {
    if value.len() > DESCRIPTION_MAX_LEN {
        return Err(Message::DescriptionTooLong(DESCRIPTION_MAX_LEN));
    }
    Ok(())
}

fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(3, '@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .rsplit_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        _ => false,
    }
}
