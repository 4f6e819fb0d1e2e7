//! Client-side preconditions checked before any request is sent.
//!
//! Every failure is a [`ClientError::InvalidInput`] whose message can be
//! shown to the user directly.

use crate::{ClientError, ClientResult, PictureLink};
use reqwest::Url;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const MISSING_LINK_FIELDS: &str = "Please fill in all required fields.";
pub const MISSING_LINK_FIELDS_OR_IMAGE: &str =
    "Please fill in all required fields and select an image.";
pub const INVALID_TARGET_URL: &str = "Please enter a valid URL.";
pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";
pub const MISSING_REGISTRATION_FIELDS: &str = "Please fill in all fields.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";
pub const MISSING_EMAIL: &str = "Please enter your email address first.";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn invalid(message: &str) -> ClientError {
    ClientError::InvalidInput(message.to_string())
}

/// Whether `value` parses as an absolute URL.
#[must_use]
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value.trim()).is_ok()
}

/// Fields a picture link editor collects before a link is created or
/// updated.
#[derive(Debug, Clone, Copy)]
pub struct LinkFields<'a> {
    pub title: &'a str,
    pub button_label: &'a str,
    pub target_url: &'a str,
}

impl<'a> From<&'a PictureLink> for LinkFields<'a> {
    fn from(link: &'a PictureLink) -> Self {
        Self {
            title: &link.title,
            button_label: &link.button_label,
            target_url: &link.target_url,
        }
    }
}

pub fn validate_link_fields(fields: LinkFields<'_>) -> ClientResult<()> {
    if is_blank(fields.title) || is_blank(fields.button_label) || is_blank(fields.target_url) {
        return Err(invalid(MISSING_LINK_FIELDS));
    }
    if !is_absolute_url(fields.target_url) {
        return Err(invalid(INVALID_TARGET_URL));
    }
    Ok(())
}

/// New links additionally need an image picked from the device.
pub fn validate_new_link_fields(fields: LinkFields<'_>, image_path: &str) -> ClientResult<()> {
    if is_blank(fields.title)
        || is_blank(fields.button_label)
        || is_blank(fields.target_url)
        || is_blank(image_path)
    {
        return Err(invalid(MISSING_LINK_FIELDS_OR_IMAGE));
    }
    validate_link_fields(fields)
}

pub fn validate_link(link: &PictureLink) -> ClientResult<()> {
    validate_link_fields(link.into())
}

pub fn validate_credentials(email: &str, password: &str) -> ClientResult<()> {
    if is_blank(email) || is_blank(password) {
        return Err(invalid(MISSING_CREDENTIALS));
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str, display_name: &str) -> ClientResult<()> {
    if is_blank(email) || is_blank(password) || is_blank(display_name) {
        return Err(invalid(MISSING_REGISTRATION_FIELDS));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(invalid(PASSWORD_TOO_SHORT));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> ClientResult<()> {
    if is_blank(email) {
        return Err(invalid(MISSING_EMAIL));
    }
    Ok(())
}
