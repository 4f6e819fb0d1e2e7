//! Messages shown to the user. Validation messages live in
//! [`picture_link_sdk::validation`] and surface through the same
//! [`ViewState`](crate::ViewState) error slot.

pub const INVALID_LOGIN: &str = "Invalid email or password.";
pub const NOT_ADMIN: &str = "You do not have admin privileges.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Email may already be in use.";
pub const RESET_EMAIL_FAILED: &str = "Failed to send password reset email.";
pub const RESET_EMAIL_SENT: &str = "Password reset email sent successfully.";

pub const UPLOAD_FAILED: &str = "Failed to upload image.";
pub const CREATE_FAILED: &str = "Failed to create picture link.";
pub const UPDATE_FAILED: &str = "Failed to update picture link.";
pub const DELETE_FAILED: &str = "Failed to delete picture link.";
pub const LINK_CREATED: &str = "Picture link created successfully!";
pub const LINK_UPDATED: &str = "Picture link updated successfully!";
pub const LINK_DELETED: &str = "Picture link deleted successfully!";

pub const INVALID_URL_FORMAT: &str = "Invalid URL format.";

/// Recorded as `created_by` when no session is known.
pub const UNKNOWN_AUTHOR: &str = "Unknown";
