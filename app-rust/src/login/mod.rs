mod admin;
mod user;

pub use admin::AdminLogin;
pub use user::UserLogin;

use crate::{messages, ViewState};
use picture_link_sdk::{validation, AuthService};

/// Sends a password reset email for `email` and reports the outcome through
/// `state`. The email is checked before the screen turns busy.
async fn send_password_reset(auth: &dyn AuthService, state: &mut ViewState, email: &str) {
    if state.is_busy {
        return;
    }
    if let Err(error) = validation::validate_email(email) {
        state.set_client_error(error);
        return;
    }

    state.begin();
    if auth.reset_password(email).await {
        state.notice = Some(messages::RESET_EMAIL_SENT.to_string());
    } else {
        state.set_error(messages::RESET_EMAIL_FAILED);
    }
    state.finish();
}
