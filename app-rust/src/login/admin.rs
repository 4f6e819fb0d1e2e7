use super::send_password_reset;
use crate::{messages, Route, ViewState};
use picture_link_sdk::{validation, AuthService};
use std::sync::Arc;

/// Login screen for administrators. Only sessions with the admin role get
/// through; anyone else is logged out again.
pub struct AdminLogin {
    auth: Arc<dyn AuthService>,
    pub state: ViewState,
    pub email: String,
    pub password: String,
    pub is_password_visible: bool,
}

impl AdminLogin {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            state: ViewState::new("Admin Login"),
            email: String::new(),
            password: String::new(),
            is_password_visible: false,
        }
    }

    /// Returns [`Route::AdminDashboard`] once an admin is logged in.
    pub async fn login(&mut self) -> Option<Route> {
        if !self.state.begin() {
            return None;
        }
        let route = self.attempt_login().await;
        self.state.finish();
        route
    }

    async fn attempt_login(&mut self) -> Option<Route> {
        if let Err(error) = validation::validate_credentials(&self.email, &self.password) {
            self.state.set_client_error(error);
            return None;
        }

        if !self.auth.login(&self.email, &self.password).await {
            self.state.set_error(messages::INVALID_LOGIN);
            return None;
        }

        if self
            .auth
            .current_session()
            .is_some_and(|session| session.is_admin())
        {
            return Some(Route::AdminDashboard);
        }

        tracing::info!(email = %self.email, "rejected admin login without admin role");
        self.state.set_error(messages::NOT_ADMIN);
        self.auth.logout().await;
        None
    }

    pub async fn forgot_password(&mut self) {
        send_password_reset(self.auth.as_ref(), &mut self.state, &self.email).await;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.is_password_visible = !self.is_password_visible;
    }

    #[must_use]
    pub fn go_back(&self) -> Route {
        Route::Back
    }
}
