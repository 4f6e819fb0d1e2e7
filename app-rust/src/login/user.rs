use super::send_password_reset;
use crate::{messages, Route, ViewState};
use picture_link_sdk::{validation, AuthService};
use std::sync::Arc;

const LOGIN_TITLE: &str = "User Login";
const REGISTRATION_TITLE: &str = "User Registration";

/// Login and registration screen for regular users.
pub struct UserLogin {
    auth: Arc<dyn AuthService>,
    pub state: ViewState,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub is_password_visible: bool,
    pub is_login_mode: bool,
}

impl UserLogin {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            state: ViewState::new(LOGIN_TITLE),
            email: String::new(),
            password: String::new(),
            display_name: String::new(),
            is_password_visible: false,
            is_login_mode: true,
        }
    }

    pub async fn login(&mut self) -> Option<Route> {
        if !self.state.begin() {
            return None;
        }
        let route = match validation::validate_credentials(&self.email, &self.password) {
            Err(error) => {
                self.state.set_client_error(error);
                None
            }
            Ok(()) if self.auth.login(&self.email, &self.password).await => {
                Some(Route::UserDashboard)
            }
            Ok(()) => {
                self.state.set_error(messages::INVALID_LOGIN);
                None
            }
        };
        self.state.finish();
        route
    }

    pub async fn register(&mut self) -> Option<Route> {
        if !self.state.begin() {
            return None;
        }
        let route = match validation::validate_registration(
            &self.email,
            &self.password,
            &self.display_name,
        ) {
            Err(error) => {
                self.state.set_client_error(error);
                None
            }
            Ok(())
                if self
                    .auth
                    .register(&self.email, &self.password, &self.display_name)
                    .await =>
            {
                Some(Route::UserDashboard)
            }
            Ok(()) => {
                self.state.set_error(messages::REGISTRATION_FAILED);
                None
            }
        };
        self.state.finish();
        route
    }

    /// Switches between login and registration.
    pub fn toggle_mode(&mut self) {
        self.is_login_mode = !self.is_login_mode;
        self.state.title = if self.is_login_mode {
            LOGIN_TITLE
        } else {
            REGISTRATION_TITLE
        }
        .to_string();
        self.state.clear_error();
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
