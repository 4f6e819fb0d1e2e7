use crate::ViewState;
use serde::Serialize;

/// Where the shell should go after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    LoginSelection,
    AdminLogin,
    UserLogin,
    AdminDashboard,
    UserDashboard,
    /// Pop back to the previous screen.
    Back,
}

/// The start screen: pick admin or user login.
#[derive(Debug, Clone)]
pub struct LoginSelection {
    pub state: ViewState,
}

impl Default for LoginSelection {
    fn default() -> Self {
        Self {
            state: ViewState::new("Picture Link Viewer"),
        }
    }
}

impl LoginSelection {
    #[must_use]
    pub fn go_to_admin_login(&self) -> Route {
        Route::AdminLogin
    }

    #[must_use]
    pub fn go_to_user_login(&self) -> Route {
        Route::UserLogin
    }
}
