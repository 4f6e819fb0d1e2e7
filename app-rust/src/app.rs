use crate::{AdminDashboard, AdminLogin, AppError, LoginSelection, UserDashboard, UserLogin};
use picture_link_sdk::{
    AuthClient, AuthService, FirebaseConfig, LinkService, LinkStoreClient,
};
use std::sync::Arc;

/// Holds the shared services and builds screens on top of them.
#[derive(Clone)]
pub struct PictureLinkApp {
    auth: Arc<dyn AuthService>,
    links: Arc<dyn LinkService>,
}

impl PictureLinkApp {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>, links: Arc<dyn LinkService>) -> Self {
        Self { auth, links }
    }

    #[must_use]
    pub fn from_config(config: &FirebaseConfig) -> Self {
        Self::new(
            Arc::new(AuthClient::new(config.auth_options())),
            Arc::new(LinkStoreClient::new(config.link_store_options())),
        )
    }

    /// Reads [`FirebaseConfig`] from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let config = FirebaseConfig::from_env()?;
        tracing::debug!(project_id = %config.project_id, "configured picture link app");
        Ok(Self::from_config(&config))
    }

    #[must_use]
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    #[must_use]
    pub fn links(&self) -> Arc<dyn LinkService> {
        self.links.clone()
    }

    #[must_use]
    pub fn login_selection(&self) -> LoginSelection {
        LoginSelection::default()
    }

    #[must_use]
    pub fn admin_login(&self) -> AdminLogin {
        AdminLogin::new(self.auth())
    }

    #[must_use]
    pub fn user_login(&self) -> UserLogin {
        UserLogin::new(self.auth())
    }

    #[must_use]
    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(self.auth(), self.links())
    }

    #[must_use]
    pub fn user_dashboard(&self) -> UserDashboard {
        UserDashboard::new(self.auth(), self.links())
    }
}
