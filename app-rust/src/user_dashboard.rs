use crate::{messages, Route, ViewState};
use picture_link_sdk::{validation, AuthService, LinkService, PictureLink, Session};
use std::sync::Arc;

/// Read-only list of active picture links for regular users.
pub struct UserDashboard {
    auth: Arc<dyn AuthService>,
    links: Arc<dyn LinkService>,
    pub state: ViewState,
    pub picture_links: Vec<PictureLink>,
    pub current_session: Option<Session>,
    pub is_refreshing: bool,
}

impl UserDashboard {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>, links: Arc<dyn LinkService>) -> Self {
        Self {
            auth,
            links,
            state: ViewState::new("Picture Links"),
            picture_links: Vec::new(),
            current_session: None,
            is_refreshing: false,
        }
    }

    pub async fn initialize(&mut self) {
        self.current_session = self.auth.current_session();
        self.load().await;
    }

    pub async fn load(&mut self) {
        if !self.state.begin() {
            return;
        }
        self.picture_links = self.links.list_all().await;
        self.state.finish();
    }

    /// Pull-to-refresh. Guarded by `is_refreshing` instead of the busy flag.
    pub async fn refresh(&mut self) {
        if self.is_refreshing {
            return;
        }
        self.is_refreshing = true;
        self.state.clear_error();
        self.picture_links = self.links.list_all().await;
        self.is_refreshing = false;
    }

    /// Turns a link's target into a URL the browser can open. Targets
    /// without a scheme are retried with `https://`. Returns `None` for an
    /// empty target and for targets that still fail to parse.
    pub fn resolve_link(&mut self, url: &str) -> Option<String> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        if validation::is_absolute_url(url) {
            return Some(url.to_string());
        }
        let prefixed = format!("https://{url}");
        if validation::is_absolute_url(&prefixed) {
            return Some(prefixed);
        }
        self.state.set_error(messages::INVALID_URL_FORMAT);
        None
    }

    pub async fn logout(&mut self) -> Route {
        self.auth.logout().await;
        self.current_session = None;
        Route::LoginSelection
    }
}
