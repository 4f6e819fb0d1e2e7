use crate::{events::SessionEvents, AuthService, Role, Session};
use chrono::Utc;
use std::{collections::VecDeque, sync::Mutex};
use tokio::sync::mpsc;

/// Result for a mocked `login` or `register` call.
#[derive(Debug, Clone)]
pub enum MockAuthResult {
    Session(Session),
    Failure,
}

impl MockAuthResult {
    /// A successful result for a session with the given email and role.
    pub fn session(email: &str, role: Role) -> Self {
        let now = Utc::now();
        Self::Session(Session {
            id: format!("uid-{email}"),
            email: email.to_string(),
            display_name: email.to_string(),
            role,
            created_at: now,
            last_login_at: now,
            is_active: true,
        })
    }
}

impl From<Session> for MockAuthResult {
    fn from(session: Session) -> Self {
        Self::Session(session)
    }
}

#[derive(Default)]
struct MockAuthState {
    login_results: VecDeque<MockAuthResult>,
    register_results: VecDeque<MockAuthResult>,
    reset_results: VecDeque<bool>,
    session: Option<Session>,
    tracked_logins: Vec<String>,
    tracked_registrations: Vec<(String, String)>,
    tracked_password_resets: Vec<String>,
    logout_count: usize,
}

/// A mock auth service that yields predefined results and tracks inputs.
/// Calls with nothing enqueued fail.
pub struct MockAuthService {
    state: Mutex<MockAuthState>,
    events: SessionEvents,
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self {
            state: Mutex::new(MockAuthState::default()),
            events: SessionEvents::default(),
        }
    }
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue the result of the next `login` call.
    pub fn enqueue_login<R: Into<MockAuthResult>>(&self, result: R) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.login_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue the result of the next `register` call.
    pub fn enqueue_register<R: Into<MockAuthResult>>(&self, result: R) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.register_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue the result of the next `reset_password` call.
    pub fn enqueue_reset_password(&self, success: bool) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset_results.push_back(success);
        drop(state);
        self
    }

    /// Start out logged in without going through `login`.
    pub fn set_session(&self, session: Option<Session>) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.session = session;
    }

    /// Emails passed to `login` so far.
    pub fn tracked_logins(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_logins.clone()
    }

    /// `(email, display_name)` pairs passed to `register` so far.
    pub fn tracked_registrations(&self) -> Vec<(String, String)> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_registrations.clone()
    }

    pub fn tracked_password_resets(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_password_resets.clone()
    }

    pub fn logout_count(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.logout_count
    }

    fn establish(&self, result: Option<MockAuthResult>) -> bool {
        match result {
            Some(MockAuthResult::Session(session)) => {
                let mut state = self.state.lock().expect("mock state poisoned");
                state.session = Some(session.clone());
                drop(state);
                self.events.notify(Some(&session));
                true
            }
            Some(MockAuthResult::Failure) | None => false,
        }
    }
}

#[async_trait::async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str, _password: &str) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_logins.push(email.to_string());
        let result = state.login_results.pop_front();
        drop(state);
        self.establish(result)
    }

    async fn register(&self, email: &str, _password: &str, display_name: &str) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state
            .tracked_registrations
            .push((email.to_string(), display_name.to_string()));
        let result = state.register_results.pop_front();
        drop(state);
        self.establish(result)
    }

    async fn logout(&self) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.session = None;
        state.logout_count += 1;
        drop(state);
        self.events.notify(None);
        true
    }

    async fn reset_password(&self, email: &str) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_password_resets.push(email.to_string());
        state.reset_results.pop_front().unwrap_or(false)
    }

    fn current_session(&self) -> Option<Session> {
        let state = self.state.lock().expect("mock state poisoned");
        state.session.clone()
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Session>> {
        self.events.subscribe()
    }
}
