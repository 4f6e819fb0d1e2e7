use super::api::{
    AccountResponse, OobRequestType, PasswordCredentials, SendOobCodeRequest,
    UpdateProfileRequest,
};
use crate::{
    client_utils,
    events::SessionEvents,
    opentelemetry::{trace_operation, Component},
    AuthService, ClientError, ClientResult, Role, Session,
};
use chrono::Utc;
use reqwest::Client;
use std::{
    collections::HashSet,
    sync::{PoisonError, RwLock},
};
use tokio::sync::mpsc;

const PROVIDER: &str = "identitytoolkit";

/// Email/password authentication against the Firebase Identity Toolkit REST
/// API. Holds the current [`Session`] in memory only.
pub struct AuthClient {
    api_key: String,
    base_url: String,
    client: Client,
    admin_emails: HashSet<String>,
    session: RwLock<Option<Session>>,
    events: SessionEvents,
}

#[derive(Clone, Default)]
pub struct AuthClientOptions {
    pub api_key: String,
    /// Emails granted the admin role on login. Compared case-insensitively.
    pub admin_emails: HashSet<String>,
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

impl AuthClient {
    #[must_use]
    pub fn new(options: AuthClientOptions) -> Self {
        let AuthClientOptions {
            api_key,
            admin_emails,
            base_url,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://identitytoolkit.googleapis.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let admin_emails = admin_emails
            .iter()
            .map(|email| email.trim().to_lowercase())
            .collect();

        Self {
            api_key,
            base_url,
            client,
            admin_emails,
            session: RwLock::new(None),
            events: SessionEvents::default(),
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/accounts:{method}?key={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        )
    }

    fn role_for(&self, email: &str) -> Role {
        if self.admin_emails.contains(&email.trim().to_lowercase()) {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Replace the current session and notify subscribers.
    fn set_session(&self, session: Option<Session>) {
        let mut current = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = session.clone();
        drop(current);
        self.events.notify(session.as_ref());
    }

    pub async fn try_login(&self, email: &str, password: &str) -> ClientResult<Session> {
        trace_operation(Component::Auth, "login", || async move {
            let response: AccountResponse = client_utils::send_json(
                self.client.post(self.endpoint("signInWithPassword")),
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
                PROVIDER,
            )
            .await?;

            let local_id = response.local_id.ok_or_else(|| {
                ClientError::Invariant(PROVIDER, "No localId in sign in response".to_string())
            })?;

            let now = Utc::now();
            let session = Session {
                id: local_id,
                email: email.to_string(),
                display_name: response
                    .display_name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| email.to_string()),
                role: self.role_for(email),
                created_at: now,
                last_login_at: now,
                is_active: true,
            };

            tracing::info!(user_id = %session.id, role = ?session.role, "logged in");
            self.set_session(Some(session.clone()));
            Ok(session)
        })
        .await
    }

    /// Create an account, set its display name and log in as it.
    /// Registration never grants the admin role.
    pub async fn try_register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> ClientResult<Session> {
        trace_operation(Component::Auth, "register", || async move {
            let response: AccountResponse = client_utils::send_json(
                self.client.post(self.endpoint("signUp")),
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
                PROVIDER,
            )
            .await?;

            let local_id = response.local_id.ok_or_else(|| {
                ClientError::Invariant(PROVIDER, "No localId in sign up response".to_string())
            })?;
            let id_token = response.id_token.ok_or_else(|| {
                ClientError::Invariant(PROVIDER, "No idToken in sign up response".to_string())
            })?;

            if let Err(error) = self.update_profile(&id_token, display_name).await {
                tracing::warn!(error = %error, "failed to set display name after sign up");
            }

            let now = Utc::now();
            let session = Session {
                id: local_id,
                email: email.to_string(),
                display_name: display_name.to_string(),
                role: Role::User,
                created_at: now,
                last_login_at: now,
                is_active: true,
            };

            tracing::info!(user_id = %session.id, "registered");
            self.set_session(Some(session.clone()));
            Ok(session)
        })
        .await
    }

    async fn update_profile(&self, id_token: &str, display_name: &str) -> ClientResult<()> {
        client_utils::send(
            self.client
                .post(self.endpoint("update"))
                .json(&UpdateProfileRequest {
                    id_token,
                    display_name,
                    return_secure_token: true,
                }),
        )
        .await?;
        Ok(())
    }

    pub async fn try_reset_password(&self, email: &str) -> ClientResult<()> {
        trace_operation(Component::Auth, "reset_password", || async move {
            client_utils::send(
                self.client
                    .post(self.endpoint("sendOobCode"))
                    .json(&SendOobCodeRequest {
                        request_type: OobRequestType::PasswordReset,
                        email,
                    }),
            )
            .await?;
            Ok(())
        })
        .await
    }
}

#[async_trait::async_trait]
impl AuthService for AuthClient {
    async fn login(&self, email: &str, password: &str) -> bool {
        client_utils::ok_or_log("login", self.try_login(email, password).await).is_some()
    }

    async fn register(&self, email: &str, password: &str, display_name: &str) -> bool {
        client_utils::ok_or_log(
            "register",
            self.try_register(email, password, display_name).await,
        )
        .is_some()
    }

    async fn logout(&self) -> bool {
        self.set_session(None);
        tracing::info!("logged out");
        true
    }

    async fn reset_password(&self, email: &str) -> bool {
        client_utils::ok_or_log("reset_password", self.try_reset_password(email).await).is_some()
    }

    fn current_session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Session>> {
        self.events.subscribe()
    }
}
