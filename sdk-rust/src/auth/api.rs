//! Request and response bodies of the Identity Toolkit `accounts` REST API.
use serde::{Deserialize, Serialize};

/// Body of `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// Whether to return an ID and refresh token. Should always be true.
    pub return_secure_token: bool,
}

/// Response of `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// The uid of the authenticated user.
    pub local_id: Option<String>,
    pub email: Option<String>,
    /// The display name for the account. Only returned by sign in.
    pub display_name: Option<String>,
    /// An Identity Platform ID token for the authenticated user.
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
    /// The number of seconds in which the ID token expires.
    pub expires_in: Option<String>,
    /// Whether the email is for an existing account.
    pub registered: Option<bool>,
}

/// Body of `accounts:update` when setting the profile display name.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest<'a> {
    pub id_token: &'a str,
    pub display_name: &'a str,
    pub return_secure_token: bool,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OobRequestType {
    PasswordReset,
}

/// Body of `accounts:sendOobCode`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendOobCodeRequest<'a> {
    pub request_type: OobRequestType,
    pub email: &'a str,
}
