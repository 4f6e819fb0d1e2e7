use crate::{ClientError, ClientResult};
use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Send a request and turn any non-success status into
/// [`ClientError::StatusCode`] carrying the response body.
pub async fn send(request: RequestBuilder) -> ClientResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// Send a request and parse the JSON response body.
/// Parse failures are reported as invariants of `component`.
pub async fn send_for_json<R: DeserializeOwned>(
    request: RequestBuilder,
    component: &'static str,
) -> ClientResult<R> {
    let body = send(request).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        ClientError::Invariant(component, format!("Failed to parse response body: {e}"))
    })
}

/// Create a JSON request, parse the response.
/// Throws error on non-success status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    request: RequestBuilder,
    data: &T,
    component: &'static str,
) -> ClientResult<R> {
    send_for_json(request.json(data), component).await
}

/// Collapse a structured result into the value-or-nothing form exposed to
/// application code, logging the reason for the failure.
pub fn ok_or_log<T>(operation: &'static str, result: ClientResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(operation, error = %error, "picture link operation failed");
            None
        }
    }
}
