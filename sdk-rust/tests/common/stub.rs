use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub const API_KEY: &str = "test-key";
pub const PROJECT_ID: &str = "demo-project";
pub const BUCKET: &str = "demo-bucket";

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub local_id: String,
    pub password: String,
    pub display_name: Option<String>,
}

#[derive(Default)]
pub struct StubState {
    pub accounts: HashMap<String, Account>,
    pub documents: HashMap<String, Value>,
    pub objects: HashMap<String, Vec<u8>>,
    pub requests: Vec<RecordedRequest>,
    /// Raw body served for collection listings instead of the documents.
    pub list_override: Option<String>,
    /// Status every request is answered with instead of being handled.
    pub forced_status: Option<StatusCode>,
    /// Body served with 200 for sign in and sign up instead of the account.
    pub account_override: Option<Value>,
}

type Shared = Arc<Mutex<StubState>>;

/// An in-process stand-in for the Identity Toolkit, Firestore and Firebase
/// Storage REST APIs.
pub struct StubBackend {
    url: String,
    state: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl StubBackend {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn auth_base_url(&self) -> String {
        format!("{}/v1", self.url)
    }

    pub fn firestore_base_url(&self) -> String {
        format!("{}/v1", self.url)
    }

    pub fn storage_base_url(&self) -> String {
        format!("{}/v0", self.url)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut StubState) -> R) -> R {
        let mut state = self.state.lock().expect("stub state poisoned");
        f(&mut state)
    }

    pub fn add_account(&self, email: &str, password: &str, display_name: Option<&str>) {
        self.with_state(|state| {
            let local_id = format!("uid-{}", state.accounts.len() + 1);
            state.accounts.insert(
                email.to_lowercase(),
                Account {
                    local_id,
                    password: password.to_string(),
                    display_name: display_name.map(ToString::to_string),
                },
            );
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.with_state(|state| state.requests.clone())
    }

    pub fn requests_to(&self, path_suffix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path.ends_with(path_suffix))
            .collect()
    }

    pub async fn stop(mut self) -> Result<(), BoxedError> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle.await.map_err(|err| Box::new(err) as BoxedError)
    }
}

pub async fn start_stub_backend() -> Result<StubBackend, BoxedError> {
    let state: Shared = Arc::new(Mutex::new(StubState::default()));

    let app = Router::new()
        .route("/v1/{action}", post(accounts))
        .route(
            "/v1/projects/{project}/databases/{database}/documents/pictureLinks",
            get(list_documents).post(create_document),
        )
        .route(
            "/v1/projects/{project}/databases/{database}/documents/pictureLinks/{id}",
            get(get_document)
                .patch(patch_document)
                .delete(delete_document),
        )
        .route("/v0/b/{bucket}/o", post(upload_object))
        .route("/v0/b/{bucket}/o/{name}", get(download_object))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| Box::new(err) as BoxedError)?;
    let addr = listener
        .local_addr()
        .map_err(|err| Box::new(err) as BoxedError)?;
    let url = format!("http://{addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });

        if let Err(err) = server.await {
            eprintln!("stub backend error: {err}");
        }
    });

    Ok(StubBackend {
        url,
        state,
        shutdown: Some(shutdown_tx),
        handle,
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "error": { "code": status.as_u16(), "message": message } })),
    )
        .into_response()
}

/// Record the request; answer with the forced status if one is set.
fn record(
    state: &mut StubState,
    method: Method,
    path: String,
    query: HashMap<String, String>,
    body: Bytes,
) -> Option<Response> {
    state.requests.push(RecordedRequest {
        method,
        path,
        query,
        body,
    });
    state
        .forced_status
        .map(|status| error(status, "forced failure"))
}

async fn accounts(
    State(state): State<Shared>,
    Path(action): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    let key = query.get("key").cloned();
    if let Some(response) = record(
        &mut state,
        Method::POST,
        format!("/v1/{action}"),
        query,
        body.clone(),
    ) {
        return response;
    }
    if key.as_deref() != Some(API_KEY) {
        return error(StatusCode::BAD_REQUEST, "API key not valid");
    }
    if matches!(action.as_str(), "accounts:signInWithPassword" | "accounts:signUp") {
        if let Some(body) = state.account_override.clone() {
            return Json(body).into_response();
        }
    }
    let Ok(body) = serde_json::from_slice::<Value>(&body) else {
        return error(StatusCode::BAD_REQUEST, "INVALID_JSON");
    };
    // Identity Toolkit treats emails case-insensitively.
    let email = body["email"].as_str().unwrap_or_default().to_lowercase();

    match action.as_str() {
        "accounts:signInWithPassword" => match state.accounts.get(&email) {
            Some(account) if Some(account.password.as_str()) == body["password"].as_str() => {
                let mut response = json!({
                    "localId": account.local_id,
                    "email": email,
                    "idToken": format!("token-{}", account.local_id),
                    "registered": true,
                });
                if let Some(display_name) = &account.display_name {
                    response["displayName"] = json!(display_name);
                }
                Json(response).into_response()
            }
            Some(_) => error(StatusCode::BAD_REQUEST, "INVALID_PASSWORD"),
            None => error(StatusCode::BAD_REQUEST, "EMAIL_NOT_FOUND"),
        },
        "accounts:signUp" => {
            if state.accounts.contains_key(&email) {
                return error(StatusCode::BAD_REQUEST, "EMAIL_EXISTS");
            }
            let local_id = format!("uid-{}", state.accounts.len() + 1);
            state.accounts.insert(
                email.clone(),
                Account {
                    local_id: local_id.clone(),
                    password: body["password"].as_str().unwrap_or_default().to_string(),
                    display_name: None,
                },
            );
            Json(json!({
                "localId": local_id,
                "email": email,
                "idToken": format!("token-{local_id}"),
            }))
            .into_response()
        }
        "accounts:update" => {
            let id_token = body["idToken"].as_str().unwrap_or_default();
            let display_name = body["displayName"].as_str().map(ToString::to_string);
            let account = state
                .accounts
                .values_mut()
                .find(|account| format!("token-{}", account.local_id) == id_token);
            match account {
                Some(account) => {
                    account.display_name.clone_from(&display_name);
                    Json(json!({ "localId": account.local_id, "displayName": display_name }))
                        .into_response()
                }
                None => error(StatusCode::BAD_REQUEST, "INVALID_ID_TOKEN"),
            }
        }
        "accounts:sendOobCode" => {
            if body["requestType"] != "PASSWORD_RESET" {
                return error(StatusCode::BAD_REQUEST, "INVALID_REQ_TYPE");
            }
            if state.accounts.contains_key(&email) {
                Json(json!({ "email": email })).into_response()
            } else {
                error(StatusCode::BAD_REQUEST, "EMAIL_NOT_FOUND")
            }
        }
        _ => error(StatusCode::NOT_FOUND, "unknown action"),
    }
}

fn document_name(project: &str, id: &str) -> String {
    format!("projects/{project}/databases/(default)/documents/pictureLinks/{id}")
}

fn stored_document(project: &str, id: &str, fields: &Value) -> Value {
    json!({
        "name": document_name(project, id),
        "fields": fields,
        "createTime": "2024-01-01T00:00:00.000000Z",
        "updateTime": "2024-01-01T00:00:00.000000Z",
    })
}

async fn list_documents(
    State(state): State<Shared>,
    Path((project, _database)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    if let Some(response) = record(
        &mut state,
        Method::GET,
        "/pictureLinks".to_string(),
        query,
        Bytes::new(),
    ) {
        return response;
    }
    if let Some(raw) = state.list_override.clone() {
        return (StatusCode::OK, raw).into_response();
    }
    if state.documents.is_empty() {
        return Json(json!({})).into_response();
    }
    let documents: Vec<Value> = state
        .documents
        .iter()
        .map(|(id, fields)| stored_document(&project, id, fields))
        .collect();
    Json(json!({ "documents": documents })).into_response()
}

async fn create_document(
    State(state): State<Shared>,
    Path((project, _database)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    let id = query.get("documentId").cloned().unwrap_or_default();
    if let Some(response) = record(
        &mut state,
        Method::POST,
        "/pictureLinks".to_string(),
        query,
        body.clone(),
    ) {
        return response;
    }
    let Ok(document) = serde_json::from_slice::<Value>(&body) else {
        return error(StatusCode::BAD_REQUEST, "Invalid JSON payload");
    };
    if id.is_empty() {
        return error(StatusCode::BAD_REQUEST, "documentId is required");
    }
    if state.documents.contains_key(&id) {
        return error(StatusCode::CONFLICT, "Document already exists");
    }
    let fields = document["fields"].clone();
    state.documents.insert(id.clone(), fields.clone());
    Json(stored_document(&project, &id, &fields)).into_response()
}

async fn get_document(
    State(state): State<Shared>,
    Path((project, _database, id)): Path<(String, String, String)>,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    if let Some(response) = record(
        &mut state,
        Method::GET,
        format!("/pictureLinks/{id}"),
        HashMap::new(),
        Bytes::new(),
    ) {
        return response;
    }
    match state.documents.get(&id) {
        Some(fields) => Json(stored_document(&project, &id, fields)).into_response(),
        None => error(StatusCode::NOT_FOUND, "Document not found"),
    }
}

async fn patch_document(
    State(state): State<Shared>,
    Path((project, _database, id)): Path<(String, String, String)>,
    body: Bytes,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    if let Some(response) = record(
        &mut state,
        Method::PATCH,
        format!("/pictureLinks/{id}"),
        HashMap::new(),
        body.clone(),
    ) {
        return response;
    }
    let Ok(document) = serde_json::from_slice::<Value>(&body) else {
        return error(StatusCode::BAD_REQUEST, "Invalid JSON payload");
    };
    let fields = document["fields"].clone();
    state.documents.insert(id.clone(), fields.clone());
    Json(stored_document(&project, &id, &fields)).into_response()
}

async fn delete_document(
    State(state): State<Shared>,
    Path((_project, _database, id)): Path<(String, String, String)>,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    if let Some(response) = record(
        &mut state,
        Method::DELETE,
        format!("/pictureLinks/{id}"),
        HashMap::new(),
        Bytes::new(),
    ) {
        return response;
    }
    state.documents.remove(&id);
    Json(json!({})).into_response()
}

async fn upload_object(
    State(state): State<Shared>,
    Path(bucket): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    let name = query.get("name").cloned().unwrap_or_default();
    if let Some(response) = record(
        &mut state,
        Method::POST,
        format!("/b/{bucket}/o"),
        query,
        body.clone(),
    ) {
        return response;
    }
    state.objects.insert(name.clone(), body.to_vec());
    Json(json!({
        "name": name,
        "bucket": bucket,
        "size": body.len().to_string(),
        "downloadTokens": "token-1,token-2",
    }))
    .into_response()
}

async fn download_object(
    State(state): State<Shared>,
    Path((bucket, name)): Path<(String, String)>,
) -> Response {
    let mut state = state.lock().expect("stub state poisoned");
    if let Some(response) = record(
        &mut state,
        Method::GET,
        format!("/b/{bucket}/o/{name}"),
        HashMap::new(),
        Bytes::new(),
    ) {
        return response;
    }
    match state.objects.get(&name) {
        Some(bytes) => (StatusCode::OK, bytes.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Not Found"),
    }
}
