//! HTTP routes for the address book.
//!
//! | Method + path | Body | Response |
//! |---|---|---|
//! | `GET /` | none | health check |
//! | `POST /create` | `[{name, phone, email}]` | `201` + created contacts |
//! | `PUT /update` | `[{id, name?, phone?, email?}]` | updated contacts (unknown ids omitted) |
//! | `DELETE /delete` | `[id, ...]` | `{"deleted": n}` |
//! | `POST /search` | `{"query": "..."}` | matching contacts |
//! | `GET /contacts/{id}` | none | one contact or `404` |
//! | `GET /stats` | none | store size and counters |
//!
//! Request bodies are validated by the `Json` extractor: malformed JSON,
//! invalid email syntax and malformed identifiers are rejected before the
//! service is called.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::ContactId;
use crate::error::ServiceError;
use crate::models::{ContactRef, ContactUpdate, NewContact, SearchRequest};
use crate::services::{ContactService, StoreStats};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    service: Arc<dyn ContactService>,
}

/// Build the router with all routes and middleware attached.
pub fn router(service: Arc<dyn ContactService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_health))
        .route("/create", post(handle_create))
        .route("/update", put(handle_update))
        .route("/delete", axum::routing::delete(handle_delete))
        .route("/search", post(handle_search))
        .route("/contacts/{id}", get(handle_get_contact))
        .route("/stats", get(handle_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { service })
}

/// Bind `bind_addr` and serve until the process is terminated.
pub async fn run_http_server(
    service: Arc<dyn ContactService>,
    bind_addr: SocketAddr,
) -> anyhow::Result<()> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Address book listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

/// Constructs a 404 Not Found error.
fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidQuery(message) => bad_request(message),
            ServiceError::Validation(e) => bad_request(e.to_string()),
        }
    }
}

// ============ GET / ============

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Address Book service is running",
    })
}

// ============ POST /create ============

async fn handle_create(
    State(state): State<AppState>,
    Json(contacts): Json<Vec<NewContact>>,
) -> (StatusCode, Json<Vec<ContactRef>>) {
    let created = state.service.create_contacts(contacts).await;
    (StatusCode::CREATED, Json(created))
}

// ============ PUT /update ============

async fn handle_update(
    State(state): State<AppState>,
    Json(updates): Json<Vec<ContactUpdate>>,
) -> Json<Vec<ContactRef>> {
    Json(state.service.update_contacts(updates).await)
}

// ============ DELETE /delete ============

#[derive(Serialize)]
struct DeleteResponse {
    deleted: usize,
}

async fn handle_delete(
    State(state): State<AppState>,
    Json(ids): Json<Vec<ContactId>>,
) -> Json<DeleteResponse> {
    let deleted = state.service.delete_contacts(ids).await;
    Json(DeleteResponse { deleted })
}

// ============ POST /search ============

async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<ContactRef>>, AppError> {
    let matches = state.service.search_contacts(&request.query).await?;
    Ok(Json(matches))
}

// ============ GET /contacts/{id} ============

async fn handle_get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContactRef>, AppError> {
    let id = ContactId::parse(&id).map_err(ServiceError::from)?;
    state
        .service
        .get_contact(&id)
        .await
        .map(Json)
        .ok_or_else(|| not_found(format!("Contact not found: {}", id)))
}

// ============ GET /stats ============

async fn handle_stats(State(state): State<AppState>) -> Json<StoreStats> {
    Json(state.service.stats().await)
}
