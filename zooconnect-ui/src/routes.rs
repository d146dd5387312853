//! JSON API handlers.

use axum::Router;
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use zooconnect::browse::{list, list_from_query};
use zooconnect::core::filter::FilterOptions;
use zooconnect::io::auth::{AuthForm, AuthMode, submit_application, submit_auth};

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/experiences", get(list_experiences))
        .route("/experiences/search", post(search_experiences))
        .route("/experiences/{id}", get(get_experience))
        .route("/experiences/{id}/apply", post(apply))
        .route("/featured", get(featured))
        .route("/media", get(media))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/experiences - filter by navigation parameters.
async fn list_experiences(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let listing = list_from_query(&state.catalog, query.as_deref().unwrap_or_default());
    Json(&listing).into_response()
}

/// POST /api/experiences/search - filter by a full `FilterOptions` body.
async fn search_experiences(
    State(state): State<AppState>,
    Json(options): Json<FilterOptions>,
) -> Response {
    let listing = list(&state.catalog, options, None);
    Json(&listing).into_response()
}

/// GET /api/experiences/{id}
async fn get_experience(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(experience) => Json(experience).into_response(),
        None => error(StatusCode::NOT_FOUND, format!("experience '{}' not found", id)),
    }
}

/// GET /api/featured
async fn featured(State(state): State<AppState>) -> Response {
    Json(state.catalog.featured()).into_response()
}

#[derive(Debug, Deserialize)]
struct MediaQuery {
    /// Client-reported downlink in Mbps, when the browser exposes one.
    downlink: Option<f64>,
}

/// GET /api/media?downlink=
async fn media(State(state): State<AppState>, Query(query): Query<MediaQuery>) -> Response {
    let source = state.media.resolve(query.downlink).await;
    Json(source).into_response()
}

/// POST /api/experiences/{id}/apply
async fn apply(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if state.catalog.get(&id).is_none() {
        return error(StatusCode::NOT_FOUND, format!("experience '{}' not found", id));
    }
    match submit_application(&state.catalog, &id, state.config.application.delay()).await {
        Ok(notice) => Json(notice).into_response(),
        Err(err) => error(StatusCode::BAD_REQUEST, format!("{:#}", err)),
    }
}

/// POST /api/auth/login
async fn login(State(state): State<AppState>, Json(form): Json<AuthForm>) -> Response {
    authenticate(&state, AuthMode::Login, &form).await
}

/// POST /api/auth/register
async fn register(State(state): State<AppState>, Json(form): Json<AuthForm>) -> Response {
    authenticate(&state, AuthMode::Register, &form).await
}

async fn authenticate(state: &AppState, mode: AuthMode, form: &AuthForm) -> Response {
    match submit_auth(mode, form, state.config.auth.delay()).await {
        Ok(notice) => {
            info!(mode = ?mode, "auth stub accepted submission");
            Json(notice).into_response()
        }
        Err(err) => {
            warn!(mode = ?mode, error = %err, "auth stub rejected submission");
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
    }
}

fn error(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
