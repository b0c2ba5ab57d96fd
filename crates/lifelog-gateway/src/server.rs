//! HTTP server - thin glue between the web and the fact store.
//!
//! Handlers translate request bodies into store calls. Mutations go through
//! the store handle's queue and answer `{"ok": true}` only after their save
//! completed; a failed save answers a distinguishable `{"ok": false}`.

use crate::html;
use crate::normalize;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use lifelog_core::{FactId, FactStore, Modifier};
use lifelog_store::{spawn_writer, StoreFile, StoreHandle};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

/// Bind mode for the server.
#[derive(Clone, Copy, Debug, Default)]
pub enum BindMode {
    Loopback,
    #[default]
    Lan,
}

impl BindMode {
    pub fn to_addr(&self) -> &str {
        match self {
            BindMode::Loopback => "127.0.0.1",
            BindMode::Lan => "0.0.0.0",
        }
    }
}

pub struct ServerConfig {
    pub port: u16,
    pub bind: BindMode,
    pub store_path: PathBuf,
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind: BindMode::default(),
            store_path: PathBuf::from("store.json"),
            assets_dir: None,
        }
    }
}

pub struct AppState {
    store: StoreHandle,
}

#[derive(Deserialize)]
struct AddFactRequest {
    subject: String,
    verb: String,
    #[serde(default)]
    mods: Vec<Modifier>,
}

#[derive(Deserialize)]
struct RemoveFactRequest {
    uuid: String,
}

#[derive(Deserialize)]
struct TransformRequest {
    id: String,
    value: String,
}

#[derive(Serialize)]
struct TransformResponse {
    id: String,
    value: String,
}

/// Load the store, spawn the writer, and serve until shutdown.
///
/// A corrupt store file aborts startup here: silently starting empty would
/// overwrite the corrupted history on the first mutation.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let file = StoreFile::new(&config.store_path);
    let store = file.load()?;
    info!("loaded facts: {}", store.render_text());

    let handle = spawn_writer(store, file);
    let state = Arc::new(AppState { store: handle });

    let mut app = Router::new()
        .route("/", get(page_handler))
        .route("/state", get(state_handler))
        .route("/add", post(add_handler))
        .route("/delete", post(delete_handler))
        .route("/transform", post(transform_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state);

    if let Some(assets) = &config.assets_dir {
        app = app.fallback_service(ServeDir::new(assets));
    }

    let bind_addr: SocketAddr = format!("{}:{}", config.bind.to_addr(), config.port).parse()?;
    info!("lifelog v{} starting", env!("CARGO_PKG_VERSION"));
    info!("  Listening on: {}", bind_addr);
    info!("  Store file:   {}", config.store_path.display());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("beep... beep...");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.store.snapshot().await;
    Html(html::main_page(&snapshot))
}

async fn state_handler(State(state): State<Arc<AppState>>) -> Json<FactStore> {
    Json(state.store.snapshot().await)
}

async fn add_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddFactRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    // Non-empty subject and verb are a convention this caller enforces;
    // the core stores whatever it is given.
    if req.subject.trim().is_empty() || req.verb.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"ok": false, "error": "subject and verb are required"})),
        );
    }

    match state.store.add(req.subject, req.verb, req.mods).await {
        Ok(_) => (StatusCode::OK, Json(serde_json::json!({"ok": true}))),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"ok": false, "error": err.to_string()})),
        ),
    }
}

async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemoveFactRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    info!("delete requested for {}", req.uuid);

    // A string that doesn't parse as a UUID can't name a stored fact, so
    // removal is the same no-op as an unknown id.
    let Some(id) = FactId::parse(&req.uuid) else {
        return (StatusCode::OK, Json(serde_json::json!({"ok": true})));
    };

    match state.store.remove(id).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"ok": true}))),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"ok": false, "error": err.to_string()})),
        ),
    }
}

async fn transform_handler(Json(req): Json<TransformRequest>) -> Json<TransformResponse> {
    info!("transforming {}: {}", req.id, req.value);
    Json(TransformResponse {
        id: req.id,
        value: normalize::normalize_date(&req.value),
    })
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "facts": state.store.len().await,
    }))
}
