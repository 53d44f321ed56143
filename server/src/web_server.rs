use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use common::games::SessionRng;
use common::log;

use crate::move_handler::handle_move;
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub rng: Arc<Mutex<SessionRng>>,
}

pub async fn run_web_server(config: ServerConfig, rng: SessionRng) {
    let state = WebServerState {
        rng: Arc::new(Mutex::new(rng)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/move", post(handle_move))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(PathBuf::from(&config.static_files_path)))
        .layer(cors)
        .with_state(state);

    log!("Web server listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Web server error");

    log!("Server shut down gracefully");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");

    log!("Shutdown signal received");
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
