//! HTTPサーバー

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::routes::{
    delete_all_entries_handler, enhance_handler, get_entries_handler, memory_file_handler,
    save_entry_handler,
};
use crate::state::AppState;

/// 画像をData URLで受け取るため既定の上限より大きくする
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub fn router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/enhance", post(enhance_handler))
        .route("/save_entry", post(save_entry_handler))
        .route("/get_entries", get(get_entries_handler))
        .route("/delete_all_entries", delete(delete_all_entries_handler))
        .route("/get_memory_file/{file_name}", get(memory_file_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state);

    match static_dir {
        Some(dir) => {
            info!("Serving front-end from {}", dir.display());
            api.fallback_service(ServeDir::new(dir))
        }
        None => api,
    }
}

pub async fn start_server(config: &Config, state: Arc<AppState>) -> Result<()> {
    let app = router(state, config.static_dir.clone());

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
