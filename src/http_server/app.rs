use std::{sync::Arc, time::Duration};

use axum::{Router, http::StatusCode, routing::get};
#[cfg(not(debug_assertions))]
use axum::http::{Method, header};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
#[cfg(not(debug_assertions))]
use tower_http::cors::Any;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    database::Database,
    http_server::{
        http_routes::{
            greeting::{api_data, root},
            resource::resource_routes,
        },
        state::AppState,
    },
    resources::{Albums, Categories, Singers, Songs},
};

pub struct HttpServerConfig {
    pub port: u16,
    pub database: Database,
    pub request_timeout: Duration,
}

#[cfg(debug_assertions)]
fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(not(debug_assertions))]
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Requests still running after `request_timeout` are answered with 408.
fn timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout)
}

pub fn create_router(app_state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/data", get(api_data))
        .merge(resource_routes::<Albums>())
        .merge(resource_routes::<Singers>())
        .merge(resource_routes::<Categories>())
        .merge(resource_routes::<Songs>())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(timeout_layer(request_timeout))
                .layer(cors_layer()),
        )
        .with_state(app_state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining requests");
}

pub async fn start(config: HttpServerConfig) -> color_eyre::Result<()> {
    let HttpServerConfig {
        port,
        database,
        request_timeout,
    } = config;

    let db = Arc::new(database);
    let app_state = Arc::new(AppState { db: db.clone() });
    let app = create_router(app_state, request_timeout);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    tracing::info!("Listening on :{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Failed to start HTTP server")?;

    db.close().await?;
    tracing::info!("Database connection pool closed");

    Ok(())
}
