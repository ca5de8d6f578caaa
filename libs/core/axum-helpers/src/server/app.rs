use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::{ListenType, ServerConfig};
use std::future::Future;
use std::io;
#[cfg(unix)]
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::net::UnixListener;
use tower_http::timeout::RequestBodyTimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// A listener bound according to [`ServerConfig::listen_type`].
#[derive(Debug)]
pub enum BoundListener {
    Tcp(TcpListener),
    #[cfg(unix)]
    Unix { listener: UnixListener, path: PathBuf },
}

/// Bind the listener described by `server_config`.
///
/// - [`ListenType::Port`]: TCP on `bind_ip:port`
/// - [`ListenType::Sock`]: Unix domain socket `app.sock` next to the running
///   executable; a stale socket file from a previous run is removed first
pub async fn bind(server_config: &ServerConfig) -> io::Result<BoundListener> {
    match server_config.listen_type {
        ListenType::Port => {
            let listener = TcpListener::bind(server_config.address()).await?;
            info!("Server is listening on {}", listener.local_addr()?);
            Ok(BoundListener::Tcp(listener))
        }
        #[cfg(unix)]
        ListenType::Sock => {
            let executable = std::env::current_exe()?;
            let path = ServerConfig::socket_path(&executable);
            if path.exists() {
                std::fs::remove_file(&path)?;
            }

            let listener = UnixListener::bind(&path)?;
            info!("Server is listening on unix socket {}", path.display());
            Ok(BoundListener::Unix { listener, path })
        }
        #[cfg(not(unix))]
        ListenType::Sock => Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "unix domain sockets are not supported on this platform",
        )),
    }
}

/// Creates the application router with documentation, tracing and fallback.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, OpenAPI JSON at `/api-docs/openapi.json`
/// - the given API routes, mounted at the root
/// - a 404 fallback answering with the standard error body
/// - a request body read timeout (`read_timeout_secs`)
/// - HTTP request tracing
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(RequestBodyTimeoutLayer::new(Duration::from_secs(
            server_config.read_timeout_secs,
        )))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` bounded by `shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while running.
///
/// # Example
/// ```ignore
/// serve(router, &config.listen, Duration::from_secs(30), async move {
///     drop(mongo_client);
/// })
/// .await?;
/// ```
pub async fn serve<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let serve_result = match bind(server_config).await? {
        BoundListener::Tcp(listener) => {
            axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await
        }
        #[cfg(unix)]
        BoundListener::Unix { listener, path } => {
            let result = axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await;
            if let Err(e) = std::fs::remove_file(&path) {
                warn!("Failed to remove socket {}: {}", path.display(), e);
            }
            result
        }
    }
    .inspect_err(|e| {
        tracing::error!("Server encountered an error: {:?}", e);
    });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
