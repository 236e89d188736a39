//! HTTP transport for the dashboard.
//!
//! Serves the rendered page at the configured path, plus `/health` and
//! `/healthz` for liveness probes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use flowboard::config::{DashboardConfig, ServerConfig};
//! use flowboard::source::MemoryHost;
//! use flowboard::{server, Dashboard, RunState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let host = MemoryHost::new();
//!     host.set_run_state("main", "orders", RunState::Running);
//!
//!     let config = DashboardConfig::builder().model_name("main").build();
//!     let dashboard = Arc::new(Dashboard::initialise(&config, &host)?);
//!
//!     // Dashboard available at http://localhost:8080/dashboard
//!     server::serve(dashboard, ServerConfig::default()).await
//! }
//! ```

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::dashboard::Dashboard;

/// Bind the configured address and serve the dashboard until the task is
/// dropped or accepting fails.
pub async fn serve(dashboard: Arc<Dashboard>, config: ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Serving dashboard at http://{}{}",
        listener.local_addr()?,
        config.path
    );
    serve_listener(listener, dashboard, config.path).await
}

/// Serve the dashboard on an already bound listener.
pub async fn serve_listener(
    listener: TcpListener,
    dashboard: Arc<Dashboard>,
    path: String,
) -> anyhow::Result<()> {
    let path: Arc<str> = Arc::from(path);

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);

        let dashboard = dashboard.clone();
        let path = path.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                let response = handle_request(&req, &path, &dashboard);
                async move { Ok::<_, Infallible>(response) }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                error!("Dashboard connection error from {}: {}", peer, e);
            }
        });
    }
}

/// Route a single request.
pub fn handle_request<B>(
    req: &Request<B>,
    dashboard_path: &str,
    dashboard: &Dashboard,
) -> Response<Full<Bytes>> {
    let path = req.uri().path();

    if path == dashboard_path {
        let reply = dashboard.on_call();
        let content_type = format!("{}; charset=utf-8", reply.content_type);
        respond(StatusCode::OK, &content_type, reply.body)
    } else if path == "/health" || path == "/healthz" {
        respond(StatusCode::OK, "text/plain", "OK".to_string())
    } else {
        respond(StatusCode::NOT_FOUND, "text/plain", "Not Found".to_string())
    }
}

fn respond(status: StatusCode, content_type: &str, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    if let Ok(value) = HeaderValue::from_str(content_type) {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}
