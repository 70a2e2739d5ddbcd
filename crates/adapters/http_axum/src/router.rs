//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::get;
use faqhub_domain::route::Route;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tower_http::trace::TraceLayer;

/// The compiled front-end bundle.
#[derive(Clone)]
struct Bundle {
    index: ServeFile,
    files: ServeDir<SetStatus<ServeFile>>,
}

/// Build the top-level axum [`Router`] serving the bundle in `assets_dir`.
///
/// Paths that parse as a client [`Route`] resolve to `index.html`; other paths
/// are looked up in `assets_dir`, and misses get `index.html` with a `404`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets_dir: impl Into<PathBuf>) -> Router {
    let assets_dir = assets_dir.into();
    tracing::debug!(assets_dir = %assets_dir.display(), "serving front-end bundle");

    let index = ServeFile::new(assets_dir.join("index.html"));
    let bundle = Bundle {
        files: ServeDir::new(&assets_dir).not_found_service(index.clone()),
        index,
    };

    Router::new()
        .route("/health", get(health_check))
        .fallback(serve_bundle)
        .with_state(bundle)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn serve_bundle(State(bundle): State<Bundle>, request: Request) -> Response {
    let response = match request.uri().path().parse::<Route>() {
        Ok(route) => {
            tracing::trace!(%route, "client route");
            bundle.index.oneshot(request).await
        }
        Err(_) => bundle.files.oneshot(request).await,
    };
    match response {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}
