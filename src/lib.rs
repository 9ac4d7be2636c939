pub mod assets;
pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod site;
pub mod template;

pub use config::Config;
pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Router with every middleware layer the server runs with
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
