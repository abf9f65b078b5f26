//! Web server assembly

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};
use crate::catalog;
use crate::config::Config;
use crate::geocode::GoogleGeocoder;

/// Assemble the full application router: `/api` endpoints plus static
/// assets (including `tour.json`) from the configured directory.
pub fn app(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

/// Run the web server until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState {
        geocoder: Arc::new(GoogleGeocoder::new(config.maps_api_key.clone())),
        maps_api_key: config.maps_api_key.clone(),
    };

    // Startup sanity check on the bundled catalog; a broken file should
    // show up in the log rather than as client-side parse failures.
    let catalog_path = Path::new(&config.static_dir).join("tour.json");
    match catalog::load_catalog(&catalog_path) {
        Ok(tours) => tracing::info!(
            "Serving {} tours from {}",
            tours.len(),
            catalog_path.display()
        ),
        Err(err) => tracing::warn!("Tour catalog check failed: {err:#}"),
    }

    let app = app(state, &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
