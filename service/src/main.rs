#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    Extension,
};
use poliscope_api::{
    config::Config,
    http::{router, ApiDoc},
    store::{DataStore, FsDataStore},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load and validate configuration first (fail-fast)
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up logging from config
    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    // Init banner so container logs clearly show startup
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "poliscope-api starting up"
    );

    // Dataset store: stateless, re-reads the files on every request
    let store: Arc<dyn DataStore> = Arc::new(FsDataStore::new(&config.data.dir));
    tracing::info!(dir = %config.data.dir, "serving datasets from data directory");

    // Build CORS layer from config
    let cors_origins = &config.cors.allowed_origins;
    let allow_origin: AllowOrigin = if cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow any origin - not recommended for production");
        AllowOrigin::any()
    } else if cors_origins.is_empty() {
        tracing::info!(
            "CORS allowed origins not configured - cross-origin requests will be blocked"
        );
        AllowOrigin::list(Vec::<HeaderValue>::new())
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        tracing::info!(origins = ?cors_origins, "CORS allowed origins configured");
        AllowOrigin::list(origins)
    };

    // Build the API
    let mut app = router();

    // Mount Swagger UI if enabled
    if config.swagger.enabled {
        tracing::info!("Swagger UI enabled at /swagger-ui");
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    let app = app
        .layer(Extension(store))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any)
                .allow_origin(allow_origin),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new());

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server at http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
