use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use configuration::Config;
use database::DbRepository;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod extract;
pub mod handlers;

use handlers::{artists, pages, shows, venues};

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub db_repo: DbRepository,
}

/// Builds the router with every route, the CORS and trace layers, and the 404 fallback.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/", get(pages::index))
        .route("/api/health", get(pages::health))
        // --- Venues ---
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route("/venues/create", get(venues::create_venue_form).post(venues::create_venue))
        .route("/venues/Delete_by_ID/:id", get(venues::delete_venue))
        .route("/venues/Edite_by_ID/:id", get(venues::edit_venue_form).post(venues::edit_venue))
        .route("/venues/:id", get(venues::show_venue))
        // --- Artists ---
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route("/artists/create", get(artists::create_artist_form).post(artists::create_artist))
        .route("/artists/Delete_by_ID/:id", get(artists::delete_artist))
        .route("/artists/Edite_by_ID/:id", get(artists::edit_artist_form).post(artists::edit_artist))
        .route("/artists/:id", get(artists::show_artist))
        // --- Shows ---
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", get(shows::create_show_form).post(shows::create_show))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Connects to the database, applies migrations and serves until ctrl-c.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let db_pool = database::connect(&config.database).await?;
    database::run_migrations(&db_pool).await?;
    let db_repo = DbRepository::new(db_pool.clone());

    let app = build_router(Arc::new(AppState { db_repo }));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    db_pool.close().await;
    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
