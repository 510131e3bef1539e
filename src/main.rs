//! Biblioteca Server - Library Management System
//!
//! REST API server for the Biblioteca library catalog, loans and reviews.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "biblioteca_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.loans.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authors
        .route("/authors", post(api::catalog::create_author))
        .route("/authors", get(api::catalog::list_authors))
        .route("/authors/:id", get(api::catalog::get_author))
        .route("/authors/:id", put(api::catalog::update_author))
        .route("/authors/:id", delete(api::catalog::delete_author))
        // Publishers
        .route("/publishers", post(api::catalog::create_publisher))
        .route("/publishers", get(api::catalog::list_publishers))
        .route("/publishers/:id", get(api::catalog::get_publisher))
        .route("/publishers/:id", put(api::catalog::update_publisher))
        .route("/publishers/:id", delete(api::catalog::delete_publisher))
        // Branches
        .route("/branches", post(api::catalog::create_branch))
        .route("/branches", get(api::catalog::list_branches))
        .route("/branches/:id", get(api::catalog::get_branch))
        .route("/branches/:id", put(api::catalog::update_branch))
        .route("/branches/:id", delete(api::catalog::delete_branch))
        // Languages and collections
        .route("/languages", post(api::catalog::create_language))
        .route("/languages", get(api::catalog::list_languages))
        .route("/collections", post(api::catalog::create_collection))
        .route("/collections", get(api::catalog::list_collections))
        // Books (catalog records)
        .route("/books", post(api::books::create_book))
        .route("/books", get(api::books::list_books))
        .route("/books/:isbn", get(api::books::get_book))
        .route("/books/:isbn", put(api::books::update_book))
        .route("/books/:isbn", delete(api::books::delete_book))
        // Physical books (copies)
        .route("/physicalBooks", post(api::copies::create_physical_book))
        .route("/physicalBooks", get(api::copies::list_physical_books))
        .route("/physicalBooks/:id", get(api::copies::get_physical_book))
        .route("/physicalBooks/:id", put(api::copies::update_physical_book))
        .route("/physicalBooks/:id/repair", put(api::copies::toggle_repair))
        // Clients
        .route("/clients", post(api::clients::create_client))
        .route("/clients", get(api::clients::list_clients))
        .route("/clients/:id", get(api::clients::get_client))
        .route("/clients/:id", put(api::clients::update_client))
        .route("/clients/:id", delete(api::clients::delete_client))
        .route("/clients/:id/loans", get(api::loans::get_client_loans))
        .route("/clients/:id/reserves", get(api::reserves::list_client_reserves))
        // Loans
        .route("/loans", post(api::loans::create_loan))
        .route("/loans/:id/return", put(api::loans::return_loan))
        .route("/loans/:id/lost", put(api::loans::lost_loan))
        // Reserves
        .route(
            "/reserves/:client_id/:isbn/:branch_id",
            post(api::reserves::create_reserve),
        )
        .route("/reserves/:id", delete(api::reserves::delete_reserve))
        .route("/reserves", get(api::reserves::list_reserves))
        // Reviews
        .route("/reviews", post(api::reviews::create_review))
        .route("/reviews/book/:isbn", get(api::reviews::get_book_reviews))
        // Reports
        .route("/reports/overdue", get(api::reports::get_overdue_loans))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
