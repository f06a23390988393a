// Bring in required crates
use axum::{self, routing};
use clap::Parser;
use tokio::net;
use tower_http::{services, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Bring in our local modules
mod backend;
mod config;
mod detail;
mod error;
mod list;
mod recipe;
mod session;
mod templates;
mod web;

use backend::*;
use config::Args;
use detail::*;
use error::*;
use session::*;
use templates::*;
use web::AppState;

use std::sync::Arc;

// Main server setup
async fn serve(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging and HTTP tracing for Axum with environment-based filtering.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_collector=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let trace_layer = trace::TraceLayer::new_for_http()
        .make_span_with(trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(trace::DefaultOnResponse::new().level(tracing::Level::INFO));

    let backend = HttpBackend::new(args.backend_url.clone())?;
    tracing::info!(backend = %args.backend_url, "using recipe backend");
    let sessions = Sessions::new(args.max_sessions, args.max_recipes);
    let state = Arc::new(AppState::new(Arc::new(backend), sessions, args.nav()));

    // Create the router
    let app = axum::Router::new()
        .route("/", routing::get(web::index).post(web::submit_recipe))
        .route("/recipe/{recipe_id}", routing::get(web::get_recipe))
        .route("/health", routing::get(web::health))
        // Serve static CSS file (must match file path & MIME)
        .route_service(
            "/recipe.css",
            services::ServeFile::new_with_mime(
                args.assets.join("recipe.css"),
                &mime::TEXT_CSS_UTF_8,
            ),
        )
        .layer(trace_layer)
        .with_state(state);

    let listener = net::TcpListener::bind(&args.address).await?;
    tracing::info!(address = %args.address, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

// Entry point of the app
#[tokio::main]
async fn main() {
    let args = Args::parse();
    // If serve() returns an error, log and exit
    if let Err(err) = serve(args).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
