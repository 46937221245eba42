//! city-api — a minimal REST service over the world sample `city` table.
//!
//! Four routes: create a city, look one up by name, update a city's
//! population, delete a city. The wire contract (status codes, JSON
//! bodies, exact error messages) is frozen; see the handler docs in
//! [`controllers::city_controller`] for the quirks it preserves.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// Assemble the application router with HTTP request tracing attached.
pub fn app(state: AppState) -> Router {
    controllers::city_controller::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialise the global `tracing` subscriber with a standard `fmt` layer.
///
/// Respects the `RUST_LOG` environment variable. Falls back to
/// `info,tower_http=debug` when `RUST_LOG` is not set.
///
/// Call this once, at the very start of `main`, before any tracing macro.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".parse().unwrap()),
        )
        .init();
}
