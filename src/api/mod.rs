//! HTTP API server

use axum::{http::Method, routing::get, Router};

use crate::error::Result;
use crate::function::GreetingFunction;
use crate::runner::Runner;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the operational router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Build the full application router: the greeting function mounted at `/`
/// for each accepted method, merged with the operational routes.
///
/// This is the once-at-startup registration call; nothing is routed
/// dynamically after it returns.
pub fn create_app_router(function: GreetingFunction, methods: &[Method]) -> Result<Router> {
    let mut runner = Runner::new();
    for method in methods {
        let f = function.clone();
        runner.register(method.clone(), "/", move |request| f.handle(&request))?;
    }

    Ok(runner
        .into_router()
        .merge(create_router(AppState::new(function))))
}
