//! Host runner: explicit route registration over axum
//!
//! Functions are bound to routes with a plain `register(method, path,
//! function)` call made once at startup. The runner owns the boundary work:
//! it parses the raw request into a [`FunctionRequest`], invokes the
//! function, and serializes the returned record as JSON with status 200.
//! Requests that match no registered method or path are answered by the
//! router itself (405/404) and never reach a function.

use std::collections::HashSet;

use axum::{
    extract::OriginalUri,
    http::{HeaderMap, Method},
    routing::{on, MethodFilter},
    Json, Router,
};
use bytes::Bytes;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::function::FunctionRequest;

/// Accumulates route registrations into an axum [`Router`].
#[derive(Debug, Default)]
pub struct Runner {
    router: Router,
    registered: HashSet<(Method, String)>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a function value to a method and path.
    ///
    /// Any `Fn(FunctionRequest) -> T` with a serializable `T` qualifies; no
    /// reflection or handler base class is involved. Registering the same
    /// method and path twice is an error.
    pub fn register<F, T>(&mut self, method: Method, path: &str, function: F) -> Result<()>
    where
        F: Fn(FunctionRequest) -> T + Clone + Send + Sync + 'static,
        T: Serialize + Send + 'static,
    {
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| Error::registration(format!("method {method} cannot be routed")))?;

        if !self.registered.insert((method.clone(), path.to_owned())) {
            return Err(Error::registration(format!(
                "duplicate registration for {method} {path}"
            )));
        }

        let handler = move |method: Method,
                            OriginalUri(uri): OriginalUri,
                            headers: HeaderMap,
                            body: Bytes| async move {
            let request = FunctionRequest {
                method,
                path: uri.path().to_owned(),
                headers,
                body,
            };
            Json(function(request))
        };

        self.router = std::mem::take(&mut self.router).route(path, on(filter, handler));
        tracing::debug!(%method, path, "Registered function route");
        Ok(())
    }

    /// The finished routing table.
    pub fn into_router(self) -> Router {
        self.router
    }
}
