//! The greeting function adapter
//!
//! A function is a pure mapping from an inbound HTTP call to a response
//! record. The greeting function ignores everything about the request and
//! returns the same payload on every invocation, so it is safe to call with
//! unbounded concurrency.

use axum::http::{HeaderMap, Method};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The standard greeting message.
pub const DEFAULT_GREETING: &str = "Hello!";

/// What a function sees of the inbound HTTP call.
///
/// The host runner fills this in from the raw request. The greeting function
/// inspects none of it, but the shape is what any hosted function receives.
#[derive(Debug, Clone)]
pub struct FunctionRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// The greeting payload returned by the function.
///
/// A single-field record serialized with the capitalized `Message` key the
/// OpenFaaS templates use on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(rename = "Message")]
    pub message: String,
}

/// The function value registered with the host runner.
///
/// Holds the configured greeting string, fixed at construction. Each
/// invocation builds an independent [`Greeting`]; no state is shared or
/// retained between calls.
#[derive(Debug, Clone)]
pub struct GreetingFunction {
    message: String,
}

impl GreetingFunction {
    /// Create a function returning the given greeting.
    ///
    /// The message must be a non-empty string.
    pub fn new(message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(Error::invalid_greeting(
                "greeting message must not be empty",
            ));
        }
        Ok(Self { message })
    }

    /// The configured greeting message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handle one invocation.
    ///
    /// Pure and synchronous: the request is accepted but never inspected,
    /// and the outcome is identical for every call.
    pub fn handle(&self, _request: &FunctionRequest) -> Greeting {
        Greeting {
            message: self.message.clone(),
        }
    }
}

impl Default for GreetingFunction {
    fn default() -> Self {
        Self {
            message: DEFAULT_GREETING.to_string(),
        }
    }
}
