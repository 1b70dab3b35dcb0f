//! API server state

use std::sync::Arc;

use crate::function::GreetingFunction;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// The hosted function
    pub function: Arc<GreetingFunction>,
}

impl AppState {
    pub fn new(function: GreetingFunction) -> Self {
        Self {
            function: Arc::new(function),
        }
    }

    /// The greeting the hosted function returns.
    pub fn greeting(&self) -> &str {
        self.function.message()
    }
}
