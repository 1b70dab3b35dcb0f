//! Funclet - a minimal OpenFaaS-style function host
//!
//! Funclet hosts a single serverless-style function: a pure adapter from an
//! HTTP request to a fixed JSON greeting. The crate provides:
//! - The greeting function itself (stateless, synchronous, no error path)
//! - A host runner with explicit `register(method, path, function)` routing
//! - Configuration, logging, and a health endpoint around them

pub mod api;
pub mod config;
pub mod error;
pub mod function;
pub mod runner;

pub use error::{Error, Result};
