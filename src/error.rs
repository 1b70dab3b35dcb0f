//! Error types for funclet
//!
//! The function adapter itself has no failure path; these errors cover the
//! host side only, and all of them surface at startup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid greeting: {0}")]
    InvalidGreeting(String),

    #[error("Route registration error: {0}")]
    Registration(String),
}

impl Error {
    pub fn invalid_greeting(msg: impl Into<String>) -> Self {
        Error::InvalidGreeting(msg.into())
    }

    pub fn registration(msg: impl Into<String>) -> Self {
        Error::Registration(msg.into())
    }
}
