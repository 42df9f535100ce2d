//! Error handling for the twirl library.
//!
//! This module provides centralized error handling for the renderer. Item
//! failures are not errors: they are a terminal [`ItemStatus`] and are
//! reported through the run [`Summary`]. The variants below are reserved for
//! conditions that stop the whole run.
//!
//! [`ItemStatus`]: crate::item::ItemStatus
//! [`Summary`]: crate::renderer::Summary

use std::io;
use thiserror::Error;

/// Errors that can happen when using twirl.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// The output sink could not be written to. The run is aborted, but the
    /// cursor is still restored on a best-effort basis.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// A tunable or an item parameter is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The renderer was driven out of order, e.g. `run` before `initialize`.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The run was stopped through its cancellation token.
    #[error("Run cancelled")]
    Cancelled,
}

/// Result type alias for operations that can fail with a twirl error.
pub type Result<T> = std::result::Result<T, Error>;
