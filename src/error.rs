//! Backend error taxonomy.
//!
//! Only a handful of failures are surfaced as values: resource loading and
//! configuration problems propagate to the caller, desktop queries degrade
//! into a recoverable no-op, and malformed native events are dropped at the
//! decode seam without ever becoming an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An image or sound file is missing or unreadable. Never silently
    /// substituted; the caller decides what to do without the asset.
    #[error("failed to load resource '{path}': {reason}")]
    ResourceLoad { path: String, reason: String },

    /// The desktop resolution could not be queried. Window centering treats
    /// this as a recoverable no-op.
    #[error("desktop resolution could not be queried")]
    DesktopQuery,

    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// A captured frame could not be written to disk.
    #[error("failed to save screenshot to '{}'", .path.display())]
    Screenshot { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
