//! Error types for efmig.

use thiserror::Error;

/// Main error type for efmig operations.
#[derive(Error, Debug)]
pub enum EfmigError {
    #[error("dotnet not found. Please install the .NET SDK.")]
    DotnetNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for efmig operations.
pub type EfmigResult<T> = Result<T, EfmigError>;
