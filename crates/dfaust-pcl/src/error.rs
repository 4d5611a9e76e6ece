//! Error types for the exporter.

use std::path::PathBuf;

use surface_sample::SampleError;
use thiserror::Error;

use crate::cohort::SequenceId;

/// Errors that stop an export run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list frames in {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sequence {sequence}: failed to sample frame {}", path.display())]
    Frame {
        sequence: SequenceId,
        path: PathBuf,
        #[source]
        source: SampleError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the exporter.
pub type Result<T> = std::result::Result<T, Error>;
