//! Error types for mesh loading and sampling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, sampling or serializing meshes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SampleError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse OBJ data: {message}")]
    Parse { message: String },

    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("mesh has no surface to sample ({face_count} faces, total area {area})")]
    DegenerateSurface { face_count: usize, area: f64 },

    #[error("frame has {got} points, expected {expected}")]
    PointCountMismatch { expected: usize, got: usize },

    #[error("invalid npy data: {message}")]
    Npy { message: String },
}

/// Result type for this crate.
pub type SampleResult<T> = Result<T, SampleError>;
