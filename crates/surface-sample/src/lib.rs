//! Load triangle meshes and sample oriented point clouds from their surface.
//!
//! This crate provides pure synchronous functions for turning mesh frames
//! into fixed-size point samples. Nothing here walks directories or logs;
//! the caller decides which files to read and where the results go.
//!
//! # Design principles
//!
//! - **Raw input**: Meshes are kept exactly as written, no vertex merging
//!   and no degenerate-face removal
//! - **Injected randomness**: Every sampling function takes the caller's
//!   [`rand::Rng`], so seeded runs are reproducible
//! - **Flat output**: Samples are stored as `f32` records ready to be
//!   written as `.npy`
//!
//! # Key functions
//!
//! - [`load_obj`] / [`read_obj`]: Parse a Wavefront OBJ file into a [`TriMesh`]
//! - [`sample_surface`]: Area-weighted points plus the face each came from
//! - [`sample_faces`]: Points paired with their face normals
//! - [`PointSequence::write_npy`]: Serialize stacked frames as `(F, N, 6)`

mod error;

pub mod mesh;
pub mod npy;
pub mod sample;
pub mod sequence;
pub mod wavefront;

pub use error::{SampleError, SampleResult};
pub use mesh::TriMesh;
pub use sample::{sample_faces, sample_surface};
pub use sequence::PointSequence;
pub use wavefront::{load_obj, read_obj};

/// Number of `f32` fields per sampled point: position then normal.
pub const RECORD_LEN: usize = 6;

/// Points drawn per frame unless the caller asks otherwise.
pub const DEFAULT_NUM_POINTS: usize = 20_000;

/// A point on a mesh surface together with the normal of its face.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfacePoint {
    pub position: glam::Vec3,
    pub normal: glam::Vec3,
}

impl SurfacePoint {
    /// Flatten into `[x, y, z, nx, ny, nz]`.
    #[must_use]
    pub fn to_record(&self) -> [f32; RECORD_LEN] {
        let p = self.position;
        let n = self.normal;
        [p.x, p.y, p.z, n.x, n.y, n.z]
    }
}
