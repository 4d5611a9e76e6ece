//! Convert DFAUST mesh sequences into surface point-cloud arrays.
//!
//! Each (subject, movement) pair names a directory of per-frame `.obj`
//! meshes. Every frame is sampled with [`surface_sample::sample_faces`],
//! frames are stacked in file-name order and the result is written to
//! `<target>/surface/<subject>/<movement>.npy` with shape
//! `(frames, points, 6)`.
//!
//! # Example
//!
//! ```no_run
//! use dfaust_pcl::{Cohort, ExportConfig, Exporter};
//!
//! let config = ExportConfig::new("/data/dfaust", "/data/pcl");
//! let mut exporter = Exporter::new(config, rand::rng())?;
//! let summary = exporter.run(&Cohort::dfaust())?;
//! println!("saved {} sequences", summary.saved.len());
//! # Ok::<(), dfaust_pcl::Error>(())
//! ```

mod error;

pub mod cohort;
pub mod export;
pub mod frames;

pub use cohort::{Cohort, SequenceId};
pub use error::{Error, Result};
pub use export::{ExportConfig, ExportSummary, Exporter, SequenceOutcome, sample_sequence};
pub use frames::{FrameOrderIssue, check_frame_order, list_frames};

/// Subdirectory of the target path that holds the sampled sequences.
pub const SURFACE_DIR: &str = "surface";

/// File extension of input mesh frames.
pub const MESH_EXTENSION: &str = "obj";
