//! The sampling and export pipeline.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use surface_sample::{DEFAULT_NUM_POINTS, PointSequence, load_obj, sample_faces};

use crate::cohort::{Cohort, SequenceId, subject_dir};
use crate::error::{Error, Result};
use crate::frames::{check_frame_order, list_frames};

/// Where to read meshes, where to write arrays, and how many points to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub num_points: usize,
}

impl ExportConfig {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            num_points: DEFAULT_NUM_POINTS,
        }
    }

    #[must_use]
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }
}

/// What happened to one (subject, movement) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOutcome {
    Saved { path: PathBuf, frames: usize },
    /// The input directory does not exist.
    Missing { dir: PathBuf },
    /// The input directory holds no mesh files.
    Empty { dir: PathBuf },
}

/// Pairs processed by [`Exporter::run`], grouped by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub saved: Vec<SequenceId>,
    pub skipped: Vec<SequenceId>,
}

/// Samples mesh sequences and writes them as `.npy` arrays.
pub struct Exporter<R> {
    config: ExportConfig,
    rng: R,
}

impl<R: Rng> Exporter<R> {
    pub fn new(config: ExportConfig, rng: R) -> Result<Self> {
        if config.num_points == 0 {
            return Err(Error::InvalidConfig {
                message: "num_points must be at least 1".to_string(),
            });
        }
        Ok(Self { config, rng })
    }

    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export every pair of `cohort`, subject by subject.
    ///
    /// Missing or empty input directories are skipped. Any other failure
    /// stops the run; arrays already written stay on disk.
    pub fn run(&mut self, cohort: &Cohort) -> Result<ExportSummary> {
        let output_root = self.config.output_root.clone();
        if !output_root.is_dir() {
            tracing::info!("Creating {}", output_root.display());
        }
        create_dir(&output_root)?;

        let mut summary = ExportSummary::default();
        for subject in cohort.subjects() {
            create_dir(&subject_dir(&output_root, subject))?;
            for id in cohort.sequences_of(subject) {
                match self.export_sequence(&id)? {
                    SequenceOutcome::Saved { .. } => summary.saved.push(id),
                    SequenceOutcome::Missing { .. } | SequenceOutcome::Empty { .. } => {
                        summary.skipped.push(id);
                    }
                }
            }
        }

        tracing::info!(
            saved = summary.saved.len(),
            skipped = summary.skipped.len(),
            "Export finished"
        );
        Ok(summary)
    }

    /// Sample and write one pair.
    ///
    /// The output file is only created once every frame has been sampled.
    pub fn export_sequence(&mut self, id: &SequenceId) -> Result<SequenceOutcome> {
        let dir = id.input_dir(&self.config.input_root);
        if !dir.is_dir() {
            tracing::info!("{} does not exist, moving on...", dir.display());
            return Ok(SequenceOutcome::Missing { dir });
        }

        let frames = list_frames(&dir)?;
        if frames.is_empty() {
            tracing::info!("{} has no .obj frames, moving on...", dir.display());
            return Ok(SequenceOutcome::Empty { dir });
        }
        if let Some(issue) = check_frame_order(&frames) {
            tracing::warn!(
                "{}: {} sorts before {} but has a larger frame number",
                id,
                issue.earlier.display(),
                issue.later.display()
            );
        }

        let sequence = sample_sequence(id, &frames, self.config.num_points, &mut self.rng)?;

        let path = id.output_path(&self.config.output_root);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        tracing::info!("Saving pointcloud in path {}", path.display());
        write_sequence(&path, &sequence)?;
        tracing::debug!(shape = ?sequence.shape(), "Saved {id}");

        Ok(SequenceOutcome::Saved {
            path,
            frames: sequence.num_frames(),
        })
    }
}

/// Load and sample every frame of one pair, in the given order.
pub fn sample_sequence<R: Rng>(
    id: &SequenceId,
    frames: &[PathBuf],
    num_points: usize,
    rng: &mut R,
) -> Result<PointSequence> {
    let mut sequence = PointSequence::with_capacity(num_points, frames.len());
    for path in frames {
        let frame_error = |source| Error::Frame {
            sequence: id.clone(),
            path: path.clone(),
            source,
        };
        let mesh = load_obj(path).map_err(frame_error)?;
        let points = sample_faces(&mesh, num_points, rng).map_err(frame_error)?;
        sequence.push_frame(&points).map_err(frame_error)?;
        tracing::trace!(frame = %path.display(), faces = mesh.faces().len(), "Sampled");
    }
    Ok(sequence)
}

fn write_sequence(path: &Path, sequence: &PointSequence) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    sequence.write_npy(&mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
