//! Frame discovery and ordering.
//!
//! Frames are ordered by file name. DFAUST names frames with zero-padded
//! indices, so lexicographic order is temporal order; [`check_frame_order`]
//! reports directories where that does not hold.

use std::fs;
use std::path::{Path, PathBuf};

use crate::MESH_EXTENSION;
use crate::error::{Error, Result};

/// Mesh files directly inside `dir`, sorted by file name.
///
/// Hidden files are skipped, so `._00000.obj` resource forks left by macOS
/// copies never count as frames.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_error = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut frames = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().starts_with(b"."));
        if !hidden && path.is_file() && path.extension().is_some_and(|ext| ext == MESH_EXTENSION) {
            frames.push(path);
        }
    }
    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(frames)
}

/// Two neighbouring frames whose numeric indices run backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOrderIssue {
    pub earlier: PathBuf,
    pub later: PathBuf,
}

/// Find the first pair of sorted frames whose trailing numbers decrease.
///
/// Returns `None` when the order is consistent or when some frame has no
/// trailing number to compare.
#[must_use]
pub fn check_frame_order(frames: &[PathBuf]) -> Option<FrameOrderIssue> {
    let indices: Option<Vec<u64>> = frames.iter().map(|f| frame_index(f)).collect();
    let indices = indices?;
    indices
        .windows(2)
        .position(|w| w[0] > w[1])
        .map(|i| FrameOrderIssue {
            earlier: frames[i].clone(),
            later: frames[i + 1].clone(),
        })
}

/// Trailing digit run of the file stem, e.g. `42` for `frame_0042.obj`.
fn frame_index(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    stem[stem.len() - digits..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn listing_skips_hidden_and_foreign_files() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["00001.obj", "._00000.obj", "00000.obj", ".hidden.obj", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("00002.obj")).unwrap();

        let names: Vec<_> = list_frames(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["00000.obj", "00001.obj"]);
    }

    #[test]
    fn index_is_trailing_number() {
        assert_eq!(frame_index(Path::new("frame_0042.obj")), Some(42));
        assert_eq!(frame_index(Path::new("00010.obj")), Some(10));
        assert_eq!(frame_index(Path::new("mesh.obj")), None);
    }

    #[test]
    fn padded_names_are_consistent() {
        let frames = paths(&["frame_000.obj", "frame_001.obj", "frame_010.obj"]);
        assert_eq!(check_frame_order(&frames), None);
    }

    #[test]
    fn unpadded_names_are_flagged() {
        let frames = paths(&["frame_1.obj", "frame_10.obj", "frame_2.obj"]);
        assert_eq!(
            check_frame_order(&frames),
            Some(FrameOrderIssue {
                earlier: PathBuf::from("frame_10.obj"),
                later: PathBuf::from("frame_2.obj"),
            })
        );
    }

    #[test]
    fn unnumbered_names_are_not_checked() {
        let frames = paths(&["b.obj", "a_2.obj"]);
        assert_eq!(check_frame_order(&frames), None);
    }
}
