//! Subject and movement identifiers.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::SURFACE_DIR;

/// Subject IDs of the DFAUST registrations.
pub const DFAUST_SUBJECTS: [&str; 10] = [
    "50002", "50004", "50007", "50009", "50020", "50021", "50022", "50025", "50026", "50027",
];

/// Movement names of the DFAUST registrations.
pub const DFAUST_MOVEMENTS: [&str; 14] = [
    "chicken_wings",
    "hips",
    "jiggle_on_toes",
    "jumping_jacks",
    "knees",
    "light_hopping_loose",
    "light_hopping_stiff",
    "one_leg_jump",
    "one_leg_loose",
    "punching",
    "running_on_spot",
    "shake_arms",
    "shake_hips",
    "shake_shoulders",
];

/// One (subject, movement) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceId {
    pub subject: String,
    pub movement: String,
}

impl SequenceId {
    pub fn new(subject: impl Into<String>, movement: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            movement: movement.into(),
        }
    }

    /// Input directory name, `{subject}_{movement}`.
    #[must_use]
    pub fn dir_name(&self) -> String {
        format!("{}_{}", self.subject, self.movement)
    }

    #[must_use]
    pub fn input_dir(&self, input_root: &Path) -> PathBuf {
        input_root.join(self.dir_name())
    }

    /// `<output_root>/surface/<subject>/<movement>.npy`
    #[must_use]
    pub fn output_path(&self, output_root: &Path) -> PathBuf {
        subject_dir(output_root, &self.subject).join(format!("{}.npy", self.movement))
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.subject, self.movement)
    }
}

/// Output directory holding one subject's sequences.
#[must_use]
pub fn subject_dir(output_root: &Path, subject: &str) -> PathBuf {
    output_root.join(SURFACE_DIR).join(subject)
}

/// Ordered subjects crossed with ordered movements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    subjects: Vec<String>,
    movements: Vec<String>,
}

impl Cohort {
    pub fn new<S, M>(subjects: S, movements: M) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
            movements: movements.into_iter().map(Into::into).collect(),
        }
    }

    /// The 10 subjects × 14 movements of DFAUST.
    #[must_use]
    pub fn dfaust() -> Self {
        Self::new(DFAUST_SUBJECTS, DFAUST_MOVEMENTS)
    }

    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    #[must_use]
    pub fn movements(&self) -> &[String] {
        &self.movements
    }

    /// Pairs of one subject, in movement order.
    pub fn sequences_of<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = SequenceId> + 'a {
        self.movements
            .iter()
            .map(move |movement| SequenceId::new(subject, movement.as_str()))
    }

    /// Every pair, subject-major.
    pub fn pairs(&self) -> impl Iterator<Item = SequenceId> + '_ {
        self.subjects
            .iter()
            .flat_map(move |subject| self.sequences_of(subject))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len() * self.movements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Cohort {
    fn default() -> Self {
        Self::dfaust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfaust_has_140_pairs() {
        let cohort = Cohort::dfaust();
        assert_eq!(cohort.len(), 140);
        assert_eq!(cohort.pairs().count(), 140);
    }

    #[test]
    fn pairs_are_subject_major() {
        let cohort = Cohort::new(["a", "b"], ["x", "y", "z"]);
        let names: Vec<String> = cohort.pairs().map(|id| id.dir_name()).collect();
        assert_eq!(names, ["a_x", "a_y", "a_z", "b_x", "b_y", "b_z"]);
    }

    #[test]
    fn paths_follow_naming_scheme() {
        let id = SequenceId::new("50002", "jiggle_on_toes");
        assert_eq!(
            id.input_dir(Path::new("/in")),
            Path::new("/in/50002_jiggle_on_toes")
        );
        assert_eq!(
            id.output_path(Path::new("/out")),
            Path::new("/out/surface/50002/jiggle_on_toes.npy")
        );
        assert_eq!(id.to_string(), "50002/jiggle_on_toes");
    }
}
