//! Stacking per-frame samples into one `(frames, points, 6)` array.

use std::io::{self, Write};

use crate::error::{SampleError, SampleResult};
use crate::{RECORD_LEN, SurfacePoint, npy};

/// Row-major stack of equally sized sample sets.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    num_points: usize,
    frames: usize,
    data: Vec<f32>,
}

impl PointSequence {
    /// An empty sequence whose frames hold `num_points` points each.
    #[must_use]
    pub fn new(num_points: usize) -> Self {
        Self::with_capacity(num_points, 0)
    }

    #[must_use]
    pub fn with_capacity(num_points: usize, frames: usize) -> Self {
        Self {
            num_points,
            frames: 0,
            data: Vec::with_capacity(frames * num_points * RECORD_LEN),
        }
    }

    /// Append one frame. Its length must equal the sequence's point count.
    pub fn push_frame(&mut self, points: &[SurfacePoint]) -> SampleResult<()> {
        if points.len() != self.num_points {
            return Err(SampleError::PointCountMismatch {
                expected: self.num_points,
                got: points.len(),
            });
        }
        self.data
            .extend(points.iter().flat_map(SurfacePoint::to_record));
        self.frames += 1;
        Ok(())
    }

    #[must_use]
    pub fn num_frames(&self) -> usize {
        self.frames
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// `[frames, points, 6]`
    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        [self.frames, self.num_points, RECORD_LEN]
    }

    /// Flat records of frame `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&[f32]> {
        let stride = self.num_points * RECORD_LEN;
        (index < self.frames).then(|| &self.data[index * stride..(index + 1) * stride])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Serialize as a `<f4` `.npy` array.
    pub fn write_npy<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        npy::write_f32(writer, &self.shape(), &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn points(n: usize, x: f32) -> Vec<SurfacePoint> {
        vec![
            SurfacePoint {
                position: Vec3::new(x, 0.0, 0.0),
                normal: Vec3::Y,
            };
            n
        ]
    }

    #[test]
    fn frames_stack_in_push_order() {
        let mut seq = PointSequence::new(2);
        seq.push_frame(&points(2, 1.0)).unwrap();
        seq.push_frame(&points(2, 2.0)).unwrap();

        assert_eq!(seq.shape(), [2, 2, 6]);
        assert_eq!(seq.frame(0).unwrap()[..6], [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(seq.frame(1).unwrap()[6], 2.0);
        assert!(seq.frame(2).is_none());
    }

    #[test]
    fn mismatched_frame_is_rejected() {
        let mut seq = PointSequence::new(3);
        seq.push_frame(&points(3, 0.0)).unwrap();
        let err = seq.push_frame(&points(2, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            SampleError::PointCountMismatch {
                expected: 3,
                got: 2
            }
        ));
        assert_eq!(seq.num_frames(), 1);
    }

    #[test]
    fn writes_three_dimensional_npy() {
        let mut seq = PointSequence::with_capacity(4, 3);
        for i in 0..3u8 {
            seq.push_frame(&points(4, f32::from(i))).unwrap();
        }
        let mut out = Vec::new();
        seq.write_npy(&mut out).unwrap();

        let (shape, data) = npy::read_f32(&mut out.as_slice()).unwrap();
        assert_eq!(shape, vec![3, 4, 6]);
        assert_eq!(data, seq.as_slice());
    }
}
