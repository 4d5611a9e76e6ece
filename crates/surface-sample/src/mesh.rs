//! Triangle mesh storage and per-face geometry.

use glam::{DVec3, Vec3};

use crate::error::{SampleError, SampleResult};

/// An immutable indexed triangle mesh.
///
/// Vertices and faces are stored exactly as given. Duplicate vertices and
/// degenerate faces are kept; the only check is that every face index
/// refers to an existing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Build a mesh from vertex positions and vertex-indexed triangles.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> SampleResult<Self> {
        for (face, corners) in faces.iter().enumerate() {
            for &index in corners {
                let index = index as usize;
                if index >= vertices.len() {
                    return Err(SampleError::IndexOutOfRange {
                        face,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Corner positions of `face`, widened to `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `face` is out of bounds.
    #[must_use]
    pub fn triangle(&self, face: usize) -> [DVec3; 3] {
        self.faces[face].map(|i| self.vertices[i as usize].as_dvec3())
    }

    /// Unit normal of every face, following the winding `(b - a) × (c - a)`.
    ///
    /// Degenerate faces get a zero normal.
    #[must_use]
    pub fn face_normals(&self) -> Vec<Vec3> {
        (0..self.faces.len())
            .map(|face| face_cross(self.triangle(face)).normalize_or_zero().as_vec3())
            .collect()
    }

    /// Area of every face.
    #[must_use]
    pub fn face_areas(&self) -> Vec<f64> {
        (0..self.faces.len())
            .map(|face| face_cross(self.triangle(face)).length() * 0.5)
            .collect()
    }

    /// Total surface area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.face_areas().iter().sum()
    }
}

fn face_cross([a, b, c]: [DVec3; 3]) -> DVec3 {
    (b - a).cross(c - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> TriMesh {
        TriMesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn rejects_out_of_range_index() {
        let err = TriMesh::new(vec![Vec3::ZERO, Vec3::X], vec![[0, 1, 2]]).unwrap_err();
        assert!(matches!(
            err,
            SampleError::IndexOutOfRange {
                face: 0,
                index: 2,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn square_area_and_normals() {
        let mesh = unit_square();
        assert_eq!(mesh.face_areas(), vec![0.5, 0.5]);
        assert!((mesh.area() - 1.0).abs() < 1e-12);
        for normal in mesh.face_normals() {
            assert_eq!(normal, Vec3::Z);
        }
    }

    #[test]
    fn winding_flips_normal() {
        let mesh = TriMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 2, 1]]).unwrap();
        assert_eq!(mesh.face_normals(), vec![Vec3::NEG_Z]);
    }

    #[test]
    fn degenerate_face_is_kept_with_zero_normal() {
        let mesh = TriMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::Y],
            vec![[0, 1, 2], [0, 1, 3]],
        )
        .unwrap();
        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.face_normals()[0], Vec3::ZERO);
        assert_eq!(mesh.face_areas()[0], 0.0);
        assert_eq!(mesh.face_normals()[1], Vec3::Z);
    }
}
