//! Area-weighted surface sampling.

use glam::DVec3;
use rand::Rng;

use crate::SurfacePoint;
use crate::error::{SampleError, SampleResult};
use crate::mesh::TriMesh;

/// Draw `count` points uniformly over the surface of `mesh`.
///
/// A face is picked with probability proportional to its area, then a
/// point is placed uniformly inside it from two reflected barycentric
/// draws. Zero-area faces are never picked.
///
/// # Returns
///
/// Points in draw order, each with the index of the face it lies on.
pub fn sample_surface<R: Rng>(
    mesh: &TriMesh,
    count: usize,
    rng: &mut R,
) -> SampleResult<Vec<(DVec3, usize)>> {
    let cumulative: Vec<f64> = mesh
        .face_areas()
        .iter()
        .scan(0.0, |total, area| {
            *total += area;
            Some(*total)
        })
        .collect();

    let total = cumulative.last().copied().unwrap_or(0.0);
    if !(total.is_finite() && total > 0.0) {
        return Err(SampleError::DegenerateSurface {
            face_count: mesh.faces().len(),
            area: total,
        });
    }

    // Landing spot for a threshold that rounds up to the total.
    let last_nonempty = cumulative.partition_point(|&c| c < total);
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let threshold = rng.random::<f64>() * total;
        // First face whose running total exceeds the threshold.
        let face = match cumulative.partition_point(|&c| c <= threshold) {
            i if i < cumulative.len() => i,
            _ => last_nonempty,
        };

        let mut u = rng.random::<f64>();
        let mut v = rng.random::<f64>();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }

        let [a, b, c] = mesh.triangle(face);
        samples.push((a + (b - a) * u + (c - a) * v, face));
    }

    Ok(samples)
}

/// Draw `count` surface points, each paired with its face's normal.
pub fn sample_faces<R: Rng>(
    mesh: &TriMesh,
    count: usize,
    rng: &mut R,
) -> SampleResult<Vec<SurfacePoint>> {
    let normals = mesh.face_normals();
    let points = sample_surface(mesh, count, rng)?
        .into_iter()
        .map(|(position, face)| SurfacePoint {
            position: position.as_vec3(),
            normal: normals[face],
        })
        .collect();
    Ok(points)
}
