//! Wavefront OBJ loading.
//!
//! Uses the raw `obj` parser so positions and polygons come through in file
//! order without any welding. Polygons with more than three corners are
//! split into a triangle fan; texture and normal indices are ignored.
//! Per-vertex colours (`v x y z r g b [a]`) are dropped before parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;
use obj::raw::object::Polygon;

use crate::error::{SampleError, SampleResult};
use crate::mesh::TriMesh;

/// Load an OBJ file from disk.
pub fn load_obj(path: &Path) -> SampleResult<TriMesh> {
    let file = File::open(path).map_err(|source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_obj(BufReader::new(file))
}

/// Parse OBJ data from a reader.
pub fn read_obj<R: BufRead>(reader: R) -> SampleResult<TriMesh> {
    let text = strip_vertex_colors(reader)?;
    let raw = obj::raw::parse_obj(text.as_bytes()).map_err(|e| SampleError::Parse {
        message: e.to_string(),
    })?;

    let vertices = raw
        .positions
        .iter()
        .map(|&(x, y, z, _w)| Vec3::new(x, y, z))
        .collect();

    let mut faces = Vec::with_capacity(raw.polygons.len());
    for polygon in &raw.polygons {
        let corners = polygon_positions(polygon);
        let Some((&first, rest)) = corners.split_first() else {
            continue;
        };
        for pair in rest.windows(2) {
            faces.push([
                to_index(first)?,
                to_index(pair[0])?,
                to_index(pair[1])?,
            ]);
        }
    }

    TriMesh::new(vertices, faces)
}

/// Cut `v` lines carrying colour channels down to their position.
fn strip_vertex_colors<R: BufRead>(reader: R) -> SampleResult<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line.map_err(|e| SampleError::Parse {
            message: e.to_string(),
        })?;
        let mut fields = line.split_whitespace();
        // `v` plus x y z w is the most the parser accepts.
        if fields.next() == Some("v") && line.split_whitespace().count() > 5 {
            text.push_str("v ");
            text.push_str(&fields.take(3).collect::<Vec<_>>().join(" "));
        } else {
            text.push_str(&line);
        }
        text.push('\n');
    }
    Ok(text)
}

fn polygon_positions(polygon: &Polygon) -> Vec<usize> {
    match polygon {
        Polygon::P(idx) => idx.clone(),
        Polygon::PT(idx) | Polygon::PN(idx) => idx.iter().map(|i| i.0).collect(),
        Polygon::PTN(idx) => idx.iter().map(|i| i.0).collect(),
    }
}

fn to_index(index: usize) -> SampleResult<u32> {
    u32::try_from(index).map_err(|_| SampleError::Parse {
        message: format!("vertex index {index} does not fit in 32 bits"),
    })
}
