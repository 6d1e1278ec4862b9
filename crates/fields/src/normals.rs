use rayon::prelude::*;
use scatterview_mesh::{display_position, Mesh};

use crate::FieldError;

/// Area-weighted vertex normals of the height surface.
///
/// Every face contributes its unnormalized normal (twice its area times the
/// unit normal) to its three vertices; the sum is normalized per vertex.
/// Faces are counter-clockwise in the parameter domain, so a flat field gets
/// `+Y` normals. Vertices whose sum vanishes (no faces, or only zero-area
/// faces) get `[0, 0, 0]`. Coincident samples copy the normal of their
/// representative.
///
/// The per-vertex gather runs in parallel with rayon; each vertex only reads
/// the shared mesh and writes its own entry.
pub fn vertex_normals(
    mesh: &Mesh,
    points: &[[f32; 2]],
    heights: &[f32],
) -> Result<Vec<[f32; 3]>, FieldError> {
    let n = mesh.vertex_count();
    if points.len() != n {
        return Err(FieldError::LengthMismatch {
            field: "projected points",
            len: points.len(),
            vertices: n,
        });
    }
    if heights.len() != n {
        return Err(FieldError::LengthMismatch {
            field: "heights",
            len: heights.len(),
            vertices: n,
        });
    }
    if mesh.is_empty() {
        return Err(FieldError::MissingMesh { vertices: n });
    }

    let face_normals: Vec<[f32; 3]> = mesh
        .faces()
        .par_iter()
        .map(|f| {
            let a = display_position(points[f[0] as usize], heights[f[0] as usize]);
            let b = display_position(points[f[1] as usize], heights[f[1] as usize]);
            let c = display_position(points[f[2] as usize], heights[f[2] as usize]);
            // (c - a) x (b - a) points up for a counter-clockwise XZ triangle
            let n = cross(sub(c, a), sub(b, a));
            if n.iter().all(|v| v.is_finite()) {
                n
            } else {
                [0.0; 3]
            }
        })
        .collect();

    let mut normals: Vec<[f32; 3]> = (0..n)
        .into_par_iter()
        .map(|v| {
            let mut sum = [0.0f32; 3];
            for &f in mesh.incident_faces(v) {
                let fnrm = face_normals[f as usize];
                sum[0] += fnrm[0];
                sum[1] += fnrm[1];
                sum[2] += fnrm[2];
            }
            normalize_or_zero(sum)
        })
        .collect();

    for &(dup, rep) in mesh.coincident() {
        normals[dup as usize] = normals[rep as usize];
    }

    Ok(normals)
}

#[inline]
fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn normalize_or_zero(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 1e-12 && len.is_finite() {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0; 3]
    }
}
