use numpy::PyArray2;
use pyo3::prelude::*;

use crate::convert::{rows_from_numpy, to_numpy2};

/// Unit-disk coordinates of `(theta, phi)` rows given in degrees.
#[pyfunction(name = "project_angles")]
pub fn project_angles_py<'py>(
    py: Python<'py>,
    angles: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let (data, _, _) = rows_from_numpy(angles, Some(2))?;
    let points: Vec<[f32; 2]> = data
        .chunks_exact(2)
        .map(|a| scatterview_core::point::polar_unwrap(a[0], a[1]))
        .collect();
    to_numpy2(py, &points)
}

/// Delaunay faces of 2D points, counter-clockwise, as an (M, 3) array.
#[pyfunction(name = "triangulate")]
pub fn triangulate_py<'py>(
    py: Python<'py>,
    points: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let (data, _, _) = rows_from_numpy(points, Some(2))?;
    let points: Vec<[f32; 2]> = data.chunks_exact(2).map(|p| [p[0], p[1]]).collect();
    let faces = scatterview_mesh::triangulate(&points).faces;
    to_numpy2(py, &faces)
}
