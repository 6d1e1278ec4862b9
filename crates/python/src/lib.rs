#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod convert;
mod mesh;
mod sample;
mod stats;

#[pymodule]
fn scatterview_rs(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Sample
    m.add_class::<sample::PyDataSample>()?;

    // Statistics
    m.add_class::<stats::PyWavelengthExtrema>()?;
    m.add_class::<stats::PyGlobalStatistics>()?;
    m.add_class::<stats::PySelectionStatistics>()?;

    // Geometry
    m.add_function(wrap_pyfunction!(mesh::project_angles_py, m)?)?;
    m.add_function(wrap_pyfunction!(mesh::triangulate_py, m)?)?;

    Ok(())
}
