use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use scatterview_core::{Metadata, SampleSet};
use scatterview_sample::{DataSample, SampleConfig};
use scatterview_selection::{SelectionBox, SelectionMode};

use crate::convert::{matrix_from_numpy, rows_from_numpy, sample_err, to_numpy2};
use crate::stats::{PyGlobalStatistics, PySelectionStatistics};

fn parse_mode(mode: &str) -> PyResult<SelectionMode> {
    match mode.to_ascii_lowercase().as_str() {
        "standard" | "replace" => Ok(SelectionMode::Standard),
        "add" => Ok(SelectionMode::Add),
        "subtract" => Ok(SelectionMode::Subtract),
        other => Err(PyValueError::new_err(format!(
            "unknown selection mode `{other}`, expected standard/add/subtract"
        ))),
    }
}

#[pyclass(name = "DataSample")]
#[derive(Debug, Clone)]
pub struct PyDataSample {
    pub(crate) inner: DataSample,
}

#[pymethods]
impl PyDataSample {
    /// Builds a sample from an (N, 2 + C) array of `theta, phi, i0, ...` rows.
    ///
    /// Accepts f32 or f64 arrays. `path_lengths`, when given, must sum to N
    /// or it is ignored and paths are inferred from the sample order.
    #[new]
    #[pyo3(signature = (rows, name="sample", incident_angle=[0.0, 0.0], wavelengths=Vec::new(), path_lengths=None, max_pick_distance=30.0))]
    pub fn new(
        rows: &Bound<'_, PyAny>,
        name: &str,
        incident_angle: [f32; 2],
        wavelengths: Vec<f32>,
        path_lengths: Option<Vec<usize>>,
        max_pick_distance: f32,
    ) -> PyResult<Self> {
        let (data, n, cols) = rows_from_numpy(rows, None)?;
        if cols < 3 {
            return Err(PyValueError::new_err(
                "expected shape (N, 2 + C) with at least one intensity channel",
            ));
        }
        let samples = SampleSet::from_rows(&data, cols - 2)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let mut metadata = Metadata::new(name, incident_angle);
        metadata.wavelengths = wavelengths;
        metadata.path_lengths = path_lengths;
        metadata.points_in_file = n;

        let mut config = SampleConfig::default();
        config.pick.max_pick_distance = max_pick_distance;

        let inner = DataSample::new(samples, metadata, config).map_err(sample_err)?;
        Ok(Self { inner })
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "DataSample(name={:?}, n={}, channels={}, selected={})",
            self.inner.metadata().sample_name,
            self.inner.len(),
            self.inner.channel_count(),
            self.inner.selection_count()
        )
    }

    // Selection

    #[pyo3(signature = (view_projection, start, end, viewport, mode="standard"))]
    pub fn select_in_box(
        &mut self,
        view_projection: &Bound<'_, PyAny>,
        start: [f32; 2],
        end: [f32; 2],
        viewport: [u32; 2],
        mode: &str,
    ) -> PyResult<usize> {
        let matrix = matrix_from_numpy(view_projection)?;
        let mode = parse_mode(mode)?;
        self.inner.select_in_box(
            &matrix,
            &SelectionBox::from_corners(start, end),
            viewport,
            mode,
        );
        Ok(self.inner.selection_count())
    }

    pub fn select_closest(
        &mut self,
        view_projection: &Bound<'_, PyAny>,
        pixel: [f32; 2],
        viewport: [u32; 2],
    ) -> PyResult<Option<usize>> {
        let matrix = matrix_from_numpy(view_projection)?;
        Ok(self.inner.select_closest(&matrix, pixel, viewport))
    }

    #[pyo3(signature = (highest=true))]
    pub fn select_extreme(&mut self, highest: bool) -> Option<usize> {
        self.inner.select_extreme(highest)
    }

    pub fn select_all(&mut self) {
        self.inner.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.inner.deselect_all();
    }

    pub fn move_selection(&mut self, up: bool) {
        self.inner.move_selection(up);
    }

    pub fn delete_selected(&mut self) -> PyResult<usize> {
        self.inner.delete_selected().map_err(sample_err)
    }

    // Display state

    pub fn set_wavelength_index(&mut self, wavelength: usize) -> PyResult<()> {
        self.inner.set_wavelength_index(wavelength).map_err(sample_err)
    }

    pub fn toggle_log_view(&mut self) {
        self.inner.toggle_log_view();
    }

    pub fn set_incident_angle(&mut self, incident_angle: [f32; 2]) -> PyResult<()> {
        self.inner.set_incident_angle(incident_angle).map_err(sample_err)
    }

    pub fn derive_all_normals(&mut self) -> PyResult<()> {
        self.inner.derive_all_normals().map_err(sample_err)
    }

    #[getter]
    pub fn wavelength_index(&self) -> usize {
        self.inner.wavelength_index()
    }

    #[getter]
    pub fn display_as_log(&self) -> bool {
        self.inner.display_as_log()
    }

    #[getter]
    pub fn name(&self) -> String {
        self.inner.metadata().sample_name.clone()
    }

    #[getter]
    pub fn incident_angle(&self) -> [f32; 2] {
        self.inner.metadata().incident_angle
    }

    pub fn channel_label(&self, channel: usize) -> String {
        self.inner.metadata().channel_label(channel)
    }

    // Buffers

    pub fn heights<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, self.inner.heights())
    }

    pub fn normals<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let normals = self.inner.normals().map_err(sample_err)?;
        to_numpy2(py, normals)
    }

    pub fn faces<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let faces = self.inner.faces().map_err(sample_err)?;
        to_numpy2(py, faces)
    }

    pub fn positions<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let buffers = self.inner.render_buffers().map_err(sample_err)?;
        to_numpy2(py, &buffers.positions())
    }

    pub fn projected_points<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        to_numpy2(py, self.inner.projected_points())
    }

    pub fn path_breaks(&self) -> Vec<usize> {
        self.inner.path_segments().breaks().to_vec()
    }

    pub fn selected_flags<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_slice_bound(py, self.inner.selected_flags())
    }

    /// The stored samples as (N, 2 + C) rows, ready to be written back out.
    pub fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let samples = self.inner.samples();
        let stride = samples.channel_count() + 2;
        let rows = samples.to_rows();
        if rows.is_empty() {
            return Ok(PyArray2::zeros_bound(py, [0, stride], false));
        }
        Ok(PyArray2::from_vec2_bound(
            py,
            &rows.chunks(stride).map(|c| c.to_vec()).collect::<Vec<_>>(),
        )?)
    }

    // Statistics

    pub fn selection_count(&self) -> usize {
        self.inner.selection_count()
    }

    pub fn has_selection(&self) -> bool {
        self.inner.has_selection()
    }

    pub fn selection_center(&self) -> Option<[f32; 3]> {
        self.inner.selection_center()
    }

    pub fn incident_origin(&self) -> [f32; 3] {
        self.inner.incident_origin()
    }

    pub fn predicted_outgoing_origin(&self) -> [f32; 3] {
        self.inner.predicted_outgoing_origin()
    }

    pub fn global_statistics(&self) -> PyGlobalStatistics {
        self.inner.global_statistics().into()
    }

    pub fn selection_statistics(&self) -> PySelectionStatistics {
        self.inner.selection_statistics().into()
    }
}
