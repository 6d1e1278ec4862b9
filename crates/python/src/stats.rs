use pyo3::prelude::*;
use scatterview_stats::{PointsStatistics, SelectionStatistics, WavelengthExtrema};

#[pyclass(name = "WavelengthExtrema")]
#[derive(Debug, Clone)]
pub struct PyWavelengthExtrema {
    #[pyo3(get)]
    pub lowest_index: usize,
    #[pyo3(get)]
    pub lowest_value: f32,
    #[pyo3(get)]
    pub highest_index: usize,
    #[pyo3(get)]
    pub highest_value: f32,
    #[pyo3(get)]
    pub average: f32,
}

#[pymethods]
impl PyWavelengthExtrema {
    pub fn __repr__(&self) -> String {
        format!(
            "WavelengthExtrema(lowest={}@{}, highest={}@{}, average={:.6})",
            self.lowest_value, self.lowest_index, self.highest_value, self.highest_index, self.average
        )
    }
}

impl From<&WavelengthExtrema> for PyWavelengthExtrema {
    fn from(e: &WavelengthExtrema) -> Self {
        Self {
            lowest_index: e.lowest_index,
            lowest_value: e.lowest_value,
            highest_index: e.highest_index,
            highest_value: e.highest_value,
            average: e.average,
        }
    }
}

fn convert_extrema(extrema: &[Option<WavelengthExtrema>]) -> Vec<Option<PyWavelengthExtrema>> {
    extrema.iter().map(|e| e.as_ref().map(Into::into)).collect()
}

#[pyclass(name = "GlobalStatistics")]
#[derive(Debug, Clone)]
pub struct PyGlobalStatistics {
    #[pyo3(get)]
    pub count: usize,
    #[pyo3(get)]
    pub centroid: [f32; 2],
    /// `(theta, phi, intensity)` per channel.
    #[pyo3(get)]
    pub average_points: Vec<[f32; 3]>,
    #[pyo3(get)]
    pub extrema: Vec<Option<PyWavelengthExtrema>>,
}

#[pymethods]
impl PyGlobalStatistics {
    pub fn __repr__(&self) -> String {
        format!("GlobalStatistics(count={}, channels={})", self.count, self.extrema.len())
    }
}

impl From<&PointsStatistics> for PyGlobalStatistics {
    fn from(s: &PointsStatistics) -> Self {
        Self {
            count: s.count,
            centroid: s.centroid,
            average_points: s
                .average_points
                .iter()
                .map(|p| [p.theta, p.phi, p.intensity])
                .collect(),
            extrema: convert_extrema(&s.extrema),
        }
    }
}

#[pyclass(name = "SelectionStatistics")]
#[derive(Debug, Clone)]
pub struct PySelectionStatistics {
    #[pyo3(get)]
    pub count: usize,
    #[pyo3(get)]
    pub center: [f32; 3],
    /// `(min, max)` corners, `None` for an empty selection.
    #[pyo3(get)]
    pub extent: Option<([f32; 3], [f32; 3])>,
    #[pyo3(get)]
    pub average_point: [f32; 3],
    #[pyo3(get)]
    pub extrema: Vec<Option<PyWavelengthExtrema>>,
}

#[pymethods]
impl PySelectionStatistics {
    pub fn __repr__(&self) -> String {
        format!("SelectionStatistics(count={})", self.count)
    }
}

impl From<&SelectionStatistics> for PySelectionStatistics {
    fn from(s: &SelectionStatistics) -> Self {
        let p = s.average_point;
        Self {
            count: s.count,
            center: s.center,
            extent: (!s.extent.is_empty()).then_some((s.extent.min, s.extent.max)),
            average_point: [p.theta, p.phi, p.intensity],
            extrema: convert_extrema(&s.extrema),
        }
    }
}
