use nalgebra::Matrix4;
use numpy::{PyArray2, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use scatterview_sample::SampleError;

pub(crate) fn sample_err(err: SampleError) -> PyErr {
    match err {
        SampleError::Core(e) => PyValueError::new_err(e.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// Reads a C-contiguous 2D array of f32 or f64 into row-major f32 data.
///
/// Returns the data and the number of rows; `columns` constrains the width
/// when given.
pub(crate) fn rows_from_numpy(
    array: &Bound<'_, PyAny>,
    columns: Option<usize>,
) -> PyResult<(Vec<f32>, usize, usize)> {
    if let Ok(arr) = array.downcast::<PyArray2<f32>>() {
        let readonly = arr.readonly();
        let (rows, cols) = checked_shape(readonly.is_c_contiguous(), readonly.shape(), columns)?;
        let slice = readonly.as_slice().map_err(|_| {
            PyValueError::new_err("failed to read array as contiguous slice")
        })?;
        return Ok((slice.to_vec(), rows, cols));
    }
    if let Ok(arr) = array.downcast::<PyArray2<f64>>() {
        let readonly = arr.readonly();
        let (rows, cols) = checked_shape(readonly.is_c_contiguous(), readonly.shape(), columns)?;
        let slice = readonly.as_slice().map_err(|_| {
            PyValueError::new_err("failed to read array as contiguous slice")
        })?;
        return Ok((slice.iter().map(|&v| v as f32).collect(), rows, cols));
    }
    Err(PyTypeError::new_err(
        "expected a 2D NumPy array with dtype float32 or float64",
    ))
}

fn checked_shape(
    c_contiguous: bool,
    shape: &[usize],
    columns: Option<usize>,
) -> PyResult<(usize, usize)> {
    if !c_contiguous {
        return Err(PyValueError::new_err(
            "array must be C-contiguous (row-major). \
             Use numpy.ascontiguousarray(arr) to convert.",
        ));
    }
    if shape.len() != 2 {
        return Err(PyValueError::new_err("expected a 2D array"));
    }
    if let Some(expected) = columns {
        if shape[1] != expected {
            return Err(PyValueError::new_err(format!(
                "expected shape (N, {expected}), got ({}, {})",
                shape[0], shape[1]
            )));
        }
    }
    Ok((shape[0], shape[1]))
}

/// A 4x4 row-major view-projection matrix.
pub(crate) fn matrix_from_numpy(array: &Bound<'_, PyAny>) -> PyResult<Matrix4<f32>> {
    let (data, rows, _) = rows_from_numpy(array, Some(4))?;
    if rows != 4 {
        return Err(PyValueError::new_err("expected a (4, 4) matrix"));
    }
    Ok(Matrix4::from_row_slice(&data))
}

pub(crate) fn to_numpy2<'py, T: numpy::Element + Copy, const N: usize>(
    py: Python<'py>,
    rows: &[[T; N]],
) -> PyResult<Bound<'py, PyArray2<T>>> {
    let nested: Vec<Vec<T>> = rows.iter().map(|r| r.to_vec()).collect();
    if nested.is_empty() {
        return Ok(PyArray2::zeros_bound(py, [0, N], false));
    }
    Ok(PyArray2::from_vec2_bound(py, &nested)?)
}
