#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::series::data::ChowData;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array2<f64>> {
    if let Ok(mat_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(mat_ro.as_array().to_owned());
    }

    // pandas.DataFrame path: DataFrame.to_numpy(copy=False) yields a 2-D
    // float64 ndarray when every column is numeric.
    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    // Column-vector convenience: accept a 1-D input as a single-column
    // design matrix.
    if let Ok(col_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        let col = col_ro.as_array().to_owned();
        let n = col.len();
        return col.into_shape_with_order((n, 1)).map_err(|_| {
            PyValueError::new_err("could not reshape 1-D input into a single-column matrix")
        });
    }

    Err(pyo3::exceptions::PyTypeError::new_err(
        "expected a 2-D numpy.ndarray, pandas.DataFrame, or 1-D float64 array of regressors",
    ))
}

#[cfg(feature = "python-bindings")]
pub fn extract_index<'py>(
    index: Option<&Bound<'py, PyAny>>, n_obs: usize,
) -> PyResult<Vec<i64>> {
    let Some(raw_index) = index else {
        // No index supplied: positions 0..n stand in for the keys.
        return Ok((0..n_obs as i64).collect());
    };

    if let Ok(idx_ro) = raw_index.extract::<PyReadonlyArray1<i64>>() {
        return Ok(idx_ro.as_array().to_vec());
    }

    if let Ok(obj) = raw_index.call_method("to_numpy", (false,), None) {
        if let Ok(idx_ro) = obj.extract::<PyReadonlyArray1<i64>>() {
            return Ok(idx_ro.as_array().to_vec());
        }
    }

    raw_index.extract::<Vec<i64>>().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Index, or sequence of int64 keys",
        )
    })
}

#[cfg(feature = "python-bindings")]
pub fn build_chow_data<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
    index: Option<&Bound<'py, PyAny>>,
) -> PyResult<ChowData> {
    let x_mat = extract_f64_matrix(x)?;

    let y_arr = extract_f64_array(py, y)?;
    let y_slice = y_arr.as_slice().map_err(|_| {
        PyValueError::new_err("y must be a 1-D contiguous float64 array or sequence")
    })?;
    let y_vec = Array1::from(y_slice.to_vec());

    let keys = extract_index(index, x_mat.nrows())?;

    // Route through ChowError so the Python boundary sees the same
    // ValueError mapping as test-time failures.
    ChowData::new(keys, x_mat, y_vec).map_err(|e| crate::statistical_tests::ChowError::from(e).into())
}
