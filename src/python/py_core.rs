//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::ScoreCategory;

/// Python wrapper for ScoreCategory.
#[pyclass(name = "ScoreCategory")]
#[derive(Clone, Copy, Debug)]
pub struct PyScoreCategory(pub ScoreCategory);

#[pymethods]
impl PyScoreCategory {
    /// Look up a category by name, e.g. "Low" or "twelves".
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        name.parse()
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    /// All categories in declaration order.
    #[staticmethod]
    fn all() -> Vec<PyScoreCategory> {
        ScoreCategory::all().map(PyScoreCategory).collect()
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    #[getter]
    fn target(&self) -> u32 {
        self.0.target()
    }

    fn __repr__(&self) -> String {
        format!("ScoreCategory({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}
