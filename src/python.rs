use crate::gsp::{mine, CandidateStrategy, LastLevelPolicy, MinerConfig, MiningError};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

fn to_py_err(err: MiningError) -> PyErr {
    match err {
        MiningError::InvalidMinSupport(_) | MiningError::EmptyInput => {
            PyValueError::new_err(err.to_string())
        }
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Mines frequent contiguous sequences, one dict per level keyed by tuples.
#[pyfunction]
#[pyo3(signature = (transactions, min_support=0.5, keep_last_level=false, num_threads=0, join=false))]
fn gsp<'py>(
    py: Python<'py>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    keep_last_level: bool,
    num_threads: usize,
    join: bool,
) -> PyResult<Vec<Bound<'py, PyDict>>> {
    let strategy = if join { CandidateStrategy::PrefixJoin } else { CandidateStrategy::ItemProduct };
    let last_level = if keep_last_level { LastLevelPolicy::KeepNonEmpty } else { LastLevelPolicy::DropLast };
    let config = MinerConfig::new(min_support)
        .with_threads(num_threads)
        .with_strategy(strategy)
        .with_last_level(last_level);

    let result = py
        .allow_threads(|| mine(transactions, &config))
        .map_err(to_py_err)?;

    let mut levels = Vec::with_capacity(result.len());
    for table in result {
        let dict = PyDict::new_bound(py);
        for (sequence, count) in table.into_inner() {
            dict.set_item(PyTuple::new_bound(py, sequence), count)?;
        }
        levels.push(dict);
    }

    Ok(levels)
}

#[pymodule]
fn sequin(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gsp, m)?)?;
    Ok(())
}
