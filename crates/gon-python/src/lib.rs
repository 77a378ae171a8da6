//! # gon-python
//!
//! Python bindings for the GON parser and formatter, built with PyO3.
//!
//! Exposes the following functions to Python as the `gon_format` module:
//!
//! - `format(gon)` -- GON string -> canonical GON string
//! - `to_json(gon, pretty=False)` -- GON string -> JSON string
//! - `check(gon)` -- validate, returning the number of top-level members
//! - `lookup(gon, path)` -- JSON text of the value at a dotted path, or `None`

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn py_error(e: gon_core::GonError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse(gon: &str) -> PyResult<gon_core::Document> {
    gon_core::load_from_buffer(gon).map_err(py_error)
}

/// Parse a GON string and re-emit it in canonical layout.
///
/// Args:
///     gon: GON document text.
///
/// Returns:
///     The formatted document.
///
/// Raises:
///     ValueError: If a brace or bracket is never closed.
#[pyfunction]
fn format(gon: &str) -> PyResult<String> {
    parse(gon)?.to_text().map_err(py_error)
}

/// Convert a GON string to JSON.
///
/// Duplicate member names keep the last value. Integer literals become JSON
/// integers, other numbers become floats.
///
/// Args:
///     gon: GON document text.
///     pretty: Indent the output with two spaces.
///
/// Raises:
///     ValueError: If the document is malformed.
#[pyfunction]
#[pyo3(signature = (gon, pretty=false))]
fn to_json(gon: &str, pretty: bool) -> PyResult<String> {
    let doc = parse(gon)?;
    let root = doc.root();
    let json = if pretty {
        gon_core::to_json_pretty(&root)
    } else {
        gon_core::to_json(&root)
    };
    json.map_err(py_error)
}

/// Validate a GON string and return its number of top-level members.
#[pyfunction]
fn check(gon: &str) -> PyResult<usize> {
    Ok(parse(gon)?.root().children().count())
}

/// Look up a dotted path (e.g. `"window.size.0"`) and return the value as JSON
/// text, or `None` when the path does not resolve.
#[pyfunction]
fn lookup(gon: &str, path: &str) -> PyResult<Option<String>> {
    let doc = parse(gon)?;
    let value = doc.root().lookup(path);
    if value.is_shared_null() {
        return Ok(None);
    }
    gon_core::to_json(&value).map(Some).map_err(py_error)
}

/// The `gon_format` Python module, implemented in Rust via PyO3.
#[pymodule]
fn gon_format(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(format, m)?)?;
    m.add_function(wrap_pyfunction!(to_json, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    m.add_function(wrap_pyfunction!(lookup, m)?)?;
    Ok(())
}
