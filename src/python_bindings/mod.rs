//! Python bindings for binsniff.
//!
//! Exposes the sniffer and the pattern search as plain functions taking and
//! returning Python builtins.

use crate::config::{SniffConfig, DEFAULT_TAG};
use crate::search::index_of_bytes;
use crate::sniff::FormatSniffer;
use pyo3::prelude::*;
use std::io::Cursor;

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sniff_bytes_py, m)?)?;
    m.add_function(wrap_pyfunction!(sniff_path_py, m)?)?;
    m.add_function(wrap_pyfunction!(index_of_bytes_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    Ok(())
}

/// Guess the format of an in-memory buffer.
#[pyfunction]
#[pyo3(name = "sniff_bytes")]
#[pyo3(signature = (data, default_tag=DEFAULT_TAG, bypass=false))]
fn sniff_bytes_py(data: &[u8], default_tag: &str, bypass: bool) -> String {
    FormatSniffer::new(default_tag, bypass)
        .sniff(&mut Cursor::new(data))
        .into_string()
}

/// Guess the format of a file on disk.
#[pyfunction]
#[pyo3(name = "sniff_path")]
#[pyo3(signature = (path, bypass=false, max_file_size=None))]
fn sniff_path_py(
    path: std::path::PathBuf,
    bypass: bool,
    max_file_size: Option<u64>,
) -> PyResult<String> {
    let mut config = SniffConfig::new().with_bypass_deep_checks(bypass);
    if let Some(limit) = max_file_size {
        config.io.max_file_size = limit;
    }
    config.validate()?;
    let sniffed = FormatSniffer::from_config(&config).sniff_file(&path, &config.io)?;
    Ok(sniffed.tag.into_string())
}

/// First offset of `needle` in `haystack`, or None.
#[pyfunction]
#[pyo3(name = "index_of_bytes")]
#[pyo3(signature = (haystack, needle, start=0, window=0))]
fn index_of_bytes_py(
    haystack: &[u8],
    needle: &[u8],
    start: usize,
    window: usize,
) -> Option<usize> {
    index_of_bytes(haystack, needle, start, window)
}

/// Route library tracing output to stderr.
#[pyfunction]
#[pyo3(name = "init_logging")]
#[pyo3(signature = (json=false))]
fn init_logging_py(json: bool) {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
}
