//! Container-format sniffing and exact byte-pattern search for dumped game
//! and firmware binaries.
//!
//! - [`sniff`](mod@sniff) guesses a format tag from a four byte header plus structural
//!   checks against the source length.
//! - [`search`](mod@search) finds fixed byte signatures inside a buffer.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod search;
pub mod sniff;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use config::SniffConfig;
pub use error::{Result, SniffError};
pub use search::{index_of_bytes, PatternMatcher, SearchWindow};
pub use sniff::{sniff, sniff_path, sniff_paths, Evidence, FormatSniffer, FormatTag, Sniffed};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// Python module entry point.
#[cfg(feature = "python-ext")]
#[pymodule]
fn binsniff(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m)
}
