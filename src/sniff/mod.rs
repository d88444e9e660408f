//! Container-format sniffing for files without a trustworthy extension.
//!
//! `FormatSniffer` reads a four byte header at the current position of any
//! `Read + Seek` source and runs an ordered chain of structural checks:
//!
//! 1. tagged-count container (size field equal to the source length)
//! 2. DARC archive
//! 3. BCLIM image trailer
//! 4. printable ASCII magic
//!
//! Checks 2-4 only run when deep checks are enabled. The source position is
//! restored on every return path.

pub mod batch;
pub(crate) mod heuristics;
pub mod magic;
pub(crate) mod probe;
pub mod sniffer;
pub mod tag;

pub use batch::sniff_paths;
pub use magic::HeaderMagic;
pub use sniffer::{sniff, Evidence, FormatSniffer, Sniffed};
pub use tag::FormatTag;

use crate::config::DEFAULT_TAG;
use crate::error::Result;
use crate::io::IOLimits;
use std::path::Path;

/// Sniff a file on disk with the `"bin"` default tag.
pub fn sniff_path<P: AsRef<Path>>(path: P, bypass_deep_checks: bool) -> Result<FormatTag> {
    FormatSniffer::new(DEFAULT_TAG, bypass_deep_checks)
        .sniff_file(path, &IOLimits::default())
        .map(|sniffed| sniffed.tag)
}
