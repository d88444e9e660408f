//! Parallel sniffing of many independent files.

use super::sniffer::{FormatSniffer, Sniffed};
use crate::config::SniffConfig;
use crate::error::Result;
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

/// Sniff every path with one sniffer built from `config`. Results keep the
/// order of `paths`; a file that cannot be opened yields its own error
/// without affecting the others. An invalid `config` fails the whole batch.
pub fn sniff_paths<P>(paths: &[P], config: &SniffConfig) -> Result<Vec<Result<Sniffed>>>
where
    P: AsRef<Path> + Sync,
{
    config.validate()?;
    debug!(count = paths.len(), "Sniffing files in parallel");
    let sniffer = FormatSniffer::from_config(config);
    Ok(paths
        .par_iter()
        .map(|path| sniffer.sniff_file(path, &config.io))
        .collect())
}
