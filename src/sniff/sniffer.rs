//! The ordered heuristic chain.
//!
//! Checks run from the strongest evidence (an internal size field matching
//! the exact source length) to the weakest (printable header bytes); the
//! first one that proves its layout decides the tag.

use super::heuristics;
use super::magic::{HeaderMagic, HEADER_MAGIC_SIZE};
use super::probe::{Probe, ProbeError, ProbeResult};
use super::tag::FormatTag;
use crate::config::SniffConfig;
use crate::error::Result;
use crate::io::{IOLimits, SafeReader};
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Which check produced a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evidence {
    TaggedContainer,
    Darc,
    Bclim,
    AsciiMagic,
    /// Nothing conclusive; the tag is the caller's default.
    Fallback,
}

/// A sniffing verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sniffed {
    pub tag: FormatTag,
    pub evidence: Evidence,
}

#[derive(Debug, Clone)]
pub struct FormatSniffer {
    default_tag: FormatTag,
    bypass_deep_checks: bool,
}

impl Default for FormatSniffer {
    fn default() -> Self {
        Self::from_config(&SniffConfig::default())
    }
}

impl FormatSniffer {
    /// `bypass_deep_checks` limits the chain to the tagged-container check,
    /// which costs a single read; the other checks seek across the source.
    pub fn new(default_tag: impl Into<FormatTag>, bypass_deep_checks: bool) -> Self {
        Self {
            default_tag: default_tag.into(),
            bypass_deep_checks,
        }
    }

    pub fn from_config(config: &SniffConfig) -> Self {
        Self::new(config.default_tag.as_str(), config.bypass_deep_checks)
    }

    pub fn default_tag(&self) -> &FormatTag {
        &self.default_tag
    }

    pub fn bypasses_deep_checks(&self) -> bool {
        self.bypass_deep_checks
    }

    /// Guess the format of `source` from its current position.
    pub fn sniff<R: Read + Seek>(&self, source: &mut R) -> FormatTag {
        self.identify(source).tag
    }

    /// Like [`sniff`](Self::sniff) but also reports which check fired.
    ///
    /// Never fails: if the source cannot even report its position or length,
    /// the default tag is returned.
    pub fn identify<R: Read + Seek>(&self, source: &mut R) -> Sniffed {
        match self.try_identify(source) {
            Ok(sniffed) => sniffed,
            Err(e) => {
                warn!(error = %e, "Byte source unusable for sniffing");
                self.fallback()
            }
        }
    }

    /// Runs the chain, surfacing only errors from saving or restoring the
    /// source position. Heuristic read failures are misses, not errors.
    pub fn try_identify<R: Read + Seek>(&self, source: &mut R) -> Result<Sniffed> {
        let start = source.stream_position()?;
        let len = source.seek(SeekFrom::End(0))?;

        let verdict = {
            let mut probe = Probe::new(&mut *source, len);
            self.run_chain(&mut probe, start)
        };

        source.seek(SeekFrom::Start(start))?;
        debug!(
            tag = %verdict.tag,
            evidence = ?verdict.evidence,
            start,
            len,
            "Sniffed source"
        );
        Ok(verdict)
    }

    /// Sniff a file on disk from its first byte.
    pub fn sniff_file<P: AsRef<Path>>(&self, path: P, limits: &IOLimits) -> Result<Sniffed> {
        let reader = SafeReader::open(path, limits)?;
        let mut cursor = reader.cursor();
        let sniffed = self.identify(&mut cursor);
        debug!(
            path = %reader.path().display(),
            tag = %sniffed.tag,
            "Sniffed file"
        );
        Ok(sniffed)
    }

    fn run_chain<R: Read + Seek>(&self, probe: &mut Probe<'_, R>, start: u64) -> Sniffed {
        let magic = match probe.read_array::<HEADER_MAGIC_SIZE>(start) {
            Ok(bytes) => HeaderMagic::new(bytes),
            Err(e) => {
                debug!(error = %e, "No header magic available");
                return self.fallback();
            }
        };

        if let Some(tag) = settle(
            Evidence::TaggedContainer,
            heuristics::tagged_container(probe, &magic, start),
        ) {
            return self.conclude(tag, Evidence::TaggedContainer);
        }

        if self.bypass_deep_checks {
            return self.fallback();
        }

        if let Some(tag) = settle(Evidence::Darc, heuristics::darc(probe, &magic, start)) {
            return self.conclude(tag, Evidence::Darc);
        }

        if let Some(tag) = settle(Evidence::Bclim, heuristics::bclim(probe)) {
            return self.conclude(tag, Evidence::Bclim);
        }

        match heuristics::ascii_magic(&magic) {
            Some(tag) => self.conclude(tag, Evidence::AsciiMagic),
            None => self.fallback(),
        }
    }

    fn conclude(&self, tag: FormatTag, evidence: Evidence) -> Sniffed {
        if tag.is_conclusive() {
            Sniffed { tag, evidence }
        } else {
            trace!(candidate = %tag, "Candidate tag too short");
            self.fallback()
        }
    }

    fn fallback(&self) -> Sniffed {
        Sniffed {
            tag: self.default_tag.clone(),
            evidence: Evidence::Fallback,
        }
    }
}

fn settle(evidence: Evidence, outcome: ProbeResult<Option<FormatTag>>) -> Option<FormatTag> {
    match outcome {
        Ok(Some(tag)) => Some(tag),
        Ok(None) => {
            trace!(heuristic = ?evidence, "Layout mismatch");
            None
        }
        Err(ProbeError::Io(e)) => {
            warn!(heuristic = ?evidence, error = %e, "Source read failed during heuristic");
            None
        }
        Err(e) => {
            trace!(heuristic = ?evidence, error = %e, "Heuristic read out of range");
            None
        }
    }
}

/// Guess the format of `source` from its current position, falling back to
/// `default_tag`. The position is restored before returning.
pub fn sniff<R: Read + Seek>(
    source: &mut R,
    default_tag: &str,
    bypass_deep_checks: bool,
) -> FormatTag {
    FormatSniffer::new(default_tag, bypass_deep_checks).sniff(source)
}
