//! Exact byte-pattern search for locating known code or data signatures in
//! dumped binaries.
//!
//! The search is a plain left-to-right comparison at every candidate offset.
//! All index arithmetic is clamped to the haystack, so bad arguments give
//! `None` rather than a panic.

use crate::error::{Result, SniffError};
use std::ops::Range;
use tracing::trace;

/// One search request: `needle` in `haystack`, trying candidate offsets from
/// `start`. A `window` of zero means "up to the end of the haystack minus the
/// needle length"; otherwise candidates stop at `start + window`. The end of
/// the candidate range is exclusive in both cases.
#[derive(Debug, Clone, Copy)]
pub struct SearchWindow<'a> {
    pub haystack: &'a [u8],
    pub needle: &'a [u8],
    pub start: usize,
    pub window: usize,
}

impl<'a> SearchWindow<'a> {
    pub fn new(haystack: &'a [u8], needle: &'a [u8], start: usize, window: usize) -> Self {
        Self {
            haystack,
            needle,
            start,
            window,
        }
    }

    /// Candidate start offsets, clamped so every candidate leaves room for
    /// the whole needle. `None` when no candidate exists.
    pub fn candidates(&self) -> Option<Range<usize>> {
        let n = self.needle.len();
        if n == 0 || n > self.haystack.len() {
            return None;
        }
        let last_fit = self.haystack.len() - n + 1;
        let end = if self.window > 0 {
            self.start.saturating_add(self.window).min(last_fit)
        } else {
            self.haystack.len() - n
        };
        (self.start < end).then_some(self.start..end)
    }

    /// Offset of the first occurrence of the needle among the candidates.
    pub fn find(&self) -> Option<usize> {
        let Some(range) = self.candidates() else {
            trace!(
                start = self.start,
                window = self.window,
                needle_len = self.needle.len(),
                haystack_len = self.haystack.len(),
                "Empty search window"
            );
            return None;
        };
        let n = self.needle.len();
        let span = &self.haystack[range.start..range.end + n - 1];
        span.windows(n)
            .position(|candidate| candidate == self.needle)
            .map(|i| range.start + i)
    }
}

/// Index of the first occurrence of `needle` in `haystack` at or after
/// `start`, searching `window` candidate offsets (zero: the rest of the
/// haystack).
pub fn index_of_bytes(
    haystack: &[u8],
    needle: &[u8],
    start: usize,
    window: usize,
) -> Option<usize> {
    SearchWindow::new(haystack, needle, start, window).find()
}

/// A reusable signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatcher {
    needle: Vec<u8>,
}

impl PatternMatcher {
    pub fn new(needle: impl Into<Vec<u8>>) -> Result<Self> {
        let needle = needle.into();
        if needle.is_empty() {
            return Err(SniffError::InvalidPattern("pattern is empty".to_string()));
        }
        Ok(Self { needle })
    }

    /// Build a matcher from a hex signature such as `"E5 9F 10 04"`.
    /// Whitespace between digits is ignored.
    pub fn from_hex(signature: &str) -> Result<Self> {
        let digits: String = signature.split_whitespace().collect();
        let needle = hex::decode(&digits)
            .map_err(|e| SniffError::InvalidPattern(format!("{signature:?}: {e}")))?;
        Self::new(needle)
    }

    pub fn needle(&self) -> &[u8] {
        &self.needle
    }

    pub fn find(&self, haystack: &[u8], start: usize, window: usize) -> Option<usize> {
        index_of_bytes(haystack, &self.needle, start, window)
    }

    /// Every occurrence in ascending order, including one that ends at the
    /// last byte. Occurrences may overlap.
    pub fn find_all<'h>(&'h self, haystack: &'h [u8]) -> impl Iterator<Item = usize> + 'h {
        let mut next = Some(0);
        std::iter::from_fn(move || {
            // A window spanning the whole haystack is clamped to the last
            // offset where the needle fits.
            let found = self.find(haystack, next?, haystack.len());
            next = found.map(|at| at + 1);
            found
        })
    }
}
