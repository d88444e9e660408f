//! Bounds-checked speculative reads over a seekable source.
//!
//! Every read is checked against the source length before the cursor moves,
//! so a heuristic chasing a corrupt offset gets `ProbeError::OutOfBounds`
//! instead of a short read or a seek past the end.

use std::io::{self, Read, Seek, SeekFrom};
use thiserror::Error;

const ZERO_SCAN_CHUNK: usize = 256;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("read of {needed} bytes at {offset:#x} exceeds source length {len:#x}")]
    OutOfBounds { offset: u64, needed: u64, len: u64 },

    #[error("offset arithmetic overflowed")]
    Overflow,

    #[error("source read failed: {0}")]
    Io(#[from] io::Error),
}

pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// `base + by`, or `Overflow`.
pub fn advance(base: u64, by: u64) -> ProbeResult<u64> {
    base.checked_add(by).ok_or(ProbeError::Overflow)
}

pub struct Probe<'a, R> {
    source: &'a mut R,
    len: u64,
}

impl<'a, R: Read + Seek> Probe<'a, R> {
    pub fn new(source: &'a mut R, len: u64) -> Self {
        Self { source, len }
    }

    /// Total length of the source.
    pub fn len(&self) -> u64 {
        self.len
    }

    fn check(&self, offset: u64, needed: u64) -> ProbeResult<()> {
        match offset.checked_add(needed) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(ProbeError::OutOfBounds {
                offset,
                needed,
                len: self.len,
            }),
        }
    }

    pub fn read_array<const N: usize>(&mut self, offset: u64) -> ProbeResult<[u8; N]> {
        self.check(offset, N as u64)?;
        self.source.seek(SeekFrom::Start(offset))?;
        let mut buf = [0u8; N];
        self.source.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u32_le(&mut self, offset: u64) -> ProbeResult<u32> {
        self.read_array::<4>(offset).map(u32::from_le_bytes)
    }

    /// Offset of the first non-zero byte at or after `offset`, or the source
    /// length if only zeros remain. Offsets at or past the end come back
    /// unchanged.
    pub fn skip_zeros(&mut self, offset: u64) -> ProbeResult<u64> {
        if offset >= self.len {
            return Ok(offset);
        }
        self.source.seek(SeekFrom::Start(offset))?;

        let mut pos = offset;
        let mut chunk = [0u8; ZERO_SCAN_CHUNK];
        while pos < self.len {
            let want = (self.len - pos).min(ZERO_SCAN_CHUNK as u64) as usize;
            self.source.read_exact(&mut chunk[..want])?;
            match chunk[..want].iter().position(|&b| b != 0) {
                Some(i) => return Ok(pos + i as u64),
                None => pos += want as u64,
            }
        }
        Ok(pos)
    }
}
