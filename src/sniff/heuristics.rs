//! The individual structural checks of the sniffing chain.
//!
//! Each check either proves its layout (`Ok(Some(tag))`), rules it out
//! (`Ok(None)`), or fails to read what it needed (`Err`). The chain in
//! `sniffer.rs` treats the last two the same way.

use super::magic::*;
use super::probe::{advance, Probe, ProbeResult};
use super::tag::FormatTag;
use std::io::{Read, Seek};

/// Containers that store a count of 4-byte sub-table entries followed by a
/// trailing total-size field. The tag is the first two header bytes.
pub fn tagged_container<R: Read + Seek>(
    probe: &mut Probe<'_, R>,
    magic: &HeaderMagic,
    start: u64,
) -> ProbeResult<Option<FormatTag>> {
    let count = u64::from(magic.trailing_count());
    let size_field = advance(start, HEADER_MAGIC_SIZE as u64 + TAGGED_ENTRY_SIZE * count)?;
    if u64::from(probe.read_u32_le(size_field)?) != probe.len() {
        return Ok(None);
    }
    let tag: String = magic.bytes()[..2].iter().map(|&b| char::from(b)).collect();
    Ok(Some(FormatTag::new(tag)))
}

/// DARC archives: a block of 0x40-byte headers, a file table of 0x20-byte
/// entries, zero padding, then the `darc` magic.
pub fn darc<R: Read + Seek>(
    probe: &mut Probe<'_, R>,
    magic: &HeaderMagic,
    start: u64,
) -> ProbeResult<Option<FormatTag>> {
    let count = u64::from(magic.leading_count());
    let table = advance(
        start,
        HEADER_MAGIC_SIZE as u64 + DARC_HEADER_ENTRY_SIZE * count,
    )?;
    let entries = u64::from(probe.read_u32_le(table)?);
    let padding = advance(advance(table, 4)?, DARC_TABLE_ENTRY_SIZE * entries)?;
    let body = probe.skip_zeros(padding)?;
    if probe.read_u32_le(body)? == DARC_MAGIC {
        Ok(Some(FormatTag::new("darc")))
    } else {
        Ok(None)
    }
}

/// BCLIM images: a `CLIM` block 0x28 bytes from the end whose offset is
/// repeated in the last four bytes of the file.
pub fn bclim<R: Read + Seek>(probe: &mut Probe<'_, R>) -> ProbeResult<Option<FormatTag>> {
    let len = probe.len();
    let Some(trailer) = len.checked_sub(CLIM_TRAILER_OFFSET) else {
        return Ok(None);
    };
    if probe.read_u32_le(trailer)? != CLIM_MAGIC {
        return Ok(None);
    }
    let pointer = probe.read_u32_le(len - CLIM_POINTER_OFFSET)?;
    if u64::from(pointer) == trailer {
        Ok(Some(FormatTag::new("bclim")))
    } else {
        Ok(None)
    }
}

/// Leading run of up to four ASCII letters or digits. `None` when the first
/// byte sits below `'A'`.
pub fn ascii_magic(magic: &HeaderMagic) -> Option<FormatTag> {
    let bytes = magic.bytes();
    if bytes[0] < ASCII_MAGIC_FLOOR {
        return None;
    }
    let run: String = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .map(|&b| char::from(b))
        .collect();
    Some(FormatTag::new(run))
}
