//! Behavioural properties of the sniffing chain over in-memory sources.

use binsniff::error::SniffError;
use binsniff::sniff::{sniff, Evidence, FormatSniffer};
use std::io::{Cursor, Seek, SeekFrom};

use crate::common::samples::*;
use crate::common::sources::{FailingReads, FailingSeeks};

fn sniff_at(data: &[u8], position: u64, bypass: bool) -> (String, u64) {
    let mut cursor = Cursor::new(data);
    cursor.set_position(position);
    let tag = sniff(&mut cursor, "bin", bypass);
    (tag.into_string(), cursor.position())
}

#[test]
fn test_short_sources_return_default() {
    let data = b"GRP\x00\x00\x00";
    for len in 0..4 {
        assert_eq!(sniff_at(&data[..len], 0, false), ("bin".to_string(), 0));
    }
    // Fewer than four bytes left after the cursor.
    assert_eq!(sniff_at(data, 3, false), ("bin".to_string(), 3));
}

#[test]
fn test_tagged_container_ignores_bypass() {
    let data = tagged_container(*b"GR", 3);
    for bypass in [false, true] {
        let sniffed = FormatSniffer::new("bin", bypass).identify(&mut Cursor::new(&data));
        assert_eq!(sniffed.tag, "GR");
        assert_eq!(sniffed.evidence, Evidence::TaggedContainer);
    }
}

#[test]
fn test_tagged_container_at_nonzero_cursor() {
    // The size field is found relative to the cursor but compared with the
    // length of the whole source.
    let mut data = vec![0xEEu8; 6];
    let mut container = tagged_container(*b"BL", 1);
    let total = (data.len() + container.len()) as u32;
    let end = container.len();
    container[end - 4..].copy_from_slice(&total.to_le_bytes());
    data.extend_from_slice(&container);

    assert_eq!(sniff_at(&data, 6, true), ("BL".to_string(), 6));
}

#[test]
fn test_darc_requires_deep_checks() {
    let data = darc_archive(3, 17, b"payload");
    assert_eq!(sniff_at(&data, 0, false).0, "darc");
    assert_eq!(sniff_at(&data, 0, true).0, "bin");

    let sniffed = FormatSniffer::default().identify(&mut Cursor::new(&data));
    assert_eq!(sniffed.evidence, Evidence::Darc);
}

#[test]
fn test_darc_with_truncated_table_falls_through() {
    let mut data = darc_archive(4, 0, b"");
    data.truncate(40);
    assert_eq!(sniff_at(&data, 0, false), ("bin".to_string(), 0));
}

#[test]
fn test_bclim_trailer() {
    for len in [0x28usize, 0x29, 0x100, 0x1234] {
        let data = bclim_image(len);
        let mut cursor = Cursor::new(&data);
        let sniffed = FormatSniffer::default().identify(&mut cursor);
        assert_eq!(sniffed.tag, "bclim", "len {len:#x}");
        assert_eq!(sniffed.evidence, Evidence::Bclim);
        assert_eq!(cursor.position(), 0);
    }
}

#[test]
fn test_bclim_bad_pointer() {
    let mut data = bclim_image(0x100);
    let end = data.len();
    data[end - 4..].copy_from_slice(&0x24u32.to_le_bytes());
    assert_eq!(sniff_at(&data, 0, false).0, "bin");
}

#[test]
fn test_ascii_magic_fallback() {
    assert_eq!(sniff_at(b"ABcd", 0, false).0, "ABcd");
    assert_eq!(sniff_at(b"A1!!", 0, false).0, "A1");
    assert_eq!(sniff_at(b"A!!!", 0, false).0, "bin");
    assert_eq!(sniff_at(b"1ABC", 0, false).0, "bin");
    assert_eq!(sniff_at(b"SARC\x14\x00\xFE\xFF", 0, false).0, "SARC");
}

#[test]
fn test_huge_counts_are_misses() {
    // Both header counts point far past the end of the source.
    let data = b"\xFF\xFF\xFF\xFFtrailing bytes";
    assert_eq!(sniff_at(data, 0, false), ("bin".to_string(), 0));
}

#[test]
fn test_zero_filled_source() {
    let data = vec![0u8; 0x1000];
    assert_eq!(sniff_at(&data, 0, false), ("bin".to_string(), 0));
}

#[test]
fn test_sniff_is_idempotent() {
    let samples = [
        tagged_container(*b"MM", 2),
        darc_archive(1, 3, b"x"),
        bclim_image(0x80),
        b"NARC\x00\x00\x00\x00".to_vec(),
    ];
    for data in &samples {
        let mut cursor = Cursor::new(data);
        cursor.seek(SeekFrom::Start(0)).unwrap();
        let first = sniff(&mut cursor, "bin", false);
        let after_first = cursor.position();
        let second = sniff(&mut cursor, "bin", false);
        assert_eq!(first, second);
        assert_eq!(after_first, cursor.position());
        assert_eq!(cursor.position(), 0);
    }
}

#[test]
fn test_try_identify_reports_evidence() {
    let data = darc_archive(0, 0, b"");
    let sniffed = FormatSniffer::new("dat", false)
        .try_identify(&mut Cursor::new(&data))
        .unwrap();
    assert_eq!(sniffed.tag, "darc");
    assert_eq!(sniffed.evidence, Evidence::Darc);
}

#[test]
fn test_read_failure_moves_to_next_check() {
    // The size field at 16 cannot be read, so the tagged-container check
    // misses and the header is picked up as ASCII magic instead.
    let mut source = FailingReads::new(tagged_container(*b"GR", 3), 4);
    let sniffed = FormatSniffer::default().try_identify(&mut source).unwrap();
    assert_eq!(sniffed.tag, "GR");
    assert_eq!(sniffed.evidence, Evidence::AsciiMagic);
    assert_eq!(source.stream_position().unwrap(), 0);
}

#[test]
fn test_read_failure_falls_back_to_default() {
    // Every check past the header fails to read; the archive is not
    // recognised and the position is untouched.
    let mut source = FailingReads::new(darc_archive(2, 5, b"body"), 4);
    let sniffed = FormatSniffer::new("dat", false).identify(&mut source);
    assert_eq!(sniffed.tag, "dat");
    assert_eq!(sniffed.evidence, Evidence::Fallback);
    assert_eq!(source.stream_position().unwrap(), 0);
}

#[test]
fn test_failed_restore_is_an_error() {
    // Position query and length query succeed; the restoring seek fails.
    let sniffer = FormatSniffer::default();
    let result = sniffer.try_identify(&mut FailingSeeks::new(b"GR".to_vec(), 2));
    assert!(matches!(result, Err(SniffError::Source(_))));

    let sniffed = sniffer.identify(&mut FailingSeeks::new(b"GR".to_vec(), 2));
    assert_eq!(sniffed.tag, "bin");
    assert_eq!(sniffed.evidence, Evidence::Fallback);
}

#[test]
fn test_failed_length_query_is_an_error() {
    let sniffer = FormatSniffer::default();
    let result = sniffer.try_identify(&mut FailingSeeks::new(b"ABcd".to_vec(), 1));
    assert!(matches!(result, Err(SniffError::Source(_))));
    assert_eq!(
        sniff(&mut FailingSeeks::new(b"ABcd".to_vec(), 1), "bin", false),
        "bin"
    );
}
