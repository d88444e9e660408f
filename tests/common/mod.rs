//! Common test utilities and helpers.
//!
//! Builders for synthetic sources that satisfy exactly one layout check.

#![allow(dead_code)]

/// Synthetic buffers for each layout the sniffer recognises.
pub mod samples {
    /// A tagged-count container: `tag`, `entries` 4-byte sub-table slots,
    /// then the trailing total-size field.
    pub fn tagged_container(tag: [u8; 2], entries: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&tag);
        data.extend_from_slice(&entries.to_le_bytes());
        for i in 0..entries {
            data.extend_from_slice(&(0x1000 + u32::from(i)).to_le_bytes());
        }
        let total = (data.len() + 4) as u32;
        data.extend_from_slice(&total.to_le_bytes());
        data
    }

    /// A DARC-like archive with no header records: a file table of
    /// `entries` slots, `padding` zero bytes, the magic, then `body`.
    pub fn darc_archive(entries: u32, padding: usize, body: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 4];
        data.extend_from_slice(&entries.to_le_bytes());
        for i in 0..entries {
            let mut entry = [0xA5u8; 0x20];
            entry[..4].copy_from_slice(&i.to_le_bytes());
            data.extend_from_slice(&entry);
        }
        data.extend(std::iter::repeat(0u8).take(padding));
        data.extend_from_slice(b"darc");
        data.extend_from_slice(body);
        data
    }

    /// A BCLIM-like image of `len` bytes with a valid trailer.
    pub fn bclim_image(len: usize) -> Vec<u8> {
        assert!(len >= 0x28);
        let mut data = vec![0x11u8; len];
        data[..4].copy_from_slice(&[0x80, 0x80, 0x80, 0x80]);
        let trailer = len - 0x28;
        data[trailer..trailer + 4].copy_from_slice(b"CLIM");
        data[len - 4..].copy_from_slice(&(trailer as u32).to_le_bytes());
        data
    }
}

/// Byte sources that break partway through a sniff.
pub mod sources {
    use std::io::{self, Cursor, Read, Seek, SeekFrom};

    fn broken(what: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, format!("{what} failed"))
    }

    /// Reads that would touch any byte at or past `readable` fail.
    /// Seeking always works.
    pub struct FailingReads {
        inner: Cursor<Vec<u8>>,
        readable: u64,
    }

    impl FailingReads {
        pub fn new(data: Vec<u8>, readable: u64) -> Self {
            Self {
                inner: Cursor::new(data),
                readable,
            }
        }
    }

    impl Read for FailingReads {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.inner.position() + buf.len() as u64 > self.readable {
                return Err(broken("read"));
            }
            self.inner.read(buf)
        }
    }

    impl Seek for FailingReads {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    /// Only the first `seeks_left` seeks succeed, counting the one behind
    /// `stream_position`.
    pub struct FailingSeeks {
        inner: Cursor<Vec<u8>>,
        seeks_left: usize,
    }

    impl FailingSeeks {
        pub fn new(data: Vec<u8>, seeks_left: usize) -> Self {
            Self {
                inner: Cursor::new(data),
                seeks_left,
            }
        }
    }

    impl Read for FailingSeeks {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Seek for FailingSeeks {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            if self.seeks_left == 0 {
                return Err(broken("seek"));
            }
            self.seeks_left -= 1;
            self.inner.seek(pos)
        }
    }
}

/// Test utilities for file operations
pub mod file_utils {
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub fn temp_file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }
}
