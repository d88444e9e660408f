//! Header magic and the layout constants the heuristics validate against.

/// Number of header bytes every sniff starts from.
pub const HEADER_MAGIC_SIZE: usize = 4;

/// Size of one sub-table entry in a tagged-count container.
pub const TAGGED_ENTRY_SIZE: u64 = 4;

/// Size of one header record preceding a DARC file table.
pub const DARC_HEADER_ENTRY_SIZE: u64 = 0x40;
/// Size of one DARC file table entry.
pub const DARC_TABLE_ENTRY_SIZE: u64 = 0x20;
/// `"darc"` read as a little-endian u32.
pub const DARC_MAGIC: u32 = 0x6372_6164;

/// `"CLIM"` read as a little-endian u32.
pub const CLIM_MAGIC: u32 = 0x4D49_4C43;
/// Distance of the CLIM block from the end of the file.
pub const CLIM_TRAILER_OFFSET: u64 = 0x28;
/// Distance of the trailer's back-pointer field from the end of the file.
pub const CLIM_POINTER_OFFSET: u64 = 0x4;

/// Header bytes below `'A'` are not treated as a readable magic.
pub const ASCII_MAGIC_FLOOR: u8 = 0x41;

/// The first four bytes at the sniff position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMagic([u8; HEADER_MAGIC_SIZE]);

impl HeaderMagic {
    pub fn new(bytes: [u8; HEADER_MAGIC_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8; HEADER_MAGIC_SIZE] {
        &self.0
    }

    /// Bytes 0..2 as a little-endian count.
    pub fn leading_count(&self) -> u16 {
        u16::from_le_bytes([self.0[0], self.0[1]])
    }

    /// Bytes 2..4 as a little-endian count.
    pub fn trailing_count(&self) -> u16 {
        u16::from_le_bytes([self.0[2], self.0[3]])
    }
}
