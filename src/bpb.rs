// src/bpb.rs
//! BIOS parameter block extraction and validation.
//!
//! The BPB sits in the boot sector right after the entry jump instruction.
//! Overwriting the boot sector with a new bootloader would clobber the disk
//! geometry the floppy was formatted with, so the installer lifts the span
//! off the image first and splices it back into the new sector.
//!
//! The span is kept as raw bytes; fields are decoded on demand at named
//! offsets, so the splice stays byte-exact.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::InstallError;

/// The BPB starts after the 3-byte jump at the top of the boot sector.
pub const BPB_OFFSET: u64 = 3;

/// Length of the span this installer carries over: bytes 3..0x3D of the
/// sector, which covers the OEM label through the filesystem type tag.
pub const BPB_LEN: usize = 0x3A;

/// Offset of the extended boot signature within the span (0x26 on disk).
pub const EXT_BOOT_SIGNATURE: usize = 0x23;

/// Extended boot signatures this tool understands. 40 marks an EBPB without
/// volume ID/label/type fields, 41 the full layout.
pub const KNOWN_SIGNATURES: [u8; 2] = [40, 41];

// Field offsets within the span, relative to BPB_OFFSET.
const OEM_LABEL: usize = 0x00;
const BYTES_PER_SECTOR: usize = 0x08;
const SECTORS_PER_CLUSTER: usize = 0x0A;
const RESERVED_SECTORS: usize = 0x0B;
const FAT_COUNT: usize = 0x0D;
const ROOT_DIR_ENTRIES: usize = 0x0E;
const LOGICAL_SECTORS: usize = 0x10;
const MEDIA_DESCRIPTOR: usize = 0x12;
const SECTORS_PER_FAT: usize = 0x13;
const SECTORS_PER_TRACK: usize = 0x15;
const HEAD_COUNT: usize = 0x17;
const HIDDEN_SECTORS: usize = 0x19;
const LARGE_SECTORS: usize = 0x1D;
const DRIVE_NUMBER: usize = 0x21;
const VOLUME_ID: usize = 0x24;
const VOLUME_LABEL: usize = 0x28;
const FILESYSTEM_TYPE: usize = 0x33;

/// A verified BPB span lifted from a floppy image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bpb {
    raw: [u8; BPB_LEN],
}

impl Bpb {
    /// Validates the extended boot signature and wraps the span.
    pub fn parse(raw: [u8; BPB_LEN], path: &Path) -> Result<Self, InstallError> {
        let signature = raw[EXT_BOOT_SIGNATURE];
        if !KNOWN_SIGNATURES.contains(&signature) {
            return Err(InstallError::InvalidBpb {
                path: path.to_path_buf(),
                signature,
            });
        }
        Ok(Self { raw })
    }

    /// Reads and validates the BPB of the floppy image at `path`.
    pub fn read_from(path: &Path) -> Result<Self, InstallError> {
        let mut floppy = File::open(path).map_err(|e| InstallError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut raw = [0u8; BPB_LEN];
        floppy
            .seek(SeekFrom::Start(BPB_OFFSET))
            .and_then(|_| floppy.read_exact(&mut raw))
            .map_err(|e| InstallError::FileOpen {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse(raw, path)
    }

    /// The raw 58-byte span, ready to be spliced back into a boot sector.
    pub fn as_bytes(&self) -> &[u8; BPB_LEN] {
        &self.raw
    }

    pub fn oem_label(&self) -> &[u8] {
        &self.raw[OEM_LABEL..OEM_LABEL + 8]
    }

    pub fn bytes_per_sector(&self) -> u16 {
        self.u16_at(BYTES_PER_SECTOR)
    }

    pub fn sectors_per_cluster(&self) -> u8 {
        self.raw[SECTORS_PER_CLUSTER]
    }

    pub fn reserved_sectors(&self) -> u16 {
        self.u16_at(RESERVED_SECTORS)
    }

    pub fn fat_count(&self) -> u8 {
        self.raw[FAT_COUNT]
    }

    pub fn root_dir_entries(&self) -> u16 {
        self.u16_at(ROOT_DIR_ENTRIES)
    }

    pub fn logical_sectors(&self) -> u16 {
        self.u16_at(LOGICAL_SECTORS)
    }

    pub fn media_descriptor(&self) -> u8 {
        self.raw[MEDIA_DESCRIPTOR]
    }

    pub fn sectors_per_fat(&self) -> u16 {
        self.u16_at(SECTORS_PER_FAT)
    }

    pub fn sectors_per_track(&self) -> u16 {
        self.u16_at(SECTORS_PER_TRACK)
    }

    pub fn head_count(&self) -> u16 {
        self.u16_at(HEAD_COUNT)
    }

    pub fn hidden_sectors(&self) -> u32 {
        self.u32_at(HIDDEN_SECTORS)
    }

    pub fn large_sectors(&self) -> u32 {
        self.u32_at(LARGE_SECTORS)
    }

    pub fn drive_number(&self) -> u8 {
        self.raw[DRIVE_NUMBER]
    }

    pub fn extended_boot_signature(&self) -> u8 {
        self.raw[EXT_BOOT_SIGNATURE]
    }

    pub fn volume_id(&self) -> u32 {
        self.u32_at(VOLUME_ID)
    }

    pub fn volume_label(&self) -> &[u8] {
        &self.raw[VOLUME_LABEL..VOLUME_LABEL + 11]
    }

    /// First 7 bytes of the filesystem type tag; the 8th byte of the tag
    /// lies past the end of the carried span.
    pub fn filesystem_type(&self) -> &[u8] {
        &self.raw[FILESYSTEM_TYPE..]
    }

    fn u16_at(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.raw[offset], self.raw[offset + 1]])
    }

    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.raw[offset],
            self.raw[offset + 1],
            self.raw[offset + 2],
            self.raw[offset + 3],
        ])
    }
}
