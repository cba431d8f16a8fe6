// src/install.rs
//! The installation pipeline: validate, compose, write.
//!
//! Every check runs before the destination image is touched. The single
//! write covers exactly the first sector; anything past byte 512 of the
//! image stays as it was.

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::bootloader::{self, BOOTLOADER_SIZE};
use crate::bpb::{Bpb, BPB_LEN, BPB_OFFSET};
use crate::error::InstallError;
use crate::filename;

/// What an installation did, for reporting under `--verbose`.
pub struct InstallReport {
    pub name_83: [u8; 11],
    pub placeholder_offset: usize,
    pub bpb: Bpb,
}

/// Installs the bootloader at `bootloader_path` onto the floppy image at
/// `image_path`, patched to load `target_name` at boot.
pub fn install(
    bootloader_path: &Path,
    image_path: &Path,
    target_name: &str,
) -> Result<InstallReport, InstallError> {
    filename::validate(target_name)?;
    let name_83 = filename::format_83(target_name);

    let mut sector = bootloader::load(bootloader_path)?;
    let placeholder_offset = bootloader::find_placeholder(&sector, bootloader_path)?;
    let bpb = Bpb::read_from(image_path)?;

    compose(&mut sector, &name_83, placeholder_offset, &bpb);
    write_boot_sector(image_path, &sector)?;

    Ok(InstallReport {
        name_83,
        placeholder_offset,
        bpb,
    })
}

/// Merges the 8.3 name and the BPB span into the bootloader sector.
///
/// The BPB splice covers bytes 3..0x3D, which also carries over the OEM
/// label sitting at the front of the span.
pub fn compose(
    sector: &mut [u8; BOOTLOADER_SIZE],
    name_83: &[u8; 11],
    placeholder_offset: usize,
    bpb: &Bpb,
) {
    sector[placeholder_offset..placeholder_offset + name_83.len()].copy_from_slice(name_83);
    sector[BPB_OFFSET as usize..BPB_OFFSET as usize + BPB_LEN].copy_from_slice(bpb.as_bytes());
}

/// Overwrites the first sector of the image with the composed bootloader.
///
/// The image is opened for read+write without truncation: it must already
/// exist and everything past the boot sector is left alone.
fn write_boot_sector(
    image_path: &Path,
    sector: &[u8; BOOTLOADER_SIZE],
) -> Result<(), InstallError> {
    let mut image = OpenOptions::new()
        .read(true)
        .write(true)
        .open(image_path)
        .map_err(|e| InstallError::FileOpen {
            path: image_path.to_path_buf(),
            source: e,
        })?;

    image
        .seek(SeekFrom::Start(0))
        .and_then(|_| image.write_all(sector))
        .map_err(|e| InstallError::FileOpen {
            path: image_path.to_path_buf(),
            source: e,
        })
}
