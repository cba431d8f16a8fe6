// src/bootloader.rs
//! Bootloader binary loading and placeholder search.

use std::fs;
use std::path::Path;

use crate::error::InstallError;

/// A bootloader occupies exactly one sector.
pub const BOOTLOADER_SIZE: usize = 512;

/// Literal token assembled into the bootloader where the 8.3 name of the
/// file to load belongs. 11 bytes, the exact width of the name record.
pub const PLACEHOLDER: &[u8; 11] = b"PLACEHOLDER";

/// Reads the bootloader binary and checks it is exactly one sector.
pub fn load(path: &Path) -> Result<[u8; BOOTLOADER_SIZE], InstallError> {
    let bytes = fs::read(path).map_err(|e| InstallError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    <[u8; BOOTLOADER_SIZE]>::try_from(bytes.as_slice()).map_err(|_| {
        InstallError::UnexpectedBootloaderSize {
            path: path.to_path_buf(),
            actual: bytes.len() as u64,
        }
    })
}

/// Finds the start offset of the placeholder token in the bootloader.
///
/// Linear scan with a match counter that resets on the first mismatching
/// byte. The first full 11-byte match wins; a token starting too close to
/// the end of the sector can never complete and does not count. `path` is
/// only used to name the offending file in the error.
pub fn find_placeholder(bootloader: &[u8], path: &Path) -> Result<usize, InstallError> {
    let mut matched = 0;

    for (i, byte) in bootloader.iter().enumerate() {
        if *byte == PLACEHOLDER[matched] {
            matched += 1;
        } else {
            matched = 0;
        }
        if matched == PLACEHOLDER.len() {
            return Ok(i + 1 - PLACEHOLDER.len());
        }
    }

    Err(InstallError::MissingPlaceholder(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn loader_path() -> std::path::PathBuf {
        std::path::PathBuf::from("loader.bin")
    }

    fn sector_with_placeholder(offset: usize) -> [u8; BOOTLOADER_SIZE] {
        let mut sector = [0u8; BOOTLOADER_SIZE];
        sector[offset..offset + PLACEHOLDER.len()].copy_from_slice(PLACEHOLDER);
        sector
    }

    #[test]
    fn test_placeholder_found_at_offset_100() {
        let sector = sector_with_placeholder(100);
        assert_eq!(find_placeholder(&sector, &loader_path()).unwrap(), 100);
    }

    #[test]
    fn test_placeholder_found_at_start_and_end() {
        assert_eq!(find_placeholder(&sector_with_placeholder(0), &loader_path()).unwrap(), 0);
        // 501 is the last offset where all 11 bytes still fit.
        assert_eq!(find_placeholder(&sector_with_placeholder(501), &loader_path()).unwrap(), 501);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut sector = sector_with_placeholder(50);
        sector[400..411].copy_from_slice(PLACEHOLDER);
        assert_eq!(find_placeholder(&sector, &loader_path()).unwrap(), 50);
    }

    #[test]
    fn test_missing_placeholder_is_an_error() {
        let sector = [0u8; BOOTLOADER_SIZE];
        match find_placeholder(&sector, &loader_path()) {
            Err(InstallError::MissingPlaceholder(_)) => {}
            other => panic!("expected MissingPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_token_does_not_match() {
        let mut sector = [0u8; BOOTLOADER_SIZE];
        sector[100..110].copy_from_slice(&PLACEHOLDER[..10]);
        match find_placeholder(&sector, &loader_path()) {
            Err(InstallError::MissingPlaceholder(_)) => {}
            other => panic!("expected MissingPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_wrong_size() {
        let path = env::temp_dir().join("bootstamp_short_bootloader.bin");
        fs::write(&path, vec![0u8; 200]).unwrap();
        match load(&path) {
            Err(InstallError::UnexpectedBootloaderSize { actual, .. }) => {
                assert_eq!(actual, 200)
            }
            other => panic!("expected UnexpectedBootloaderSize, got {:?}", other),
        }
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_reads_a_full_sector() {
        let path = env::temp_dir().join("bootstamp_full_bootloader.bin");
        fs::write(&path, sector_with_placeholder(100)).unwrap();
        let bootloader = load(&path).unwrap();
        assert_eq!(bootloader.len(), BOOTLOADER_SIZE);
        assert_eq!(&bootloader[100..111], PLACEHOLDER);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("bootstamp_no_such_bootloader.bin");
        match load(&path) {
            Err(InstallError::FileOpen { .. }) => {}
            other => panic!("expected FileOpen, got {:?}", other),
        }
    }
}
