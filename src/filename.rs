// src/filename.rs
//! 8.3 short filename validation and formatting.
//!
//! FAT directory entries store filenames as 11 bytes: 8 bytes base name and
//! 3 bytes extension, both left-justified and padded with spaces, with no
//! dot stored. The bootloader compares directory entries against exactly
//! this representation, so the name it is patched with must already be in
//! that form.

use crate::error::InstallError;

/// Maximum length of a name carrying an extension, dot included ("XXXXXXXX.XXX").
const MAX_NAME_LEN: usize = 12;
const MAX_BASE_LEN: usize = 8;
const MAX_EXT_LEN: usize = 3;

/// Checks that a filename can be encoded as an 8.3 short name.
///
/// Only ASCII uppercase letters, digits and a dot separator are accepted.
/// The split is on the first dot; without one the whole name is the base.
pub fn validate(name: &str) -> Result<(), InstallError> {
    for character in name.chars() {
        if character != '.' && !character.is_ascii_uppercase() && !character.is_ascii_digit() {
            return Err(InstallError::InvalidCharacter {
                name: name.to_string(),
                character,
            });
        }
    }

    match name.find('.') {
        Some(dot) => {
            if name.len() > MAX_NAME_LEN {
                return Err(InstallError::FilenameTooLong(name.to_string()));
            }
            if dot > MAX_BASE_LEN {
                return Err(InstallError::BaseNameTooLong(name.to_string()));
            }
            // The span from the dot to the end includes the dot itself.
            if name.len() - dot > MAX_EXT_LEN + 1 {
                return Err(InstallError::ExtensionTooLong(name.to_string()));
            }
        }
        None => {
            if name.len() > MAX_BASE_LEN {
                return Err(InstallError::BaseNameTooLong(name.to_string()));
            }
        }
    }

    Ok(())
}

/// Formats a validated filename into the 11-byte 8.3 record.
///
/// The caller is expected to have run [`validate`] first; the lengths used
/// here rely on its bounds.
pub fn format_83(name: &str) -> [u8; 11] {
    let mut record = [b' '; 11];
    let bytes = name.as_bytes();

    match name.find('.') {
        Some(dot) => {
            record[..dot].copy_from_slice(&bytes[..dot]);
            let extension = &bytes[dot + 1..];
            record[8..8 + extension.len()].copy_from_slice(extension);
        }
        None => {
            record[..bytes.len()].copy_from_slice(bytes);
        }
    }

    record
}
