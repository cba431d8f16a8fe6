// src/error.rs
//! Error taxonomy for the installation pipeline.
//!
//! Every error here is fatal: nothing in the core retries or recovers, the
//! CLI layer turns the error into a message and the process exits.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum InstallError {
    /// The whole filename exceeds 12 characters.
    FilenameTooLong(String),
    /// The part before the dot (or the whole name without one) exceeds 8 characters.
    BaseNameTooLong(String),
    /// The part after the dot exceeds 3 characters.
    ExtensionTooLong(String),
    /// The filename contains something other than A-Z, 0-9 or '.'.
    InvalidCharacter { name: String, character: char },
    /// A file could not be opened or read/written as required.
    FileOpen { path: PathBuf, source: io::Error },
    /// The bootloader file is not exactly one sector long.
    UnexpectedBootloaderSize { path: PathBuf, actual: u64 },
    /// The extended boot signature on the floppy is neither 40 nor 41.
    InvalidBpb { path: PathBuf, signature: u8 },
    /// The bootloader binary contains no filename placeholder.
    MissingPlaceholder(PathBuf),
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallError::FilenameTooLong(name) => {
                write!(f, "the filename '{}' is too long, 8.3 names have at most 12 characters", name)
            }
            InstallError::BaseNameTooLong(name) => {
                write!(f, "the base name of '{}' is too long, at most 8 characters are allowed", name)
            }
            InstallError::ExtensionTooLong(name) => {
                write!(f, "the extension of '{}' is too long, at most 3 characters are allowed", name)
            }
            InstallError::InvalidCharacter { name, character } => {
                write!(
                    f,
                    "the filename '{}' contains '{}', only uppercase letters, digits and '.' are allowed",
                    name, character
                )
            }
            InstallError::FileOpen { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            InstallError::UnexpectedBootloaderSize { path, actual } => {
                write!(
                    f,
                    "expected the bootloader {} to be exactly 512 bytes, found {} bytes",
                    path.display(),
                    actual
                )
            }
            InstallError::InvalidBpb { path, signature } => {
                write!(
                    f,
                    "no valid BIOS parameter block on {}: extended boot signature is {} (expected 40 or 41)",
                    path.display(),
                    signature
                )
            }
            InstallError::MissingPlaceholder(path) => {
                write!(
                    f,
                    "could not locate the filename placeholder in the bootloader {}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstallError::FileOpen { source, .. } => Some(source),
            _ => None,
        }
    }
}
