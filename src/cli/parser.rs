// src/cli/parser.rs
use std::path::PathBuf;

use clap::Parser;

/// Bootstamp - FAT12 boot sector installer
#[derive(Parser)]
#[command(
    name = "bootstamp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Installs a 512-byte bootloader onto a FAT12 floppy image",
    long_about = r#"
Bootstamp
=========

Writes a 512-byte bootloader into the boot sector of a FAT12 floppy image.
The BIOS parameter block already on the image is carried over so the floppy
stays readable, and the bootloader is patched with the 8.3 name of the file
it should load at boot.

The target filename must be an 8.3 short name: uppercase letters and digits
only, base name of at most 8 characters, extension of at most 3.
"#
)]
pub struct Cli {
    /// Bootloader binary, exactly 512 bytes
    #[arg(value_name = "BOOTLOADER")]
    pub bootloader: PathBuf,

    /// FAT12 floppy image to install onto
    #[arg(value_name = "FLOPPY_IMAGE")]
    pub image: PathBuf,

    /// 8.3 name of the file the bootloader loads at boot
    #[arg(value_name = "TARGET_FILENAME")]
    pub filename: String,

    /// Print each installation step and the parameter block found
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
