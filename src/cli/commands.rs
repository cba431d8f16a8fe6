// src/cli/commands.rs
use colored::*;

use crate::bpb::Bpb;
use crate::cli::parser::Cli;
use crate::install;

/// Command executor trait
pub trait CommandExecutor {
    fn execute(&self) -> Result<(), String>;
}

impl CommandExecutor for Cli {
    fn execute(&self) -> Result<(), String> {
        if self.verbose {
            println!();
            println!("{}: {}", "Bootloader".blue(), self.bootloader.display().to_string().white());
            println!("{}: {}", "Floppy image".blue(), self.image.display().to_string().white());
            println!("{}: {}", "Boot file".blue(), self.filename.white());
            println!();
        }

        let report = install::install(&self.bootloader, &self.image, &self.filename)
            .map_err(|e| e.to_string())?;

        if self.verbose {
            println!(
                "  {} Filename formatted as '{}'",
                "✓".green(),
                String::from_utf8_lossy(&report.name_83)
            );
            println!(
                "  {} Placeholder found at offset {}",
                "✓".green(),
                report.placeholder_offset
            );
            println!("  {} BIOS parameter block carried over:", "✓".green());
            print_bpb(&report.bpb);
            println!();
            println!(
                "  {} Bootloader installed on {}",
                "✓".green(),
                self.image.display()
            );
        }

        Ok(())
    }
}

fn print_bpb(bpb: &Bpb) {
    let rows = [
        ("OEM label", format!("{:?}", String::from_utf8_lossy(bpb.oem_label()))),
        ("Bytes per sector", bpb.bytes_per_sector().to_string()),
        ("Sectors per cluster", bpb.sectors_per_cluster().to_string()),
        ("Reserved sectors", bpb.reserved_sectors().to_string()),
        ("FATs", bpb.fat_count().to_string()),
        ("Root directory entries", bpb.root_dir_entries().to_string()),
        ("Logical sectors", bpb.logical_sectors().to_string()),
        ("Media descriptor", format!("{:#04X}", bpb.media_descriptor())),
        ("Sectors per FAT", bpb.sectors_per_fat().to_string()),
        ("Sectors per track", bpb.sectors_per_track().to_string()),
        ("Heads", bpb.head_count().to_string()),
        ("Hidden sectors", bpb.hidden_sectors().to_string()),
        ("Large sectors", bpb.large_sectors().to_string()),
        ("Drive number", bpb.drive_number().to_string()),
        ("Extended boot signature", bpb.extended_boot_signature().to_string()),
        ("Volume ID", format!("{:08X}", bpb.volume_id())),
        ("Volume label", format!("{:?}", String::from_utf8_lossy(bpb.volume_label()))),
        ("Filesystem type", format!("{:?}", String::from_utf8_lossy(bpb.filesystem_type()))),
    ];

    for (label, value) in rows {
        println!("      {} {}", format!("{:<24}", format!("{}:", label)).cyan(), value.white());
    }
}
