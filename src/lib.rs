pub mod bootloader;
pub mod bpb;
pub mod cli;
pub mod error;
pub mod filename;
pub mod install;

pub use bpb::Bpb;
pub use error::InstallError;
pub use install::{install, InstallReport};
