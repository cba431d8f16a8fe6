// src/cli/mod.rs
pub mod commands;
pub mod parser;

use commands::CommandExecutor;

pub fn run() -> Result<(), String> {
    let cli = parser::Cli::parse();
    cli.execute()
}
