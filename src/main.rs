//! Bootstamp entry point.

fn main() {
    if let Err(e) = bootstamp::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
