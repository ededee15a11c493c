//! # Medialog CLI
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`, and this
//! file only invokes `cli::run()` and turns a fatal error into an exit status.
//!
//! Fatal here means a storage failure: the data file could not be read at startup or
//! could not be written at exit. Mistyped input never reaches this point; the session
//! re-asks the same question instead.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
