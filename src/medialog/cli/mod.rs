//! # CLI Behavior
//!
//! This is **one possible UI client** for medialog, not the application itself. It is the
//! only place that knows about the terminal: prompts, colors, stdin, exit codes.
//!
//! For the overall architecture, see the crate-level documentation of the `medialog`
//! library.
//!
//! ## Session
//!
//! `medialog` starts an interactive menu loop. The collection is read from the data file
//! once at startup and written back once when the session ends, either through the
//! `exit` command or because standard input was closed.
//!
//! ```text
//! Menu: add entry, search entry, list entries, view stats, exit
//! Enter choice: view stats
//! Overall Statistics:
//! Count: 4
//! Average Rating: 6.33
//! ```
//!
//! ## Data File
//!
//! `medialog.txt` in the working directory, unless `medialog.json` there sets
//! `data_file` or `--data-file` is given (the flag wins). The path in use is logged at
//! `info`, so `MEDIALOG_LOG=medialog=info` shows where the collection is read from.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default filter only shows warnings;
//! `--verbose` switches the crate to debug, and `MEDIALOG_LOG` replaces the filter
//! entirely (e.g. `MEDIALOG_LOG=medialog=trace`).
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `session`: The menu loop and its prompts
//! - `render`: Output formatting (colors, tables, statistics)

mod render;
mod session;
pub mod setup;

use clap::Parser;
use medialog::api::MediaLogApi;
use medialog::config::MediaLogConfig;
use medialog::error::{MediaLogError, Result};
use medialog::store::fs::FileStore;
use session::Session;
use setup::Cli;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MEDIALOG_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = MediaLogConfig::load(&cwd)?.with_data_file(cli.data_file);
    tracing::info!(data_file = %config.data_file.display(), "using data file");

    let store = FileStore::new(config.data_file);
    let (api, opened) = MediaLogApi::open(store)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    render::print_messages(&mut output, &opened.messages).map_err(MediaLogError::Terminal)?;

    Session::new(api, stdin.lock(), output).run()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "medialog=debug"
    } else {
        "medialog=warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
