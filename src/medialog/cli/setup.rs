use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medialog", bin_name = "medialog", version)]
#[command(about = "Keep a log of the TV shows and movies you have watched", long_about = None)]
pub struct Cli {
    /// Data file to read at startup and write on exit (default: medialog.txt)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
