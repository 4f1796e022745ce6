use clap::Parser;

/// Both binaries scan the folder they live in; there is no path argument.
#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Strip metadata frames from the MP3 files next to this executable", long_about = None)]
pub struct Cli {
    /// Show what would be changed, but do not write anything
    #[arg(long)]
    pub dry_run: bool,
}
