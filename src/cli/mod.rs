pub mod commands;
pub mod pipeline;
pub mod review;

use std::io;

use clap::Parser;

use crate::audio::frames::StripProfile;
use crate::cli::commands::Cli;
use crate::cli::pipeline::RunOutcome;
use crate::config::RunConfig;
use crate::Result;

/// Entry point shared by both binaries: parse flags, then run the pipeline
/// against the real terminal.
pub fn main_with_profile(profile: StripProfile) -> Result<RunOutcome> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli, profile)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    pipeline::run(&config, &mut input, &mut out)
}
