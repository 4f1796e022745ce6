//! Scan, review, confirm, strip: one pass, one file at a time.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::audio::editor::{StripOutcome, TagEditor};
use crate::audio::scanner::Scanner;
use crate::cli::review;
use crate::config::RunConfig;
use crate::utils::progress::strip_bar;
use crate::utils::style::{paint, GREEN, RED};
use crate::{CandidateFile, Result};

/// Only there so the bar is visible during a dry run.
const DRY_RUN_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub stripped: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub simulated: usize,
    /// Final position of the progress bar.
    pub progress: u64,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.stripped + self.unchanged + self.failed + self.simulated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NothingFound,
    Cancelled,
    Completed(RunSummary),
}

pub fn run<R: BufRead, W: Write>(
    config: &RunConfig,
    input: &mut R,
    out: &mut W,
) -> Result<RunOutcome> {
    let candidates = Scanner::scan(config);

    if !review::present(out, &candidates, config)? {
        return Ok(RunOutcome::NothingFound);
    }

    if !review::confirm(input, out)? {
        writeln!(out, "{}", paint(RED, "Cancelled."))?;
        log::info!("Cancelled by user");
        return Ok(RunOutcome::Cancelled);
    }

    let summary = process(&candidates, config, out)?;
    Ok(RunOutcome::Completed(summary))
}

/// Strips every candidate in order. Per-file failures are printed and counted,
/// never returned.
pub fn process<W: Write>(
    candidates: &[CandidateFile],
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary> {
    let editor = TagEditor::new(config.profile);
    let bar = strip_bar(candidates.len() as u64, config.show_progress)?;
    let mut summary = RunSummary::default();

    writeln!(out)?;

    for candidate in candidates {
        if config.dry_run {
            thread::sleep(DRY_RUN_DELAY);
            summary.simulated += 1;
        } else {
            match editor.strip(&candidate.path) {
                Ok(StripOutcome::Stripped { .. }) => summary.stripped += 1,
                Ok(StripOutcome::Unchanged) => summary.unchanged += 1,
                Err(e) => {
                    log::warn!("{:?}", e);
                    bar.suspend(|| writeln!(out, "{}", paint(RED, &e)))?;
                    summary.failed += 1;
                }
            }
        }
        bar.inc(1);
    }

    bar.finish();
    summary.progress = bar.position();

    log::info!(
        "Processed {} files: {} stripped, {} unchanged, {} failed, {} simulated",
        summary.processed(),
        summary.stripped,
        summary.unchanged,
        summary.failed,
        summary.simulated
    );

    writeln!(out, "\n{}", paint(GREEN, "Completed successfully."))?;
    if config.dry_run {
        writeln!(out, "{} files would be processed", summary.simulated)?;
    } else {
        writeln!(
            out,
            "{} stripped, {} already clean, {} failed",
            summary.stripped, summary.unchanged, summary.failed
        )?;
    }

    Ok(summary)
}
