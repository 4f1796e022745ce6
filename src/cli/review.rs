//! Printing the candidate list and asking for a go/no-go.

use std::io::{self, BufRead, Write};

use crate::config::RunConfig;
use crate::utils::style::{paint, CYAN, GREEN, YELLOW};
use crate::CandidateFile;

/// Prints the review. Returns `false` when there is nothing to process, in
/// which case the caller must not prompt.
pub fn present<W: Write>(
    out: &mut W,
    candidates: &[CandidateFile],
    config: &RunConfig,
) -> io::Result<bool> {
    if candidates.is_empty() {
        writeln!(out, "{}", paint(YELLOW, config.profile.nothing_found()))?;
        return Ok(false);
    }

    writeln!(out, "{}\n", paint(CYAN, config.profile.header()))?;

    for candidate in candidates {
        match &candidate.comment {
            Some(comment) => writeln!(
                out,
                " - {} {}",
                candidate.path.display(),
                paint(YELLOW, format!("(comment: {:?})", comment))
            )?,
            None => writeln!(out, " - {}", candidate.path.display())?,
        }
    }

    writeln!(
        out,
        "\n{}\n",
        paint(GREEN, format!("Total: {} files", candidates.len()))
    )?;

    if config.dry_run {
        writeln!(
            out,
            "{}\n",
            paint(YELLOW, "[DRY RUN] No changes will be written.")
        )?;
    }

    Ok(true)
}

/// Prompts and reads one line. End of input and undecodable bytes count as "no".
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "Continue? (y/N): ")?;
    out.flush()?;

    let mut answer = Vec::new();
    input.read_until(b'\n', &mut answer)?;
    Ok(is_affirmative(&String::from_utf8_lossy(&answer)))
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}
