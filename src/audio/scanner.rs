use std::fs::File;
use std::path::Path;

use id3::Tag;
use walkdir::WalkDir;

use crate::config::{extension_of, RunConfig};
use crate::CandidateFile;

/// Why an entry did not make it into the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAFile,
    Extension,
    Unreadable,
    Unparsable,
    NoComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Candidate(CandidateFile),
    Skipped(SkipReason),
}

pub struct Scanner;

impl Scanner {
    /// Walks `config.root` and returns the candidates in walk order.
    /// Per-file problems only ever exclude that file.
    pub fn scan(config: &RunConfig) -> Vec<CandidateFile> {
        log::info!(
            "Scanning {} (profile: {})",
            config.root.display(),
            config.profile
        );

        let candidates: Vec<CandidateFile> = WalkDir::new(&config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter_map(|entry| {
                // Symlinked files count; `inspect` follows the link.
                if entry.file_type().is_dir() {
                    return None;
                }
                match Self::inspect(entry.path(), config) {
                    ScanOutcome::Candidate(file) => Some(file),
                    ScanOutcome::Skipped(reason) => {
                        log::debug!("Skipped {} ({:?})", entry.path().display(), reason);
                        None
                    }
                }
            })
            .collect();

        log::info!("Found {} candidate files", candidates.len());
        candidates
    }

    /// Decides whether a single path is a candidate under `config`.
    pub fn inspect(path: &Path, config: &RunConfig) -> ScanOutcome {
        if !path.is_file() {
            return ScanOutcome::Skipped(SkipReason::NotAFile);
        }

        let extension = match extension_of(path) {
            Some(ext) if config.extensions.contains(&ext) => ext,
            _ => return ScanOutcome::Skipped(SkipReason::Extension),
        };

        // Only proves the file can be opened; the handle is dropped right away.
        if File::open(path).is_err() {
            return ScanOutcome::Skipped(SkipReason::Unreadable);
        }

        let comment = if config.profile.requires_comment() {
            match read_comment(path) {
                Ok(Some(comment)) => Some(comment),
                Ok(None) => return ScanOutcome::Skipped(SkipReason::NoComment),
                Err(reason) => return ScanOutcome::Skipped(reason),
            }
        } else {
            None
        };

        ScanOutcome::Candidate(CandidateFile {
            path: path.to_path_buf(),
            extension,
            comment,
        })
    }
}

/// First non-empty comment text in the file's ID3v2 tag.
fn read_comment(path: &Path) -> std::result::Result<Option<String>, SkipReason> {
    let tag = Tag::read_from_path(path).map_err(|err| match err.kind {
        id3::ErrorKind::Io(_) => SkipReason::Unreadable,
        _ => SkipReason::Unparsable,
    })?;

    let comment = tag
        .comments()
        .next()
        .map(|comment| comment.text.clone())
        .filter(|text| !text.is_empty());
    Ok(comment)
}
