use std::path::PathBuf;

pub mod audio;
pub mod cli;
pub mod config;
pub mod utils;

/// An MP3 picked up by the scan, waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    /// Lowercase, without the leading dot.
    pub extension: String,
    pub comment: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error opening MP3: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
    #[error("Error saving MP3: {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
    #[error("Cannot locate executable directory: {0}")]
    ExecutableDir(String),
    #[error("Progress bar template error: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, StripError>;

// Re-exports for convenience
pub use audio::editor::{StripOutcome, TagEditor};
pub use audio::frames::StripProfile;
pub use audio::scanner::{ScanOutcome, Scanner, SkipReason};
pub use cli::pipeline::{RunOutcome, RunSummary};
pub use config::RunConfig;
