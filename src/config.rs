use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::audio::frames::StripProfile;
use crate::cli::commands::Cli;
use crate::{Result, StripError};

/// Extensions the scan treats as music, lowercase and without the dot.
pub const MUSIC_EXTENSIONS: &[&str] = &["mp3"];

/// Settings for one run, fixed before the scan starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub dry_run: bool,
    pub profile: StripProfile,
    pub extensions: BTreeSet<String>,
    pub show_progress: bool,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>, profile: StripProfile) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            profile,
            extensions: MUSIC_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            show_progress: true,
        }
    }

    /// Builds the config the binaries run with: the scan root is the folder
    /// holding the executable.
    pub fn from_cli(cli: &Cli, profile: StripProfile) -> Result<Self> {
        let root = executable_dir()?;
        Ok(Self::new(root, profile).with_dry_run(cli.dry_run))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Lowercased extension of `path`, if it has one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| StripError::ExecutableDir(exe.display().to_string()))
}
