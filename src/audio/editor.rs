//! In-place removal of ID3v2 frames.
//!
//! Reading and writing the binary tag is left to the `id3` crate; this module
//! only decides which frames go and whether the file needs rewriting at all.

use std::path::Path;

use id3::{Tag, TagLike, Version};

use crate::audio::frames::StripProfile;
use crate::{Result, StripError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// The tag was rewritten without `removed` frames.
    Stripped { removed: usize },
    /// None of the targeted frames were present; the file was not written.
    Unchanged,
}

pub struct TagEditor {
    frame_ids: &'static [&'static str],
}

impl TagEditor {
    pub fn new(profile: StripProfile) -> Self {
        Self {
            frame_ids: profile.frame_ids(),
        }
    }

    pub fn frame_ids(&self) -> &'static [&'static str] {
        self.frame_ids
    }

    /// Removes every targeted frame from the tag at `path` and saves it back.
    ///
    /// Files without an ID3v2 tag, or whose tag holds none of the targeted
    /// frames, are left byte-for-byte untouched.
    pub fn strip(&self, path: impl AsRef<Path>) -> Result<StripOutcome> {
        let path = path.as_ref();

        let mut tag = match Tag::read_from_path(path) {
            Ok(tag) => tag,
            Err(err) if matches!(err.kind, id3::ErrorKind::NoTag) => {
                log::debug!("{} has no ID3v2 tag", path.display());
                return Ok(StripOutcome::Unchanged);
            }
            Err(source) => {
                return Err(StripError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let removed: usize = self
            .frame_ids
            .iter()
            .map(|id| tag.remove(*id).len())
            .sum();

        if removed == 0 {
            log::debug!("{}: nothing to remove", path.display());
            return Ok(StripOutcome::Unchanged);
        }

        let version = writable_version(tag.version());
        tag.write_to_path(path, version)
            .map_err(|source| StripError::Save {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("{}: removed {} frames", path.display(), removed);
        Ok(StripOutcome::Stripped { removed })
    }
}

/// ID3v2.2 cannot be encoded, so those tags are saved as v2.3.
fn writable_version(version: Version) -> Version {
    match version {
        Version::Id3v22 => Version::Id3v23,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v22_tags_are_upgraded_on_save() {
        assert_eq!(writable_version(Version::Id3v22), Version::Id3v23);
        assert_eq!(writable_version(Version::Id3v23), Version::Id3v23);
        assert_eq!(writable_version(Version::Id3v24), Version::Id3v24);
    }

    #[test]
    fn editor_uses_profile_frames() {
        let editor = TagEditor::new(StripProfile::Comments);
        assert_eq!(editor.frame_ids(), &["COMM", "TXXX", "USLT", "SYLT"]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.mp3");
        let err = TagEditor::new(StripProfile::Comments)
            .strip(&path)
            .unwrap_err();
        assert!(matches!(err, StripError::Open { .. }));
        assert_eq!(err.to_string(), format!("Error opening MP3: {}", path.display()));
    }
}
