//! The fixed sets of ID3v2 frame ids each strip profile removes.

use std::fmt;

/// Comment-bearing frames: comment, user text, unsynced and synced lyrics.
pub const COMMENT_FRAMES: &[&str] = &["COMM", "TXXX", "USLT", "SYLT"];

/// Everything in [`COMMENT_FRAMES`] plus artwork, copyright and URL frames.
pub const FULL_METADATA_FRAMES: &[&str] = &[
    "COMM", // comment
    "TXXX", // user defined text
    "USLT", // unsynchronised lyrics
    "SYLT", // synchronised lyrics
    "APIC", // attached picture
    "TCOP", // copyright
    "WXXX", // user defined URL
    "WOAF", // official audio file webpage
    "WOAR", // official artist webpage
    "WOAS", // official audio source webpage
    "WORS", // official radio station homepage
    "WCOM", // commercial information
    "WPUB", // publisher webpage
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripProfile {
    /// Only files with a non-empty comment are candidates.
    Comments,
    /// Every MP3 is a candidate.
    FullMetadata,
}

impl StripProfile {
    pub fn frame_ids(&self) -> &'static [&'static str] {
        match self {
            StripProfile::Comments => COMMENT_FRAMES,
            StripProfile::FullMetadata => FULL_METADATA_FRAMES,
        }
    }

    /// Whether the scan keeps only files that already carry a comment.
    pub fn requires_comment(&self) -> bool {
        matches!(self, StripProfile::Comments)
    }

    pub fn header(&self) -> &'static str {
        match self {
            StripProfile::Comments => "The following MP3 files will have their COMMENT removed:",
            StripProfile::FullMetadata => {
                "The following MP3 files will have their metadata (comments, lyrics, cover art, URLs, copyright) removed:"
            }
        }
    }

    pub fn nothing_found(&self) -> &'static str {
        match self {
            StripProfile::Comments => "No MP3 files with comments found.",
            StripProfile::FullMetadata => "No MP3 files found.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StripProfile::Comments => "comments",
            StripProfile::FullMetadata => "full-metadata",
        }
    }
}

impl fmt::Display for StripProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
