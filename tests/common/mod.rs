#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use id3::frame::{Comment, Content, ExtendedLink, ExtendedText, Lyrics, Picture, PictureType};
use id3::{Frame, Tag, TagLike, Version};

/// Stand-in MPEG audio: a frame sync header followed by silence.
pub fn audio_payload() -> Vec<u8> {
    let mut audio = vec![0xFF, 0xFB, 0x90, 0x64];
    audio.extend(std::iter::repeat(0x55).take(412));
    audio
}

/// Writes `name` under `dir` as raw audio with no tag.
pub fn untagged_mp3(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, audio_payload()).unwrap();
    path
}

/// Audio with an ID3v2.4 tag holding a title and, optionally, a comment.
pub fn mp3_with_comment(dir: &Path, name: &str, comment: Option<&str>) -> PathBuf {
    let path = untagged_mp3(dir, name);
    let mut tag = Tag::new();
    tag.set_title("Song");
    tag.set_artist("Artist");
    if let Some(text) = comment {
        tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: "".to_string(),
            text: text.to_string(),
        });
    }
    tag.write_to_path(&path, Version::Id3v24).unwrap();
    path
}

/// Audio with every kind of frame the full-metadata profile removes, plus a
/// few it keeps.
pub fn fully_tagged_mp3(dir: &Path, name: &str) -> PathBuf {
    let path = untagged_mp3(dir, name);
    let mut tag = Tag::new();
    tag.set_title("Song");
    tag.set_artist("Artist");
    tag.set_album("Album");
    tag.add_frame(Comment {
        lang: "eng".to_string(),
        description: "".to_string(),
        text: "ripped by X".to_string(),
    });
    tag.add_frame(ExtendedText {
        description: "SOURCE".to_string(),
        value: "webrip".to_string(),
    });
    tag.add_frame(Lyrics {
        lang: "eng".to_string(),
        description: "".to_string(),
        text: "la la la".to_string(),
    });
    tag.add_frame(Picture {
        mime_type: "image/png".to_string(),
        picture_type: PictureType::CoverFront,
        description: "".to_string(),
        data: vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3],
    });
    tag.set_text("TCOP", "2024 Label");
    tag.add_frame(ExtendedLink {
        description: "home".to_string(),
        link: "https://example.com".to_string(),
    });
    for id in ["WOAF", "WOAR", "WOAS", "WORS", "WCOM", "WPUB"] {
        tag.add_frame(Frame::with_content(
            id,
            Content::Link(format!("https://example.com/{}", id.to_lowercase())),
        ));
    }
    tag.write_to_path(&path, Version::Id3v24).unwrap();
    path
}

pub fn read_tag(path: &Path) -> Tag {
    Tag::read_from_path(path).unwrap()
}

pub fn frame_ids(path: &Path) -> Vec<String> {
    let mut ids: Vec<String> = read_tag(path)
        .frames()
        .map(|frame| frame.id().to_string())
        .collect();
    ids.sort();
    ids
}

/// Marks `path` read-only. Returns `false` when the current user can still
/// open it for writing (e.g. root), so callers can skip.
pub fn make_read_only(path: &Path) -> bool {
    let mut permissions = fs::metadata(path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(path, permissions).unwrap();
    fs::OpenOptions::new().write(true).open(path).is_err()
}
