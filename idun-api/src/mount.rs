//! Drive and mount-target classification.

use std::fmt;
use std::path::{Path, PathBuf};

/// A validated drive argument: one ASCII letter followed by `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveSpec {
    letter: char,
}

impl DriveSpec {
    /// Parse `x:` into a drive spec; anything else is rejected.
    pub fn parse(arg: &str) -> Option<Self> {
        let mut chars = arg.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic() => Some(Self {
                letter: letter.to_ascii_lowercase(),
            }),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// The two primary slots the Ultimate hardware runner can claim.
    pub fn is_primary(&self) -> bool {
        matches!(self.letter, 'a' | 'b')
    }
}

impl fmt::Display for DriveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.letter)
    }
}

/// Recognized disk-image formats, by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskFormat {
    D64,
    D71,
    T64,
}

impl DiskFormat {
    /// Match a case-insensitive image suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".d64") {
            Some(Self::D64)
        } else if lower.ends_with(".d71") {
            Some(Self::D71)
        } else if lower.ends_with(".t64") {
            Some(Self::T64)
        } else {
            None
        }
    }
}

/// Classification of a mount target string.
///
/// Derived from the suffix and from filesystem existence, never from
/// file contents. A recognized image suffix wins even when a directory
/// of the same name exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountTarget {
    DiskImage(PathBuf, DiskFormat),
    DirectoryPath(PathBuf),
}

impl MountTarget {
    pub fn classify(target: &str) -> Option<Self> {
        if let Some(format) = DiskFormat::from_name(target) {
            return Some(Self::DiskImage(PathBuf::from(target), format));
        }
        let path = Path::new(target);
        if path.is_dir() {
            return Some(Self::DirectoryPath(path.to_path_buf()));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_spec_valid() {
        let drive = DriveSpec::parse("d:").unwrap();
        assert_eq!(drive.letter(), 'd');
        assert!(!drive.is_primary());
        assert_eq!(drive.to_string(), "d:");
    }

    #[test]
    fn test_drive_spec_uppercase_normalized() {
        let drive = DriveSpec::parse("B:").unwrap();
        assert_eq!(drive.letter(), 'b');
        assert!(drive.is_primary());
    }

    #[test]
    fn test_drive_spec_invalid() {
        assert!(DriveSpec::parse("").is_none());
        assert!(DriveSpec::parse("a").is_none());
        assert!(DriveSpec::parse(":").is_none());
        assert!(DriveSpec::parse("ab:").is_none());
        assert!(DriveSpec::parse("a:x").is_none());
        assert!(DriveSpec::parse("1:").is_none());
    }

    #[test]
    fn test_classify_image_suffix_any_case() {
        match MountTarget::classify("/tmp/game.D64") {
            Some(MountTarget::DiskImage(_, DiskFormat::D64)) => {}
            other => panic!("expected disk image, got {:?}", other),
        }
        assert!(matches!(
            MountTarget::classify("tape.t64"),
            Some(MountTarget::DiskImage(_, DiskFormat::T64))
        ));
    }

    #[test]
    fn test_classify_suffix_beats_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("disk.d64");
        std::fs::create_dir(&dir).unwrap();

        let target = dir.to_string_lossy().into_owned();
        assert!(matches!(
            MountTarget::classify(&target),
            Some(MountTarget::DiskImage(_, DiskFormat::D64))
        ));
    }

    #[test]
    fn test_classify_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().to_string_lossy().into_owned();
        assert!(matches!(
            MountTarget::classify(&target),
            Some(MountTarget::DirectoryPath(_))
        ));
    }

    #[test]
    fn test_classify_missing_target() {
        assert!(MountTarget::classify("/nonexistent/blob.bin").is_none());
    }
}
