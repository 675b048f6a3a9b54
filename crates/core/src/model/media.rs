use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaRefError {
    #[error("Media reference cannot be empty.")]
    EmptyMediaRef,
}

//
// ─── MEDIA REFERENCE ───────────────────────────────────────────────────────────
//

/// Opaque locator for a question's image or audio clue.
///
/// Resolution (decoding, playback) belongs to the presentation layer; the
/// engine only carries the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaRef {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaRefError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaRefError::EmptyMediaRef);
        }
        Ok(MediaRef::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaRefError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaRefError::EmptyMediaRef);
        }
        let u = Url::parse(s).map_err(|_| MediaRefError::EmptyMediaRef)?;
        Ok(MediaRef::Url(u))
    }

    /// Parse a raw catalog string: URLs when they look like one, file paths
    /// otherwise.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaRefError> {
        let s = raw.as_ref().trim();
        if s.contains("://") {
            Self::from_url(s)
        } else {
            Self::from_file(s)
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaRef::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaRef::Url(u) => Some(u),
            _ => None,
        }
    }
}
