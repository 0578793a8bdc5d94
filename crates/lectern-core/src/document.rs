// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document references passed in by the host.
//
// Hosts send either a full URI (`content://...`, `file:///...`, `https://...`)
// or a bare filesystem path. Bare paths are normalised to `file:///` URIs
// before anything reaches the engine.

use std::fmt;

use url::Url;

use crate::error::{LecternError, Result};

const FILE_SCHEME: &str = "file:///";

/// Extensions opened through the engine's image entry point.
pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tiff", "tif"];

/// A normalised, parsed document URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUri(Url);

impl DocumentUri {
    /// Parse a host document reference, adding the file scheme if it is missing.
    ///
    /// `/sdcard/Download/Document.pdf` becomes
    /// `file:///sdcard/Download/Document.pdf`.
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.is_empty() {
            return Err(LecternError::EmptyArgument("Document path".into()));
        }

        let normalised = if has_scheme(reference) {
            reference.to_owned()
        } else {
            let path = reference.strip_prefix('/').unwrap_or(reference);
            format!("{FILE_SCHEME}{path}")
        };

        Url::parse(&normalised).map(Self).map_err(|e| {
            LecternError::InvalidArgument(format!("document reference {reference:?}: {e}"))
        })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Lower-cased extension of the last path segment, if any.
    pub fn extension(&self) -> Option<String> {
        let segment = self.0.path().rsplit('/').next()?;
        let (_, ext) = segment.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }

    /// Whether this document should be opened as an image rather than a PDF.
    pub fn is_image<S: AsRef<str>>(&self, image_extensions: &[S]) -> bool {
        match self.extension() {
            Some(ext) => image_extensions.iter().any(|e| e.as_ref() == ext),
            None => false,
        }
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RFC 3986 scheme check: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn has_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
