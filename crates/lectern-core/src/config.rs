// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DEFAULT_IMAGE_EXTENSIONS;
use crate::error::Result;

/// Settings for one bridge installation. Every field has a default, so a
/// settings file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeSettings {
    /// Name of the method channel the host binds.
    pub channel_name: String,
    /// Prefix for platform-specific configuration keys (`android` turns
    /// `showSearchAction` into `androidShowSearchAction`).
    pub platform_prefix: String,
    /// Reported before the engine version by `frameworkVersion`.
    pub framework_name: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Extensions opened as images instead of PDF documents.
    pub image_extensions: Vec<String>,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            channel_name: "lectern".into(),
            platform_prefix: "android".into(),
            framework_name: "Android".into(),
            log_filter: "info".into(),
            image_extensions: DEFAULT_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl BridgeSettings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.as_ref().display(), "bridge settings loaded");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"platformPrefix": "ios", "logFilter": "debug"}"#).unwrap();

        let settings = BridgeSettings::load(&path).unwrap();
        assert_eq!(settings.platform_prefix, "ios");
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.channel_name, "lectern");
        assert_eq!(settings.image_extensions.len(), 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BridgeSettings::load("/nonexistent/lectern.json").unwrap_err();
        assert!(matches!(err, crate::error::LecternError::Io(_)));
    }
}
