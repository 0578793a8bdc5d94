// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic view of the native PDF engine.
//
// The bridge never renders or parses documents itself. It only needs to hand
// a typed configuration to the engine, query form elements, move annotation
// data in and out and steer Instant syncing, so that is all these traits
// describe.

use std::time::Duration;

use lectern_core::error::Result;
use lectern_core::{DocumentUri, FormFieldValue, ViewerConfiguration};

/// Everything the plugin host needs from an engine.
///
/// Engines that cannot do something (the desktop stub, for instance) return
/// `LecternError::PlatformUnavailable`.
pub trait ViewerEngine:
    NativeLicensing + NativePresenter + NativeForms + NativeAnnotations + NativeInstant + Send + Sync
{
    /// Engine version string, e.g. "2024.3.1".
    fn engine_version(&self) -> &str;
}

pub trait NativeLicensing {
    /// Initialise the engine with a licence key.
    fn set_license_key(&self, key: &str) -> Result<()>;
}

/// Start viewer sessions.
///
/// Opening is asynchronous on every real engine: `Ok(())` means the viewer
/// was started, and the outcome arrives later through the host's lifecycle
/// hooks (`document_loaded`, `document_load_failed`).
pub trait NativePresenter {
    fn open_document(
        &self,
        uri: &DocumentUri,
        password: Option<&str>,
        configuration: &ViewerConfiguration,
    ) -> Result<()>;

    fn open_image(&self, uri: &DocumentUri, configuration: &ViewerConfiguration) -> Result<()>;

    /// Open a collaboration-backed document served by an Instant server.
    fn open_instant(
        &self,
        server_url: &str,
        jwt: &str,
        configuration: &ViewerConfiguration,
    ) -> Result<()>;

    /// Whether a document is currently presented and loaded.
    fn has_document(&self) -> bool;
}

/// Form elements of the presented document.
pub trait NativeForms {
    /// Current value of the element with this fully qualified name, or
    /// `None` if the document has no such element.
    fn form_field(&self, name: &str) -> Result<Option<FormFieldValue>>;

    /// Write a value. Callers have already matched the value to the element kind.
    fn set_form_field(&self, name: &str, value: &FormFieldValue) -> Result<()>;
}

/// Persisting the document and exchanging annotations as Instant JSON.
pub trait NativeAnnotations {
    /// Save if there are unsaved changes. Returns whether anything was written.
    fn save_if_modified(&self) -> Result<bool>;

    fn import_instant_json(&self, json: &str) -> Result<()>;

    fn export_instant_json(&self) -> Result<String>;
}

/// Syncing of documents opened with `open_instant`.
///
/// Engines return `LecternError::Instant` when the presented document is not
/// an Instant document.
pub trait NativeInstant {
    /// Push local changes and pull remote ones now. Blocks until the sync ends.
    fn sync_annotations(&self) -> Result<()>;

    /// How long local edits are batched before being pushed automatically.
    fn set_delay_for_syncing_local_changes(&self, delay: Duration) -> Result<()>;

    /// Whether remote changes are pulled as the server announces them.
    fn set_listen_to_server_changes(&self, listen: bool) -> Result<()>;
}
