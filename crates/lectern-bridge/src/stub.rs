// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub engine for desktop/CI builds where no native PDF engine is linked.
//
// Every call returns `PlatformUnavailable`; the stub never has a document.

use std::time::Duration;

use lectern_core::error::{LecternError, Result};
use lectern_core::{DocumentUri, FormFieldValue, ViewerConfiguration};

use crate::traits::*;

/// Engine that refuses every call.
pub struct StubEngine;

impl ViewerEngine for StubEngine {
    fn engine_version(&self) -> &str {
        "stub"
    }
}

impl NativeLicensing for StubEngine {
    fn set_license_key(&self, _key: &str) -> Result<()> {
        tracing::warn!("NativeLicensing::set_license_key called on stub engine");
        Err(LecternError::PlatformUnavailable)
    }
}

impl NativePresenter for StubEngine {
    fn open_document(
        &self,
        uri: &DocumentUri,
        _password: Option<&str>,
        _configuration: &ViewerConfiguration,
    ) -> Result<()> {
        tracing::warn!(%uri, "NativePresenter::open_document called on stub engine");
        Err(LecternError::PlatformUnavailable)
    }

    fn open_image(&self, uri: &DocumentUri, _configuration: &ViewerConfiguration) -> Result<()> {
        tracing::warn!(%uri, "NativePresenter::open_image called on stub engine");
        Err(LecternError::PlatformUnavailable)
    }

    fn open_instant(
        &self,
        server_url: &str,
        _jwt: &str,
        _configuration: &ViewerConfiguration,
    ) -> Result<()> {
        tracing::warn!(server_url, "NativePresenter::open_instant called on stub engine");
        Err(LecternError::PlatformUnavailable)
    }

    fn has_document(&self) -> bool {
        false
    }
}

impl NativeForms for StubEngine {
    fn form_field(&self, _name: &str) -> Result<Option<FormFieldValue>> {
        Err(LecternError::PlatformUnavailable)
    }

    fn set_form_field(&self, _name: &str, _value: &FormFieldValue) -> Result<()> {
        Err(LecternError::PlatformUnavailable)
    }
}

impl NativeAnnotations for StubEngine {
    fn save_if_modified(&self) -> Result<bool> {
        tracing::warn!("NativeAnnotations::save_if_modified called on stub engine");
        Err(LecternError::PlatformUnavailable)
    }

    fn import_instant_json(&self, _json: &str) -> Result<()> {
        Err(LecternError::PlatformUnavailable)
    }

    fn export_instant_json(&self) -> Result<String> {
        Err(LecternError::PlatformUnavailable)
    }
}

impl NativeInstant for StubEngine {
    fn sync_annotations(&self) -> Result<()> {
        tracing::warn!("NativeInstant::sync_annotations called on stub engine");
        Err(LecternError::PlatformUnavailable)
    }

    fn set_delay_for_syncing_local_changes(&self, _delay: Duration) -> Result<()> {
        Err(LecternError::PlatformUnavailable)
    }

    fn set_listen_to_server_changes(&self, _listen: bool) -> Result<()> {
        Err(LecternError::PlatformUnavailable)
    }
}
