// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method-call host: decodes named calls from the host framework and drives
// the engine.
//
// Presenting a document is the only long-running call. Its reply is held as
// a pending presentation and completed by the engine's lifecycle hooks:
// `true` once the document loads, `false` if loading fails or the viewer is
// torn down first. A pending presentation is completed at most once.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lectern_config::{ConfigurationTranslator, NoResources, ResourceLookup, Translation};
use lectern_core::error::{LecternError, Result};
use lectern_core::{
    BridgeSettings, DocumentUri, FormFieldValue, RawConfiguration, RawValue, ValueType,
};
use serde::Serialize;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::registry;
use crate::relay::EventRelay;
use crate::traits::ViewerEngine;

/// A named call with its argument map.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: RawConfiguration,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: RawConfiguration) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Required string argument: present, a string, and not empty.
    /// `label` is the human-readable name used in the error message.
    fn required_str(&self, key: &str, label: &str) -> Result<&str> {
        let value = self
            .arguments
            .get(key)
            .ok_or_else(|| LecternError::MissingArgument(label.to_owned()))?;
        let text = value.as_str().ok_or_else(|| LecternError::InvalidType {
            key: key.to_owned(),
            expected: ValueType::String,
        })?;
        if text.is_empty() {
            return Err(LecternError::EmptyArgument(label.to_owned()));
        }
        Ok(text)
    }

    /// Optional boolean argument. Absent means `false`.
    fn flag(&self, key: &str) -> Result<bool> {
        match self.arguments.get(key) {
            None => Ok(false),
            Some(value) => value.as_bool().ok_or_else(|| LecternError::InvalidType {
                key: key.to_owned(),
                expected: ValueType::Bool,
            }),
        }
    }

    /// The `delay` argument, in seconds, as an int or a double.
    fn sync_delay(&self) -> Result<Duration> {
        let invalid = || LecternError::InvalidArgument("Delay must be a positive number".into());
        let seconds = match self.arguments.get("delay") {
            Some(RawValue::Int(i)) => *i as f64,
            Some(RawValue::Double(d)) => *d,
            _ => return Err(invalid()),
        };
        Duration::try_from_secs_f64(seconds).map_err(|_| invalid())
    }

    /// The optional `configuration` map argument.
    fn configuration(&self) -> Result<RawConfiguration> {
        match self.arguments.get("configuration") {
            None => Ok(RawConfiguration::new()),
            Some(value) => value
                .as_map()
                .map(|map| RawConfiguration::from(map.clone()))
                .ok_or_else(|| LecternError::InvalidType {
                    key: "configuration".into(),
                    expected: ValueType::Map,
                }),
        }
    }
}

/// A rejected call as the host framework sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct MethodError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl From<LecternError> for MethodError {
    fn from(err: LecternError) -> Self {
        Self {
            code: err.code().to_owned(),
            message: err.to_string(),
            details: err.key().map(str::to_owned),
        }
    }
}

/// The three ways a call can end.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Success(RawValue),
    Error(MethodError),
    NotImplemented,
}

/// Identifies one `present` / `presentInstant` call in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentationId(Uuid);

impl PresentationId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

struct Pending {
    id: PresentationId,
    reply: oneshot::Sender<bool>,
}

/// Slot for the single outstanding presentation.
#[derive(Default)]
struct PendingPresentation {
    slot: Mutex<Option<Pending>>,
}

impl PendingPresentation {
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Pending>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a presentation. An earlier one still waiting is completed with
    /// `false`.
    fn begin(&self) -> (PresentationId, oneshot::Receiver<bool>) {
        let (reply, rx) = oneshot::channel();
        let id = PresentationId::new();
        if let Some(previous) = self.lock().replace(Pending { id, reply }) {
            warn!(previous = %previous.id, "presentation superseded before it finished");
            let _ = previous.reply.send(false);
        }
        (id, rx)
    }

    /// Complete the outstanding presentation, if any. Returns whether one
    /// was waiting.
    fn complete(&self, loaded: bool) -> bool {
        let Some(pending) = self.lock().take() else {
            warn!(loaded, "no presentation waiting for a result");
            return false;
        };
        debug!(id = %pending.id, loaded, "presentation completed");
        // The caller may have stopped waiting; nothing to do then.
        let _ = pending.reply.send(loaded);
        true
    }

    /// Drop the pending presentation `id` without replying, if it is still
    /// the current one.
    fn abandon(&self, id: PresentationId) {
        let mut slot = self.lock();
        if slot.as_ref().is_some_and(|p| p.id == id) {
            slot.take();
        }
    }

    fn current(&self) -> Option<PresentationId> {
        self.lock().as_ref().map(|p| p.id)
    }
}

/// Dispatches host method calls onto a `ViewerEngine`.
pub struct PluginHost {
    engine: Box<dyn ViewerEngine>,
    relay: Arc<EventRelay>,
    resources: Box<dyn ResourceLookup + Send + Sync>,
    settings: BridgeSettings,
    pending: PendingPresentation,
}

impl PluginHost {
    pub fn new(engine: Box<dyn ViewerEngine>, relay: Arc<EventRelay>, settings: BridgeSettings) -> Self {
        Self {
            engine,
            relay,
            resources: Box::new(NoResources),
            settings,
            pending: PendingPresentation::default(),
        }
    }

    /// Resolve style resource names through `resources`.
    pub fn with_resources(mut self, resources: impl ResourceLookup + Send + Sync + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    pub fn relay(&self) -> &Arc<EventRelay> {
        &self.relay
    }

    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    /// Presentation currently waiting for the engine, if any.
    pub fn pending_presentation(&self) -> Option<PresentationId> {
        self.pending.current()
    }

    /// Publish this host's relay process-wide (plugin attached).
    pub fn attach(&self) {
        registry::install(self.relay.clone());
    }

    /// Withdraw the process-wide relay (plugin detached).
    pub fn detach(&self) {
        registry::teardown();
    }

    /// Handle one call. `present` and `presentInstant` resolve only once the
    /// engine reports the outcome.
    #[instrument(skip_all, fields(method = %call.method))]
    pub async fn handle(&self, call: MethodCall) -> Reply {
        match self.dispatch(&call).await {
            Ok(value) => Reply::Success(value),
            Err(LecternError::NotImplemented(method)) => {
                debug!(%method, "method not implemented");
                Reply::NotImplemented
            }
            Err(e) => {
                warn!(error = %e, "method call rejected");
                Reply::Error(e.into())
            }
        }
    }

    async fn dispatch(&self, call: &MethodCall) -> Result<RawValue> {
        match call.method.as_str() {
            "frameworkVersion" => Ok(RawValue::String(format!(
                "{} {}",
                self.settings.framework_name,
                self.engine.engine_version()
            ))),
            "setLicenseKey" => {
                let key = call.required_str("licenseKey", "License key")?;
                self.engine.set_license_key(key)?;
                Ok(RawValue::Null)
            }
            "setLicenseKeys" => {
                // Each platform reads only its own key.
                let argument = format!("{}LicenseKey", self.settings.platform_prefix);
                let key = call.required_str(&argument, "License key")?;
                self.engine.set_license_key(key)?;
                Ok(RawValue::Null)
            }
            "present" => self.present(call).await,
            "presentInstant" => self.present_instant(call).await,
            "setFormFieldValue" => self.set_form_field_value(call),
            "getFormFieldValue" => self.form_field_value(call),
            "save" => {
                self.require_document("save")?;
                Ok(RawValue::Bool(self.engine.save_if_modified()?))
            }
            "applyInstantJson" => {
                let json = call.required_str("annotationsJson", "annotationsJson")?;
                self.require_document("applyInstantJson")?;
                self.engine.import_instant_json(json)?;
                Ok(RawValue::Bool(true))
            }
            "exportInstantJson" => {
                self.require_document("exportInstantJson")?;
                Ok(RawValue::String(self.engine.export_instant_json()?))
            }
            "syncAnnotations" => {
                self.require_document("syncAnnotations")?;
                self.engine.sync_annotations()?;
                Ok(RawValue::Bool(true))
            }
            "setDelayForSyncingLocalChanges" => {
                let delay = call.sync_delay()?;
                self.require_document("setDelayForSyncingLocalChanges")?;
                self.engine.set_delay_for_syncing_local_changes(delay)?;
                Ok(RawValue::Bool(true))
            }
            "setListenToServerChanges" => {
                let listen = call.flag("listen")?;
                self.require_document("setListenToServerChanges")?;
                self.engine.set_listen_to_server_changes(listen)?;
                Ok(RawValue::Bool(true))
            }
            other => Err(LecternError::NotImplemented(other.to_owned())),
        }
    }

    fn translate(&self, raw: &RawConfiguration) -> Result<Translation> {
        ConfigurationTranslator::from_settings(&self.settings, self.resources.as_ref()).translate(raw)
    }

    async fn present(&self, call: &MethodCall) -> Result<RawValue> {
        let document = call.required_str("document", "Document path")?;
        let Translation {
            configuration,
            password,
        } = self.translate(&call.configuration()?)?;
        let uri = DocumentUri::parse(document)?;

        // Registered before opening so a synchronous load callback finds it.
        let (id, loaded) = self.pending.begin();
        let opened = if uri.is_image(&self.settings.image_extensions) {
            info!(%id, %uri, "presenting image");
            self.engine.open_image(&uri, &configuration)
        } else {
            info!(%id, %uri, "presenting document");
            self.engine
                .open_document(&uri, password.as_deref(), &configuration)
        };
        if let Err(e) = opened {
            self.pending.abandon(id);
            return Err(e);
        }
        Ok(RawValue::Bool(loaded.await.unwrap_or(false)))
    }

    async fn present_instant(&self, call: &MethodCall) -> Result<RawValue> {
        let server_url = call.required_str("serverUrl", "Server URL")?;
        let jwt = call.required_str("jwt", "JWT")?;
        let translation = self.translate(&call.configuration()?)?;

        let (id, loaded) = self.pending.begin();
        info!(%id, server_url, "presenting instant document");
        if let Err(e) = self
            .engine
            .open_instant(server_url, jwt, &translation.configuration)
        {
            self.pending.abandon(id);
            return Err(e);
        }
        Ok(RawValue::Bool(loaded.await.unwrap_or(false)))
    }

    fn set_form_field_value(&self, call: &MethodCall) -> Result<RawValue> {
        let value = call.required_str("value", "Value")?;
        let name = call.required_str("fullyQualifiedName", "Fully qualified name")?;
        self.require_document("setFormFieldValue")?;

        let Some(current) = self.engine.form_field(name)? else {
            debug!(name, "form element not found");
            return Ok(RawValue::Bool(false));
        };
        match FormFieldValue::from_wire(current.kind(), name, value)? {
            Some(new_value) => {
                self.engine.set_form_field(name, &new_value)?;
                Ok(RawValue::Bool(true))
            }
            None => Ok(RawValue::Bool(false)),
        }
    }

    fn form_field_value(&self, call: &MethodCall) -> Result<RawValue> {
        let name = call.required_str("fullyQualifiedName", "Fully qualified name")?;
        self.require_document("getFormFieldValue")?;

        let value = self
            .engine
            .form_field(name)?
            .ok_or_else(|| LecternError::FormElementNotFound(name.to_owned()))?;
        Ok(RawValue::String(value.to_wire()?))
    }

    fn require_document(&self, method: &str) -> Result<()> {
        if self.engine.has_document() {
            Ok(())
        } else {
            Err(LecternError::NoDocumentPresented(method.to_owned()))
        }
    }

    // -- Engine lifecycle hooks --

    pub fn document_loaded(&self, document_id: &str) {
        self.pending.complete(true);
        self.relay.document_loaded(document_id);
    }

    pub fn document_load_failed(&self, reason: &str) {
        warn!(reason, "document failed to load");
        self.pending.complete(false);
    }

    pub fn activity_paused(&self) {
        self.relay.activity_paused();
    }

    pub fn fragment_added(&self) {
        self.relay.fragment_added();
    }

    /// The viewer went away. A presentation still waiting resolves `false`.
    pub fn activity_destroyed(&self) {
        if self.pending.current().is_some() {
            self.pending.complete(false);
        }
    }
}
