// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Structured callback listener mirrored by the relay.

/// Typed listener for relay events. Every handler defaults to a no-op, so an
/// implementation only overrides what it cares about.
///
/// Handlers run on the thread that raised the event and must not call back
/// into `EventRelay::set_callback_sink`.
pub trait CallbackSink: Send + Sync {
    fn on_activity_paused(&self) {}

    fn on_fragment_added(&self) {}

    fn on_document_loaded(&self, _document_id: &str) {}

    fn on_instant_sync_started(&self, _document_id: &str) {}

    fn on_instant_sync_finished(&self, _document_id: &str) {}

    fn on_instant_sync_failed(&self, _document_id: &str, _error: &str) {}

    fn on_instant_authentication_finished(&self, _document_id: &str, _valid_jwt: &str) {}

    fn on_instant_authentication_failed(&self, _document_id: &str, _error: &str) {}
}
