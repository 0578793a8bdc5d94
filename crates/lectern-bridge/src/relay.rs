// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Event relay: fans engine events out to the bound host channel and to an
// optional callback sink.
//
// The relay is constructed explicitly and shared by `Arc`. The channel slot
// is read-locked for the whole of a send and write-locked by bind/unbind, so
// once `bind` returns no event can reach the channel it replaced. An event
// raised concurrently with a rebind may be dropped.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error, info};

use crate::channel::EventChannel;
use crate::events::{Event, Payload};
use crate::sink::CallbackSink;

#[derive(Default)]
pub struct EventRelay {
    channel: RwLock<Option<Arc<dyn EventChannel>>>,
    sink: RwLock<Option<Arc<dyn CallbackSink>>>,
}

// Relay state stays usable after a panicking holder; a slot is only ever
// replaced wholesale, so a poisoned value is still consistent.
fn read<T: ?Sized>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T: ?Sized>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a channel, replacing any previous one.
    pub fn bind(&self, channel: Arc<dyn EventChannel>) {
        let previous = write(&self.channel).replace(channel);
        info!(replaced = previous.is_some(), "event channel bound");
    }

    /// Clear the channel. Later events are dropped until the next bind.
    pub fn unbind(&self) {
        if write(&self.channel).take().is_some() {
            info!("event channel unbound");
        }
    }

    pub fn is_bound(&self) -> bool {
        read(&self.channel).is_some()
    }

    /// Register or clear the structured callback sink.
    pub fn set_callback_sink(&self, sink: Option<Arc<dyn CallbackSink>>) {
        *write(&self.sink) = sink;
    }

    /// Fire-and-forget delivery to the bound channel.
    ///
    /// Dropped silently when unbound. Delivery failures are logged and
    /// swallowed.
    pub fn notify(&self, name: &str, payload: Option<Payload>) {
        let guard = read(&self.channel);
        let Some(channel) = guard.as_ref() else {
            debug!(event = name, "no channel bound, event dropped");
            return;
        };
        if let Err(e) = channel.send(name, payload) {
            error!(event = name, error = %e, "event delivery failed");
        }
    }

    /// Deliver `event` to the channel and to the matching sink handler.
    pub fn dispatch(&self, event: &Event) {
        self.notify(event.name(), event.payload());

        let sink = read(&self.sink).clone();
        let Some(sink) = sink else {
            return;
        };
        match event {
            Event::ActivityPaused => sink.on_activity_paused(),
            Event::FragmentAdded => sink.on_fragment_added(),
            Event::DocumentLoaded { document_id } => sink.on_document_loaded(document_id),
            Event::InstantSyncStarted { document_id } => sink.on_instant_sync_started(document_id),
            Event::InstantSyncFinished { document_id } => {
                sink.on_instant_sync_finished(document_id)
            }
            Event::InstantSyncFailed { document_id, error } => {
                sink.on_instant_sync_failed(document_id, error)
            }
            Event::InstantAuthenticationFinished {
                document_id,
                valid_jwt,
            } => sink.on_instant_authentication_finished(document_id, valid_jwt),
            Event::InstantAuthenticationFailed { document_id, error } => {
                sink.on_instant_authentication_failed(document_id, error)
            }
        }
    }

    // -- One entry point per engine event --

    pub fn activity_paused(&self) {
        self.dispatch(&Event::ActivityPaused);
    }

    pub fn fragment_added(&self) {
        self.dispatch(&Event::FragmentAdded);
    }

    pub fn document_loaded(&self, document_id: &str) {
        self.dispatch(&Event::DocumentLoaded {
            document_id: document_id.to_owned(),
        });
    }

    pub fn instant_sync_started(&self, document_id: &str) {
        self.dispatch(&Event::InstantSyncStarted {
            document_id: document_id.to_owned(),
        });
    }

    pub fn instant_sync_finished(&self, document_id: &str) {
        self.dispatch(&Event::InstantSyncFinished {
            document_id: document_id.to_owned(),
        });
    }

    pub fn instant_sync_failed(&self, document_id: &str, error: &str) {
        self.dispatch(&Event::InstantSyncFailed {
            document_id: document_id.to_owned(),
            error: error.to_owned(),
        });
    }

    pub fn instant_authentication_finished(&self, document_id: &str, valid_jwt: &str) {
        self.dispatch(&Event::InstantAuthenticationFinished {
            document_id: document_id.to_owned(),
            valid_jwt: valid_jwt.to_owned(),
        });
    }

    pub fn instant_authentication_failed(&self, document_id: &str, error: &str) {
        self.dispatch(&Event::InstantAuthenticationFailed {
            document_id: document_id.to_owned(),
            error: error.to_owned(),
        });
    }
}
