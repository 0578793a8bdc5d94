// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Process-wide relay registry.
//
// Engine callbacks that cannot be handed an `Arc<EventRelay>` (activity
// lifecycle hooks created by the platform) reach the relay through here.
// Plugin attach calls `install`, plugin detach calls `teardown`. Nothing is
// created lazily: `installed` returns `None` outside that window.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::relay::EventRelay;

static INSTALLED: RwLock<Option<Arc<EventRelay>>> = RwLock::new(None);

/// Make `relay` the process-wide relay, returning the one it replaces.
pub fn install(relay: Arc<EventRelay>) -> Option<Arc<EventRelay>> {
    let previous = INSTALLED
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .replace(relay);
    info!(replaced = previous.is_some(), "event relay installed");
    previous
}

/// The installed relay, if any.
pub fn installed() -> Option<Arc<EventRelay>> {
    INSTALLED
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Remove the installed relay. Its channel is unbound so stragglers holding
/// a clone stop delivering.
pub fn teardown() -> Option<Arc<EventRelay>> {
    let relay = INSTALLED
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .take();
    if let Some(relay) = &relay {
        relay.unbind();
        info!("event relay torn down");
    }
    relay
}
