// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lectern Bridge — the native side of the host bridge.
//
// `traits` describes the PDF engine at the granularity the bridge needs, and
// `stub` provides a desktop/CI engine that refuses every call. `relay` fans
// engine lifecycle events out to the host's event channel and an optional
// callback sink. `host` dispatches incoming method calls onto the engine.

pub mod channel;
pub mod events;
pub mod host;
pub mod registry;
pub mod relay;
pub mod sink;
pub mod stub;
pub mod traits;

pub use channel::{DeliveryError, EventChannel, MpscChannel, OutboundEvent};
pub use events::{Event, Payload};
pub use host::{MethodCall, MethodError, PluginHost, PresentationId, Reply};
pub use relay::EventRelay;
pub use sink::CallbackSink;
pub use traits::ViewerEngine;

/// The engine used when no native engine is linked in.
pub fn default_engine() -> Box<dyn ViewerEngine> {
    Box::new(stub::StubEngine)
}
