// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Outbound event channel.
//
// The relay holds its read lock while sending, so `send` must not block.
// `MpscChannel` satisfies that with an unbounded tokio sender: the transport
// side drains the receiver on its own task.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::events::Payload;

/// Why an event could not be handed to the transport.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("event channel closed")]
    Closed,

    #[error("transport rejected event: {0}")]
    Transport(String),
}

/// One outbound handle to the host. Each `EventRelay::bind` installs a new one.
pub trait EventChannel: Send + Sync {
    fn send(&self, name: &str, payload: Option<Payload>) -> Result<(), DeliveryError>;
}

/// An event as it leaves the bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEvent {
    pub name: String,
    pub payload: Option<Payload>,
    pub emitted_at: DateTime<Utc>,
}

/// `EventChannel` backed by a tokio unbounded mpsc sender.
#[derive(Debug, Clone)]
pub struct MpscChannel {
    tx: mpsc::UnboundedSender<OutboundEvent>,
}

impl MpscChannel {
    /// A new channel and the receiver the transport should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventChannel for MpscChannel {
    fn send(&self, name: &str, payload: Option<Payload>) -> Result<(), DeliveryError> {
        let event = OutboundEvent {
            name: name.to_owned(),
            payload,
            emitted_at: Utc::now(),
        };
        self.tx.send(event).map_err(|_| DeliveryError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_in_send_order() {
        let (channel, mut rx) = MpscChannel::new();
        channel.send("first", None).unwrap();
        channel.send("second", Some(Payload::new())).unwrap();

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.name, "first");
        assert_eq!(second.payload, Some(Payload::new()));
        assert!(first.emitted_at <= second.emitted_at);
    }

    #[test]
    fn closed_receiver_is_reported() {
        let (channel, rx) = MpscChannel::new();
        drop(rx);
        assert!(matches!(channel.send("lost", None), Err(DeliveryError::Closed)));
    }

    #[test]
    fn outbound_event_serialises_camel_case() {
        let event = OutboundEvent {
            name: "flutterPdfActivityOnPause".into(),
            payload: None,
            emitted_at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("emittedAt").is_some());
        assert!(json["payload"].is_null());
    }
}
