// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Outbound events and their wire names.
//
// Event names are a versioned contract with the host-side listeners and must
// not change. Payload keys are camelCase, `validJWT` included.

use serde_json::{Map, Value, json};

/// Event payload: a flat string-keyed map.
pub type Payload = Map<String, Value>;

/// A lifecycle or collaboration event raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ActivityPaused,
    FragmentAdded,
    DocumentLoaded {
        document_id: String,
    },
    InstantSyncStarted {
        document_id: String,
    },
    InstantSyncFinished {
        document_id: String,
    },
    InstantSyncFailed {
        document_id: String,
        error: String,
    },
    InstantAuthenticationFinished {
        document_id: String,
        valid_jwt: String,
    },
    InstantAuthenticationFailed {
        document_id: String,
        error: String,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ActivityPaused => "flutterPdfActivityOnPause",
            Self::FragmentAdded => "flutterPdfFragmentAdded",
            Self::DocumentLoaded { .. } => "pspdfkitDocumentLoaded",
            Self::InstantSyncStarted { .. } => "pspdfkitInstantSyncStarted",
            Self::InstantSyncFinished { .. } => "pspdfkitInstantSyncFinished",
            Self::InstantSyncFailed { .. } => "pspdfkitInstantSyncFailed",
            Self::InstantAuthenticationFinished { .. } => "pspdfkitInstantAuthenticationFinished",
            Self::InstantAuthenticationFailed { .. } => "pspdfkitInstantAuthenticationFailed",
        }
    }

    /// Payload sent with the event. Pause and fragment-added carry none.
    pub fn payload(&self) -> Option<Payload> {
        let value = match self {
            Self::ActivityPaused | Self::FragmentAdded => return None,
            Self::DocumentLoaded { document_id }
            | Self::InstantSyncStarted { document_id }
            | Self::InstantSyncFinished { document_id } => json!({ "documentId": document_id }),
            Self::InstantSyncFailed { document_id, error }
            | Self::InstantAuthenticationFailed { document_id, error } => {
                json!({ "documentId": document_id, "error": error })
            }
            Self::InstantAuthenticationFinished {
                document_id,
                valid_jwt,
            } => json!({ "documentId": document_id, "validJWT": valid_jwt }),
        };
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}
