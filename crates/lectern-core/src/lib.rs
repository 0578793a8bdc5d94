// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lectern — Core types and error definitions shared across all crates.

pub mod config;
pub mod document;
pub mod error;
pub mod forms;
pub mod types;
pub mod value;

pub use config::BridgeSettings;
pub use document::DocumentUri;
pub use error::LecternError;
pub use forms::{ButtonState, FormElementKind, FormFieldValue};
pub use types::*;
pub use value::{RawConfiguration, RawValue, ValueType};
