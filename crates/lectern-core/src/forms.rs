// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Form-field values exchanged with the native engine.
//
// The engine exposes several concrete form-element kinds. They are decoded
// once at the engine boundary into `FormFieldValue`, and everything above the
// boundary works with that enum only. On the wire every value is a string:
// text verbatim, buttons as "selected"/"deselected", choices as a
// comma-separated list of option indexes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LecternError, Result};

/// Checkbox / radio button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    Selected,
    Deselected,
}

impl ButtonState {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Deselected => "deselected",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "selected" => Some(Self::Selected),
            "deselected" => Some(Self::Deselected),
            _ => None,
        }
    }
}

/// Value of a single form element, one variant per element kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormFieldValue {
    Text(String),
    Button(ButtonState),
    /// Selected option indexes of a list or combo box.
    Choice(Vec<u32>),
    /// Signature fields carry no readable or writable value.
    Signature,
}

/// Kind of a form element, used to interpret an incoming wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormElementKind {
    Text,
    Button,
    Choice,
    Signature,
}

impl fmt::Display for FormElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "Text",
            Self::Button => "Button",
            Self::Choice => "Choice",
            Self::Signature => "Signature",
        })
    }
}

impl FormFieldValue {
    pub fn kind(&self) -> FormElementKind {
        match self {
            Self::Text(_) => FormElementKind::Text,
            Self::Button(_) => FormElementKind::Button,
            Self::Choice(_) => FormElementKind::Choice,
            Self::Signature => FormElementKind::Signature,
        }
    }

    /// Encode for the host. Signatures have no wire form.
    pub fn to_wire(&self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Button(state) => Ok(state.as_wire().to_owned()),
            Self::Choice(indexes) => Ok(indexes
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")),
            Self::Signature => Err(LecternError::UnsupportedFormElement(
                FormElementKind::Signature.to_string(),
            )),
        }
    }

    /// Decode a host string for an element of the given kind.
    ///
    /// Returns `Ok(None)` for a button literal other than selected/deselected;
    /// the caller reports that as "not applied" rather than an error.
    pub fn from_wire(kind: FormElementKind, name: &str, value: &str) -> Result<Option<Self>> {
        match kind {
            FormElementKind::Text => Ok(Some(Self::Text(value.to_owned()))),
            FormElementKind::Button => Ok(ButtonState::from_wire(value).map(Self::Button)),
            FormElementKind::Choice => parse_indexes(value)
                .map(|indexes| Some(Self::Choice(indexes)))
                .ok_or_else(|| LecternError::InvalidFormValue {
                    name: name.to_owned(),
                    detail: "\"value\" argument needs a list of integers to set selected \
                             indexes for a choice form element (e.g.: \"1, 3, 5\")."
                        .into(),
                }),
            FormElementKind::Signature => Err(LecternError::UnsupportedFormElement(
                FormElementKind::Signature.to_string(),
            )),
        }
    }
}

/// Parse "1, 3, 5". Blank segments are skipped; anything non-numeric fails.
fn parse_indexes(value: &str) -> Option<Vec<u32>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().ok())
        .collect()
}
