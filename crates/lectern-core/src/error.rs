// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Lectern.

use thiserror::Error;

use crate::value::ValueType;

/// Top-level error type for all Lectern operations.
#[derive(Debug, Error)]
pub enum LecternError {
    // -- Configuration input --
    #[error("Value for the key {key} must be of type {expected}.")]
    InvalidType { key: String, expected: ValueType },

    #[error("Invalid value '{value}' for the key {key}, expected {expected}.")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },

    #[error("List for the key {key} must only contain values of type String, found {element}.")]
    InvalidListElement { key: String, element: String },

    // -- Method-call arguments --
    #[error("{0} may not be null.")]
    MissingArgument(String),

    #[error("{0} may not be empty.")]
    EmptyArgument(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Document state --
    #[error("Before using \"{0}\" the document needs to be presented by calling \"present()\".")]
    NoDocumentPresented(String),

    #[error("Form element not found with name {0}")]
    FormElementNotFound(String),

    #[error("{0} form elements are not supported.")]
    UnsupportedFormElement(String),

    #[error("invalid value for form element {name}: {detail}")]
    InvalidFormValue { name: String, detail: String },

    // -- Native engine --
    #[error("native engine error: {0}")]
    Engine(String),

    /// Instant (server-synced document) failure, reported with the engine's message.
    #[error("{0}")]
    Instant(String),

    #[error("method not implemented: {0}")]
    NotImplemented(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LecternError {
    /// Stable error code reported to the host when a call is rejected.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidType { .. }
            | Self::InvalidValue { .. }
            | Self::InvalidListElement { .. } => "InvalidConfiguration",
            Self::MissingArgument(_) | Self::EmptyArgument(_) | Self::InvalidArgument(_) => {
                "InvalidArgument"
            }
            Self::NoDocumentPresented(_) => "DocumentNotPresented",
            Self::FormElementNotFound(_)
            | Self::UnsupportedFormElement(_)
            | Self::InvalidFormValue { .. } => "FormFieldError",
            Self::Engine(_) => "EngineError",
            Self::Instant(_) => "InstantException",
            Self::NotImplemented(_) => "NotImplemented",
            Self::PlatformUnavailable => "PlatformUnavailable",
            Self::Io(_) => "IoError",
            Self::Serialization(_) => "SerializationError",
        }
    }

    /// The configuration key this error refers to, if it is an input error.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidType { key, .. }
            | Self::InvalidValue { key, .. }
            | Self::InvalidListElement { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LecternError>;
