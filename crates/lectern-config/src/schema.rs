// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Declarative option schema.
//
// A logical option lists its key spellings, current first and deprecated
// after. Each spelling is also accepted with the platform prefix, but the
// prefixed twin is only read when the unprefixed key is absent.
//
// Spellings are applied oldest first and the current key last, so the last
// spelling that decodes to a real setting wins. A current key carrying a
// platform no-op literal therefore leaves a deprecated key's value in place.

use lectern_core::types::{StyleResourceId, ViewerConfiguration};
use lectern_core::value::{RawConfiguration, RawValue, ValueType};

/// A value of the right type that the option still refuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// The offending value as the host sent it.
    pub value: String,
    /// Description of what would have been accepted.
    pub expected: String,
}

impl Rejected {
    pub fn new(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// How a present, correctly typed value is written into the configuration.
#[derive(Clone, Copy)]
pub enum Setter {
    Bool(fn(&mut ViewerConfiguration, bool)),
    Int(fn(&mut ViewerConfiguration, i64) -> Result<(), Rejected>),
    Double(fn(&mut ViewerConfiguration, f64) -> Result<(), Rejected>),
    Text(fn(&mut ViewerConfiguration, &str) -> Result<(), Rejected>),
    /// List of string literals. Element types are checked by the translator.
    TextList(fn(&mut ViewerConfiguration, &[&str]) -> Result<(), Rejected>),
    /// Style resource name, resolved through a `ResourceLookup` first.
    Style(fn(&mut ViewerConfiguration, StyleResourceId)),
    /// Document password, returned next to the configuration.
    Password,
}

impl Setter {
    /// The host type a value must have for this setter.
    pub fn expected_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Double(_) => ValueType::Double,
            Self::Text(_) | Self::Style(_) | Self::Password => ValueType::String,
            Self::TextList(_) => ValueType::List,
        }
    }
}

/// One accepted spelling of an option.
pub struct KeySpec {
    pub name: &'static str,
    pub setter: Setter,
}

/// A logical option and all of its spellings.
pub struct OptionSpec {
    /// Logical name, used in logs only.
    pub option: &'static str,
    /// Current spelling first, then deprecated spellings, newest first.
    pub keys: &'static [KeySpec],
}

impl KeySpec {
    /// The spelling present in `raw`: the key itself, or its prefixed twin
    /// when the key is absent.
    pub fn lookup<'r>(
        &self,
        prefix: &str,
        raw: &'r RawConfiguration,
    ) -> Option<(String, &'r RawValue)> {
        if let Some(value) = raw.get(self.name) {
            return Some((self.name.to_owned(), value));
        }
        let prefixed = prefixed_key(prefix, self.name)?;
        raw.get(&prefixed).map(|value| (prefixed, value))
    }

    /// Whether `key` is this spelling or its prefixed twin.
    pub fn accepts(&self, prefix: &str, key: &str) -> bool {
        key == self.name || is_prefixed_spelling(prefix, self.name, key)
    }
}

impl OptionSpec {
    /// Spellings in the order they are applied: deprecated first, oldest
    /// first, current last.
    pub fn application_order(&self) -> impl Iterator<Item = &KeySpec> {
        self.keys.iter().rev()
    }
}

/// `prefix` + key with its first character upper-cased.
///
/// `prefixed_key("android", "showSearchAction")` is `androidShowSearchAction`.
/// An empty prefix disables prefixed spellings.
pub fn prefixed_key(prefix: &str, key: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    let mut chars = key.chars();
    let first = chars.next()?;
    let mut out = String::with_capacity(prefix.len() + key.len());
    out.push_str(prefix);
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    Some(out)
}

/// `prefixed_key(prefix, name) == key` without building the prefixed key.
fn is_prefixed_spelling(prefix: &str, name: &str, key: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    let Some(mut rest) = key.strip_prefix(prefix) else {
        return false;
    };
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    for upper in first.to_uppercase() {
        match rest.strip_prefix(upper) {
            Some(tail) => rest = tail,
            None => return false,
        }
    }
    rest == chars.as_str()
}
