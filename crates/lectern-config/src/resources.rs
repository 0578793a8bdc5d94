// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Style resource lookup.
//
// Theme options name platform style resources ("PSPDFKit.Theme.Dark"); the
// engine wants their numeric identifiers. The lookup must be a local table
// query, never I/O, because it runs inside synchronous translation.

use std::collections::HashMap;

use lectern_core::types::StyleResourceId;
use serde::Deserialize;

/// Resolves a style resource name to its platform identifier.
pub trait ResourceLookup {
    /// `None` when no style with that name exists.
    fn style_resource(&self, name: &str) -> Option<StyleResourceId>;
}

impl<F> ResourceLookup for F
where
    F: Fn(&str) -> Option<StyleResourceId>,
{
    fn style_resource(&self, name: &str) -> Option<StyleResourceId> {
        self(name)
    }
}

/// Lookup that knows no resources. Every theme option falls back to default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceLookup for NoResources {
    fn style_resource(&self, _name: &str) -> Option<StyleResourceId> {
        None
    }
}

/// In-memory name → identifier table, loadable from JSON (`{"Theme.Dark": 2131}`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    styles: HashMap<String, i32>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for ResourceTable {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ResourceLookup for ResourceTable {
    fn style_resource(&self, name: &str) -> Option<StyleResourceId> {
        // 0 is the platform's "no such resource" identifier
        self.styles
            .get(name)
            .copied()
            .filter(|id| *id != 0)
            .map(StyleResourceId)
    }
}
