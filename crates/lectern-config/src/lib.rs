// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lectern Config — turns the loosely typed, versioned configuration maps sent
// by the host into a `ViewerConfiguration`. Every logical option is declared
// once in `options::OPTIONS`; key resolution, type checks and precedence are
// driven from that table by `translator::ConfigurationTranslator`.

pub mod options;
pub mod resources;
pub mod schema;
pub mod tables;
pub mod translator;

pub use resources::{NoResources, ResourceLookup, ResourceTable};
pub use translator::{ConfigurationTranslator, Translation};
