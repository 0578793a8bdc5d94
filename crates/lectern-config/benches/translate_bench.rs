// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for configuration translation in the lectern-config
// crate. Translation runs once per `present` call, but the option table is
// walked with every spelling of every option, so it is worth keeping an eye on.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

use lectern_config::{ConfigurationTranslator, ResourceTable};
use lectern_core::RawConfiguration;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// An empty payload: the cost of walking the option table alone.
fn bench_empty_payload(c: &mut Criterion) {
    let resources = ResourceTable::new();
    let translator = ConfigurationTranslator::new("android", &resources);
    let raw = RawConfiguration::new();

    c.bench_function("translate (empty)", |b| {
        b.iter(|| black_box(translator.translate(black_box(&raw))));
    });
}

/// A payload resembling what a real app sends, mixing current, deprecated
/// and prefixed spellings plus a few keys meant for the other platform.
fn bench_typical_payload(c: &mut Criterion) {
    let resources: ResourceTable = [("Theme.Reader.Dark", 7)].into_iter().collect();
    let translator = ConfigurationTranslator::new("android", &resources);
    let raw: RawConfiguration = serde_json::from_value(json!({
        "scrollDirection": "vertical",
        "pageScrollDirection": "horizontal",
        "pageTransition": "scrollContinuous",
        "spreadFitting": "fit",
        "startPage": 3,
        "userInterfaceViewMode": "automaticBorderPages",
        "thumbnailBarMode": "floating",
        "showPageLabels": true,
        "androidShowSearchAction": false,
        "androidGrayScale": false,
        "darkThemeResource": "Theme.Reader.Dark",
        "settingsMenuItems": ["theme", "pageLayout", "screenAwake"],
        "disableAutosave": true,
        "password": "hunter2",
        "iOSAllowToolbarTitleChange": false,
        "iOSShowBackButton": true,
    }))
    .expect("benchmark payload is valid");

    c.bench_function("translate (typical)", |b| {
        b.iter(|| black_box(translator.translate(black_box(&raw))));
    });
}

criterion_group!(benches, bench_empty_payload, bench_typical_payload);
criterion_main!(benches);
