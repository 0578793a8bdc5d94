// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raw configuration → `ViewerConfiguration`.
//
// Translation is all-or-nothing: options are written into a local
// configuration and it is only returned once every present key has been type
// checked and decoded. The first invalid key aborts translation.
//
// Every spelling of an option is applied, deprecated ones first, so the
// current key overrides them unless it decodes to a platform no-op.

use lectern_core::BridgeSettings;
use lectern_core::error::{LecternError, Result};
use lectern_core::types::ViewerConfiguration;
use lectern_core::value::{RawConfiguration, RawValue};
use tracing::{debug, error, instrument};

use crate::options::{OPTIONS, is_known_key};
use crate::resources::ResourceLookup;
use crate::schema::{KeySpec, OptionSpec, Rejected, Setter};

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub configuration: ViewerConfiguration,
    /// The engine takes the password on its open-document call, not as part
    /// of the configuration.
    pub password: Option<String>,
}

/// Translates host configuration maps using the option table.
pub struct ConfigurationTranslator<'a> {
    prefix: String,
    resources: &'a dyn ResourceLookup,
    options: &'static [OptionSpec],
}

impl<'a> ConfigurationTranslator<'a> {
    /// Translator accepting platform keys spelled with `prefix`.
    pub fn new(prefix: impl Into<String>, resources: &'a dyn ResourceLookup) -> Self {
        Self {
            prefix: prefix.into(),
            resources,
            options: OPTIONS,
        }
    }

    pub fn from_settings(settings: &BridgeSettings, resources: &'a dyn ResourceLookup) -> Self {
        Self::new(settings.platform_prefix.clone(), resources)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Translate a raw configuration, failing on the first invalid key.
    #[instrument(skip_all, fields(keys = raw.len(), prefix = %self.prefix))]
    pub fn translate(&self, raw: &RawConfiguration) -> Result<Translation> {
        let mut configuration = ViewerConfiguration::default();
        let mut password = None;

        for option in self.options {
            let mut applied: Option<String> = None;
            for spec in option.application_order() {
                let Some((key, value)) = spec.lookup(&self.prefix, raw) else {
                    continue;
                };
                self.apply(&key, spec, value, &mut configuration, &mut password)?;
                if let Some(earlier) = &applied {
                    debug!(option = option.option, %key, %earlier, "key applied over deprecated spelling");
                }
                applied = Some(key);
            }
        }

        for key in raw.keys().filter(|k| !self.is_known(k)) {
            debug!(key, "ignoring unrecognised configuration key");
        }

        Ok(Translation {
            configuration,
            password,
        })
    }

    fn is_known(&self, key: &str) -> bool {
        is_known_key(&self.prefix, key)
    }

    fn apply(
        &self,
        key: &str,
        spec: &KeySpec,
        value: &RawValue,
        target: &mut ViewerConfiguration,
        password: &mut Option<String>,
    ) -> Result<()> {
        let expected = spec.setter.expected_type();
        let mismatch = || LecternError::InvalidType {
            key: key.to_owned(),
            expected,
        };
        let rejected = |r: Rejected| LecternError::InvalidValue {
            key: key.to_owned(),
            value: r.value,
            expected: r.expected,
        };

        match spec.setter {
            Setter::Bool(set) => set(target, value.as_bool().ok_or_else(mismatch)?),
            Setter::Int(set) => set(target, value.as_int().ok_or_else(mismatch)?).map_err(rejected)?,
            Setter::Double(set) => {
                set(target, value.as_double().ok_or_else(mismatch)?).map_err(rejected)?
            }
            Setter::Text(set) => set(target, value.as_str().ok_or_else(mismatch)?).map_err(rejected)?,
            Setter::TextList(set) => {
                let items = value.as_list().ok_or_else(mismatch)?;
                let literals = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| LecternError::InvalidListElement {
                            key: key.to_owned(),
                            element: item.to_string(),
                        })
                    })
                    .collect::<Result<Vec<&str>>>()?;
                set(target, &literals).map_err(rejected)?
            }
            Setter::Style(set) => {
                let name = value.as_str().ok_or_else(mismatch)?;
                match self.resources.style_resource(name) {
                    Some(id) => set(target, id),
                    None => error!(key, name, "style resource not found"),
                }
            }
            Setter::Password => {
                *password = Some(value.as_str().ok_or_else(mismatch)?.to_owned());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::options::known_keys;
    use crate::resources::{NoResources, ResourceTable};
    use lectern_core::types::*;
    use lectern_core::value::ValueType;

    fn translate(raw: RawConfiguration) -> Result<Translation> {
        ConfigurationTranslator::new("android", &NoResources).translate(&raw)
    }

    fn config(raw: RawConfiguration) -> ViewerConfiguration {
        translate(raw).unwrap().configuration
    }

    #[test]
    fn empty_payload_yields_engine_defaults() {
        let t = translate(RawConfiguration::new()).unwrap();
        assert_eq!(t.configuration, ViewerConfiguration::default());
        assert_eq!(t.password, None);
    }

    #[test]
    fn canonical_keys_map_per_table() {
        let c = config(
            RawConfiguration::new()
                .with("scrollDirection", "vertical")
                .with("pageTransition", "scrollContinuous")
                .with("spreadFitting", "fill")
                .with("inlineSearch", true)
                .with("userInterfaceViewMode", "alwaysHidden")
                .with("startPage", 4)
                .with("thumbnailBarMode", "scrollable")
                .with("pageLayoutMode", "double")
                .with("appearanceMode", "night")
                .with("immersiveMode", true)
                .with("grayScale", true)
                .with("enableDocumentEditor", false)
                .with("defaultTitle", "Quarterly report")
                .with("maximumZoomScale", 8.0),
        );
        assert_eq!(c.scroll_direction, ScrollDirection::Vertical);
        assert_eq!(c.scroll_mode, ScrollMode::Continuous);
        assert_eq!(c.fit_mode, FitMode::FitToWidth);
        assert_eq!(c.search_mode, SearchMode::Inline);
        assert_eq!(c.user_interface_view_mode, UserInterfaceViewMode::Hidden);
        assert_eq!(c.start_page, 4);
        assert_eq!(c.thumbnail_bar_mode, ThumbnailBarMode::Scrollable);
        assert_eq!(c.page_layout_mode, PageLayoutMode::Double);
        assert_eq!(c.theme_mode, ThemeMode::Night);
        assert!(c.immersive_mode);
        assert!(c.grayscale);
        assert!(!c.document_editor_enabled);
        assert_eq!(c.title.as_deref(), Some("Quarterly report"));
        assert_eq!(c.max_zoom_scale, Some(8.0));
    }

    #[test]
    fn current_key_beats_deprecated_key() {
        let c = config(
            RawConfiguration::new()
                .with("pageScrollDirection", "horizontal")
                .with("scrollDirection", "vertical"),
        );
        assert_eq!(c.scroll_direction, ScrollDirection::Vertical);

        let c = config(
            RawConfiguration::new()
                .with("scrollContinuously", true)
                .with("pageTransition", "scrollPerSpread"),
        );
        assert_eq!(c.scroll_mode, ScrollMode::PerPage);
    }

    #[test]
    fn deprecated_key_alone_still_applies() {
        let c = config(RawConfiguration::new().with("fitPageToWidth", true));
        assert_eq!(c.fit_mode, FitMode::FitToWidth);
        let c = config(RawConfiguration::new().with("showThumbnailBar", "none"));
        assert_eq!(c.thumbnail_bar_mode, ThumbnailBarMode::None);
    }

    #[test]
    fn precedence_is_repeatable() {
        let raw = RawConfiguration::new()
            .with("showPrintAction", false)
            .with("enablePrinting", true)
            .with("androidEnablePrinting", false);
        let translator = ConfigurationTranslator::new("android", &NoResources);
        for _ in 0..10 {
            assert!(translator.translate(&raw).unwrap().configuration.printing_enabled);
        }
    }

    #[test]
    fn canonical_key_beats_prefixed_key() {
        let c = config(
            RawConfiguration::new()
                .with("androidShowSearchAction", false)
                .with("showSearchAction", true),
        );
        assert!(c.search_enabled);
    }

    #[test]
    fn prefixed_key_applies_when_canonical_absent() {
        let c = config(RawConfiguration::new().with("androidShowOutlineAction", false));
        assert!(!c.outline_enabled);
    }

    #[test]
    fn noop_current_literal_keeps_deprecated_value() {
        let c = config(
            RawConfiguration::new()
                .with("fitPageToWidth", true)
                .with("spreadFitting", "adaptive"),
        );
        assert_eq!(c.fit_mode, FitMode::FitToWidth);

        let c = config(
            RawConfiguration::new()
                .with("scrollContinuously", true)
                .with("pageTransition", "curl"),
        );
        assert_eq!(c.scroll_mode, ScrollMode::Continuous);
    }

    #[test]
    fn prefixed_twin_is_not_read_when_canonical_present() {
        let t = translate(
            RawConfiguration::new()
                .with("showSearchAction", true)
                .with("androidShowSearchAction", "no"),
        )
        .unwrap();
        assert!(t.configuration.search_enabled);

        let err = translate(RawConfiguration::new().with("androidShowSearchAction", "no")).unwrap_err();
        assert_eq!(err.key(), Some("androidShowSearchAction"));
    }

    #[test]
    fn known_key_check_matches_key_listing() {
        let translator = ConfigurationTranslator::new("android", &NoResources);
        for key in known_keys("android") {
            assert!(translator.is_known(&key), "{key}");
        }
        assert!(!translator.is_known("iosImmersiveMode"));
        assert!(!translator.is_known("measurementValueConfigurations"));
    }

    #[test]
    fn wrong_type_names_key_and_host_type() {
        let err = translate(RawConfiguration::new().with("startPage", "3")).unwrap_err();
        assert_eq!(err.to_string(), "Value for the key startPage must be of type int.");

        let err = translate(RawConfiguration::new().with("androidImmersiveMode", 1)).unwrap_err();
        assert!(matches!(
            err,
            LecternError::InvalidType { ref key, expected: ValueType::Bool } if key == "androidImmersiveMode"
        ));

        let err = translate(RawConfiguration::new().with("settingsMenuItems", "theme")).unwrap_err();
        assert!(err.to_string().ends_with("must be of type List."));

        let err = translate(RawConfiguration::new().with("maximumZoomScale", 4)).unwrap_err();
        assert!(err.to_string().ends_with("must be of type double."));
    }

    #[test]
    fn wrong_type_in_deprecated_key_is_still_an_error() {
        let err = translate(
            RawConfiguration::new()
                .with("scrollDirection", "vertical")
                .with("pageScrollDirection", true),
        )
        .unwrap_err();
        assert_eq!(err.key(), Some("pageScrollDirection"));
    }

    #[test]
    fn unknown_literal_names_the_value() {
        let err = translate(RawConfiguration::new().with("appearanceMode", "midnight")).unwrap_err();
        match err {
            LecternError::InvalidValue { key, value, expected } => {
                assert_eq!(key, "appearanceMode");
                assert_eq!(value, "midnight");
                assert!(expected.contains("night"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn platform_literal_leaves_default() {
        let c = config(
            RawConfiguration::new()
                .with("pageTransition", "curl")
                .with("appearanceMode", "sepia")
                .with("thumbnailBarMode", "scrubberBar"),
        );
        let d = ViewerConfiguration::default();
        assert_eq!(c.scroll_mode, d.scroll_mode);
        assert_eq!(c.theme_mode, d.theme_mode);
        assert_eq!(c.thumbnail_bar_mode, d.thumbnail_bar_mode);
    }

    #[test]
    fn page_labels_toggle_both_flags() {
        for show in [true, false] {
            let c = config(RawConfiguration::new().with("showPageLabels", show));
            assert_eq!(c.page_labels_enabled, show);
            assert_eq!(c.page_number_overlay_enabled, show);
        }
        let c = config(RawConfiguration::new().with("showPageNumberOverlay", false));
        assert!(!c.page_labels_enabled && !c.page_number_overlay_enabled);
    }

    #[test]
    fn disable_autosave_is_inverted() {
        assert!(!config(RawConfiguration::new().with("disableAutosave", true)).autosave_enabled);
        assert!(config(RawConfiguration::new().with("disableAutosave", false)).autosave_enabled);
    }

    #[test]
    fn settings_menu_items_form_a_set() {
        let c = config(RawConfiguration::new().with(
            "settingsMenuItems",
            vec!["theme", "androidTheme", "appearance", "screenAwake", "brightness"],
        ));
        let expected: BTreeSet<_> = [SettingsMenuItem::Theme, SettingsMenuItem::ScreenAwake]
            .into_iter()
            .collect();
        assert_eq!(c.settings_menu_items, expected);

        let c = config(RawConfiguration::new().with("settingsMenuItems", Vec::<String>::new()));
        assert!(c.settings_menu_items.is_empty());
    }

    #[test]
    fn non_string_list_element_is_printed() {
        let raw = RawConfiguration::new().with(
            "settingsMenuItems",
            vec![RawValue::from("theme"), RawValue::from(42)],
        );
        let err = translate(raw).unwrap_err();
        match err {
            LecternError::InvalidListElement { key, element } => {
                assert_eq!(key, "settingsMenuItems");
                assert_eq!(element, "42");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn negative_start_page_is_rejected() {
        let err = translate(RawConfiguration::new().with("startPage", -1)).unwrap_err();
        assert!(matches!(err, LecternError::InvalidValue { ref value, .. } if value == "-1"));
    }

    #[test]
    fn password_travels_beside_configuration() {
        let t = translate(
            RawConfiguration::new()
                .with("password", "s3cret")
                .with("invertColors", true),
        )
        .unwrap();
        assert_eq!(t.password.as_deref(), Some("s3cret"));
        assert!(t.configuration.invert_colors);

        let err = translate(RawConfiguration::new().with("password", 1234)).unwrap_err();
        assert!(err.to_string().ends_with("must be of type String."));
    }

    #[test]
    fn null_values_are_absent() {
        let raw = RawConfiguration::from_json(r#"{"startPage": null, "password": null}"#).unwrap();
        let t = translate(raw).unwrap();
        assert_eq!(t.configuration.start_page, 0);
        assert_eq!(t.password, None);
    }

    #[test]
    fn resource_miss_keeps_default_and_hit_applies() {
        let resources: ResourceTable = [("Theme.Night", 42)].into_iter().collect();
        let translator = ConfigurationTranslator::new("android", &resources);
        let t = translator
            .translate(
                &RawConfiguration::new()
                    .with("androidDarkThemeResource", "Theme.Night")
                    .with("defaultThemeResource", "Theme.Missing"),
            )
            .unwrap();
        assert_eq!(t.configuration.dark_theme, Some(StyleResourceId(42)));
        assert_eq!(t.configuration.theme, None);
    }

    #[test]
    fn resource_name_must_be_a_string() {
        let err = translate(RawConfiguration::new().with("darkThemeResource", 5)).unwrap_err();
        assert_eq!(err.key(), Some("darkThemeResource"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let c = config(
            RawConfiguration::new()
                .with("measurementValueConfigurations", vec!["x"])
                .with("iOSAllowToolbarTitleChange", true),
        );
        assert_eq!(c, ViewerConfiguration::default());
    }

    #[test]
    fn other_prefix_changes_platform_spellings() {
        let translator = ConfigurationTranslator::new("ios", &NoResources);
        let c = translator
            .translate(
                &RawConfiguration::new()
                    .with("iosImmersiveMode", true)
                    .with("androidGrayScale", true),
            )
            .unwrap()
            .configuration;
        assert!(c.immersive_mode);
        assert!(!c.grayscale);
    }

    #[test]
    fn settings_supply_the_prefix() {
        let settings = BridgeSettings::default();
        let translator = ConfigurationTranslator::from_settings(&settings, &NoResources);
        assert_eq!(translator.prefix(), "android");
    }
}
