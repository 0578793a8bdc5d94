// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The option table: every configuration key the bridge understands.
//
// Adding a key spelling or retiring one is a change to this table only.

use std::collections::BTreeSet;

use lectern_core::types::{FitMode, ScrollMode, SearchMode, ViewerConfiguration};

use crate::schema::{KeySpec, OptionSpec, Rejected, Setter, prefixed_key};
use crate::tables::{
    APPEARANCE_MODE, PAGE_LAYOUT_MODE, PAGE_TRANSITION, SCROLL_DIRECTION, SETTINGS_MENU_ITEM,
    SPREAD_FITTING, THUMBNAIL_BAR_MODE, USER_INTERFACE_VIEW_MODE, set_from,
};

/// Shorthand for an option with a single boolean spelling.
macro_rules! flag {
    ($key:literal, $field:ident) => {
        OptionSpec {
            option: stringify!($field),
            keys: &[KeySpec {
                name: $key,
                setter: Setter::Bool(|c, v| c.$field = v),
            }],
        }
    };
}

pub static OPTIONS: &[OptionSpec] = &[
    // -- Layout and scrolling --
    OptionSpec {
        option: "scroll_direction",
        keys: &[
            KeySpec {
                name: "scrollDirection",
                setter: Setter::Text(|c, v| set_from(&SCROLL_DIRECTION, v, &mut c.scroll_direction)),
            },
            KeySpec {
                name: "pageScrollDirection",
                setter: Setter::Text(|c, v| set_from(&SCROLL_DIRECTION, v, &mut c.scroll_direction)),
            },
        ],
    },
    OptionSpec {
        option: "scroll_mode",
        keys: &[
            KeySpec {
                name: "pageTransition",
                setter: Setter::Text(|c, v| set_from(&PAGE_TRANSITION, v, &mut c.scroll_mode)),
            },
            KeySpec {
                name: "scrollContinuously",
                setter: Setter::Bool(|c, v| {
                    c.scroll_mode = if v {
                        ScrollMode::Continuous
                    } else {
                        ScrollMode::PerPage
                    }
                }),
            },
        ],
    },
    OptionSpec {
        option: "fit_mode",
        keys: &[
            KeySpec {
                name: "spreadFitting",
                setter: Setter::Text(|c, v| set_from(&SPREAD_FITTING, v, &mut c.fit_mode)),
            },
            KeySpec {
                name: "fitPageToWidth",
                setter: Setter::Bool(|c, v| {
                    c.fit_mode = if v {
                        FitMode::FitToWidth
                    } else {
                        FitMode::FitToScreen
                    }
                }),
            },
        ],
    },
    OptionSpec {
        option: "page_layout_mode",
        keys: &[KeySpec {
            name: "pageLayoutMode",
            setter: Setter::Text(|c, v| set_from(&PAGE_LAYOUT_MODE, v, &mut c.page_layout_mode)),
        }],
    },
    flag!("firstPageAlwaysSingle", first_page_always_single),
    OptionSpec {
        option: "start_page",
        keys: &[KeySpec {
            name: "startPage",
            setter: Setter::Int(|c, v| {
                c.start_page = u32::try_from(v)
                    .map_err(|_| Rejected::new(v.to_string(), "a non-negative page index"))?;
                Ok(())
            }),
        }],
    },
    OptionSpec {
        option: "max_zoom_scale",
        keys: &[KeySpec {
            name: "maximumZoomScale",
            setter: Setter::Double(|c, v| {
                if !v.is_finite() || v < 1.0 {
                    return Err(Rejected::new(format!("{v:?}"), "a zoom scale of at least 1.0"));
                }
                c.max_zoom_scale = Some(v);
                Ok(())
            }),
        }],
    },
    // -- Chrome --
    OptionSpec {
        option: "user_interface_view_mode",
        keys: &[KeySpec {
            name: "userInterfaceViewMode",
            setter: Setter::Text(|c, v| {
                set_from(&USER_INTERFACE_VIEW_MODE, v, &mut c.user_interface_view_mode)
            }),
        }],
    },
    OptionSpec {
        option: "thumbnail_bar_mode",
        keys: &[
            KeySpec {
                name: "thumbnailBarMode",
                setter: Setter::Text(|c, v| {
                    set_from(&THUMBNAIL_BAR_MODE, v, &mut c.thumbnail_bar_mode)
                }),
            },
            KeySpec {
                name: "showThumbnailBar",
                setter: Setter::Text(|c, v| {
                    set_from(&THUMBNAIL_BAR_MODE, v, &mut c.thumbnail_bar_mode)
                }),
            },
        ],
    },
    OptionSpec {
        option: "search_mode",
        keys: &[KeySpec {
            name: "inlineSearch",
            setter: Setter::Bool(|c, v| {
                c.search_mode = if v {
                    SearchMode::Inline
                } else {
                    SearchMode::Modular
                }
            }),
        }],
    },
    flag!("showSearchAction", search_enabled),
    flag!("immersiveMode", immersive_mode),
    flag!("showThumbnailGridAction", thumbnail_grid_enabled),
    flag!("showOutlineAction", outline_enabled),
    flag!("showAnnotationListAction", annotation_list_enabled),
    flag!("showActionNavigationButtons", navigation_buttons_enabled),
    OptionSpec {
        option: "page_labels",
        keys: &[
            KeySpec {
                name: "showPageLabels",
                setter: Setter::Bool(set_page_labels),
            },
            KeySpec {
                name: "showPageNumberOverlay",
                setter: Setter::Bool(set_page_labels),
            },
        ],
    },
    OptionSpec {
        option: "document_title_overlay",
        keys: &[
            KeySpec {
                name: "documentLabelEnabled",
                setter: Setter::Bool(|c, v| c.document_title_overlay_enabled = v),
            },
            KeySpec {
                name: "showDocumentTitle",
                setter: Setter::Bool(|c, v| c.document_title_overlay_enabled = v),
            },
        ],
    },
    OptionSpec {
        option: "title",
        keys: &[KeySpec {
            name: "defaultTitle",
            setter: Setter::Text(|c, v| {
                c.title = Some(v.to_owned());
                Ok(())
            }),
        }],
    },
    OptionSpec {
        option: "settings_menu_items",
        keys: &[KeySpec {
            name: "settingsMenuItems",
            setter: Setter::TextList(|c, items| {
                let mut enabled = BTreeSet::new();
                for item in items {
                    if let Some(entry) = SETTINGS_MENU_ITEM.decode(item)? {
                        enabled.insert(entry);
                    }
                }
                c.settings_menu_items = enabled;
                Ok(())
            }),
        }],
    },
    // -- Rendering and theming --
    flag!("grayScale", grayscale),
    flag!("invertColors", invert_colors),
    OptionSpec {
        option: "theme_mode",
        keys: &[KeySpec {
            name: "appearanceMode",
            setter: Setter::Text(|c, v| set_from(&APPEARANCE_MODE, v, &mut c.theme_mode)),
        }],
    },
    OptionSpec {
        option: "theme",
        keys: &[KeySpec {
            name: "defaultThemeResource",
            setter: Setter::Style(|c, id| c.theme = Some(id)),
        }],
    },
    OptionSpec {
        option: "dark_theme",
        keys: &[KeySpec {
            name: "darkThemeResource",
            setter: Setter::Style(|c, id| c.dark_theme = Some(id)),
        }],
    },
    // -- Editing and document features --
    flag!("enableAnnotationEditing", annotation_editing_enabled),
    flag!("enableFormEditing", form_editing_enabled),
    flag!("enableContentEditing", content_editing_enabled),
    flag!("enableTextSelection", text_selection_enabled),
    flag!("enableBookmarkList", bookmark_list_enabled),
    flag!("enableDocumentEditor", document_editor_enabled),
    flag!("showDocumentInfoView", document_info_view_enabled),
    flag!("showShareAction", sharing_enabled),
    OptionSpec {
        option: "printing",
        keys: &[
            KeySpec {
                name: "enablePrinting",
                setter: Setter::Bool(|c, v| c.printing_enabled = v),
            },
            KeySpec {
                name: "showPrintAction",
                setter: Setter::Bool(|c, v| c.printing_enabled = v),
            },
        ],
    },
    OptionSpec {
        option: "autosave",
        keys: &[KeySpec {
            name: "disableAutosave",
            setter: Setter::Bool(|c, disabled| c.autosave_enabled = !disabled),
        }],
    },
    // -- Side channel --
    OptionSpec {
        option: "password",
        keys: &[KeySpec {
            name: "password",
            setter: Setter::Password,
        }],
    },
];

/// The overlay and the labels are one user-facing option and never diverge.
fn set_page_labels(config: &mut ViewerConfiguration, show: bool) {
    config.page_number_overlay_enabled = show;
    config.page_labels_enabled = show;
}

/// Every key spelling accepted under `prefix`, across all options.
pub fn known_keys(prefix: &str) -> BTreeSet<String> {
    OPTIONS
        .iter()
        .flat_map(|option| option.keys)
        .flat_map(|spec| {
            std::iter::once(spec.name.to_owned()).chain(prefixed_key(prefix, spec.name))
        })
        .collect()
}

/// Whether `key` is accepted under `prefix`. Allocation free.
pub fn is_known_key(prefix: &str, key: &str) -> bool {
    OPTIONS
        .iter()
        .flat_map(|option| option.keys)
        .any(|spec| spec.accepts(prefix, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_spelling_belongs_to_two_options() {
        let mut seen = BTreeSet::new();
        for spec in OPTIONS.iter().flat_map(|option| option.keys) {
            for name in std::iter::once(spec.name.to_owned()).chain(prefixed_key("android", spec.name)) {
                assert!(seen.insert(name.clone()), "{name} declared twice");
            }
        }
    }

    #[test]
    fn known_keys_include_prefixed_spellings() {
        let keys = known_keys("android");
        assert!(keys.contains("showSearchAction"));
        assert!(keys.contains("androidShowSearchAction"));
        assert!(keys.contains("androidDarkThemeResource"));
        assert!(keys.contains("pageScrollDirection"));
        assert!(!keys.contains("measurementValueConfigurations"));
    }

    #[test]
    fn is_known_key_agrees_with_known_keys() {
        for prefix in ["android", "ios", ""] {
            for key in known_keys(prefix) {
                assert!(is_known_key(prefix, &key), "{key} under {prefix:?}");
            }
        }
        assert!(!is_known_key("android", "measurementValueConfigurations"));
        assert!(!is_known_key("android", "iosShowSearchAction"));
        assert!(!is_known_key("android", "androidshowSearchAction"));
        assert!(!is_known_key("", "ShowSearchAction"));
    }

    #[test]
    fn option_table_has_twenty_plus_flags() {
        let flags = OPTIONS
            .iter()
            .filter(|o| o.keys.iter().all(|k| matches!(k.setter, Setter::Bool(_))))
            .count();
        assert!(flags >= 20, "only {flags} boolean options");
    }
}
