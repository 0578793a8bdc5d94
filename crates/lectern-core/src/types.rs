// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed viewer configuration handed to the native engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Direction in which pages are laid out when scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollDirection {
    Horizontal,
    Vertical,
}

/// Whether pages snap one spread at a time or scroll continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollMode {
    PerPage,
    Continuous,
}

/// How a page is scaled into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitMode {
    FitToScreen,
    FitToWidth,
}

/// Search UI presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Search results in a separate panel.
    Modular,
    /// Search field embedded in the toolbar.
    Inline,
}

/// When the viewer chrome (toolbars, thumbnail bar) is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserInterfaceViewMode {
    Automatic,
    AutomaticBorderPages,
    AutomaticNoFirstLastPage,
    Visible,
    Hidden,
}

/// Thumbnail bar style at the bottom of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbnailBarMode {
    Default,
    Floating,
    Pinned,
    Scrollable,
    None,
}

/// Single pages, double-page spreads, or decided by orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageLayoutMode {
    Single,
    Double,
    Automatic,
}

/// Viewer colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    Default,
    Night,
}

/// Entries that can appear in the viewer's settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SettingsMenuItem {
    PageTransition,
    ScrollDirection,
    PageLayout,
    Theme,
    ScreenAwake,
}

impl SettingsMenuItem {
    pub const ALL: [SettingsMenuItem; 5] = [
        Self::PageTransition,
        Self::ScrollDirection,
        Self::PageLayout,
        Self::Theme,
        Self::ScreenAwake,
    ];
}

/// Platform style resource identifier, as returned by a resource lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleResourceId(pub i32);

/// Fully resolved configuration for one document presentation.
///
/// Built by the translator, then handed to the native engine and never
/// changed again. Defaults match the engine's own defaults, so an empty
/// raw configuration yields `ViewerConfiguration::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfiguration {
    pub scroll_direction: ScrollDirection,
    pub scroll_mode: ScrollMode,
    pub fit_mode: FitMode,
    pub search_mode: SearchMode,
    /// Zero-based index of the page shown first.
    pub start_page: u32,
    pub user_interface_view_mode: UserInterfaceViewMode,
    pub thumbnail_bar_mode: ThumbnailBarMode,
    pub page_layout_mode: PageLayoutMode,
    pub theme_mode: ThemeMode,
    pub settings_menu_items: BTreeSet<SettingsMenuItem>,

    pub search_enabled: bool,
    pub immersive_mode: bool,
    pub thumbnail_grid_enabled: bool,
    pub outline_enabled: bool,
    pub annotation_list_enabled: bool,
    /// Numeric "3 / 12" overlay. Always equal to `page_labels_enabled`
    /// when set through the translator.
    pub page_number_overlay_enabled: bool,
    pub page_labels_enabled: bool,
    pub document_title_overlay_enabled: bool,
    pub grayscale: bool,
    pub invert_colors: bool,
    pub annotation_editing_enabled: bool,
    pub form_editing_enabled: bool,
    pub sharing_enabled: bool,
    pub printing_enabled: bool,
    pub text_selection_enabled: bool,
    pub bookmark_list_enabled: bool,
    pub document_editor_enabled: bool,
    pub document_info_view_enabled: bool,
    pub autosave_enabled: bool,
    pub first_page_always_single: bool,
    pub content_editing_enabled: bool,
    pub navigation_buttons_enabled: bool,

    pub title: Option<String>,
    pub max_zoom_scale: Option<f64>,
    pub theme: Option<StyleResourceId>,
    pub dark_theme: Option<StyleResourceId>,
}

impl Default for ViewerConfiguration {
    fn default() -> Self {
        Self {
            scroll_direction: ScrollDirection::Horizontal,
            scroll_mode: ScrollMode::PerPage,
            fit_mode: FitMode::FitToScreen,
            search_mode: SearchMode::Modular,
            start_page: 0,
            user_interface_view_mode: UserInterfaceViewMode::Automatic,
            thumbnail_bar_mode: ThumbnailBarMode::Default,
            page_layout_mode: PageLayoutMode::Automatic,
            theme_mode: ThemeMode::Default,
            settings_menu_items: SettingsMenuItem::ALL.into_iter().collect(),

            search_enabled: true,
            immersive_mode: false,
            thumbnail_grid_enabled: true,
            outline_enabled: true,
            annotation_list_enabled: true,
            page_number_overlay_enabled: true,
            page_labels_enabled: true,
            document_title_overlay_enabled: true,
            grayscale: false,
            invert_colors: false,
            annotation_editing_enabled: true,
            form_editing_enabled: true,
            sharing_enabled: true,
            printing_enabled: true,
            text_selection_enabled: true,
            bookmark_list_enabled: true,
            document_editor_enabled: true,
            document_info_view_enabled: true,
            autosave_enabled: true,
            first_page_always_single: true,
            content_editing_enabled: false,
            navigation_buttons_enabled: true,

            title: None,
            max_zoom_scale: None,
            theme: None,
            dark_theme: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_every_settings_item() {
        let config = ViewerConfiguration::default();
        assert_eq!(config.settings_menu_items.len(), SettingsMenuItem::ALL.len());
        assert_eq!(
            config.page_number_overlay_enabled,
            config.page_labels_enabled
        );
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(ViewerConfiguration::default()).unwrap();
        assert_eq!(json["scrollDirection"], "Horizontal");
        assert_eq!(json["autosaveEnabled"], true);
        assert!(json["darkTheme"].is_null());
    }
}
