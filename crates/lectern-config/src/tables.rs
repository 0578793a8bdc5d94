// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// String literal → enum mapping tables.
//
// Each table is closed: a literal that is not listed is an input error. A
// literal mapped to `None` belongs to another platform's binding; it is
// accepted and ignored so one shared payload can be sent to every platform.

use lectern_core::types::{
    FitMode, PageLayoutMode, ScrollDirection, ScrollMode, SettingsMenuItem, ThemeMode,
    ThumbnailBarMode, UserInterfaceViewMode,
};

use crate::schema::Rejected;

/// Closed set of accepted literals for one enumerated option.
pub struct EnumTable<T: 'static> {
    pub entries: &'static [(&'static str, Option<T>)],
}

impl<T: Copy> EnumTable<T> {
    /// Decode a literal. `Ok(None)` means recognised but ignored here.
    pub fn decode(&self, literal: &str) -> Result<Option<T>, Rejected> {
        self.entries
            .iter()
            .find(|(name, _)| *name == literal)
            .map(|(_, value)| *value)
            .ok_or_else(|| Rejected::new(literal, self.expected()))
    }

    pub fn literals(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    fn expected(&self) -> String {
        let literals: Vec<&str> = self.literals().collect();
        format!("one of [{}]", literals.join(", "))
    }
}

/// Write a decoded literal into `slot`, leaving it alone for ignored literals.
pub fn set_from<T: Copy>(table: &EnumTable<T>, literal: &str, slot: &mut T) -> Result<(), Rejected> {
    if let Some(value) = table.decode(literal)? {
        *slot = value;
    }
    Ok(())
}

pub static SCROLL_DIRECTION: EnumTable<ScrollDirection> = EnumTable {
    entries: &[
        ("horizontal", Some(ScrollDirection::Horizontal)),
        ("vertical", Some(ScrollDirection::Vertical)),
    ],
};

pub static PAGE_TRANSITION: EnumTable<ScrollMode> = EnumTable {
    entries: &[
        ("scrollPerSpread", Some(ScrollMode::PerPage)),
        ("scrollContinuous", Some(ScrollMode::Continuous)),
        // page curl animation only exists on iOS
        ("curl", None),
    ],
};

pub static SPREAD_FITTING: EnumTable<FitMode> = EnumTable {
    entries: &[
        ("fit", Some(FitMode::FitToScreen)),
        ("fill", Some(FitMode::FitToWidth)),
        ("adaptive", None),
    ],
};

pub static USER_INTERFACE_VIEW_MODE: EnumTable<UserInterfaceViewMode> = EnumTable {
    entries: &[
        ("automatic", Some(UserInterfaceViewMode::Automatic)),
        (
            "automaticBorderPages",
            Some(UserInterfaceViewMode::AutomaticBorderPages),
        ),
        (
            "automaticNoFirstLastPage",
            Some(UserInterfaceViewMode::AutomaticNoFirstLastPage),
        ),
        ("alwaysVisible", Some(UserInterfaceViewMode::Visible)),
        ("always", Some(UserInterfaceViewMode::Visible)),
        ("alwaysHidden", Some(UserInterfaceViewMode::Hidden)),
        ("never", Some(UserInterfaceViewMode::Hidden)),
    ],
};

pub static THUMBNAIL_BAR_MODE: EnumTable<ThumbnailBarMode> = EnumTable {
    entries: &[
        ("default", Some(ThumbnailBarMode::Default)),
        ("floating", Some(ThumbnailBarMode::Floating)),
        ("pinned", Some(ThumbnailBarMode::Pinned)),
        ("scrollable", Some(ThumbnailBarMode::Scrollable)),
        ("none", Some(ThumbnailBarMode::None)),
        ("scrubberBar", None),
    ],
};

pub static PAGE_LAYOUT_MODE: EnumTable<PageLayoutMode> = EnumTable {
    entries: &[
        ("single", Some(PageLayoutMode::Single)),
        ("double", Some(PageLayoutMode::Double)),
        ("automatic", Some(PageLayoutMode::Automatic)),
    ],
};

pub static APPEARANCE_MODE: EnumTable<ThemeMode> = EnumTable {
    entries: &[
        ("default", Some(ThemeMode::Default)),
        ("night", Some(ThemeMode::Night)),
        ("sepia", None),
    ],
};

pub static SETTINGS_MENU_ITEM: EnumTable<SettingsMenuItem> = EnumTable {
    entries: &[
        ("pageTransition", Some(SettingsMenuItem::PageTransition)),
        ("scrollDirection", Some(SettingsMenuItem::ScrollDirection)),
        ("pageLayout", Some(SettingsMenuItem::PageLayout)),
        ("pageMode", Some(SettingsMenuItem::PageLayout)),
        ("androidPageLayout", Some(SettingsMenuItem::PageLayout)),
        ("theme", Some(SettingsMenuItem::Theme)),
        ("appearance", Some(SettingsMenuItem::Theme)),
        ("androidTheme", Some(SettingsMenuItem::Theme)),
        ("screenAwake", Some(SettingsMenuItem::ScreenAwake)),
        ("androidScreenAwake", Some(SettingsMenuItem::ScreenAwake)),
        ("spreadFitting", None),
        ("brightness", None),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_literal_lists_accepted_values() {
        let err = SCROLL_DIRECTION.decode("diagonal").unwrap_err();
        assert_eq!(err.value, "diagonal");
        assert_eq!(err.expected, "one of [horizontal, vertical]");
    }

    #[test]
    fn platform_literal_is_accepted_as_noop() {
        assert_eq!(PAGE_TRANSITION.decode("curl"), Ok(None));
        let mut mode = ScrollMode::Continuous;
        set_from(&PAGE_TRANSITION, "curl", &mut mode).unwrap();
        assert_eq!(mode, ScrollMode::Continuous);
    }

    #[test]
    fn aliases_map_to_one_variant() {
        assert_eq!(
            SETTINGS_MENU_ITEM.decode("androidTheme"),
            SETTINGS_MENU_ITEM.decode("theme")
        );
        assert_eq!(
            USER_INTERFACE_VIEW_MODE.decode("never"),
            Ok(Some(UserInterfaceViewMode::Hidden))
        );
    }

    #[test]
    fn literals_are_case_sensitive() {
        assert!(PAGE_LAYOUT_MODE.decode("Single").is_err());
    }

    #[test]
    fn tables_have_no_duplicate_literals() {
        fn assert_unique<T: Copy>(table: &EnumTable<T>) {
            let mut seen = std::collections::HashSet::new();
            for literal in table.literals() {
                assert!(seen.insert(literal), "duplicate literal {literal}");
            }
        }
        assert_unique(&SCROLL_DIRECTION);
        assert_unique(&PAGE_TRANSITION);
        assert_unique(&SPREAD_FITTING);
        assert_unique(&USER_INTERFACE_VIEW_MODE);
        assert_unique(&THUMBNAIL_BAR_MODE);
        assert_unique(&PAGE_LAYOUT_MODE);
        assert_unique(&APPEARANCE_MODE);
        assert_unique(&SETTINGS_MENU_ITEM);
    }
}
