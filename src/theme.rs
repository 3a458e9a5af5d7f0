//! Binary display mode and the style selections derived from it.
//!
//! One `Theme` value governs the whole view: it lives in a single state
//! handle at the App root and is handed down through context. Components
//! never mutate the document attribute themselves; [`sync_document_theme`]
//! runs whenever the shared value changes.

/// The two display modes. The site starts dark and nothing persists the
/// choice across reloads.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Class names selected by the current theme, used wherever a block needs
/// theme-specific styling that the `[data-theme]` selectors can't cover.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeClasses {
    pub page: &'static str,
    pub text_muted: &'static str,
    pub glass: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub grid: &'static str,
    pub grid_soft: &'static str,
    pub control: &'static str,
    pub cta: &'static str,
    pub input: &'static str,
}

impl Theme {
    /// The other mode. Flipping twice restores the original value.
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value mirrored onto the document's `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn classes(self) -> ThemeClasses {
        match self {
            Theme::Dark => ThemeClasses {
                page: "page-dark",
                text_muted: "muted-dark",
                glass: "glass-dark",
                border: "border-dark",
                accent: "accent-dark",
                grid: "grid-dark",
                grid_soft: "grid-soft-dark",
                control: "control-dark",
                cta: "cta-dark",
                input: "input-dark",
            },
            Theme::Light => ThemeClasses {
                page: "page-light",
                text_muted: "muted-light",
                glass: "glass-light",
                border: "border-light",
                accent: "accent-light",
                grid: "grid-light",
                grid_soft: "grid-soft-light",
                control: "control-light",
                cta: "cta-light",
                input: "input-light",
            },
        }
    }

    /// Label for the header toggle control: "Dark • On" / "Dark • Off".
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark • On",
            Theme::Light => "Dark • Off",
        }
    }
}

/// Mirror the given theme onto `<html data-theme="...">`.
pub fn sync_document_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.attr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.flipped(), theme);
            assert_eq!(theme.flipped().flipped(), theme);
            // Derived selections return with the value.
            assert_eq!(theme.flipped().flipped().classes(), theme.classes());
        }
    }

    #[test]
    fn attribute_values_match_modes() {
        assert_eq!(Theme::Dark.attr(), "dark");
        assert_eq!(Theme::Light.attr(), "light");
    }

    #[test]
    fn class_tables_differ_per_mode() {
        let dark = Theme::Dark.classes();
        let light = Theme::Light.classes();
        assert_ne!(dark, light);
        assert_eq!(dark.glass, "glass-dark");
        assert_eq!(light.glass, "glass-light");
    }

    #[test]
    fn toggle_label_reflects_mode() {
        assert_eq!(Theme::Dark.toggle_label(), "Dark • On");
        assert_eq!(Theme::Light.toggle_label(), "Dark • Off");
    }
}
