//! Style configuration and the ambient environment.
//!
//! A [`StyleConfig`] holds every visual parameter a card may consult: label
//! colors, surface background, control fill, corner radii, and font weights.
//! It is owned at the root of a widget tree and propagated by reference
//! strictly downward; a subtree that wants different values is rendered under
//! a derived [`Environment`] produced by [`Environment::with_style`], never by
//! mutating the parent's config.

use crate::style::size_category::SizeCategory;

// ---------------------------------------------------------------------------
// FontWeight
// ---------------------------------------------------------------------------

/// Font weight, mapped to terminal text attributes at render time.
///
/// Terminals only distinguish normal and bold, so `Semibold` and `Bold` both
/// render bold; `Regular` and `Medium` render normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Whether this weight renders with the bold attribute.
    #[inline]
    pub const fn is_bold(self) -> bool {
        matches!(self, FontWeight::Semibold | FontWeight::Bold)
    }
}

// ---------------------------------------------------------------------------
// StyleConfig
// ---------------------------------------------------------------------------

/// The full set of visual parameters a card subtree inherits.
///
/// Colors are strings (`"white"`, `"#2e7d32"`) parsed only at paint time.
/// A radius of `0` draws square corners; any positive radius draws rounded
/// corner glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Primary label color.
    pub label: String,
    /// Secondary label color (detail text, instructions, divider rules).
    pub secondary_label: String,
    /// Card surface background color.
    pub background: String,
    /// Fill color for buttons and other quaternary surfaces.
    pub quaternary_fill: String,
    /// Corner radius for the card surface.
    pub corner_radius_1: u16,
    /// Corner radius for inner controls (buttons, address block).
    pub corner_radius_2: u16,
    /// Weight for title text.
    pub title_weight: FontWeight,
    /// Weight for detail and instruction text.
    pub detail_weight: FontWeight,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            label: "white".to_owned(),
            secondary_label: "grey".to_owned(),
            background: "black".to_owned(),
            quaternary_fill: "dark_grey".to_owned(),
            corner_radius_1: 1,
            corner_radius_2: 1,
            title_weight: FontWeight::Semibold,
            detail_weight: FontWeight::Regular,
        }
    }
}

impl StyleConfig {
    /// Create the process-wide default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a copy of `self` with the fields present in `overrides`
    /// replaced. Unset override fields keep the base value.
    pub fn merged(&self, overrides: &StyleOverride) -> StyleConfig {
        /// Helper: pick the override if set, otherwise keep the base.
        fn pick<T: Clone>(base: &T, over: &Option<T>) -> T {
            match over {
                Some(v) => v.clone(),
                None => base.clone(),
            }
        }

        StyleConfig {
            label: pick(&self.label, &overrides.label),
            secondary_label: pick(&self.secondary_label, &overrides.secondary_label),
            background: pick(&self.background, &overrides.background),
            quaternary_fill: pick(&self.quaternary_fill, &overrides.quaternary_fill),
            corner_radius_1: pick(&self.corner_radius_1, &overrides.corner_radius_1),
            corner_radius_2: pick(&self.corner_radius_2, &overrides.corner_radius_2),
            title_weight: pick(&self.title_weight, &overrides.title_weight),
            detail_weight: pick(&self.detail_weight, &overrides.detail_weight),
        }
    }
}

// ---------------------------------------------------------------------------
// StyleOverride
// ---------------------------------------------------------------------------

/// A partial [`StyleConfig`]. Every field is `Option<T>`; `None` means
/// "inherit from the enclosing config".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverride {
    pub label: Option<String>,
    pub secondary_label: Option<String>,
    pub background: Option<String>,
    pub quaternary_fill: Option<String>,
    pub corner_radius_1: Option<u16>,
    pub corner_radius_2: Option<u16>,
    pub title_weight: Option<FontWeight>,
    pub detail_weight: Option<FontWeight>,
}

impl StyleOverride {
    /// Create an override with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no fields are set (merging is the identity).
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.secondary_label.is_none()
            && self.background.is_none()
            && self.quaternary_fill.is_none()
            && self.corner_radius_1.is_none()
            && self.corner_radius_2.is_none()
            && self.title_weight.is_none()
            && self.detail_weight.is_none()
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// The ambient context passed by reference into every render call.
///
/// Holds the active [`StyleConfig`] and [`SizeCategory`]. Reading is free of
/// side effects. The `with_*` methods derive a new environment for a subtree;
/// the parent environment is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub style: StyleConfig,
    pub size_category: SizeCategory,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            // The host platform's default text size.
            size_category: SizeCategory::Large,
        }
    }
}

impl Environment {
    /// Create the default environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive an environment whose style has `overrides` applied.
    pub fn with_style(&self, overrides: &StyleOverride) -> Environment {
        Environment {
            style: self.style.merged(overrides),
            size_category: self.size_category,
        }
    }

    /// Derive an environment with a different active size category.
    pub fn with_size_category(&self, size_category: SizeCategory) -> Environment {
        Environment {
            style: self.style.clone(),
            size_category,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_weight_boldness() {
        assert!(!FontWeight::Regular.is_bold());
        assert!(!FontWeight::Medium.is_bold());
        assert!(FontWeight::Semibold.is_bold());
        assert!(FontWeight::Bold.is_bold());
    }

    #[test]
    fn default_config_values() {
        let c = StyleConfig::default();
        assert_eq!(c.label, "white");
        assert_eq!(c.secondary_label, "grey");
        assert_eq!(c.title_weight, FontWeight::Semibold);
        assert_eq!(c.detail_weight, FontWeight::Regular);
        assert!(c.corner_radius_1 > 0);
    }

    #[test]
    fn override_new_is_empty() {
        assert!(StyleOverride::new().is_empty());
    }

    #[test]
    fn override_not_empty_when_field_set() {
        let over = StyleOverride {
            label: Some("cyan".to_owned()),
            ..StyleOverride::default()
        };
        assert!(!over.is_empty());
    }

    #[test]
    fn merged_empty_override_is_identity() {
        let base = StyleConfig::default();
        assert_eq!(base.merged(&StyleOverride::new()), base);
    }

    #[test]
    fn merged_applies_set_fields_only() {
        let base = StyleConfig::default();
        let over = StyleOverride {
            label: Some("cyan".to_owned()),
            corner_radius_1: Some(0),
            ..StyleOverride::default()
        };
        let merged = base.merged(&over);
        assert_eq!(merged.label, "cyan");
        assert_eq!(merged.corner_radius_1, 0);
        // Untouched fields keep base values.
        assert_eq!(merged.secondary_label, base.secondary_label);
        assert_eq!(merged.background, base.background);
        assert_eq!(merged.title_weight, base.title_weight);
    }

    #[test]
    fn merged_all_fields() {
        let base = StyleConfig::default();
        let over = StyleOverride {
            label: Some("red".to_owned()),
            secondary_label: Some("yellow".to_owned()),
            background: Some("#102030".to_owned()),
            quaternary_fill: Some("blue".to_owned()),
            corner_radius_1: Some(0),
            corner_radius_2: Some(3),
            title_weight: Some(FontWeight::Bold),
            detail_weight: Some(FontWeight::Medium),
        };
        let merged = base.merged(&over);
        assert_eq!(merged.label, "red");
        assert_eq!(merged.secondary_label, "yellow");
        assert_eq!(merged.background, "#102030");
        assert_eq!(merged.quaternary_fill, "blue");
        assert_eq!(merged.corner_radius_1, 0);
        assert_eq!(merged.corner_radius_2, 3);
        assert_eq!(merged.title_weight, FontWeight::Bold);
        assert_eq!(merged.detail_weight, FontWeight::Medium);
    }

    #[test]
    fn with_style_derives_without_mutating_parent() {
        let parent = Environment::default();
        let over = StyleOverride {
            label: Some("green".to_owned()),
            ..StyleOverride::default()
        };
        let child = parent.with_style(&over);
        assert_eq!(child.style.label, "green");
        // Parent unchanged.
        assert_eq!(parent.style.label, "white");
        // Size category carries through.
        assert_eq!(child.size_category, parent.size_category);
    }

    #[test]
    fn with_style_chained_scopes() {
        let root = Environment::default();
        let a = root.with_style(&StyleOverride {
            label: Some("red".to_owned()),
            background: Some("blue".to_owned()),
            ..StyleOverride::default()
        });
        let b = a.with_style(&StyleOverride {
            label: Some("green".to_owned()),
            ..StyleOverride::default()
        });
        // Innermost override wins for the field it sets...
        assert_eq!(b.style.label, "green");
        // ...and outer scope values flow through where unset.
        assert_eq!(b.style.background, "blue");
        // Intermediate scope is unaffected by the inner derivation.
        assert_eq!(a.style.label, "red");
    }

    #[test]
    fn with_size_category() {
        let env = Environment::default();
        let big = env.with_size_category(SizeCategory::AccessibilityLarge);
        assert_eq!(big.size_category, SizeCategory::AccessibilityLarge);
        assert_eq!(big.style, env.style);
        assert_eq!(env.size_category, SizeCategory::Large);
    }
}
