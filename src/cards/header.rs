//! CardHeader: the library-standard header slot.
//!
//! Title and optional detail on the left, optional icon before the title,
//! optional disclosure chevron at the right edge, optional divider rule
//! underneath. Cards that accept a custom header type substitute this block
//! when the caller does not supply one.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::render::text::truncate;
use crate::style::Environment;
use crate::widget::traits::CardBlock;

/// The disclosure chevron glyph.
const DISCLOSURE: char = '›';

// ---------------------------------------------------------------------------
// CardHeader
// ---------------------------------------------------------------------------

/// The standard card header: title, detail, icon, disclosure, divider.
///
/// Every element except the title row itself is optional. An empty title
/// renders as an empty row rather than failing, so a header built from
/// absent values is still a valid slot.
///
/// # Examples
///
/// ```ignore
/// let header = CardHeader::new("Doxylamine")
///     .with_detail("2 remaining")
///     .with_icon('♥')
///     .with_disclosure()
///     .with_divider();
/// ```
pub struct CardHeader {
    title: String,
    detail: Option<String>,
    icon: Option<char>,
    disclosure: bool,
    divider: bool,
}

impl CardHeader {
    /// Create a header with the given title and nothing else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            icon: None,
            disclosure: false,
            divider: false,
        }
    }

    /// Set the detail line (builder pattern).
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the detail line from an optional value (builder pattern).
    pub fn with_detail_opt(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    /// Set the icon glyph shown before the title (builder pattern).
    pub fn with_icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Show a disclosure chevron at the right edge (builder pattern).
    pub fn with_disclosure(mut self) -> Self {
        self.disclosure = true;
        self
    }

    /// Draw a divider rule under the header (builder pattern).
    pub fn with_divider(mut self) -> Self {
        self.divider = true;
        self
    }

    /// The title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl CardBlock for CardHeader {
    fn block_type(&self) -> &str {
        "CardHeader"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        1 + i32::from(self.detail.is_some()) + i32::from(self.divider)
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = &env.style;
        let title_style = CellStyle::text(&style.label, style.title_weight);
        let detail_style = CellStyle::text(&style.secondary_label, style.detail_weight);
        let rule_style = CellStyle::caption(&style.secondary_label);
        let spacer = CellStyle::new().on_background(&style.background);

        let width = region.width as usize;
        let mut strips = Vec::new();

        // Title row: [icon ] title ... [chevron]
        let mut title_strip = Strip::new(region.y, region.x);
        if let Some(icon) = self.icon {
            title_strip.push(icon, title_style.clone());
            title_strip.push(' ', spacer.clone());
        }
        let reserved = title_strip.width() as usize + usize::from(self.disclosure) * 2;
        let avail = width.saturating_sub(reserved);
        title_strip.push_str(&truncate(&self.title, avail), title_style);
        if self.disclosure {
            title_strip.fill(region.width - 1, spacer);
            title_strip.push(DISCLOSURE, rule_style.clone());
        }
        strips.push(title_strip);

        // Detail row.
        let mut row = 1;
        if let Some(ref detail) = self.detail {
            if region.height > row {
                let mut detail_strip = Strip::new(region.y + row, region.x);
                detail_strip.push_str(&truncate(detail, width), detail_style);
                strips.push(detail_strip);
            }
            row += 1;
        }

        // Divider rule.
        if self.divider && region.height > row {
            strips.push(Strip::rule(region.y + row, region.x, region.width, rule_style));
        }

        strips
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
