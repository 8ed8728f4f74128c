//! Button controls used inside cards: contact, address, checkmark.
//!
//! Buttons carry an optional activation callback invoked with no arguments;
//! a button without a callback still renders, it just does nothing when
//! activated. Filled buttons draw on the quaternary fill color and round
//! their corners when the secondary corner radius is positive.

use std::any::Any;
use std::rc::Rc;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::render::text::{center, truncate, wrap};
use crate::style::Environment;
use crate::widget::traits::CardBlock;

/// Activation callback: no arguments, no consumed return value.
pub type Action = Rc<dyn Fn()>;

// ---------------------------------------------------------------------------
// ContactButton
// ---------------------------------------------------------------------------

/// A filled action button with an icon and a title, used in contact card
/// footers (call / message / e-mail).
///
/// # Examples
///
/// ```ignore
/// let call = ContactButton::new("Call", Some('✆'))
///     .on_activate(|| println!("dialing"));
/// ```
pub struct ContactButton {
    title: String,
    icon: Option<char>,
    action: Option<Action>,
}

impl ContactButton {
    /// Create a button with the given title and optional icon.
    pub fn new(title: impl Into<String>, icon: Option<char>) -> Self {
        Self {
            title: title.into(),
            icon,
            action: None,
        }
    }

    /// Attach an activation callback (builder pattern).
    pub fn on_activate(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    /// Invoke the activation callback, if any.
    pub fn activate(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }

    /// The button title.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn label(&self) -> String {
        match self.icon {
            Some(icon) => format!("{icon} {}", self.title),
            None => self.title.clone(),
        }
    }
}

impl CardBlock for ContactButton {
    fn block_type(&self) -> &str {
        "ContactButton"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        3
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = &env.style;
        let fill = CellStyle::new().on_background(&style.quaternary_fill);
        let label_style =
            CellStyle::text(&style.label, style.title_weight).on_background(&style.quaternary_fill);
        let rounded = style.corner_radius_2 > 0;

        let label_row = if region.height >= 3 { 1 } else { 0 };
        (0..region.height)
            .map(|row| {
                // Rounded corners: inset the first and last fill row by one
                // cell on each side.
                let edge = rounded && (row == 0 || row == region.height - 1) && region.height > 1;
                let (x, w) = if edge && region.width > 2 {
                    (region.x + 1, region.width - 2)
                } else {
                    (region.x, region.width)
                };

                let mut strip = Strip::new(region.y + row, x);
                if row == label_row {
                    strip.push_str(&center(&self.label(), w as usize), label_style.clone());
                } else {
                    strip.fill(w, fill.clone());
                }
                strip
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// AddressButton
// ---------------------------------------------------------------------------

/// A filled block button showing a title row (icon at the right edge) and a
/// wrapped, multi-line detail — the address itself.
pub struct AddressButton {
    title: String,
    detail: String,
    icon: Option<char>,
    action: Option<Action>,
}

impl AddressButton {
    /// Create an address button with the given title and address text.
    pub fn new(title: impl Into<String>, detail: impl Into<String>, icon: Option<char>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            icon,
            action: None,
        }
    }

    /// Attach an activation callback (builder pattern).
    pub fn on_activate(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    /// Invoke the activation callback, if any.
    pub fn activate(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }

    /// The button title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The address text.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    fn detail_lines(&self, width: i32) -> Vec<String> {
        let inner = width - 2;
        if inner <= 0 {
            return Vec::new();
        }
        wrap(&self.detail, inner as usize)
    }
}

impl CardBlock for AddressButton {
    fn block_type(&self) -> &str {
        "AddressButton"
    }

    fn height(&self, width: i32, _env: &Environment) -> i32 {
        // Padding row, title, wrapped detail, padding row.
        2 + 1 + self.detail_lines(width).len() as i32
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = &env.style;
        let fill = CellStyle::new().on_background(&style.quaternary_fill);
        let title_style =
            CellStyle::text(&style.label, style.title_weight).on_background(&style.quaternary_fill);
        let detail_style =
            CellStyle::text(&style.label, style.detail_weight).on_background(&style.quaternary_fill);
        let rounded = style.corner_radius_2 > 0;

        let lines = self.detail_lines(region.width);
        let last_row = region.height - 1;
        let mut strips = Vec::new();

        for row in 0..region.height {
            let edge = rounded && (row == 0 || row == last_row) && region.height > 1;
            let (x, w) = if edge && region.width > 2 {
                (region.x + 1, region.width - 2)
            } else {
                (region.x, region.width)
            };
            let mut strip = Strip::new(region.y + row, x);

            if row == 1 {
                // Title row: one cell of padding, title, icon at right edge.
                strip.push(' ', fill.clone());
                let avail = (w - 2).max(0) as usize;
                strip.push_str(&truncate(&self.title, avail), title_style.clone());
                strip.fill(w - 1, fill.clone());
                match self.icon {
                    Some(icon) => strip.push(icon, title_style.clone()),
                    None => strip.push(' ', fill.clone()),
                }
            } else if row >= 2 && ((row - 2) as usize) < lines.len() && row < last_row {
                strip.push(' ', fill.clone());
                strip.push_str(&lines[(row - 2) as usize], detail_style.clone());
                strip.fill(w, fill.clone());
            } else {
                strip.fill(w, fill.clone());
            }
            strips.push(strip);
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

// ---------------------------------------------------------------------------
// CheckmarkButton
// ---------------------------------------------------------------------------

/// A circular checkable button reflecting a completion state.
///
/// Renders as a small three-row box with a checkmark when checked. Task
/// cards use one per event.
pub struct CheckmarkButton {
    checked: bool,
    action: Option<Action>,
}

impl CheckmarkButton {
    /// The rendered width of the button glyph box.
    pub const WIDTH: i32 = 3;

    /// Create a checkmark button in the given state.
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            action: None,
        }
    }

    /// Attach an activation callback (builder pattern).
    pub fn on_activate(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    /// Invoke the activation callback, if any.
    pub fn activate(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }

    /// Whether the button shows as checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl CardBlock for CheckmarkButton {
    fn block_type(&self) -> &str {
        "CheckmarkButton"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        3
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = &env.style;
        let ring = CellStyle::caption(&style.secondary_label);
        let mark = CellStyle::text(&style.label, crate::style::FontWeight::Bold);
        let rounded = style.corner_radius_2 > 0;
        let (tl, tr, bl, br) = if rounded {
            ('╭', '╮', '╰', '╯')
        } else {
            ('┌', '┐', '└', '┘')
        };

        // Center the 3-wide glyph box in the region.
        let x = region.x + ((region.width - Self::WIDTH) / 2).max(0);
        let rows = [
            [tl, '─', tr],
            ['│', if self.checked { '✓' } else { ' ' }, '│'],
            [bl, '─', br],
        ];

        rows.iter()
            .take(region.height as usize)
            .enumerate()
            .map(|(i, row)| {
                let mut strip = Strip::new(region.y + i as i32, x);
                for (j, &ch) in row.iter().enumerate() {
                    let cell_style = if i == 1 && j == 1 {
                        mark.clone()
                    } else {
                        ring.clone()
                    };
                    strip.push(ch, cell_style);
                }
                strip
            })
            .collect()
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
