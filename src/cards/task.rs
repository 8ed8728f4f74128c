//! Task cards: single-event and grid-of-events cards.
//!
//! A task card shows a header describing the task and one checkmark button
//! per event; the button state mirrors the completion state of the event.

use std::any::Any;

use crate::cards::buttons::CheckmarkButton;
use crate::cards::card::{compose, content_width, frame, frame_height, stacked_height};
use crate::cards::header::CardHeader;
use crate::cards::instructions::Instructions;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::Environment;
use crate::widget::traits::CardBlock;

/// Columns reserved for the completion button of a [`SimpleTaskCard`].
const COMPLETION_SLOT: i32 = 5;

/// Columns between checkmarks in a [`GridTaskCard`] row.
const GRID_SPACING: i32 = 2;

// ---------------------------------------------------------------------------
// SimpleTaskCard
// ---------------------------------------------------------------------------

/// A card showing a header beside a single circular completion button.
///
/// # Examples
///
/// ```ignore
/// let card = SimpleTaskCard::new("Doxylamine", Some("7:30 AM to 8:30 AM".to_owned()), false);
/// ```
pub struct SimpleTaskCard {
    header: CardHeader,
    completion: CheckmarkButton,
}

impl SimpleTaskCard {
    /// Create a card for one event in the given completion state.
    pub fn new(title: impl Into<String>, detail: Option<String>, is_complete: bool) -> Self {
        Self {
            header: CardHeader::new(title).with_detail_opt(detail),
            completion: CheckmarkButton::new(is_complete),
        }
    }

    /// Attach an activation callback to the completion button
    /// (builder pattern).
    pub fn on_activate(mut self, action: impl Fn() + 'static) -> Self {
        self.completion = self.completion.on_activate(action);
        self
    }

    /// Whether the event shows as complete.
    pub fn is_complete(&self) -> bool {
        self.completion.is_checked()
    }

    /// Set the completion state.
    pub fn set_complete(&mut self, complete: bool) {
        self.completion.set_checked(complete);
    }

    /// Invoke the completion button's callback, if any.
    pub fn activate(&self) {
        self.completion.activate();
    }
}

impl CardBlock for SimpleTaskCard {
    fn block_type(&self) -> &str {
        "SimpleTaskCard"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let inner = content_width(width);
        let header_h = self.header.height(inner - COMPLETION_SLOT, env);
        let button_h = self.completion.height(COMPLETION_SLOT, env);
        frame_height(header_h.max(button_h))
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        let (mut strips, content) = frame(region, env);
        if content.is_empty() {
            return strips;
        }

        let (left, right) = content.split_vertical(content.width - COMPLETION_SLOT);
        strips.extend(self.header.render(left, env));
        let button_band = right.band(0, self.completion.height(right.width, env));
        if !button_band.is_empty() {
            strips.extend(self.completion.render(button_band, env));
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
// CheckmarkRow
// ---------------------------------------------------------------------------

/// A horizontal run of checkmark buttons, one per event. Buttons that do not
/// fit the width are clipped.
struct CheckmarkRow {
    buttons: Vec<CheckmarkButton>,
}

impl CheckmarkRow {
    fn new(events: usize) -> Self {
        Self {
            buttons: (0..events).map(|_| CheckmarkButton::new(false)).collect(),
        }
    }
}

impl CardBlock for CheckmarkRow {
    fn block_type(&self) -> &str {
        "CheckmarkRow"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        if self.buttons.is_empty() { 0 } else { 3 }
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let mut strips = Vec::new();
        let mut x = region.x;
        for button in &self.buttons {
            if x + CheckmarkButton::WIDTH > region.right() {
                break;
            }
            let slot = Region::new(x, region.y, CheckmarkButton::WIDTH, region.height);
            strips.extend(button.render(slot, env));
            x += CheckmarkButton::WIDTH + GRID_SPACING;
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
// GridTaskCard
// ---------------------------------------------------------------------------

/// A card showing a header, a row of per-event checkmark buttons, and
/// optional instructions.
///
/// # Examples
///
/// ```ignore
/// let mut card = GridTaskCard::new(
///     "Doxylamine",
///     Some("3 remaining".to_owned()),
///     Some("Take the tablet with a full glass of water.".to_owned()),
///     3,
/// );
/// card.set_completed(0, true);
/// ```
pub struct GridTaskCard {
    header: CardHeader,
    row: CheckmarkRow,
    instructions: Option<Instructions>,
}

impl GridTaskCard {
    /// Create a card with one unchecked button per event.
    pub fn new(
        title: impl Into<String>,
        detail: Option<String>,
        instructions: Option<String>,
        events: usize,
    ) -> Self {
        Self {
            header: CardHeader::new(title)
                .with_detail_opt(detail)
                .with_disclosure()
                .with_divider(),
            row: CheckmarkRow::new(events),
            instructions: instructions.map(Instructions::new),
        }
    }

    /// The number of events (checkmark buttons).
    pub fn event_count(&self) -> usize {
        self.row.buttons.len()
    }

    /// Whether the event at `index` shows as complete. Out-of-range indices
    /// read as incomplete.
    pub fn is_completed(&self, index: usize) -> bool {
        self.row.buttons.get(index).is_some_and(|b| b.is_checked())
    }

    /// Set the completion state of the event at `index`. Out-of-range
    /// indices are a no-op.
    pub fn set_completed(&mut self, index: usize, complete: bool) {
        if let Some(button) = self.row.buttons.get_mut(index) {
            button.set_checked(complete);
        }
    }

    fn blocks(&self) -> Vec<&dyn CardBlock> {
        let mut blocks: Vec<&dyn CardBlock> = vec![&self.header, &self.row];
        if let Some(instructions) = &self.instructions {
            blocks.push(instructions);
        }
        blocks
    }
}

impl CardBlock for GridTaskCard {
    fn block_type(&self) -> &str {
        "GridTaskCard"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        frame_height(stacked_height(&self.blocks(), content_width(width), env))
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        compose(&self.blocks(), region, env)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn env() -> Environment {
        Environment::default()
    }

    // -----------------------------------------------------------------------
    // SimpleTaskCard
    // -----------------------------------------------------------------------

    #[test]
    fn simple_task_height_fits_button() {
        // Header of one row still leaves room for the 3-row button.
        let card = SimpleTaskCard::new("T", None, false);
        assert_eq!(card.height(30, &env()), 4 + 3);
    }

    #[test]
    fn simple_task_renders_header_and_checkmark() {
        let card = SimpleTaskCard::new("Doxylamine", Some("7:30 AM".to_owned()), false);
        let h = card.height(30, &env());
        let strips = card.render(Region::new(0, 0, 30, h), &env());

        let has_title = strips.iter().any(|s| {
            let text: String = s.cells.iter().map(|c| c.ch).collect();
            text.contains("Doxylamine")
        });
        assert!(has_title);
        // Checkmark ring on the right half.
        assert!(strips
            .iter()
            .any(|s| s.x_offset > 15 && s.cells.iter().any(|c| c.ch == '╭')));
    }

    #[test]
    fn simple_task_checked_state() {
        let card = SimpleTaskCard::new("T", None, true);
        assert!(card.is_complete());
        let h = card.height(30, &env());
        let strips = card.render(Region::new(0, 0, 30, h), &env());
        assert!(strips.iter().any(|s| s.cells.iter().any(|c| c.ch == '✓')));
    }

    #[test]
    fn simple_task_set_complete() {
        let mut card = SimpleTaskCard::new("T", None, false);
        card.set_complete(true);
        assert!(card.is_complete());
    }

    #[test]
    fn simple_task_activate_callback() {
        let hits = Rc::new(Cell::new(0));
        let hits_c = hits.clone();
        let card = SimpleTaskCard::new("T", None, false)
            .on_activate(move || hits_c.set(hits_c.get() + 1));
        card.activate();
        assert_eq!(hits.get(), 1);
    }

    // -----------------------------------------------------------------------
    // GridTaskCard
    // -----------------------------------------------------------------------

    #[test]
    fn grid_task_event_count() {
        let card = GridTaskCard::new("T", None, None, 3);
        assert_eq!(card.event_count(), 3);
    }

    #[test]
    fn grid_task_renders_one_checkmark_per_event() {
        let card = GridTaskCard::new("T", None, None, 3);
        let h = card.height(40, &env());
        let strips = card.render(Region::new(0, 0, 40, h), &env());
        let rings = strips
            .iter()
            .flat_map(|s| s.cells.iter())
            .filter(|c| c.ch == '╭')
            .count();
        // One card corner + three button corners.
        assert_eq!(rings, 4);
    }

    #[test]
    fn grid_task_clips_buttons_to_width() {
        let card = GridTaskCard::new("T", None, None, 20);
        // Card 20 wide -> content 14 -> floor((14 + 2) / 5) = 3 buttons fit.
        let h = card.height(20, &env());
        let strips = card.render(Region::new(0, 0, 20, h), &env());
        let rings = strips
            .iter()
            .flat_map(|s| s.cells.iter())
            .filter(|c| c.ch == '╭')
            .count();
        assert_eq!(rings, 1 + 3);
    }

    #[test]
    fn grid_task_set_completed() {
        let mut card = GridTaskCard::new("T", None, None, 3);
        assert!(!card.is_completed(1));
        card.set_completed(1, true);
        assert!(card.is_completed(1));
        // Out-of-range: no-op, reads as incomplete.
        card.set_completed(10, true);
        assert!(!card.is_completed(10));
    }

    #[test]
    fn grid_task_with_instructions_is_taller() {
        let without = GridTaskCard::new("T", None, None, 3);
        let with = GridTaskCard::new(
            "T",
            None,
            Some("Take the tablet with a full glass of water.".to_owned()),
            3,
        );
        assert!(with.height(40, &env()) > without.height(40, &env()));
    }

    #[test]
    fn grid_task_zero_events_renders_header_only() {
        let card = GridTaskCard::new("T", None, None, 0);
        let h = card.height(40, &env());
        // Chrome + header (title + divider).
        assert_eq!(h, 4 + 2);
    }
}
