//! Checklist card: a vertically stacked checklist of events for one task.
//!
//! The card owns its [`ChecklistState`] and is its sole mutator; the
//! delegating methods below are the card's entire mutation surface. Rows are
//! rebuilt from the state on every render pass, so a mutation followed by a
//! render always shows the updated collection.

use std::any::Any;

use crate::cards::card::{compose, content_width, frame_height, stacked_height};
use crate::cards::header::CardHeader;
use crate::cards::instructions::Instructions;
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::render::text::truncate;
use crate::state::checklist::{ChecklistItem, ChecklistState, SubscriptionId};
use crate::style::Environment;
use crate::widget::traits::CardBlock;

/// Filled / hollow circle glyphs for the row completion marker.
const CHECKED_MARK: char = '◉';
const UNCHECKED_MARK: char = '○';

// ---------------------------------------------------------------------------
// ChecklistRow
// ---------------------------------------------------------------------------

/// One rendered checklist row: title on the left, completion marker at the
/// right edge. Built fresh from a [`ChecklistItem`] each render pass.
struct ChecklistRow {
    title: String,
    checked: bool,
}

impl ChecklistRow {
    fn new(item: &ChecklistItem) -> Self {
        Self {
            title: item.title.clone(),
            checked: item.checked,
        }
    }
}

impl CardBlock for ChecklistRow {
    fn block_type(&self) -> &str {
        "ChecklistRow"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        1
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = &env.style;
        // Completed rows read as struck-through and dimmed.
        let title_style = if self.checked {
            CellStyle::caption(&style.secondary_label).struck(true)
        } else {
            CellStyle::text(&style.label, style.detail_weight)
        };
        let mark_style = CellStyle::text(&style.label, style.detail_weight);
        let spacer = CellStyle::new().on_background(&style.background);

        let mut strip = Strip::new(region.y, region.x);
        let avail = (region.width - 2).max(0) as usize;
        strip.push_str(&truncate(&self.title, avail), title_style);
        strip.fill(region.width - 1, spacer);
        strip.push(
            if self.checked { CHECKED_MARK } else { UNCHECKED_MARK },
            mark_style,
        );
        vec![strip]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// ChecklistBody
// ---------------------------------------------------------------------------

/// The stacked item rows with a divider rule under each. Transient: built
/// from the state for a single render or measure pass.
struct ChecklistBody {
    rows: Vec<ChecklistRow>,
}

impl ChecklistBody {
    fn new(items: &[ChecklistItem]) -> Self {
        Self {
            rows: items.iter().map(ChecklistRow::new).collect(),
        }
    }
}

impl CardBlock for ChecklistBody {
    fn block_type(&self) -> &str {
        "ChecklistBody"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        // One text row and one rule row per item.
        2 * self.rows.len() as i32
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let rule_style = CellStyle::caption(&env.style.secondary_label);
        let mut strips = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            let band = region.band(2 * i as i32, 1);
            if band.is_empty() {
                break;
            }
            strips.extend(row.render(band, env));

            let rule_band = region.band(2 * i as i32 + 1, 1);
            if rule_band.is_empty() {
                break;
            }
            strips.push(Strip::rule(
                rule_band.y,
                rule_band.x,
                rule_band.width,
                rule_style.clone(),
            ));
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
// ChecklistTaskCard
// ---------------------------------------------------------------------------

/// A card displaying a header, one row per checklist item, and optional
/// instructions.
///
/// # Examples
///
/// ```ignore
/// let mut card = ChecklistTaskCard::new(
///     "Doxylamine",
///     Some("2 remaining".to_owned()),
///     Some("Take the tablet with a full glass of water.".to_owned()),
/// );
/// card.add_item("Morning dose");
/// card.add_item("Evening dose");
/// card.toggle_item(0);
/// ```
pub struct ChecklistTaskCard {
    header: CardHeader,
    instructions: Option<Instructions>,
    state: ChecklistState,
}

impl ChecklistTaskCard {
    /// Create a card with an empty checklist.
    pub fn new(
        title: impl Into<String>,
        detail: Option<String>,
        instructions: Option<String>,
    ) -> Self {
        Self {
            header: CardHeader::new(title)
                .with_detail_opt(detail)
                .with_disclosure()
                .with_divider(),
            instructions: instructions.map(Instructions::new),
            state: ChecklistState::new(),
        }
    }

    /// Seed the checklist with one unchecked item per title
    /// (builder pattern).
    pub fn with_items<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state = ChecklistState::from_titles(titles);
        self
    }

    // -----------------------------------------------------------------------
    // Mutation surface — delegates to the owned state
    // -----------------------------------------------------------------------

    /// Append an unchecked item.
    pub fn add_item(&mut self, title: impl Into<String>) {
        self.state.add_item(title);
    }

    /// Insert an item before `index`; `index >= len` is a no-op.
    pub fn insert_item(&mut self, title: impl Into<String>, index: usize) {
        self.state.insert_item(title, index);
    }

    /// Replace the title at `index`; out-of-range is a no-op.
    pub fn update_item(&mut self, index: usize, title: impl Into<String>) {
        self.state.update_item(index, title);
    }

    /// Remove the item at `index`; out-of-range is a no-op.
    pub fn remove_item(&mut self, index: usize) {
        self.state.remove_item(index);
    }

    /// Flip the checked state at `index`; out-of-range is a no-op.
    pub fn toggle_item(&mut self, index: usize) {
        self.state.toggle_item(index);
    }

    /// Remove every item.
    pub fn clear_items(&mut self) {
        self.state.clear_items();
    }

    /// The items in display order.
    pub fn items(&self) -> &[ChecklistItem] {
        self.state.items()
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Whether the checklist has no items.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Register a callback invoked after each effective mutation, typically
    /// to schedule a repaint.
    pub fn on_change(&mut self, f: impl FnMut(&[ChecklistItem]) + 'static) -> SubscriptionId {
        self.state.subscribe(f)
    }

    /// Deactivate a callback registered with
    /// [`on_change`](ChecklistTaskCard::on_change).
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    fn body(&self) -> ChecklistBody {
        ChecklistBody::new(self.state.items())
    }
}

impl CardBlock for ChecklistTaskCard {
    fn block_type(&self) -> &str {
        "ChecklistTaskCard"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let body = self.body();
        let mut blocks: Vec<&dyn CardBlock> = vec![&self.header, &body];
        if let Some(instructions) = &self.instructions {
            blocks.push(instructions);
        }
        frame_height(stacked_height(&blocks, content_width(width), env))
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        let body = self.body();
        let mut blocks: Vec<&dyn CardBlock> = vec![&self.header, &body];
        if let Some(instructions) = &self.instructions {
            blocks.push(instructions);
        }
        compose(&blocks, region, env)
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
