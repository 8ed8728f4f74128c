//! Card: the content-agnostic container every card variant renders into.
//!
//! A card is a padded, bordered surface that stacks an ordered sequence of
//! blocks top-to-bottom. The container knows nothing about what it contains:
//! any [`CardBlock`] composes, and swapping one block type for another at the
//! same position changes only the content, never the chrome. Corner glyphs,
//! background, and rule colors all come from the active style config.

use std::any::Any;

use crate::geometry::{Region, Spacing};
use crate::render::strip::{CellStyle, Strip};
use crate::style::Environment;
use crate::widget::traits::CardBlock;

// ---------------------------------------------------------------------------
// Surface metrics
// ---------------------------------------------------------------------------

/// Blank rows between stacked blocks.
pub(crate) const BLOCK_GAP: i32 = 1;

/// Inset from the card's outer edge to its content area: 1 cell of border
/// plus padding of 1 row / 2 columns.
pub(crate) const CHROME: Spacing = Spacing::symmetric(2, 3);

/// The content width available inside a card `width` cells wide.
pub(crate) fn content_width(width: i32) -> i32 {
    let w = width - CHROME.width();
    if w > 0 { w } else { 0 }
}

/// The full card height needed to hold `content_height` rows of content.
pub(crate) fn frame_height(content_height: i32) -> i32 {
    content_height + CHROME.height()
}

// ---------------------------------------------------------------------------
// Surface rendering
// ---------------------------------------------------------------------------

/// Render the card chrome — background fill and border — into `region`.
///
/// Returns the chrome strips and the content region inside the padding.
/// Regions too small for a border render as a plain background fill with an
/// empty content region; an empty region renders nothing.
pub(crate) fn frame(region: Region, env: &Environment) -> (Vec<Strip>, Region) {
    if region.is_empty() {
        return (Vec::new(), Region::EMPTY);
    }

    let style = &env.style;
    let bg = CellStyle::new().on_background(&style.background);
    let border = CellStyle::caption(&style.secondary_label).on_background(&style.background);

    if region.width < 2 || region.height < 2 {
        // No room for a border; fill what exists.
        let mut strips = Vec::new();
        for row in 0..region.height {
            let mut strip = Strip::new(region.y + row, region.x);
            strip.fill(region.width, bg.clone());
            strips.push(strip);
        }
        return (strips, Region::EMPTY);
    }

    let rounded = style.corner_radius_1 > 0;
    let (tl, tr, bl, br) = if rounded {
        ('╭', '╮', '╰', '╯')
    } else {
        ('┌', '┐', '└', '┘')
    };

    let inner = region.width - 2;
    let mut strips = Vec::new();

    let mut top = Strip::new(region.y, region.x);
    top.push(tl, border.clone());
    for _ in 0..inner {
        top.push('─', border.clone());
    }
    top.push(tr, border.clone());
    strips.push(top);

    for row in 1..region.height - 1 {
        let mut strip = Strip::new(region.y + row, region.x);
        strip.push('│', border.clone());
        for _ in 0..inner {
            strip.push(' ', bg.clone());
        }
        strip.push('│', border.clone());
        strips.push(strip);
    }

    let mut bottom = Strip::new(region.bottom() - 1, region.x);
    bottom.push(bl, border.clone());
    for _ in 0..inner {
        bottom.push('─', border.clone());
    }
    bottom.push(br, border.clone());
    strips.push(bottom);

    (strips, region.shrink(CHROME))
}

// ---------------------------------------------------------------------------
// Block stacking
// ---------------------------------------------------------------------------

/// Total content height of `blocks` stacked at `width`, with one gap row
/// between consecutive visible blocks. Blocks reporting zero height are
/// skipped entirely.
pub(crate) fn stacked_height(blocks: &[&dyn CardBlock], width: i32, env: &Environment) -> i32 {
    let mut total = 0;
    let mut first = true;
    for block in blocks {
        let h = block.height(width, env);
        if h <= 0 {
            continue;
        }
        if !first {
            total += BLOCK_GAP;
        }
        total += h;
        first = false;
    }
    total
}

/// Render `blocks` as a complete card in `region`: chrome first, then each
/// block into its band of the content area, in order.
///
/// Blocks that fall past the bottom of the content area are clipped.
pub(crate) fn compose(blocks: &[&dyn CardBlock], region: Region, env: &Environment) -> Vec<Strip> {
    let (mut strips, content) = frame(region, env);
    if content.is_empty() {
        return strips;
    }

    let mut offset = 0;
    for block in blocks {
        let h = block.height(content.width, env);
        if h <= 0 {
            continue;
        }
        let band = content.band(offset, h);
        if band.is_empty() {
            break;
        }
        strips.extend(block.render(band, env));
        offset += h + BLOCK_GAP;
    }
    strips
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// A generic card: an ordered stack of arbitrary blocks on a styled surface.
///
/// Blocks are supplied at construction and rendered in insertion order. An
/// empty card still renders its padded, bordered surface.
///
/// # Examples
///
/// ```ignore
/// let card = Card::new()
///     .with_block(CardHeader::new("Doxylamine"))
///     .with_block(Instructions::new("Take with a full glass of water."));
/// ```
pub struct Card {
    blocks: Vec<Box<dyn CardBlock>>,
}

impl Card {
    /// Create a new empty card.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a block (builder pattern).
    pub fn with_block(mut self, block: impl CardBlock + 'static) -> Self {
        self.blocks.push(Box::new(block));
        self
    }

    /// Append an already-boxed block.
    pub fn push_block(&mut self, block: Box<dyn CardBlock>) {
        self.blocks.push(block);
    }

    /// The number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Borrow the blocks in render order.
    pub fn blocks(&self) -> &[Box<dyn CardBlock>] {
        &self.blocks
    }

    fn block_refs(&self) -> Vec<&dyn CardBlock> {
        self.blocks.iter().map(|b| b.as_ref()).collect()
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl CardBlock for Card {
    fn block_type(&self) -> &str {
        "Card"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let refs = self.block_refs();
        frame_height(stacked_height(&refs, content_width(width), env))
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        let refs = self.block_refs();
        compose(&refs, region, env)
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
