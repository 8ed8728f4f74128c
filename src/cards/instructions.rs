//! Instructions: caption text under a card's main content.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::render::text::wrap;
use crate::style::Environment;
use crate::widget::traits::CardBlock;

// ---------------------------------------------------------------------------
// Instructions
// ---------------------------------------------------------------------------

/// A multi-line caption block in the secondary label color.
///
/// Text wraps to the available width; height follows the wrapped line count.
pub struct Instructions {
    text: String,
}

impl Instructions {
    /// Create an instructions block with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The instructions text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl CardBlock for Instructions {
    fn block_type(&self) -> &str {
        "Instructions"
    }

    fn height(&self, width: i32, _env: &Environment) -> i32 {
        if width <= 0 {
            return 0;
        }
        wrap(&self.text, width as usize).len() as i32
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = CellStyle::caption(&env.style.secondary_label);
        wrap(&self.text, region.width as usize)
            .into_iter()
            .take(region.height as usize)
            .enumerate()
            .map(|(i, line)| {
                let mut strip = Strip::new(region.y + i as i32, region.x);
                strip.push_str(&line, style.clone());
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
