//! Rule: a one-row divider block.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::style::Environment;
use crate::widget::traits::CardBlock;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A horizontal divider rule spanning the available width, drawn in the
/// secondary label color.
#[derive(Debug, Default)]
pub struct Rule;

impl Rule {
    /// Create a divider rule.
    pub fn new() -> Self {
        Self
    }
}

impl CardBlock for Rule {
    fn block_type(&self) -> &str {
        "Rule"
    }

    fn height(&self, _width: i32, _env: &Environment) -> i32 {
        1
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let style = CellStyle::caption(&env.style.secondary_label);
        vec![Strip::rule(region.y, region.x, region.width, style)]
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

    #[test]
    fn renders_full_width_rule() {
        let env = Environment::default();
        let strips = Rule::new().render(Region::new(2, 5, 6, 1), &env);
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].y, 5);
        assert_eq!(strips[0].x_offset, 2);
        assert_eq!(strips[0].width(), 6);
        assert!(strips[0].cells.iter().all(|c| c.ch == '─'));
    }

    #[test]
    fn height_is_one() {
        assert_eq!(Rule::new().height(80, &Environment::default()), 1);
    }

    #[test]
    fn render_empty_region() {
        let env = Environment::default();
        assert!(Rule::new().render(Region::EMPTY, &env).is_empty());
    }
}
