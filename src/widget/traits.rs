//! CardBlock trait: the capability every card slot and body element shares.
//!
//! The `CardBlock` trait is the core abstraction in vitals-tui. Anything a
//! card can stack — headers, footers, button rows, checklist rows, whole
//! cards — implements it. Card containers hold blocks only through this
//! trait, which is what keeps them content-agnostic: a custom slot and a
//! library-provided default are indistinguishable at the container boundary.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::Environment;

// ---------------------------------------------------------------------------
// CardBlock trait
// ---------------------------------------------------------------------------

/// Core trait implemented by everything a card can render.
///
/// CardBlock is object-safe: the core methods use `&self` and return owned
/// types. Builder-style conveniences live on the `BlockExt` extension trait.
pub trait CardBlock {
    /// The type name for this block (e.g. "CardHeader", "ContactButton").
    ///
    /// Used for diagnostics and tests; rendering never branches on it.
    fn block_type(&self) -> &str;

    /// The number of rows this block occupies when laid out at `width`
    /// under the given environment.
    ///
    /// Containers use this to slice their content area into one band per
    /// block. The environment matters: some blocks change shape with the
    /// active size category.
    fn height(&self, width: i32, env: &Environment) -> i32;

    /// Render this block's content into strips within the given region.
    ///
    /// `region` is the band the container allotted, in absolute terminal
    /// cells. `env` is the ambient style environment; implementations read
    /// it and must never retain or mutate it.
    fn render(&self, region: Region, env: &Environment) -> Vec<Strip>;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// BlockExt
// ---------------------------------------------------------------------------

/// Extension trait providing builder-style conveniences for blocks.
///
/// Automatically implemented for all types that implement `CardBlock`.
pub trait BlockExt: CardBlock {
    /// Wrap this block so it renders under a derived style scope.
    ///
    /// The wrapped block sees the enclosing environment with `overrides`
    /// applied; siblings and ancestors are unaffected.
    fn styled(self, overrides: crate::style::StyleOverride) -> crate::widget::StyleScope<Self>
    where
        Self: Sized,
    {
        crate::widget::StyleScope::new(overrides, self)
    }
}

// Blanket implementation: every CardBlock gets BlockExt for free.
impl<T: CardBlock> BlockExt for T {}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;

    // -----------------------------------------------------------------------
    // Test block
    // -----------------------------------------------------------------------

    struct Label {
        text: String,
    }

    impl Label {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_owned(),
            }
        }
    }

    impl CardBlock for Label {
        fn block_type(&self) -> &str {
            "Label"
        }

        fn height(&self, _width: i32, _env: &Environment) -> i32 {
            1
        }

        fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
            if region.is_empty() {
                return Vec::new();
            }
            let mut strip = Strip::new(region.y, region.x);
            let text: String = self.text.chars().take(region.width as usize).collect();
            strip.push_str(
                &text,
                CellStyle::text(&env.style.label, env.style.detail_weight),
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

    // -----------------------------------------------------------------------
    // CardBlock
    // -----------------------------------------------------------------------

    #[test]
    fn block_type_name() {
        let label = Label::new("hello");
        assert_eq!(label.block_type(), "Label");
    }

    #[test]
    fn render_produces_strips() {
        let label = Label::new("Hi");
        let env = Environment::default();
        let strips = label.render(Region::new(0, 0, 10, 1), &env);
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].width(), 2);
        assert_eq!(strips[0].cells[0].ch, 'H');
    }

    #[test]
    fn render_empty_region() {
        let label = Label::new("Hi");
        let env = Environment::default();
        assert!(label.render(Region::EMPTY, &env).is_empty());
    }

    #[test]
    fn render_reads_environment_colors() {
        let label = Label::new("x");
        let mut env = Environment::default();
        env.style.label = "cyan".to_owned();
        let strips = label.render(Region::new(0, 0, 5, 1), &env);
        assert_eq!(strips[0].cells[0].style.fg, Some("cyan".into()));
    }

    #[test]
    fn block_is_object_safe() {
        let block: Box<dyn CardBlock> = Box::new(Label::new("dynamic"));
        let env = Environment::default();
        assert_eq!(block.block_type(), "Label");
        assert_eq!(block.height(10, &env), 1);
        assert_eq!(block.render(Region::new(0, 0, 5, 1), &env).len(), 1);
    }

    #[test]
    fn as_any_downcast() {
        let label = Label::new("test");
        let any_ref = label.as_any();
        let downcasted = any_ref.downcast_ref::<Label>().unwrap();
        assert_eq!(downcasted.text, "test");
    }

    #[test]
    fn as_any_mut_downcast() {
        let mut label = Label::new("test");
        let any_mut = label.as_any_mut();
        let downcasted = any_mut.downcast_mut::<Label>().unwrap();
        downcasted.text = "modified".to_owned();
        assert_eq!(downcasted.text, "modified");
    }

    // -----------------------------------------------------------------------
    // BlockExt
    // -----------------------------------------------------------------------

    #[test]
    fn styled_wraps_in_scope() {
        use crate::style::StyleOverride;

        let over = StyleOverride {
            label: Some("green".to_owned()),
            ..StyleOverride::default()
        };
        let scoped = Label::new("x").styled(over);
        let env = Environment::default();
        let strips = scoped.render(Region::new(0, 0, 5, 1), &env);
        assert_eq!(strips[0].cells[0].style.fg, Some("green".into()));
    }
}
