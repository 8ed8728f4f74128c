//! StyleScope: render a block under a derived style environment.
//!
//! The explicit "override scope" operation. Wrapping a block in a
//! `StyleScope` changes the environment that block (and everything it
//! renders) sees, without touching the enclosing environment or any sibling.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::{Environment, SizeCategory, StyleOverride};
use crate::widget::traits::CardBlock;

// ---------------------------------------------------------------------------
// StyleScope
// ---------------------------------------------------------------------------

/// A wrapper that renders its inner block under a derived environment.
///
/// Created directly or via `BlockExt::styled`. Delegates `CardBlock` to the
/// inner block after deriving the environment, so the wrapper is transparent
/// to containers.
pub struct StyleScope<B: CardBlock> {
    /// The wrapped block.
    pub block: B,
    overrides: StyleOverride,
    size_category: Option<SizeCategory>,
}

impl<B: CardBlock> StyleScope<B> {
    /// Wrap `block` so it renders with `overrides` applied to the enclosing
    /// config.
    pub fn new(overrides: StyleOverride, block: B) -> Self {
        Self {
            block,
            overrides,
            size_category: None,
        }
    }

    /// Also pin the active size category for the wrapped subtree
    /// (builder pattern).
    pub fn with_size_category(mut self, size_category: SizeCategory) -> Self {
        self.size_category = Some(size_category);
        self
    }

    /// The environment the wrapped block will actually see under `env`.
    fn derive(&self, env: &Environment) -> Environment {
        let mut derived = env.with_style(&self.overrides);
        if let Some(cat) = self.size_category {
            derived.size_category = cat;
        }
        derived
    }
}

impl<B: CardBlock + 'static> CardBlock for StyleScope<B> {
    fn block_type(&self) -> &str {
        self.block.block_type()
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let derived = self.derive(env);
        self.block.height(width, &derived)
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        let derived = self.derive(env);
        self.block.render(region, &derived)
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
