//! # vitals-tui
//!
//! Composable card widgets for terminal health-tracking apps.
//!
//! vitals-tui renders contact cards, task cards, and checklists as styled,
//! vertically-stacked surfaces in the terminal. Cards are assembled from
//! interchangeable header/footer/content slots, and every visual parameter —
//! colors, corner radii, font weights — comes from an ambient style
//! environment threaded top-down through rendering rather than being
//! hard-coded per widget.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Size, Region, Spacing primitives for the cell grid
//! - **[`style`]** — Ambient style config with derived override scopes, the
//!   12-level accessibility size scale, color parsing
//! - **[`render`]** — Strip-based rendering primitives and crossterm driver
//! - **[`widget`]** — The CardBlock trait and style scoping
//! - **[`state`]** — Checklist state with subscribe/notify re-render hooks
//! - **[`cards`]** — Built-in cards: contact, task, grid, checklist
//! - **[`testing`]** — Headless render-to-string helpers

// Foundation
pub mod geometry;

// Styling
pub mod style;

// Rendering
pub mod render;

// Widget system
pub mod widget;

// State
pub mod state;

// Cards
pub mod cards;

// Testing helpers
pub mod testing;
