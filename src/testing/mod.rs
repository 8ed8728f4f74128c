//! Headless testing helpers: render blocks to plain text.

pub mod snapshot;

pub use snapshot::{render_to_string, render_with_env, strips_to_string};
