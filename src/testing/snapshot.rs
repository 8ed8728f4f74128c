//! Snapshot rendering helpers.
//!
//! Functions for converting rendered block output into plain-text strings
//! suitable for snapshot testing and assertions.

use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::Environment;
use crate::widget::traits::CardBlock;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a block to a plain text string under the default environment.
///
/// The block is rendered into a region of `width` x `height` cells starting
/// at the origin. Each row becomes one line in the output string, with
/// trailing spaces trimmed. Lines are separated by `'\n'`; the final line has
/// no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use vitals_tui::testing::render_to_string;
/// use vitals_tui::cards::CardHeader;
///
/// let output = render_to_string(&CardHeader::new("Doxylamine"), 20, 1);
/// assert!(output.contains("Doxylamine"));
/// ```
pub fn render_to_string(block: &dyn CardBlock, width: i32, height: i32) -> String {
    render_with_env(block, width, height, &Environment::default())
}

/// Render a block to a plain text string under a specific environment.
///
/// Same as [`render_to_string`] but the caller controls the style config and
/// size category.
pub fn render_with_env(
    block: &dyn CardBlock,
    width: i32,
    height: i32,
    env: &Environment,
) -> String {
    let region = Region::new(0, 0, width, height);
    let strips = block.render(region, env);
    strips_to_string(&strips, width, height)
}

/// Convert raw strips to a plain text string.
///
/// Builds a `width` x `height` grid of spaces, then overlays each strip's
/// cells at the appropriate (x, y) positions — later strips overwrite
/// earlier ones, matching paint order. Each row is right-trimmed of spaces,
/// and rows are joined with `'\n'`.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let w = width as usize;
    let h = height as usize;
    let mut grid = vec![vec![' '; w]; h];

    for strip in strips {
        if strip.y < 0 || strip.y as usize >= h {
            continue;
        }
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if x < 0 || x as usize >= w {
                continue;
            }
            grid[strip.y as usize][x as usize] = cell.ch;
        }
    }

    grid.into_iter()
        .map(|row| {
            let line: String = row.into_iter().collect();
            line.trim_end().to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
