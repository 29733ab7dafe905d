//! Color Palette
//!
//! The fixed ordered palette that opinion indices map into.

use crate::components::cell::Opinion;

/// Named colors, one per opinion, in palette order.
pub const COLORS: [&str; 16] = [
    "Aqua", "Blue", "Fuchsia", "Gray", "Green", "Lime", "Maroon", "Navy",
    "Olive", "Orange", "Purple", "Red", "Silver", "Teal", "White", "Yellow",
];

/// Upper bound on the number of distinct opinions.
pub const MAX_OPINIONS: usize = COLORS.len();

/// Color name for an opinion index.
///
/// Opinions are validated against [`MAX_OPINIONS`] at model construction,
/// so the lookup cannot go out of bounds for a live model.
pub fn color_name(opinion: Opinion) -> &'static str {
    COLORS[opinion]
}
