//! Lattice Components
//!
//! Cells, the grid they occupy, and the color palette they render with.

pub mod cell;
pub mod grid;
pub mod palette;

pub use cell::{Cell, Opinion, Steppable};
pub use grid::{Dimensions, Grid};
pub use palette::{color_name, COLORS, MAX_OPINIONS};
