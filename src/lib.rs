//! Opinion Diffusion Lattice
//!
//! A 2D lattice where every cell holds an opinion, visualized by a color.
//! Each tick, a cell polls its neighbors and adopts the majority opinion
//! (ties broken at random) with a configurable probability. All cells
//! decide against the same pre-tick snapshot before any cell commits.

pub mod components;
pub mod config;
pub mod model;
pub mod output;
pub mod systems;

pub use components::cell::{Cell, Opinion, Steppable};
pub use components::grid::{Dimensions, Grid};
pub use components::palette::{color_name, COLORS, MAX_OPINIONS};
pub use config::Config;
pub use model::{ColorPatches, ModelError};
pub use systems::tally::OpinionTally;
