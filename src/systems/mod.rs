//! Update Systems
//!
//! The majority-vote polling rule and the per-tick opinion tally.

pub mod opinion;
pub mod tally;

pub use opinion::{decide_opinion, tie_set};
pub use tally::OpinionTally;
