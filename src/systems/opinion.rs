//! Majority-Vote Polling
//!
//! The per-cell update rule: poll the neighbors' opinions, find the ones
//! tied for the maximum count, and adopt one of them at random with the
//! configured probability.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::cell::Opinion;
use crate::systems::tally::OpinionTally;

/// Opinions sharing the maximum count among the polled neighbors.
///
/// Returned in ascending opinion order so the subsequent uniform draw is
/// reproducible across platforms. Empty iff `neighbor_opinions` is empty.
pub fn tie_set(neighbor_opinions: &[Opinion]) -> Vec<Opinion> {
    let mut polled = OpinionTally::new();
    for &opinion in neighbor_opinions {
        polled.increment(opinion);
    }

    let max_count = match polled.counts().map(|(_, count)| count).max() {
        Some(count) => count,
        None => return Vec::new(),
    };
    polled
        .counts()
        .filter(|&(_, count)| count == max_count)
        .map(|(opinion, _)| opinion)
        .collect()
}

/// Next opinion for a cell holding `current`.
///
/// With probability `adopt_probability` the result is a uniform choice from
/// the tie set; otherwise the current opinion is kept. A cell with no
/// neighbors keeps its opinion and consumes no randomness.
pub fn decide_opinion(
    current: Opinion,
    neighbor_opinions: &[Opinion],
    adopt_probability: f64,
    rng: &mut SmallRng,
) -> Opinion {
    let tied = tie_set(neighbor_opinions);
    if tied.is_empty() {
        return current;
    }

    if rng.gen::<f64>() < adopt_probability {
        tied.choose(rng).copied().unwrap_or(current)
    } else {
        current
    }
}
