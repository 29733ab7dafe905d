//! Cell Agents
//!
//! A cell occupies one lattice position and holds an opinion.

use rand::rngs::SmallRng;

use crate::systems::opinion::decide_opinion;

/// Discrete opinion label; an index into the color palette.
pub type Opinion = usize;

/// Two-phase update capability: stage a next state, then apply it.
///
/// Every cell decides against the pre-tick snapshot before any cell
/// commits, so a cell never observes a neighbor's already-updated opinion
/// within the same tick.
pub trait Steppable {
    /// Poll the given neighbor opinions and stage the next state.
    fn decide(
        &mut self,
        neighbor_opinions: &[Opinion],
        adopt_probability: f64,
        rng: &mut SmallRng,
    );

    /// Apply the staged state.
    fn commit(&mut self);
}

/// A cell's opinion at a fixed (row, col) position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    state: Opinion,
    next_state: Option<Opinion>,
}

impl Cell {
    /// Create a cell, in the given state, at the given row, col position.
    pub fn new(row: usize, col: usize, initial_state: Opinion) -> Self {
        Self {
            row,
            col,
            state: initial_state,
            next_state: None,
        }
    }

    /// Row location of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column location of this cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Current opinion of this cell.
    pub fn state(&self) -> Opinion {
        self.state
    }
}

impl Steppable for Cell {
    fn decide(
        &mut self,
        neighbor_opinions: &[Opinion],
        adopt_probability: f64,
        rng: &mut SmallRng,
    ) {
        self.next_state = Some(decide_opinion(
            self.state,
            neighbor_opinions,
            adopt_probability,
            rng,
        ));
    }

    fn commit(&mut self) {
        if let Some(next) = self.next_state.take() {
            self.state = next;
        }
    }
}
