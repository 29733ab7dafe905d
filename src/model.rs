//! The Model
//!
//! A 2D lattice where cells live and hold an opinion. One tick runs two
//! strictly ordered passes over all cells: every cell decides its next
//! opinion from the pre-tick snapshot, then every cell commits it. The
//! opinion tally is rebuilt from the committed state afterwards.

use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;

use crate::components::cell::{Opinion, Steppable};
use crate::components::grid::{Dimensions, Grid};
use crate::components::palette::MAX_OPINIONS;
use crate::config::GridConfig;
use crate::systems::tally::OpinionTally;

/// Parameter validation failure at model construction.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("number of opinions must be between 1 and {max}, got {requested}", max = MAX_OPINIONS)]
    OpinionCount { requested: usize },
    #[error("adopt probability must be within [0, 1], got {0}")]
    Probability(f64),
    #[error("polling radius must be at least 1")]
    ZeroRadius,
    #[error("initial state has {got} opinions for {expected} cells")]
    InitialStateSize { expected: usize, got: usize },
    #[error("initial opinion {opinion} is outside the domain of {num_opinions} opinions")]
    InitialOpinionOutOfRange { opinion: Opinion, num_opinions: usize },
}

fn validate(params: &GridConfig) -> Result<(), ModelError> {
    if params.width == 0 || params.height == 0 {
        return Err(ModelError::EmptyGrid {
            width: params.width,
            height: params.height,
        });
    }
    if params.num_opinions == 0 || params.num_opinions > MAX_OPINIONS {
        return Err(ModelError::OpinionCount {
            requested: params.num_opinions,
        });
    }
    if !(0.0..=1.0).contains(&params.adopt_probability) {
        return Err(ModelError::Probability(params.adopt_probability));
    }
    if params.radius == 0 {
        return Err(ModelError::ZeroRadius);
    }
    Ok(())
}

/// A 2D lattice of opinionated cells under simultaneous activation.
///
/// The model owns the grid, the shared RNG, and the current tally. All
/// stochastic calls draw from the one seeded RNG handed in at construction,
/// so a run is fully reproducible from (config, seed).
#[derive(Debug)]
pub struct ColorPatches {
    grid: Grid,
    rng: SmallRng,
    num_opinions: usize,
    adopt_probability: f64,
    radius: usize,
    tick: u64,
    state_count: OpinionTally,
}

impl ColorPatches {
    /// Build a lattice with uniformly random initial opinions.
    ///
    /// Rejects malformed parameters here rather than failing mid-run.
    pub fn new(params: &GridConfig, mut rng: SmallRng) -> Result<Self, ModelError> {
        validate(params)?;
        let dims = Dimensions {
            width: params.width,
            height: params.height,
        };
        let num_opinions = params.num_opinions;
        let grid = Grid::generate(dims, |_, _| rng.gen_range(0..num_opinions));
        Ok(Self::from_parts(params, rng, grid))
    }

    /// Build a lattice from an explicit initial state, row-major.
    ///
    /// Used for scripted scenarios; the running model is mutated only by
    /// [`step`](Self::step).
    pub fn with_opinions(
        params: &GridConfig,
        rng: SmallRng,
        opinions: &[Opinion],
    ) -> Result<Self, ModelError> {
        validate(params)?;
        let dims = Dimensions {
            width: params.width,
            height: params.height,
        };
        if opinions.len() != dims.cell_count() {
            return Err(ModelError::InitialStateSize {
                expected: dims.cell_count(),
                got: opinions.len(),
            });
        }
        if let Some(&opinion) = opinions.iter().find(|&&op| op >= params.num_opinions) {
            return Err(ModelError::InitialOpinionOutOfRange {
                opinion,
                num_opinions: params.num_opinions,
            });
        }
        let grid = Grid::generate(dims, |row, col| opinions[row * params.width + col]);
        Ok(Self::from_parts(params, rng, grid))
    }

    fn from_parts(params: &GridConfig, rng: SmallRng, grid: Grid) -> Self {
        let state_count = OpinionTally::from_grid(&grid);
        Self {
            grid,
            rng,
            num_opinions: params.num_opinions,
            adopt_probability: params.adopt_probability,
            radius: params.radius,
            tick: 0,
            state_count,
        }
    }

    /// Advance the model one tick.
    ///
    /// Decide pass: every cell polls its neighbors' pre-tick opinions and
    /// stages a next state. Commit pass: every cell applies the staged
    /// state. Neither pass starts until the previous one has covered every
    /// cell, so no cell observes an already-updated neighbor.
    pub fn step(&mut self) {
        for index in 0..self.grid.len() {
            let (row, col) = {
                let cell = self.grid.cell_at(index);
                (cell.row(), cell.col())
            };
            let neighbors = self.grid.neighbor_opinions(row, col, self.radius);
            self.grid
                .cell_at_mut(index)
                .decide(&neighbors, self.adopt_probability, &mut self.rng);
        }

        for cell in self.grid.cells_mut() {
            cell.commit();
        }

        self.tick += 1;
        self.state_count = OpinionTally::from_grid(&self.grid);
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Immutable view of the lattice.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Dimensions of the lattice.
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    /// Count of cells per opinion as of the last completed tick.
    pub fn state_count(&self) -> &OpinionTally {
        &self.state_count
    }

    /// Number of distinct opinions this lattice was built with.
    pub fn num_opinions(&self) -> usize {
        self.num_opinions
    }
}
