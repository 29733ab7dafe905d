//! Canvas Portrayal
//!
//! How a cell is drawn and how the tally is reported. This is the whole
//! boundary toward a visualization harness: plain data, no drawing here.

use serde::Serialize;

use crate::components::cell::Cell;
use crate::components::palette::color_name;
use crate::model::ColorPatches;

/// Drawing instructions for one cell: a filled unit square at the cell's
/// lattice position, colored by its opinion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellPortrayal {
    pub x: usize,
    pub y: usize,
    pub color: &'static str,
}

/// Portrayal for a single cell; x is the row, y is the column.
pub fn portray_cell(cell: &Cell) -> CellPortrayal {
    CellPortrayal {
        x: cell.row(),
        y: cell.col(),
        color: color_name(cell.state()),
    }
}

/// Portrayals for every cell on the lattice, row-major.
pub fn portray_grid(model: &ColorPatches) -> Vec<CellPortrayal> {
    model.grid().cells().map(portray_cell).collect()
}

/// Human-readable color occupancy summary, in palette order.
///
/// Example: `{Aqua: 12, Blue: 30}`
pub fn state_count_summary(model: &ColorPatches) -> String {
    let entries: Vec<String> = model
        .state_count()
        .counts()
        .map(|(opinion, count)| format!("{}: {}", color_name(opinion), count))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn model_2x2() -> ColorPatches {
        let config = GridConfig {
            width: 2,
            height: 2,
            num_opinions: 16,
            adopt_probability: 0.0,
            radius: 1,
        };
        ColorPatches::with_opinions(&config, SmallRng::seed_from_u64(0), &[0, 1, 11, 11]).unwrap()
    }

    #[test]
    fn test_portrayal_coordinates_and_color() {
        let model = model_2x2();
        let portrayals = portray_grid(&model);
        assert_eq!(portrayals.len(), 4);
        assert_eq!(
            portrayals[1],
            CellPortrayal {
                x: 0,
                y: 1,
                color: "Blue"
            }
        );
        assert_eq!(portrayals[2].color, "Red");
    }

    #[test]
    fn test_summary_is_sorted_by_palette_order() {
        let model = model_2x2();
        assert_eq!(state_count_summary(&model), "{Aqua: 1, Blue: 1, Red: 2}");
    }
}
