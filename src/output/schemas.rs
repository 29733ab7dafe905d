//! Snapshot Schemas
//!
//! Serde structures for the JSON lattice snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// When and why a snapshot was taken
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotTimestamp {
    pub tick: u64,
    pub triggered_by: String,
}

/// One cell as rendered into a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    pub opinion: usize,
    pub color: String,
}

/// Full state of the lattice at one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub snapshot_id: String,
    pub timestamp: SnapshotTimestamp,
    pub width: usize,
    pub height: usize,
    /// Cells in row-major order
    pub cells: Vec<CellSnapshot>,
    /// Count of cells per color name, in palette order
    pub state_count: BTreeMap<String, usize>,
}

impl GridSnapshot {
    pub fn new(snapshot_id: &str, tick: u64, triggered_by: &str, width: usize, height: usize) -> Self {
        Self {
            snapshot_id: snapshot_id.to_string(),
            timestamp: SnapshotTimestamp {
                tick,
                triggered_by: triggered_by.to_string(),
            },
            width,
            height,
            cells: Vec::new(),
            state_count: BTreeMap::new(),
        }
    }
}
