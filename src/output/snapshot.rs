//! Snapshot Generation
//!
//! Generates lattice snapshots at regular tick intervals and writes them
//! as JSON. Snapshots are observational; a write failure never touches
//! simulation state (the runner logs it and moves on).

use std::fs;
use std::path::Path;

use crate::components::palette::color_name;
use crate::model::ColorPatches;

use super::schemas::{CellSnapshot, GridSnapshot};

/// Tracks snapshot ids and cadence across a run
pub struct SnapshotGenerator {
    next_snapshot_id: u64,
    snapshot_interval: u64,
    last_snapshot_tick: u64,
}

impl SnapshotGenerator {
    pub fn new(snapshot_interval: u64) -> Self {
        Self {
            next_snapshot_id: 1,
            snapshot_interval: snapshot_interval.max(1),
            last_snapshot_tick: 0,
        }
    }

    pub fn should_snapshot(&self, current_tick: u64) -> bool {
        current_tick == 0 || current_tick % self.snapshot_interval == 0
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("snap_{:06}", self.next_snapshot_id);
        self.next_snapshot_id += 1;
        id
    }

    pub fn mark_snapshot(&mut self, tick: u64) {
        self.last_snapshot_tick = tick;
    }

    pub fn snapshot_count(&self) -> u64 {
        self.next_snapshot_id - 1
    }
}

/// Generate a complete lattice snapshot
pub fn generate_snapshot(
    model: &ColorPatches,
    generator: &mut SnapshotGenerator,
    triggered_by: &str,
) -> GridSnapshot {
    let dims = model.dimensions();
    let snapshot_id = generator.next_id();
    let mut snapshot = GridSnapshot::new(
        &snapshot_id,
        model.tick(),
        triggered_by,
        dims.width,
        dims.height,
    );

    for cell in model.grid().cells() {
        snapshot.cells.push(CellSnapshot {
            row: cell.row(),
            col: cell.col(),
            opinion: cell.state(),
            color: color_name(cell.state()).to_string(),
        });
    }

    for (opinion, count) in model.state_count().counts() {
        snapshot
            .state_count
            .insert(color_name(opinion).to_string(), count);
    }

    snapshot
}

/// Write a snapshot to the given path
pub fn write_snapshot(snapshot: &GridSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path.as_ref(), json)?;
    tracing::debug!("wrote snapshot {} to {}", snapshot.snapshot_id, path.as_ref().display());
    Ok(())
}

/// Write a snapshot to the snapshots directory
pub fn write_snapshot_to_dir(snapshot: &GridSnapshot) -> std::io::Result<()> {
    let path = format!("output/snapshots/snap_{:06}.json", snapshot.timestamp.tick);
    write_snapshot(snapshot, path)
}

/// Write the current state file (overwritten each time)
pub fn write_current_state(snapshot: &GridSnapshot) -> std::io::Result<()> {
    write_snapshot(snapshot, "output/current_state.json")
}
