//! Output Generation
//!
//! Snapshot schemas and writers, plus the canvas portrayal layer.

pub mod portrayal;
pub mod schemas;
pub mod snapshot;

pub use portrayal::*;
pub use schemas::*;
pub use snapshot::*;
