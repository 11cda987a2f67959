//! Winning lines and the incremental counters kept on them

pub mod catalog;
pub mod counters;

pub use catalog::{check_geometry, line_count, Catalog, Line, LineId, Orientation};
pub use counters::{LineCounters, LineState};
