//! Core business logic modules
//!
//! Pure transformations over roster, winner and group snapshots. Nothing in
//! here touches storage or the network; randomness is injectable through the
//! `*_with` variants.

pub mod draw;
pub mod export;
pub mod grouping;
pub mod roster;
pub mod shuffle;

pub use draw::{DrawRequest, eligible_pool, resolve_draw};
pub use export::{ExportRows, GroupExportRow, WinnerExportRow};
pub use grouping::partition;
pub use roster::{DuplicateReport, dedupe, parse_names};
pub use shuffle::shuffled;
