//! Layout planners for ganged imposition
//!
//! This module holds all the placement arithmetic:
//! - Grid search (candidate row/column/orientation enumeration)
//! - Flat-sheet planning (bounded width and height)
//! - Roll planning (bounded width, elastic length)

mod flat;
mod grid;
mod roll;

pub use flat::plan_flat_sheet;
pub use roll::plan_roll;

pub(crate) use grid::LayoutCandidate;

use crate::options::{ProductionMode, SubstrateConfig};
use crate::result::ImpositionResult;
use crate::types::{ArtworkPage, LayoutError};

/// Plan an imposition for the given substrate and artwork.
///
/// This is the engine's single entry point: a pure function of its inputs
/// with no shared state, safe to call concurrently. Errors are reported
/// through the result record, never as a panic.
pub fn plan(config: &SubstrateConfig, page: &ArtworkPage) -> ImpositionResult {
    match config {
        SubstrateConfig::FlatSheet(config) => plan_flat_sheet(config, page),
        SubstrateConfig::Roll(config) => plan_roll(config, page),
    }
}

fn column_filter(mode: ProductionMode) -> Option<grid::ColumnFilter> {
    match mode {
        ProductionMode::Standard => None,
        ProductionMode::Duplicate => Some(grid::is_even),
    }
}

/// Map a failed search to the right error: duplicate mode gets its own
/// variant when the artwork would fit without the even-count constraint,
/// so the UI can suggest disabling duplicate production.
fn no_fit_error(mode: ProductionMode, fits_unfiltered: bool) -> LayoutError {
    match mode {
        ProductionMode::Duplicate if fits_unfiltered => LayoutError::EvenColumnUnsatisfiable,
        _ => LayoutError::ArtworkTooLarge,
    }
}
