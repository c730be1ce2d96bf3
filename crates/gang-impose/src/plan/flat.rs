//! Flat-sheet planning: bounded width and height.

use super::grid::{self, LayoutCandidate};
use super::{column_filter, no_fit_error};
use crate::geometry::usable_area;
use crate::options::FlatSheetConfig;
use crate::result::ImpositionResult;
use crate::types::{ArtworkPage, Dimension};

/// Plan a gang run on a fixed flat sheet.
///
/// When both forced row and column counts are set the search is skipped and
/// the override is taken at face value: the engine does not re-check that
/// the forced grid physically fits, so the reported utilization of an
/// oversized override can exceed 100%. A single forced value falls back to
/// the normal search.
pub fn plan_flat_sheet(config: &FlatSheetConfig, page: &ArtworkPage) -> ImpositionResult {
    let item = page.effective_size();
    let usable = match usable_area(config.sheet, config.margins) {
        Ok(usable) => usable,
        Err(error) => return ImpositionResult::failure(error),
    };

    if let (Some(rows), Some(columns)) = (config.forced_rows, config.forced_columns) {
        return ImpositionResult::from_candidate(&forced_candidate(rows, columns, item, usable));
    }

    match grid::best_grid(usable, item, column_filter(config.mode)) {
        Some(candidate) => ImpositionResult::from_candidate(&candidate),
        None => {
            let fits_unfiltered = grid::best_grid(usable, item, None).is_some();
            ImpositionResult::failure(no_fit_error(config.mode, fits_unfiltered))
        }
    }
}

fn forced_candidate(rows: u32, columns: u32, item: Dimension, usable: Dimension) -> LayoutCandidate {
    let quantity = rows * columns;
    LayoutCandidate {
        rows,
        columns,
        quantity,
        utilization_percent: quantity as f32 * item.area_mm2() / usable.area_mm2() * 100.0,
        rotated: false,
    }
}
