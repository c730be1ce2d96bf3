//! Roll-material planning: bounded width, elastic length.

use super::grid::{self, LayoutCandidate};
use super::{column_filter, no_fit_error};
use crate::geometry::usable_area;
use crate::options::RollConfig;
use crate::result::ImpositionResult;
use crate::types::{ArtworkPage, Dimension};

/// Plan a gang run on roll material.
///
/// Only the width axis constrains the search; the row count is whatever it
/// takes to cover the minimum length, since roll length is elastic. Forced
/// row/column overrides follow the same face-value policy as
/// [`plan_flat_sheet`](super::plan_flat_sheet).
pub fn plan_roll(config: &RollConfig, page: &ArtworkPage) -> ImpositionResult {
    let item = page.effective_size();
    let outer = match Dimension::new(config.width_mm, config.min_length_mm) {
        Ok(outer) => outer,
        Err(error) => return ImpositionResult::failure(error),
    };
    // Width bounds the columns; height is the minimum length to cover
    let usable = match usable_area(outer, config.margins) {
        Ok(usable) => usable,
        Err(error) => return ImpositionResult::failure(error),
    };

    if let (Some(rows), Some(columns)) = (config.forced_rows, config.forced_columns) {
        return ImpositionResult::from_candidate(&roll_candidate(
            rows,
            columns,
            item,
            usable.width_mm,
            false,
        ));
    }

    let (columns, rotated) = match grid::best_columns(usable.width_mm, item, column_filter(config.mode)) {
        Some(choice) => choice,
        None => {
            let fits_unfiltered = grid::best_columns(usable.width_mm, item, None).is_some();
            return ImpositionResult::failure(no_fit_error(config.mode, fits_unfiltered));
        }
    };

    let oriented = if rotated { item.swapped() } else { item };
    let rows = (usable.height_mm / oriented.height_mm).ceil() as u32;

    ImpositionResult::from_candidate(&roll_candidate(
        rows,
        columns,
        oriented,
        usable.width_mm,
        rotated,
    ))
}

/// Utilization on a roll is measured against the material actually consumed
/// (usable width times the length the rows occupy), not against an
/// open-ended bound.
fn roll_candidate(
    rows: u32,
    columns: u32,
    oriented: Dimension,
    usable_width_mm: f32,
    rotated: bool,
) -> LayoutCandidate {
    let quantity = rows * columns;
    let consumed_mm2 = usable_width_mm * rows as f32 * oriented.height_mm;
    LayoutCandidate {
        rows,
        columns,
        quantity,
        utilization_percent: quantity as f32 * oriented.area_mm2() / consumed_mm2 * 100.0,
        rotated,
    }
}
