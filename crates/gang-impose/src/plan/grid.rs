//! Grid candidate search
//!
//! Enumerates (rows, columns, orientation) candidates for one usable area
//! and scores them by quantity and utilization.

use crate::types::Dimension;

/// Predicate restricting acceptable column counts (duplicate mode uses
/// [`is_even`])
pub(crate) type ColumnFilter = fn(u32) -> bool;

pub(crate) fn is_even(columns: u32) -> bool {
    columns % 2 == 0
}

/// One trial layout considered during search.
///
/// `rotated` is the internal orientation flag; the external 0/270 degree
/// convention is applied at result assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayoutCandidate {
    pub rows: u32,
    pub columns: u32,
    pub quantity: u32,
    pub utilization_percent: f32,
    pub rotated: bool,
}

/// Columns of `item_width_mm` that fit across `usable_width_mm`, decremented
/// until the filter accepts the count. Returns 0 when nothing acceptable fits.
pub(crate) fn fit_columns(
    usable_width_mm: f32,
    item_width_mm: f32,
    filter: Option<ColumnFilter>,
) -> u32 {
    let mut columns = (usable_width_mm / item_width_mm).floor() as u32;
    if let Some(accept) = filter {
        while columns > 0 && !accept(columns) {
            columns -= 1;
        }
    }
    columns
}

fn candidate(
    usable: Dimension,
    item: Dimension,
    filter: Option<ColumnFilter>,
    rotated: bool,
) -> Option<LayoutCandidate> {
    let columns = fit_columns(usable.width_mm, item.width_mm, filter);
    let rows = (usable.height_mm / item.height_mm).floor() as u32;
    if columns == 0 || rows == 0 {
        return None;
    }

    let quantity = rows * columns;
    let utilization_percent = quantity as f32 * item.area_mm2() / usable.area_mm2() * 100.0;

    Some(LayoutCandidate {
        rows,
        columns,
        quantity,
        utilization_percent,
        rotated,
    })
}

/// Find the best grid for one usable area, trying the item in its natural
/// orientation and turned a quarter.
///
/// Ranking: quantity first, utilization second, and on a full tie the
/// unrotated candidate wins. Returns `None` when neither orientation fits.
pub(crate) fn best_grid(
    usable: Dimension,
    item: Dimension,
    filter: Option<ColumnFilter>,
) -> Option<LayoutCandidate> {
    let natural = candidate(usable, item, filter, false);
    let turned = candidate(usable, item.swapped(), filter, true);

    match (natural, turned) {
        (Some(natural), Some(turned)) => Some(pick(natural, turned)),
        (candidate, None) | (None, candidate) => candidate,
    }
}

fn pick(natural: LayoutCandidate, turned: LayoutCandidate) -> LayoutCandidate {
    if turned.quantity > natural.quantity {
        return turned;
    }
    if turned.quantity == natural.quantity
        && turned.utilization_percent > natural.utilization_percent
    {
        return turned;
    }
    natural
}

/// One-dimensional search for roll material: only the width axis is bounded,
/// so the orientation choice maximizes the column count alone. Ties prefer
/// the natural orientation. Returns `(columns, rotated)`.
pub(crate) fn best_columns(
    usable_width_mm: f32,
    item: Dimension,
    filter: Option<ColumnFilter>,
) -> Option<(u32, bool)> {
    let natural = fit_columns(usable_width_mm, item.width_mm, filter);
    let turned = fit_columns(usable_width_mm, item.height_mm, filter);

    if natural == 0 && turned == 0 {
        return None;
    }
    if turned > natural {
        Some((turned, true))
    } else {
        Some((natural, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(width_mm: f32, height_mm: f32) -> Dimension {
        Dimension::new(width_mm, height_mm).unwrap()
    }

    #[test]
    fn test_fit_columns_floor() {
        assert_eq!(fit_columns(680.0, 100.0, None), 6);
        assert_eq!(fit_columns(300.0, 60.0, None), 5);
        assert_eq!(fit_columns(99.0, 100.0, None), 0);
    }

    #[test]
    fn test_fit_columns_even_filter_decrements() {
        // 5 fit, decremented to 4 to satisfy the even constraint
        assert_eq!(fit_columns(300.0, 60.0, Some(is_even)), 4);
        // 1 fits, decremented to 0: no acceptable count
        assert_eq!(fit_columns(150.0, 100.0, Some(is_even)), 0);
    }

    #[test]
    fn test_best_grid_prefers_quantity() {
        // Natural: 2x6 = 12; turned (50 wide): 4x3 = 12... pick a case
        // where the counts differ: usable 200x300, item 90x50.
        // Natural: 2 cols x 6 rows = 12. Turned 50x90: 4 cols x 3 rows = 12.
        // Equal quantity and equal utilization, so natural wins the tie.
        let best = best_grid(dim(200.0, 300.0), dim(90.0, 50.0), None).unwrap();
        assert_eq!(best.quantity, 12);
        assert!(!best.rotated);

        // usable 300x100, item 90x140: natural does not fit (rows 0),
        // turned 140x90 gives 2 cols x 1 row.
        let best = best_grid(dim(300.0, 100.0), dim(90.0, 140.0), None).unwrap();
        assert_eq!(best.columns, 2);
        assert_eq!(best.rows, 1);
        assert!(best.rotated);
    }

    #[test]
    fn test_best_grid_rotation_tie_break() {
        // Square usable area and both orientations yield the same count
        let best = best_grid(dim(400.0, 400.0), dim(100.0, 200.0), None).unwrap();
        let natural_only = best_grid(dim(400.0, 400.0), dim(200.0, 100.0), None).unwrap();
        assert_eq!(best.quantity, natural_only.quantity);
        assert!(!best.rotated);
    }

    #[test]
    fn test_best_grid_none_when_nothing_fits() {
        assert!(best_grid(dim(50.0, 50.0), dim(100.0, 60.0), None).is_none());
    }

    #[test]
    fn test_best_grid_utilization_bounds() {
        let best = best_grid(dim(680.0, 980.0), dim(100.0, 150.0), None).unwrap();
        assert!(best.utilization_percent > 0.0);
        assert!(best.utilization_percent <= 100.0);
    }

    #[test]
    fn test_best_columns_picks_wider_fit() {
        // Natural 95mm wide: 3 columns; turned 60mm wide: 5 columns
        let (columns, rotated) = best_columns(300.0, dim(95.0, 60.0), None).unwrap();
        assert_eq!(columns, 5);
        assert!(rotated);
    }

    #[test]
    fn test_best_columns_tie_prefers_natural() {
        let (columns, rotated) = best_columns(300.0, dim(100.0, 100.0), None).unwrap();
        assert_eq!(columns, 3);
        assert!(!rotated);
    }

    #[test]
    fn test_best_columns_none_when_too_wide() {
        assert!(best_columns(50.0, dim(60.0, 70.0), None).is_none());
    }
}
