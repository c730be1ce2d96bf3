//! Margin geometry
//!
//! Converts an outer substrate size plus four margins into the usable
//! imposition area. Kept separate from the planners so both substrate
//! variants share one definition of "usable".

use crate::types::{Axis, Dimension, LayoutError, Margins, Result};

/// Compute the usable area left after subtracting margins from an outer size.
///
/// # Arguments
/// * `outer` - The full substrate size (for rolls: width by minimum length)
/// * `margins` - Four independent margins in millimeters
///
/// # Errors
/// `InvalidMargins` when left+right reach the outer width or top+bottom
/// reach the outer height.
pub fn usable_area(outer: Dimension, margins: Margins) -> Result<Dimension> {
    let width_mm = outer.width_mm - margins.left_mm - margins.right_mm;
    let height_mm = outer.height_mm - margins.top_mm - margins.bottom_mm;

    if width_mm <= 0.0 {
        return Err(LayoutError::InvalidMargins(Axis::Width));
    }
    if height_mm <= 0.0 {
        return Err(LayoutError::InvalidMargins(Axis::Height));
    }

    Ok(Dimension {
        width_mm,
        height_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_area() {
        let outer = Dimension::new(700.0, 1000.0).unwrap();
        let usable = usable_area(outer, Margins::uniform(10.0)).unwrap();
        assert_eq!(usable.width_mm, 680.0);
        assert_eq!(usable.height_mm, 980.0);
    }

    #[test]
    fn test_usable_area_asymmetric_margins() {
        let outer = Dimension::new(300.0, 400.0).unwrap();
        let margins = Margins {
            top_mm: 20.0,
            bottom_mm: 10.0,
            left_mm: 5.0,
            right_mm: 15.0,
        };
        let usable = usable_area(outer, margins).unwrap();
        assert_eq!(usable.width_mm, 280.0);
        assert_eq!(usable.height_mm, 370.0);
    }

    #[test]
    fn test_margins_consume_width() {
        let outer = Dimension::new(100.0, 400.0).unwrap();
        let result = usable_area(outer, Margins::uniform(50.0));
        match result {
            Err(LayoutError::InvalidMargins(Axis::Width)) => {}
            other => panic!("Expected InvalidMargins(Width), got {:?}", other),
        }
    }

    #[test]
    fn test_margins_consume_height() {
        let outer = Dimension::new(400.0, 100.0).unwrap();
        let result = usable_area(outer, Margins::uniform(50.0));
        match result {
            Err(LayoutError::InvalidMargins(Axis::Height)) => {}
            other => panic!("Expected InvalidMargins(Height), got {:?}", other),
        }
    }

    #[test]
    fn test_zero_margins() {
        let outer = Dimension::new(100.0, 200.0).unwrap();
        let usable = usable_area(outer, Margins::uniform(0.0)).unwrap();
        assert_eq!(usable, outer);
    }
}
