pub mod plan;

mod geometry;
mod options;
mod result;
mod types;

pub use geometry::usable_area;
pub use options::*;
pub use plan::{plan, plan_flat_sheet, plan_roll};
pub use result::*;
pub use types::*;
