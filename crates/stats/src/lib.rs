#![forbid(unsafe_code)]

pub mod extent;
pub mod global;
pub mod selection;

pub use extent::Extent;
pub use global::{compute_global_statistics, PointsStatistics, WavelengthExtrema};
pub use selection::{update_selection_statistics, SelectionStatistics};
