#![forbid(unsafe_code)]

pub mod error;
pub mod metadata;
pub mod point;
pub mod sampling;
pub mod samples;
pub mod traits;

pub use error::CoreError;
pub use metadata::Metadata;
pub use point::RawPoint;
pub use sampling::{sample_brdf_grid, GridParams};
pub use samples::SampleSet;
pub use traits::{AngularSamples, BrdfModel};
