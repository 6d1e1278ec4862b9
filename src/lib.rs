//! Reconstruction and interactive editing of measured BSDF samples.
//!
//! The member crates are re-exported as modules; the types most callers need
//! are re-exported at the top level.

#![forbid(unsafe_code)]

pub use scatterview_core as samples;
pub use scatterview_fields as fields;
pub use scatterview_mesh as mesh;
pub use scatterview_sample as sample;
pub use scatterview_selection as selection;
pub use scatterview_stats as stats;

pub use scatterview_core::{BrdfModel, GridParams, Metadata, SampleSet};
pub use scatterview_sample::{DataSample, RenderBuffers, SampleConfig, SampleError, SampleKind};
pub use scatterview_selection::{SelectionBox, SelectionMode};
