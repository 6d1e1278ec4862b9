#![forbid(unsafe_code)]

pub mod config;
pub mod data_sample;
pub mod error;
pub mod kind;
pub mod render;

pub use config::SampleConfig;
pub use data_sample::DataSample;
pub use error::SampleError;
pub use kind::SampleKind;
pub use render::RenderBuffers;
