#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod heights;
pub mod normals;
pub mod path;

pub use cache::{DerivedFields, WavelengthNormals};
pub use error::FieldError;
pub use heights::{compute_heights, HeightField, IntensityRange, LogParams};
pub use normals::vertex_normals;
pub use path::{PathParams, PathSegments};
