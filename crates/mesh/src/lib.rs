#![forbid(unsafe_code)]

pub mod delaunay;
pub mod mesh;
pub mod projection;

pub use delaunay::triangulate;
pub use mesh::Mesh;
pub use projection::{
    display_position, incident_origin, predicted_outgoing_origin, project_samples,
};
