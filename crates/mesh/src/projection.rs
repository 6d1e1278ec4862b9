use rayon::prelude::*;
use scatterview_core::point::polar_unwrap;
use scatterview_core::AngularSamples;

/// Projects every sample into the parameter domain.
pub fn project_samples<S: AngularSamples + Sync>(samples: &S) -> Vec<[f32; 2]> {
    (0..samples.len())
        .into_par_iter()
        .map(|i| samples.project(i))
        .collect()
}

/// World-space position of a projected sample lifted by its height.
///
/// The parameter domain spans the XZ plane and heights grow along +Y.
#[inline]
pub fn display_position(point: [f32; 2], height: f32) -> [f32; 3] {
    [point[0], height, point[1]]
}

/// Where the incident direction pierces the parameter domain, on the ground
/// plane.
pub fn incident_origin(incident_angle: [f32; 2]) -> [f32; 3] {
    let p = polar_unwrap(incident_angle[0], incident_angle[1]);
    display_position(p, 0.0)
}

/// Mirror of [`incident_origin`] through the pole, where specular reflection
/// of the incident direction leaves the surface.
pub fn predicted_outgoing_origin(incident_angle: [f32; 2]) -> [f32; 3] {
    let [x, y, z] = incident_origin(incident_angle);
    [-x, y, -z]
}
