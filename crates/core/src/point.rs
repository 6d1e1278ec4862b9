/// One measured sample seen through a single intensity channel.
///
/// `theta` is the polar angle of the outgoing direction and `phi` its
/// azimuth, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub theta: f32,
    pub phi: f32,
    pub intensity: f32,
}

impl RawPoint {
    pub fn new(theta: f32, phi: f32, intensity: f32) -> Self {
        Self {
            theta,
            phi,
            intensity,
        }
    }
}

/// Maps an outgoing direction onto the unit disk.
///
/// The polar angle becomes the radius (90 degrees on the rim) and the azimuth
/// the angle around the disk.
#[inline]
pub fn polar_unwrap(theta: f32, phi: f32) -> [f32; 2] {
    let r = theta / 90.0;
    let phi = phi.to_radians();
    [r * phi.cos(), r * phi.sin()]
}
