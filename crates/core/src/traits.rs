use crate::point::polar_unwrap;

/// Read access to angularly indexed samples.
///
/// Implemented by the stored [`crate::SampleSet`]; geometry and field
/// derivation only go through this interface.
pub trait AngularSamples {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn wavelength_count(&self) -> usize;

    /// `[theta, phi]` in degrees.
    fn angles(&self, index: usize) -> [f32; 2];

    fn sample_at(&self, index: usize, wavelength: usize) -> f32;

    /// The whole intensity column of one channel.
    fn channel(&self, wavelength: usize) -> &[f32];

    /// Parameter-domain coordinate of a sample.
    fn project(&self, index: usize) -> [f32; 2] {
        let [theta, phi] = self.angles(index);
        polar_unwrap(theta, phi)
    }
}

/// An analytic or tabulated reflectance model that can be evaluated at
/// arbitrary incident/outgoing directions.
pub trait BrdfModel: Send + Sync {
    /// Number of channels written by [`BrdfModel::eval`], luminance first.
    fn wavelength_count(&self) -> usize;

    /// Evaluates the model for directions given as `[theta, phi]` in degrees.
    /// `out` has exactly `wavelength_count()` entries.
    fn eval(&self, incident: [f32; 2], outgoing: [f32; 2], out: &mut [f32]);
}
