use rayon::prelude::*;
use scatterview_core::AngularSamples;
use scatterview_mesh::Mesh;

use crate::heights::{compute_heights, HeightField, LogParams};
use crate::normals::vertex_normals;
use crate::FieldError;

/// Linear and logarithmic normals of one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthNormals {
    pub normals: Vec<[f32; 3]>,
    pub log_normals: Vec<[f32; 3]>,
}

impl WavelengthNormals {
    pub fn display(&self, log: bool) -> &[[f32; 3]] {
        if log {
            &self.log_normals
        } else {
            &self.normals
        }
    }
}

/// Every field derived from one structural state of a sample.
///
/// Heights exist for all channels as soon as the fields are derived. Normals
/// are filled per channel on request and dropped wholesale when the mesh
/// changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedFields {
    heights: Vec<HeightField>,
    normals: Vec<Option<WavelengthNormals>>,
}

impl DerivedFields {
    pub fn derive<S: AngularSamples + Sync>(samples: &S, params: &LogParams) -> Self {
        let heights = compute_heights(samples, params);
        let normals = vec![None; heights.len()];
        Self { heights, normals }
    }

    pub fn channel_count(&self) -> usize {
        self.heights.len()
    }

    pub fn height_field(&self, wavelength: usize) -> Result<&HeightField, FieldError> {
        self.heights
            .get(wavelength)
            .ok_or(FieldError::WavelengthOutOfRange {
                index: wavelength,
                count: self.heights.len(),
            })
    }

    pub fn height_fields(&self) -> &[HeightField] {
        &self.heights
    }

    /// Display heights of every channel, linear or logarithmic.
    pub fn display_heights(&self, log: bool) -> Vec<&[f32]> {
        self.heights.iter().map(|h| h.display(log)).collect()
    }

    /// Normals of `wavelength`, if already derived.
    pub fn normals(&self, wavelength: usize) -> Option<&WavelengthNormals> {
        self.normals.get(wavelength).and_then(Option::as_ref)
    }

    /// Derives the normals of `wavelength` unless they are cached.
    pub fn ensure_normals(
        &mut self,
        wavelength: usize,
        mesh: &Mesh,
        points: &[[f32; 2]],
    ) -> Result<&WavelengthNormals, FieldError> {
        let field = self.height_field(wavelength)?;
        if self.normals[wavelength].is_none() {
            let derived = derive_normals(field, mesh, points)?;
            self.normals[wavelength] = Some(derived);
        }
        self.normals[wavelength]
            .as_ref()
            .ok_or(FieldError::MissingMesh {
                vertices: mesh.vertex_count(),
            })
    }

    /// Derives the normals of every channel not cached yet, one channel per
    /// rayon task.
    pub fn derive_all_normals(
        &mut self,
        mesh: &Mesh,
        points: &[[f32; 2]],
    ) -> Result<(), FieldError> {
        let heights = &self.heights;
        let derived: Vec<Option<WavelengthNormals>> = self
            .normals
            .par_iter()
            .enumerate()
            .map(|(w, cached)| match cached {
                Some(_) => Ok(None),
                None => derive_normals(&heights[w], mesh, points).map(Some),
            })
            .collect::<Result<_, _>>()?;

        for (slot, fresh) in self.normals.iter_mut().zip(derived) {
            if fresh.is_some() {
                *slot = fresh;
            }
        }
        Ok(())
    }
}

fn derive_normals(
    field: &HeightField,
    mesh: &Mesh,
    points: &[[f32; 2]],
) -> Result<WavelengthNormals, FieldError> {
    Ok(WavelengthNormals {
        normals: vertex_normals(mesh, points, &field.heights)?,
        log_normals: vertex_normals(mesh, points, &field.log_heights)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scatterview_core::SampleSet;
    use scatterview_mesh::project_samples;

    fn hemisphere() -> SampleSet {
        let mut theta = Vec::new();
        let mut phi = Vec::new();
        let mut lum = Vec::new();
        let mut red = Vec::new();
        for t in 1..6 {
            for p in 0..12 {
                theta.push(t as f32 * 15.0);
                phi.push(p as f32 * 30.0);
                lum.push(1.0 / t as f32);
                red.push(t as f32);
            }
        }
        SampleSet::from_columns(theta, phi, vec![lum, red]).unwrap()
    }

    #[test]
    fn heights_are_eager_normals_lazy() {
        let set = hemisphere();
        let fields = DerivedFields::derive(&set, &LogParams::default());
        assert_eq!(fields.channel_count(), 2);
        assert_eq!(fields.height_field(1).unwrap().len(), set.len());
        assert!(fields.normals(0).is_none());
    }

    #[test]
    fn ensure_normals_caches_one_channel() {
        let set = hemisphere();
        let points = project_samples(&set);
        let mesh = Mesh::build(&points);
        let mut fields = DerivedFields::derive(&set, &LogParams::default());
        let normals = fields.ensure_normals(1, &mesh, &points).unwrap();
        assert_eq!(normals.normals.len(), set.len());
        assert_eq!(normals.log_normals.len(), set.len());
        assert!(fields.normals(1).is_some());
        assert!(fields.normals(0).is_none());
    }

    #[test]
    fn derive_all_matches_individual_derivation() {
        let set = hemisphere();
        let points = project_samples(&set);
        let mesh = Mesh::build(&points);
        let mut all = DerivedFields::derive(&set, &LogParams::default());
        all.derive_all_normals(&mesh, &points).unwrap();

        let mut single = DerivedFields::derive(&set, &LogParams::default());
        for w in 0..2 {
            let expected = single.ensure_normals(w, &mesh, &points).unwrap().clone();
            assert_eq!(all.normals(w), Some(&expected));
        }
    }

    #[test]
    fn out_of_range_wavelength() {
        let set = hemisphere();
        let points = project_samples(&set);
        let mesh = Mesh::build(&points);
        let mut fields = DerivedFields::derive(&set, &LogParams::default());
        let err = fields.ensure_normals(5, &mesh, &points).unwrap_err();
        assert_eq!(err, FieldError::WavelengthOutOfRange { index: 5, count: 2 });
    }

    #[test]
    fn normals_need_a_mesh() {
        let set = SampleSet::from_columns(vec![10.0], vec![0.0], vec![vec![1.0]]).unwrap();
        let points = project_samples(&set);
        let mesh = Mesh::build(&points);
        let mut fields = DerivedFields::derive(&set, &LogParams::default());
        assert!(matches!(
            fields.ensure_normals(0, &mesh, &points),
            Err(FieldError::MissingMesh { .. })
        ));
    }
}
