use crate::delaunay::{triangulate, Triangulation};

/// Triangulated view over the projected samples.
///
/// Faces index into the sample arrays directly. The mesh also keeps, for
/// every vertex, the list of faces touching it so per-vertex quantities can
/// be gathered without a shared accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertex_count: usize,
    faces: Vec<[u32; 3]>,
    coincident: Vec<(u32, u32)>,
    incident_offsets: Vec<u32>,
    incident_faces: Vec<u32>,
}

impl Mesh {
    /// Triangulates `points` and indexes the result.
    pub fn build(points: &[[f32; 2]]) -> Self {
        let Triangulation {
            faces, coincident, ..
        } = triangulate(points);
        log::debug!(
            "triangulated {} points into {} faces ({} coincident)",
            points.len(),
            faces.len(),
            coincident.len()
        );
        Self::from_faces(points.len(), faces, coincident)
    }

    /// Wraps an existing face list.
    ///
    /// # Panics
    ///
    /// Panics if a face references a vertex `>= vertex_count`.
    pub fn from_faces(
        vertex_count: usize,
        faces: Vec<[u32; 3]>,
        coincident: Vec<(u32, u32)>,
    ) -> Self {
        let mut counts = vec![0u32; vertex_count + 1];
        for f in &faces {
            for &v in f {
                assert!((v as usize) < vertex_count, "face index out of bounds");
                counts[v as usize + 1] += 1;
            }
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        let mut cursor = counts.clone();
        let mut incident = vec![0u32; faces.len() * 3];
        for (fi, f) in faces.iter().enumerate() {
            for &v in f {
                let slot = &mut cursor[v as usize];
                incident[*slot as usize] = fi as u32;
                *slot += 1;
            }
        }

        Self {
            vertex_count,
            faces,
            coincident,
            incident_offsets: counts,
            incident_faces: incident,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True when the triangulation produced no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// `(duplicate, representative)` pairs of coincident samples.
    pub fn coincident(&self) -> &[(u32, u32)] {
        &self.coincident
    }

    /// Faces touching vertex `v`, in ascending face order.
    pub fn incident_faces(&self, v: usize) -> &[u32] {
        let start = self.incident_offsets[v] as usize;
        let end = self.incident_offsets[v + 1] as usize;
        &self.incident_faces[start..end]
    }
}
