/// Axis-aligned bounds of display positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Extent {
    pub fn empty() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
        }
    }

    /// True until a finite point has been added.
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0]
    }

    /// Grows the bounds; non-finite points are ignored.
    pub fn include(&mut self, point: [f32; 3]) {
        if !point.iter().all(|v| v.is_finite()) {
            return;
        }
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<[f32; 3]> for Extent {
    fn from_iter<I: IntoIterator<Item = [f32; 3]>>(iter: I) -> Self {
        let mut extent = Self::empty();
        iter.into_iter().for_each(|p| extent.include(p));
        extent
    }
}
