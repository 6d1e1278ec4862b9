use crate::{AngularSamples, CoreError};

/// Measured samples stored as parallel columns.
///
/// Every column has one entry per sample. `intensities[0]` is the luminance
/// channel, the remaining channels follow the wavelengths listed in the
/// sample's metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub theta: Vec<f32>,
    pub phi: Vec<f32>,
    pub intensities: Vec<Vec<f32>>,
}

impl SampleSet {
    /// An empty set with `channels` intensity columns.
    pub fn with_channels(channels: usize) -> Self {
        Self {
            theta: Vec::new(),
            phi: Vec::new(),
            intensities: vec![Vec::new(); channels],
        }
    }

    pub fn from_columns(
        theta: Vec<f32>,
        phi: Vec<f32>,
        intensities: Vec<Vec<f32>>,
    ) -> Result<Self, CoreError> {
        let set = Self {
            theta,
            phi,
            intensities,
        };
        set.validate()?;
        Ok(set)
    }

    /// Checks that there is a channel and that every column has one entry
    /// per sample.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.intensities.is_empty() {
            return Err(CoreError::NoIntensityChannels);
        }
        let expected = self.theta.len();
        if self.phi.len() != expected {
            return Err(CoreError::ColumnLengthMismatch {
                column: "phi".to_string(),
                len: self.phi.len(),
                expected,
            });
        }
        for (channel, column) in self.intensities.iter().enumerate() {
            if column.len() != expected {
                return Err(CoreError::ColumnLengthMismatch {
                    column: format!("intensity[{channel}]"),
                    len: column.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Builds a set from row-major records `[theta, phi, i0, i1, ...]`.
    pub fn from_rows(data: &[f32], channels: usize) -> Result<Self, CoreError> {
        if channels == 0 {
            return Err(CoreError::NoIntensityChannels);
        }
        let stride = channels + 2;
        if data.len() % stride != 0 {
            return Err(CoreError::ColumnLengthMismatch {
                column: "rows".to_string(),
                len: data.len(),
                expected: (data.len() / stride + 1) * stride,
            });
        }

        let n = data.len() / stride;
        let mut set = Self::with_channels(channels);
        set.theta.reserve(n);
        set.phi.reserve(n);
        for column in &mut set.intensities {
            column.reserve(n);
        }
        for row in data.chunks_exact(stride) {
            set.theta.push(row[0]);
            set.phi.push(row[1]);
            for (column, &value) in set.intensities.iter_mut().zip(&row[2..]) {
                column.push(value);
            }
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.theta.len(), self.phi.len());
        debug_assert!(self.intensities.iter().all(|c| c.len() == self.theta.len()));
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    pub fn channel_count(&self) -> usize {
        self.intensities.len()
    }

    /// Drops every sample whose `remove` flag is set, keeping the relative
    /// order of the survivors. Returns the number of removed samples.
    ///
    /// # Panics
    ///
    /// Panics if `remove.len() != self.len()`.
    pub fn remove_flagged(&mut self, remove: &[bool]) -> usize {
        assert_eq!(remove.len(), self.len(), "mask must cover every sample");
        let before = self.len();

        retain_by_mask(&mut self.theta, remove);
        retain_by_mask(&mut self.phi, remove);
        for column in &mut self.intensities {
            retain_by_mask(column, remove);
        }

        before - self.len()
    }

    /// Row-major `[theta, phi, i0, i1, ...]` records, the inverse of
    /// [`SampleSet::from_rows`].
    pub fn to_rows(&self) -> Vec<f32> {
        let stride = self.channel_count() + 2;
        let mut out = Vec::with_capacity(self.len() * stride);
        for i in 0..self.len() {
            out.push(self.theta[i]);
            out.push(self.phi[i]);
            for column in &self.intensities {
                out.push(column[i]);
            }
        }
        out
    }
}

impl AngularSamples for SampleSet {
    fn len(&self) -> usize {
        SampleSet::len(self)
    }

    fn wavelength_count(&self) -> usize {
        self.channel_count()
    }

    fn angles(&self, index: usize) -> [f32; 2] {
        [self.theta[index], self.phi[index]]
    }

    fn sample_at(&self, index: usize, wavelength: usize) -> f32 {
        self.intensities[wavelength][index]
    }

    fn channel(&self, wavelength: usize) -> &[f32] {
        &self.intensities[wavelength]
    }
}

/// In-place compaction shared by every per-sample column.
pub fn retain_by_mask<T>(values: &mut Vec<T>, remove: &[bool]) {
    debug_assert_eq!(values.len(), remove.len());
    let mut flags = remove.iter();
    values.retain(|_| !flags.next().copied().unwrap_or(false));
}
