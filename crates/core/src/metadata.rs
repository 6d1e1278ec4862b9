/// Acquisition parameters that travel with a sample set.
///
/// The core only reads these, except for deletion: removing samples keeps
/// `points_in_file` and `path_lengths` in step with the stored columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub sample_name: String,
    /// Incident direction `[theta, phi]` in degrees.
    pub incident_angle: [f32; 2],
    /// Wavelengths in nanometres of the spectral channels. Channel 0 is
    /// luminance and has no entry here.
    pub wavelengths: Vec<f32>,
    /// Number of samples on each measurement path, in storage order.
    pub path_lengths: Option<Vec<usize>>,
    pub points_in_file: usize,
    /// Unparsed header lines, kept for writing the sample back out.
    pub header_lines: Vec<String>,
}

impl Metadata {
    pub fn new(sample_name: impl Into<String>, incident_angle: [f32; 2]) -> Self {
        Self {
            sample_name: sample_name.into(),
            incident_angle,
            ..Self::default()
        }
    }

    /// Display label of an intensity channel.
    pub fn channel_label(&self, channel: usize) -> String {
        match channel {
            0 => "luminance".to_string(),
            c => match self.wavelengths.get(c - 1) {
                Some(nm) => format!("{nm} nm"),
                None => format!("channel {c}"),
            },
        }
    }

    /// Path lengths, if present and consistent with `sample_count`.
    pub fn valid_path_lengths(&self, sample_count: usize) -> Option<&[usize]> {
        let lengths = self.path_lengths.as_deref()?;
        if lengths.iter().sum::<usize>() == sample_count {
            Some(lengths)
        } else {
            log::warn!(
                "path lengths of `{}` cover {} samples, expected {}; ignoring them",
                self.sample_name,
                lengths.iter().sum::<usize>(),
                sample_count
            );
            None
        }
    }

    /// Accounts for the removal of every sample flagged in `remove`.
    pub fn remove_flagged(&mut self, remove: &[bool]) {
        let removed = remove.iter().filter(|r| **r).count();
        self.points_in_file = self.points_in_file.saturating_sub(removed);

        let Some(lengths) = self.path_lengths.take() else {
            return;
        };
        if lengths.iter().sum::<usize>() != remove.len() {
            return;
        }

        let mut start = 0;
        let mut kept_lengths = Vec::with_capacity(lengths.len());
        for len in lengths {
            let kept = remove[start..start + len].iter().filter(|r| !**r).count();
            if kept > 0 {
                kept_lengths.push(kept);
            }
            start += len;
        }
        self.path_lengths = Some(kept_lengths);
    }
}
