use std::sync::Arc;
use std::time::Instant;

use nalgebra::Matrix4;
use scatterview_core::{sample_brdf_grid, BrdfModel, GridParams, Metadata, SampleSet};
use scatterview_fields::{DerivedFields, PathSegments};
use scatterview_mesh::{incident_origin, predicted_outgoing_origin, project_samples, Mesh};
use scatterview_selection::{
    count_selected, delete_selected, deselect_all, move_selection, select_all, select_closest,
    select_extreme, select_in_box, SelectionBox, SelectionMode,
};
use scatterview_stats::{
    compute_global_statistics, update_selection_statistics, PointsStatistics,
    SelectionStatistics,
};

use crate::{RenderBuffers, SampleConfig, SampleError, SampleKind};

/// One sample set together with everything derived from it and the user's
/// selection.
///
/// Every structural change (construction, deletion, re-tabulation) rebuilds
/// the projection, the mesh, the fields, the path segments and the global
/// statistics. Selection changes only refresh the selection statistics.
#[derive(Debug, Clone)]
pub struct DataSample {
    kind: SampleKind,
    config: SampleConfig,
    samples: SampleSet,
    metadata: Metadata,

    projected: Vec<[f32; 2]>,
    mesh: Mesh,
    fields: DerivedFields,
    segments: PathSegments,
    global: PointsStatistics,

    selected: Vec<bool>,
    selection: SelectionStatistics,

    wavelength: usize,
    log_view: bool,
}

impl DataSample {
    /// Wraps measured samples.
    pub fn new(
        samples: SampleSet,
        metadata: Metadata,
        config: SampleConfig,
    ) -> Result<Self, SampleError> {
        samples.validate()?;
        Self::assemble(SampleKind::Measured, samples, metadata, config)
    }

    /// Tabulates `model` at the incident angle stored in `metadata`.
    pub fn from_brdf(
        model: Arc<dyn BrdfModel>,
        mut metadata: Metadata,
        grid: GridParams,
        config: SampleConfig,
    ) -> Result<Self, SampleError> {
        let (samples, lengths) = sample_brdf_grid(model.as_ref(), metadata.incident_angle, &grid);
        metadata.points_in_file = samples.len();
        metadata.path_lengths = Some(lengths);
        Self::assemble(SampleKind::Analytic { model, grid }, samples, metadata, config)
    }

    fn assemble(
        kind: SampleKind,
        samples: SampleSet,
        metadata: Metadata,
        config: SampleConfig,
    ) -> Result<Self, SampleError> {
        let mut sample = Self {
            kind,
            config,
            samples,
            metadata,
            projected: Vec::new(),
            mesh: Mesh::from_faces(0, Vec::new(), Vec::new()),
            fields: DerivedFields::default(),
            segments: PathSegments::single(0),
            global: PointsStatistics::default(),
            selected: Vec::new(),
            selection: SelectionStatistics::empty(),
            wavelength: 0,
            log_view: false,
        };
        sample.rebuild(None)?;
        Ok(sample)
    }

    /// Recomputes every structure derived from the sample columns.
    ///
    /// `segments` carries paths already compacted alongside the columns;
    /// `None` derives them from the metadata or the sample order.
    fn rebuild(&mut self, segments: Option<PathSegments>) -> Result<(), SampleError> {
        let start = Instant::now();
        let n = self.samples.len();

        self.projected = project_samples(&self.samples);
        self.mesh = Mesh::build(&self.projected);
        self.fields = DerivedFields::derive(&self.samples, &self.config.log);
        self.segments = match (segments, self.metadata.valid_path_lengths(n)) {
            (Some(segments), _) if segments.sample_count() == n => segments,
            (_, Some(lengths)) => PathSegments::from_lengths(lengths),
            (_, None) => PathSegments::infer(&self.projected, &self.config.paths),
        };
        self.selected.resize(n, false);
        self.wavelength = self
            .wavelength
            .min(self.fields.channel_count().saturating_sub(1));

        self.refresh_global_statistics();
        self.ensure_current_normals()?;
        self.refresh_selection_statistics();

        log::debug!(
            "rebuilt `{}`: {} samples, {} faces, {} paths in {:?}",
            self.metadata.sample_name,
            n,
            self.mesh.face_count(),
            self.segments.count(),
            start.elapsed()
        );
        Ok(())
    }

    fn ensure_current_normals(&mut self) -> Result<(), SampleError> {
        if !self.mesh.is_empty() {
            self.fields
                .ensure_normals(self.wavelength, &self.mesh, &self.projected)?;
        }
        Ok(())
    }

    fn refresh_global_statistics(&mut self) {
        let heights = self.fields.display_heights(self.log_view);
        self.global = compute_global_statistics(&self.samples, &heights);
    }

    fn refresh_selection_statistics(&mut self) {
        let heights = self.fields.display_heights(self.log_view);
        self.selection = update_selection_statistics(
            &self.selected,
            &self.samples,
            &self.projected,
            &heights,
            self.wavelength,
        );
        log::trace!("{} samples selected", self.selection.count);
    }

    // Selection

    pub fn select_in_box(
        &mut self,
        view_projection: &Matrix4<f32>,
        selection_box: &SelectionBox,
        viewport: [u32; 2],
        mode: SelectionMode,
    ) {
        let heights = active_heights(&self.fields, self.wavelength, self.log_view);
        select_in_box(
            &mut self.selected,
            &self.projected,
            heights,
            view_projection,
            selection_box,
            viewport,
            mode,
        );
        self.refresh_selection_statistics();
    }

    /// Selects the sample drawn nearest to `pixel`, if one is close enough.
    pub fn select_closest(
        &mut self,
        view_projection: &Matrix4<f32>,
        pixel: [f32; 2],
        viewport: [u32; 2],
    ) -> Option<usize> {
        let heights = active_heights(&self.fields, self.wavelength, self.log_view);
        let picked = select_closest(
            &mut self.selected,
            &self.projected,
            heights,
            view_projection,
            pixel,
            viewport,
            self.config.pick.max_pick_distance,
        );
        if picked.is_some() {
            self.refresh_selection_statistics();
        }
        picked
    }

    /// Selects the lowest or highest sample of the active channel, within the
    /// selection if there is one.
    pub fn select_extreme(&mut self, highest: bool) -> Option<usize> {
        let picked = select_extreme(
            &mut self.selected,
            &self.global,
            &self.selection,
            self.wavelength,
            highest,
        );
        if picked.is_some() {
            self.refresh_selection_statistics();
        }
        picked
    }

    pub fn select_all(&mut self) {
        select_all(&mut self.selected);
        self.refresh_selection_statistics();
    }

    pub fn deselect_all(&mut self) {
        deselect_all(&mut self.selected);
        self.refresh_selection_statistics();
    }

    /// Moves the selection one step along the measurement paths.
    pub fn move_selection(&mut self, up: bool) {
        move_selection(&mut self.selected, up, &self.segments);
        self.refresh_selection_statistics();
    }

    /// Deletes the selected samples and rebuilds. Returns how many were
    /// removed.
    pub fn delete_selected(&mut self) -> Result<usize, SampleError> {
        let removed = delete_selected(
            &mut self.selected,
            &mut self.samples,
            &mut self.projected,
            &mut self.metadata,
            &mut self.segments,
        );
        if removed > 0 {
            let segments = std::mem::replace(&mut self.segments, PathSegments::single(0));
            self.rebuild(Some(segments))?;
        }
        Ok(removed)
    }

    // Display state

    /// Switches the active channel, clamped to the last one.
    pub fn set_wavelength_index(&mut self, wavelength: usize) -> Result<(), SampleError> {
        let clamped = wavelength.min(self.fields.channel_count().saturating_sub(1));
        if clamped == self.wavelength {
            return Ok(());
        }
        self.wavelength = clamped;
        self.ensure_current_normals()?;
        self.refresh_selection_statistics();
        Ok(())
    }

    pub fn toggle_log_view(&mut self) {
        self.log_view = !self.log_view;
        self.refresh_global_statistics();
        self.refresh_selection_statistics();
    }

    /// Changes the incident direction. An analytic sample is re-tabulated and
    /// loses its selection; a measured one only updates its metadata.
    pub fn set_incident_angle(&mut self, incident_angle: [f32; 2]) -> Result<(), SampleError> {
        self.metadata.incident_angle = incident_angle;
        let SampleKind::Analytic { model, grid } = &self.kind else {
            return Ok(());
        };

        let (samples, lengths) = sample_brdf_grid(model.as_ref(), incident_angle, grid);
        self.metadata.points_in_file = samples.len();
        self.metadata.path_lengths = Some(lengths);
        self.samples = samples;
        self.selected.clear();
        self.rebuild(None)
    }

    /// Derives normals for every channel up front.
    pub fn derive_all_normals(&mut self) -> Result<(), SampleError> {
        if self.mesh.is_empty() {
            return Err(self.mesh_unavailable());
        }
        self.fields.derive_all_normals(&self.mesh, &self.projected)?;
        Ok(())
    }

    // Accessors

    fn current_heights(&self) -> &[f32] {
        active_heights(&self.fields, self.wavelength, self.log_view)
    }

    fn mesh_unavailable(&self) -> SampleError {
        SampleError::MeshUnavailable {
            samples: self.samples.len(),
        }
    }

    /// Heights of the active channel in the active display mode.
    pub fn heights(&self) -> &[f32] {
        self.current_heights()
    }

    /// Normals of the active channel in the active display mode.
    pub fn normals(&self) -> Result<&[[f32; 3]], SampleError> {
        if self.mesh.is_empty() {
            return Err(self.mesh_unavailable());
        }
        self.fields
            .normals(self.wavelength)
            .map(|n| n.display(self.log_view))
            .ok_or_else(|| self.mesh_unavailable())
    }

    pub fn faces(&self) -> Result<&[[u32; 3]], SampleError> {
        if self.mesh.is_empty() {
            return Err(self.mesh_unavailable());
        }
        Ok(self.mesh.faces())
    }

    pub fn render_buffers(&self) -> Result<RenderBuffers<'_>, SampleError> {
        Ok(RenderBuffers {
            points: &self.projected,
            heights: self.current_heights(),
            normals: self.normals()?,
            faces: self.faces()?,
            path_breaks: self.segments.breaks(),
            selected: &self.selected,
        })
    }

    pub fn projected_points(&self) -> &[[f32; 2]] {
        &self.projected
    }

    pub fn path_segments(&self) -> &PathSegments {
        &self.segments
    }

    pub fn selected_flags(&self) -> &[bool] {
        &self.selected
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn kind(&self) -> &SampleKind {
        &self.kind
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn channel_count(&self) -> usize {
        self.samples.channel_count()
    }

    pub fn wavelength_index(&self) -> usize {
        self.wavelength
    }

    pub fn display_as_log(&self) -> bool {
        self.log_view
    }

    /// Mean display position of the selection.
    pub fn selection_center(&self) -> Option<[f32; 3]> {
        (!self.selection.is_empty()).then_some(self.selection.center)
    }

    pub fn incident_origin(&self) -> [f32; 3] {
        incident_origin(self.metadata.incident_angle)
    }

    /// Ground-plane point of the mirror-reflected incident direction.
    pub fn predicted_outgoing_origin(&self) -> [f32; 3] {
        predicted_outgoing_origin(self.metadata.incident_angle)
    }

    // Statistics

    pub fn selection_statistics(&self) -> &SelectionStatistics {
        &self.selection
    }

    pub fn global_statistics(&self) -> &PointsStatistics {
        &self.global
    }

    pub fn selection_count(&self) -> usize {
        count_selected(&self.selected)
    }

    pub fn has_selection(&self) -> bool {
        self.selected.iter().any(|s| *s)
    }
}

fn active_heights(fields: &DerivedFields, wavelength: usize, log: bool) -> &[f32] {
    fields
        .height_fields()
        .get(wavelength)
        .map_or(&[][..], |field| field.display(log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use scatterview_core::CoreError;

    /// Three rings around the pole plus the pole itself, two channels.
    fn rings() -> (SampleSet, Metadata) {
        let mut theta = vec![0.0];
        let mut phi = vec![0.0];
        let mut lum = vec![1.0];
        let mut red = vec![0.5];
        for t in 1..4 {
            for p in 0..8 {
                theta.push(t as f32 * 20.0);
                phi.push(p as f32 * 45.0);
                lum.push(1.0 / (1.0 + t as f32) + 0.01 * p as f32);
                red.push(t as f32);
            }
        }
        let set = SampleSet::from_columns(theta, phi, vec![lum, red]).unwrap();
        let mut meta = Metadata::new("rings", [20.0, 0.0]);
        meta.wavelengths = vec![650.0];
        meta.points_in_file = set.len();
        meta.path_lengths = Some(vec![1, 8, 8, 8]);
        (set, meta)
    }

    fn sample() -> DataSample {
        let (set, meta) = rings();
        DataSample::new(set, meta, SampleConfig::default()).unwrap()
    }

    /// Linear grey model, one channel.
    struct Ramp;

    impl BrdfModel for Ramp {
        fn wavelength_count(&self) -> usize {
            1
        }

        fn eval(&self, incident: [f32; 2], outgoing: [f32; 2], out: &mut [f32]) {
            out[0] = 1.0 + (outgoing[0] - incident[0]).abs() / 90.0;
        }
    }

    #[test]
    fn construction_derives_everything() {
        let s = sample();
        assert_eq!(s.len(), 25);
        assert_eq!(s.projected_points().len(), 25);
        assert_eq!(s.heights().len(), 25);
        assert_eq!(s.normals().unwrap().len(), 25);
        assert!(!s.faces().unwrap().is_empty());
        assert_eq!(s.path_segments().lengths(), vec![1, 8, 8, 8]);
        assert_eq!(s.selected_flags(), &[false; 25][..]);
        assert!(!s.has_selection());
        assert_eq!(s.global_statistics().count, 25);
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let (mut set, meta) = rings();
        set.phi.pop();
        let err = DataSample::new(set, meta, SampleConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SampleError::Core(CoreError::ColumnLengthMismatch { .. })
        ));
    }

    #[test]
    fn inconsistent_path_lengths_fall_back_to_inference() {
        let (set, mut meta) = rings();
        meta.path_lengths = Some(vec![3, 3]);
        let s = DataSample::new(set, meta, SampleConfig::default()).unwrap();
        assert_eq!(s.path_segments().sample_count(), 25);
    }

    #[test]
    fn wavelength_index_is_clamped() {
        let mut s = sample();
        s.set_wavelength_index(7).unwrap();
        assert_eq!(s.wavelength_index(), 1);
        assert_eq!(s.heights()[0], 0.0);
        assert!(s.normals().is_ok());
    }

    #[test]
    fn log_view_switches_heights_and_normals() {
        let mut s = sample();
        let linear = s.heights().to_vec();
        s.toggle_log_view();
        assert!(s.display_as_log());
        assert_ne!(s.heights(), &linear[..]);
        assert_eq!(s.render_buffers().unwrap().heights, s.heights());
        s.toggle_log_view();
        assert_eq!(s.heights(), &linear[..]);
    }

    #[test]
    fn selection_flow_updates_statistics() {
        let mut s = sample();
        s.select_all();
        assert_eq!(s.selection_count(), 25);
        assert!(s.selection_center().is_some());
        let highest = s.select_extreme(true).unwrap();
        // the pole is the brightest luminance sample
        assert_eq!(highest, 0);
        assert_eq!(s.selection_count(), 1);
        s.move_selection(true);
        assert!(s.selected_flags()[0]);
        s.deselect_all();
        assert_eq!(s.selection_center(), None);
        assert!(s.selection_statistics().is_empty());
    }

    #[test]
    fn closest_pick_honours_configured_distance() {
        let mut s = sample();
        let view = Matrix4::identity();
        // the pole sits on the origin at height 1, i.e. the top edge
        let picked = s.select_closest(&view, [50.0, 5.0], [100, 100]);
        assert_eq!(picked, Some(0));
        assert_eq!(s.selection_count(), 1);
        assert_eq!(s.select_closest(&view, [50.0, 95.0], [100, 100]), None);
        assert_eq!(s.selection_count(), 1);
    }

    #[test]
    fn box_selection_goes_through_the_display_heights() {
        let mut s = sample();
        let everything = SelectionBox::new([0.0, 0.0], [100.0, 100.0]);
        s.select_in_box(&Matrix4::identity(), &everything, [100, 100], SelectionMode::Standard);
        assert_eq!(s.selection_count(), 25);
        s.select_in_box(&Matrix4::identity(), &everything, [100, 100], SelectionMode::Subtract);
        assert_eq!(s.selection_count(), 0);
    }

    #[test]
    fn deleting_a_ring_rebuilds() {
        let mut s = sample();
        for i in 17..25 {
            s.selected[i] = true;
        }
        s.refresh_selection_statistics();
        assert_eq!(s.delete_selected().unwrap(), 8);
        assert_eq!(s.len(), 17);
        assert_eq!(s.metadata().points_in_file, 17);
        assert_eq!(s.path_segments().lengths(), vec![1, 8, 8]);
        assert_eq!(s.normals().unwrap().len(), 17);
        assert!(s.faces().unwrap().iter().flatten().all(|&v| (v as usize) < 17));
        assert_eq!(s.selection_count(), 0);
        let e = s.global_statistics().extrema(0).unwrap();
        assert!(e.highest_index < 17 && e.lowest_index < 17);
    }

    #[test]
    fn deleting_inside_an_inferred_sweep_keeps_it_whole() {
        let set = SampleSet::from_columns(
            vec![10.0, 20.0, 30.0, 40.0, 50.0],
            vec![0.0; 5],
            vec![vec![1.0, 2.0, 3.0, 4.0, 5.0]],
        )
        .unwrap();
        let mut s =
            DataSample::new(set, Metadata::new("sweep", [0.0, 0.0]), SampleConfig::default())
                .unwrap();
        assert_eq!(s.path_segments().breaks(), &[0, 5]);

        s.selected[2] = true;
        s.selected[3] = true;
        assert_eq!(s.delete_selected().unwrap(), 2);
        // the 20 to 50 degree step would start a new path if inferred again
        assert_eq!(s.path_segments().breaks(), &[0, 3]);

        s.selected[1] = true;
        s.move_selection(true);
        assert_eq!(s.selected_flags(), &[false, false, true]);
    }

    #[test]
    fn deleting_everything_leaves_no_surface() {
        let mut s = sample();
        s.select_all();
        assert_eq!(s.delete_selected().unwrap(), 25);
        assert!(s.is_empty());
        assert!(s.heights().is_empty());
        assert_eq!(s.faces().unwrap_err(), SampleError::MeshUnavailable { samples: 0 });
        assert!(s.normals().is_err());
        assert!(s.render_buffers().is_err());
        assert!(s.derive_all_normals().is_err());
        assert_eq!(s.select_extreme(true), None);
        assert_eq!(s.delete_selected().unwrap(), 0);
    }

    #[test]
    fn derive_all_normals_fills_every_channel() {
        let mut s = sample();
        s.derive_all_normals().unwrap();
        s.set_wavelength_index(1).unwrap();
        assert_eq!(s.normals().unwrap().len(), 25);
    }

    #[test]
    fn analytic_sample_retabulates_on_incident_change() {
        let grid = GridParams {
            n_theta: 6,
            n_phi: 12,
        };
        let meta = Metadata::new("ramp", [0.0, 0.0]);
        let mut s =
            DataSample::from_brdf(Arc::new(Ramp), meta, grid, SampleConfig::default()).unwrap();
        assert!(s.kind().is_analytic());
        assert_eq!(s.len(), 1 + 5 * 12);
        assert_eq!(s.path_segments().count(), 6);
        assert_eq!(s.global_statistics().extreme_index(0, false), Some(0));

        s.select_all();
        s.set_incident_angle([60.0, 0.0]).unwrap();
        assert_eq!(s.metadata().incident_angle, [60.0, 0.0]);
        assert_eq!(s.selection_count(), 0);
        let lowest = s.global_statistics().extreme_index(0, false).unwrap();
        assert_eq!(s.samples().theta[lowest], 60.0);
        let origin = s.incident_origin();
        assert_abs_diff_eq!(origin[0], 60.0 / 90.0, epsilon = 1e-6);
        assert_eq!(origin[1], 0.0);
        let outgoing = s.predicted_outgoing_origin();
        assert_abs_diff_eq!(outgoing[0], -origin[0]);
        assert_abs_diff_eq!(outgoing[2], -origin[2]);
    }

    #[test]
    fn measured_sample_only_records_incident_angle() {
        let mut s = sample();
        let before = s.samples().clone();
        s.set_incident_angle([45.0, 90.0]).unwrap();
        assert_eq!(s.samples(), &before);
        assert_eq!(s.metadata().incident_angle, [45.0, 90.0]);
    }

    #[test]
    fn render_buffers_bundle_current_state() {
        let s = sample();
        let buffers = s.render_buffers().unwrap();
        assert_eq!(buffers.vertex_count(), 25);
        assert_eq!(buffers.positions().len(), 25);
        assert_eq!(buffers.indices().len(), buffers.faces.len() * 3);
        assert_eq!(buffers.path_breaks, &[0, 1, 9, 17, 25]);
    }
}
