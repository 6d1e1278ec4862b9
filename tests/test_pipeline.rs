use std::sync::Arc;

use approx::assert_abs_diff_eq;
use nalgebra::Matrix4;
use scatterview::{
    BrdfModel, DataSample, GridParams, Metadata, SampleConfig, SampleSet, SelectionBox,
    SelectionMode,
};

/// A goniophotometer sweep: one path per polar ring, a specular lobe around
/// the mirror direction of a 30 degree incidence.
fn gonio_sweep() -> (SampleSet, Metadata) {
    let mut theta = Vec::new();
    let mut phi = Vec::new();
    let mut lum = Vec::new();
    let mut blue = Vec::new();
    let mut red = Vec::new();
    let mut lengths = Vec::new();
    for ring in 1..=8 {
        let t = ring as f32 * 10.0;
        let count = 12 * ring;
        for j in 0..count {
            let p = 360.0 * j as f32 / count as f32;
            let dt = t - 30.0;
            let dp = (p - 180.0) / 10.0;
            let lobe = (-(dt * dt) / 50.0 - dp * dp).exp();
            theta.push(t);
            phi.push(p);
            lum.push(0.1 + lobe);
            blue.push(0.05 + 0.5 * lobe);
            red.push(0.2 + 0.1 * lobe);
        }
        lengths.push(count);
    }
    let set = SampleSet::from_columns(theta, phi, vec![lum, blue, red]).unwrap();
    let mut meta = Metadata::new("gonio", [30.0, 0.0]);
    meta.wavelengths = vec![450.0, 650.0];
    meta.points_in_file = set.len();
    meta.path_lengths = Some(lengths);
    (set, meta)
}

fn assert_consistent(s: &DataSample) {
    let n = s.len();
    assert_eq!(s.projected_points().len(), n);
    assert_eq!(s.heights().len(), n);
    assert_eq!(s.selected_flags().len(), n);
    assert_eq!(s.path_segments().sample_count(), n);
    if let Ok(faces) = s.faces() {
        assert!(faces.iter().flatten().all(|&v| (v as usize) < n));
        assert_eq!(s.normals().unwrap().len(), n);
    }
    for w in 0..s.channel_count() {
        if let Some(e) = s.global_statistics().extrema(w) {
            assert!(e.lowest_index < n && e.highest_index < n);
        }
    }
}

#[test]
fn measured_sample_edit_session() {
    let (set, meta) = gonio_sweep();
    let total = set.len();
    let mut s = DataSample::new(set, meta, SampleConfig::default()).unwrap();
    assert_consistent(&s);
    assert_eq!(s.path_segments().count(), 8);

    // the brightest sample sits on the specular peak
    let peak = s.select_extreme(true).unwrap();
    assert_eq!(s.samples().theta[peak], 30.0);
    assert_eq!(s.samples().phi[peak], 180.0);

    // walking along the ring stays on the ring
    s.move_selection(true);
    let moved = s.selected_flags().iter().position(|f| *f).unwrap();
    assert_eq!(moved, peak + 1);
    assert_eq!(s.samples().theta[moved], 30.0);

    // drop the lobe's half of the disk, in view of an orthographic top camera
    #[rustfmt::skip]
    let top_down = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.5, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let left_half = SelectionBox::from_corners([0.0, 0.0], [49.0, 100.0]);
    s.select_in_box(&top_down, &left_half, [100, 100], SelectionMode::Standard);
    let k = s.selection_count();
    assert!(k > 0 && k < total);
    assert!(s
        .selected_flags()
        .iter()
        .zip(s.projected_points())
        .all(|(&f, p)| !f || p[0] < 0.0));

    let removed = s.delete_selected().unwrap();
    assert_eq!(removed, k);
    assert_eq!(s.len(), total - k);
    assert_eq!(s.metadata().points_in_file, total - k);
    assert!(s.projected_points().iter().all(|p| p[0] >= -1e-6));
    assert_consistent(&s);
}

#[test]
fn switching_channels_and_log_view() {
    let (set, meta) = gonio_sweep();
    let mut s = DataSample::new(set, meta, SampleConfig::default()).unwrap();
    for w in 0..3 {
        s.set_wavelength_index(w).unwrap();
        let heights = s.heights();
        assert!(heights.iter().all(|h| (0.0..=1.0).contains(h)));
        assert!(heights.iter().any(|h| *h == 1.0));
        s.toggle_log_view();
        assert_consistent(&s);
        s.toggle_log_view();
    }
    assert_eq!(s.metadata().channel_label(2), "650 nm");
}

#[test]
fn triangulation_is_deterministic() {
    let (set, meta) = gonio_sweep();
    let a = DataSample::new(set.clone(), meta.clone(), SampleConfig::default()).unwrap();
    let b = DataSample::new(set, meta, SampleConfig::default()).unwrap();
    assert_eq!(a.faces().unwrap(), b.faces().unwrap());
    assert_eq!(a.normals().unwrap(), b.normals().unwrap());
}

#[test]
fn selection_center_tracks_display_positions() {
    let (set, meta) = gonio_sweep();
    let mut s = DataSample::new(set, meta, SampleConfig::default()).unwrap();
    let peak = s.select_extreme(true).unwrap();
    let center = s.selection_center().unwrap();
    let p = s.projected_points()[peak];
    assert_abs_diff_eq!(center[0], p[0], epsilon = 1e-6);
    assert_abs_diff_eq!(center[1], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(center[2], p[1], epsilon = 1e-6);
}

struct Phong {
    exponent: f32,
}

impl BrdfModel for Phong {
    fn wavelength_count(&self) -> usize {
        1
    }

    fn eval(&self, incident: [f32; 2], outgoing: [f32; 2], out: &mut [f32]) {
        let to_dir = |[t, p]: [f32; 2]| {
            let (t, p) = (t.to_radians(), p.to_radians());
            [t.sin() * p.cos(), t.sin() * p.sin(), t.cos()]
        };
        let i = to_dir(incident);
        let mirror = [-i[0], -i[1], i[2]];
        let o = to_dir(outgoing);
        let cos = (mirror[0] * o[0] + mirror[1] * o[1] + mirror[2] * o[2]).max(0.0);
        out[0] = 0.2 + cos.powf(self.exponent);
    }
}

#[test]
fn analytic_sample_follows_incident_angle() {
    let meta = Metadata::new("phong", [20.0, 0.0]);
    let grid = GridParams {
        n_theta: 18,
        n_phi: 36,
    };
    let mut s = DataSample::from_brdf(
        Arc::new(Phong { exponent: 50.0 }),
        meta,
        grid,
        SampleConfig::default(),
    )
    .unwrap();
    assert_consistent(&s);
    let peak = s.global_statistics().extreme_index(0, true).unwrap();
    assert_eq!(s.samples().theta[peak], 20.0);
    assert_eq!(s.samples().phi[peak], 180.0);

    s.set_incident_angle([50.0, 90.0]).unwrap();
    assert_consistent(&s);
    let peak = s.global_statistics().extreme_index(0, true).unwrap();
    assert_eq!(s.samples().theta[peak], 50.0);
    assert_eq!(s.samples().phi[peak], 270.0);
    let origin = s.incident_origin();
    assert_abs_diff_eq!(origin[2], 50.0 / 90.0, epsilon = 1e-5);
}
