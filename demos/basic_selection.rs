use nalgebra::Matrix4;
use scatterview::{DataSample, Metadata, SampleConfig, SampleSet, SelectionBox, SelectionMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three polar rings of a synthetic measurement with a bright spot at
    // theta = 40, phi = 180.
    let mut theta = Vec::new();
    let mut phi = Vec::new();
    let mut lum = Vec::new();
    for ring in 1..=3 {
        for j in 0..24 {
            let t = ring as f32 * 20.0;
            let p = j as f32 * 15.0;
            theta.push(t);
            phi.push(p);
            let bright = t == 40.0 && p == 180.0;
            lum.push(if bright { 5.0 } else { 1.0 + 0.01 * j as f32 });
        }
    }
    let samples = SampleSet::from_columns(theta, phi, vec![lum])?;
    let mut metadata = Metadata::new("demo", [40.0, 0.0]);
    metadata.path_lengths = Some(vec![24, 24, 24]);

    let mut sample = DataSample::new(samples, metadata, SampleConfig::default())?;
    println!(
        "{} samples, {} faces, {} paths",
        sample.len(),
        sample.faces()?.len(),
        sample.path_segments().count()
    );

    let peak = sample.select_extreme(true);
    println!("brightest sample: {:?}", peak);

    sample.move_selection(true);
    println!("after moving up the path: {:?}", sample.selection_center());

    let view = Matrix4::identity();
    let left = SelectionBox::from_corners([0.0, 0.0], [400.0, 800.0]);
    sample.select_in_box(&view, &left, [800, 800], SelectionMode::Standard);
    println!("box selected {} samples", sample.selection_count());

    let removed = sample.delete_selected()?;
    println!("deleted {} samples, {} remain", removed, sample.len());

    let buffers = sample.render_buffers()?;
    println!(
        "render buffers: {} vertices, {} indices",
        buffers.vertex_count(),
        buffers.indices().len()
    );
    Ok(())
}
