/// Complex-plane coordinate of every pixel along one axis: `start + i * step`.
///
/// Built once per render so the parallel row workers only read from it.
#[must_use]
pub fn pixel_axis_to_complex_coords(start: f64, step: f64, pixels: u32) -> Vec<f64> {
    (0..pixels).map(|i| start + f64::from(i) * step).collect()
}
