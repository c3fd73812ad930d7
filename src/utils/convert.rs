//! Conversions between scene-pixel and meter coordinates. Pixel space has
//! its origin at the top-left corner, meter space at the bottom-left, so the
//! y axis flips around `scene_y_max`.

/// Converts a 2D or 3D point from pixels to meters. A third component is
/// passed through untouched, it is expected to be in meters already.
pub fn pixels_to_meters(pixels: &[f64], scale: f64, scene_y_max: f64) -> Vec<f64> {
    debug_assert!(pixels.len() >= 2);
    let mut meters = vec![pixels[0] / scale, (scene_y_max - pixels[1]) / scale];
    if let Some(z) = pixels.get(2) {
        meters.push(*z);
    }
    meters
}

/// Converts a 2D or 3D point from meters to pixels, rounding to whole pixels.
pub fn meters_to_pixels(meters: &[f64], scale: f64, scene_y_max: f64) -> Vec<f64> {
    debug_assert!(meters.len() >= 2);
    let mut pixels = vec![
        (meters[0] * scale).round(),
        (scene_y_max - meters[1] * scale).round(),
    ];
    if let Some(z) = meters.get(2) {
        pixels.push(*z);
    }
    pixels
}

/// Size a render surface should be resized to, given explicit client
/// dimensions and pixel ratio, or `None` if it already matches.
pub fn target_surface_size(
    current: (u32, u32),
    client: (u32, u32),
    pixel_ratio: f64,
) -> Option<(u32, u32)> {
    let width = (client.0 as f64 * pixel_ratio) as u32;
    let height = (client.1 as f64 * pixel_ratio) as u32;
    (current != (width, height)).then_some((width, height))
}
