//! Reduces a texture image to a single representative color.
//!
//! The image is downsampled to one pixel with nearest-neighbor resampling and
//! converted to RGB. The surviving color/frequency pairs are sorted by count
//! and the median entry is picked; with a guaranteed 1x1 reduction this is a
//! single-element no-op, kept as a safeguard against degenerate inputs.

use image::imageops::FilterType;
use image::Rgb;
use std::collections::HashMap;
use std::path::Path;

/// Sentinel returned when the reduction yields no color information at all.
pub const NO_COLOR_DATA: Rgb<u8> = Rgb([255, 170, 170]);

/// Computes the representative color of the image at `path`.
///
/// Decode failures are fatal and reported with the offending path.
pub fn representative_color(path: &Path) -> Result<Rgb<u8>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to decode texture {}: {}", path.display(), e))?;

    let reduced = img.resize_exact(1, 1, FilterType::Nearest).to_rgb8();

    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in reduced.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    if counts.is_empty() {
        return Ok(NO_COLOR_DATA);
    }

    // Median of the color/frequency pairs. Sorting on the color as a
    // tie-breaker keeps the pick deterministic.
    let mut pairs: Vec<(usize, [u8; 3])> = counts.into_iter().map(|(c, n)| (n, c)).collect();
    pairs.sort_unstable();
    let median = pairs[pairs.len() / 2].1;

    Ok(Rgb(median))
}
