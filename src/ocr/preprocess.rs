use image::{ImageBuffer, Rgba};

use crate::grid::Rect;

/// Crops a sub-label rectangle from the board image.
///
/// Clamps to image bounds; the scan layer addresses rectangles by grid
/// coordinate and never checks them against the actual image dimensions.
pub fn crop_rect(
    img: &ImageBuffer<Rgba<u8>, Vec<u8>>,
    rect: Rect,
) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let (w, h) = img.dimensions();

    let x0 = rect.x.min(w);
    let y0 = rect.y.min(h);
    let rw = rect.width.min(w - x0);
    let rh = rect.height.min(h - y0);

    image::imageops::crop_imm(img, x0, y0, rw, rh).to_image()
}
