use anyhow::{anyhow, Context, Result};
use image::{ImageBuffer, Rgba};
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

use super::preprocess::crop_rect;
use super::setup::TesseractPaths;
use crate::grid::Rect;
use crate::scan::Recognize;

/// The scanned board is expected at this resolution; passed to Tesseract so
/// it sizes the text correctly.
const BOARD_DPI: &str = "72";

/// Tesseract wrapper bound to one loaded board image.
///
/// Built once at startup; read-only afterwards. Each query crops one
/// sub-label rectangle and runs Tesseract on the crop.
pub struct TessEngine {
    paths: TesseractPaths,
    img: ImageBuffer<Rgba<u8>, Vec<u8>>,
}

impl TessEngine {
    /// Loads the board image and binds it to the engine. Any decode failure
    /// is fatal: scanning cannot start without the image.
    pub fn new(paths: TesseractPaths, image_path: &Path) -> Result<TessEngine> {
        let img = image::open(image_path)
            .with_context(|| format!("failed to load board image {}", image_path.display()))?
            .to_rgba8();

        Ok(TessEngine { paths, img })
    }

    /// Runs Tesseract on a cropped label image, returning raw stdout text.
    fn run_tesseract(&self, crop: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> Result<String> {
        let temp_input = NamedTempFile::with_suffix(".png")?;
        crop.save(temp_input.path())?;

        let output = Command::new(&self.paths.executable)
            .arg(temp_input.path())
            .arg("stdout")
            .arg("--tessdata-dir")
            .arg(&self.paths.tessdata)
            .arg("-l")
            .arg("eng")
            .arg("--psm")
            .arg("7") // Single text line per label crop
            .arg("--dpi")
            .arg(BOARD_DPI)
            .output()
            .context("failed to spawn tesseract")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Tesseract failed: {}", stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Recognize for TessEngine {
    fn recognize(&self, rect: Rect) -> Result<String> {
        let crop = crop_rect(&self.img, rect);
        self.run_tesseract(&crop)
    }
}
