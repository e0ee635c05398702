//! Board OCR
//!
//! Reads a scanned 16×16 board image, runs Tesseract on each printed label,
//! and writes the recognized values to stdout as a plain-text table: one
//! line per row, cells space-separated, each cell `<upper>/<lower>` with `?`
//! for labels the engine could not read.

mod grid;
mod label;
mod ocr;
mod paths;
mod scan;

use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const DEFAULT_IMAGE: &str = "atan.png";

/// Logs a timestamped message to stderr and the log file. stdout carries
/// only the scanned table.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    eprint!("{}", line);
    let log_path = paths::get_logs_dir().join("board_ocr.log");
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(line.as_bytes());
    }
}

fn main() -> Result<()> {
    paths::ensure_directories()?;

    let image_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE));

    log(&format!("scanning board image: {}", image_path.display()));

    let tesseract = ocr::find_tesseract()?;
    let engine = ocr::TessEngine::new(tesseract, &image_path)?;

    let table = scan::scan_board(&engine)?;
    print!("{}", table);

    log("scan complete");

    Ok(())
}
