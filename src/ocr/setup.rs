use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::log;

/// Resolved locations of the Tesseract executable and its trained data.
pub struct TesseractPaths {
    pub executable: PathBuf,
    pub tessdata: PathBuf,
}

/// Returns the directory for a locally managed Tesseract install.
pub fn get_tesseract_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("board-ocr")
        .join("tesseract")
}

/// Locates a usable Tesseract install. Missing Tesseract is a fatal
/// configuration error; this tool never scans without it.
pub fn find_tesseract() -> Result<TesseractPaths> {
    let executable = find_tesseract_executable()?;
    let tessdata = find_tessdata_dir()?;

    log(&format!("using tesseract at: {}", executable.display()));

    Ok(TesseractPaths {
        executable,
        tessdata,
    })
}

/// Finds the Tesseract executable, checking our local dir first, then PATH,
/// then common install locations.
fn find_tesseract_executable() -> Result<PathBuf> {
    let local_exe = get_tesseract_dir().join(exe_name());
    if local_exe.exists() {
        return Ok(local_exe);
    }

    if let Ok(output) = std::process::Command::new("tesseract")
        .arg("--version")
        .output()
    {
        if output.status.success() {
            return Ok(PathBuf::from("tesseract"));
        }
    }

    for path in common_executable_paths() {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(p);
        }
    }

    Err(anyhow!(
        "Tesseract not found. Install Tesseract-OCR and make sure it is on PATH."
    ))
}

/// Finds a tessdata directory containing eng.traineddata.
fn find_tessdata_dir() -> Result<PathBuf> {
    let local_tessdata = get_tesseract_dir().join("tessdata");
    if local_tessdata.join("eng.traineddata").exists() {
        return Ok(local_tessdata);
    }

    for path in common_tessdata_paths() {
        let p = PathBuf::from(path);
        if p.join("eng.traineddata").exists() {
            return Ok(p);
        }
    }

    if let Ok(prefix) = std::env::var("TESSDATA_PREFIX") {
        let p = PathBuf::from(&prefix);
        if p.join("eng.traineddata").exists() {
            return Ok(p);
        }
        let p = PathBuf::from(&prefix).join("tessdata");
        if p.join("eng.traineddata").exists() {
            return Ok(p);
        }
    }

    Err(anyhow!(
        "tessdata directory not found. Ensure eng.traineddata is available \
         (set TESSDATA_PREFIX if it lives in a non-standard place)."
    ))
}

#[cfg(windows)]
fn exe_name() -> &'static str {
    "tesseract.exe"
}

#[cfg(not(windows))]
fn exe_name() -> &'static str {
    "tesseract"
}

#[cfg(windows)]
fn common_executable_paths() -> &'static [&'static str] {
    &[
        r"C:\Program Files\Tesseract-OCR\tesseract.exe",
        r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
    ]
}

#[cfg(not(windows))]
fn common_executable_paths() -> &'static [&'static str] {
    &[
        "/usr/bin/tesseract",
        "/usr/local/bin/tesseract",
        "/opt/homebrew/bin/tesseract",
    ]
}

#[cfg(windows)]
fn common_tessdata_paths() -> &'static [&'static str] {
    &[
        r"C:\Program Files\Tesseract-OCR\tessdata",
        r"C:\Program Files (x86)\Tesseract-OCR\tessdata",
    ]
}

#[cfg(not(windows))]
fn common_tessdata_paths() -> &'static [&'static str] {
    &[
        "/usr/share/tesseract-ocr/5/tessdata",
        "/usr/share/tesseract-ocr/4.00/tessdata",
        "/usr/share/tessdata",
        "/usr/local/share/tessdata",
        "/opt/homebrew/share/tessdata",
    ]
}
