//! Board traversal and table formatting.

use anyhow::Result;

use crate::grid::{cell_rects, Rect, GRID_SIZE};
use crate::label::Label;

/// Recognition engine boundary: raw text for one pixel rectangle of the
/// already-bound board image.
///
/// Implementations assume rectangles are within image bounds; the scan only
/// validates the parsed label, never the rectangle.
pub trait Recognize {
    fn recognize(&self, rect: Rect) -> Result<String>;
}

/// Scans the whole board and renders it as a text table.
///
/// Row-major traversal, the upper sub-label queried before the lower one,
/// exactly one query per rectangle. Each cell renders as `<upper>/<lower>`
/// with `?` standing in for an unreadable label; cells are space-separated
/// and every row ends with a newline. Output position encodes the grid
/// coordinate, so traversal order is fixed.
///
/// A recognizer failure aborts the scan: a partial grid has no meaning for
/// the downstream consumer.
pub fn scan_board<R: Recognize>(recognizer: &R) -> Result<String> {
    let mut out = String::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if col != 0 {
                out.push(' ');
            }

            let (upper_rect, lower_rect) = cell_rects(row, col);
            let upper = read_label(recognizer, upper_rect)?;
            let lower = read_label(recognizer, lower_rect)?;

            out.push_str(&format!("{}/{}", upper, lower));
        }
        out.push('\n');

        crate::log(&format!("scanned row {}/{}", row + 1, GRID_SIZE));
    }

    Ok(out)
}

fn read_label<R: Recognize>(recognizer: &R, rect: Rect) -> Result<Label> {
    let raw = recognizer.recognize(rect)?;
    Ok(Label::parse(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use regex::Regex;
    use std::collections::HashMap;

    /// Stub recognizer with canned text per rectangle; anything not seeded
    /// reads as blank.
    struct CannedRecognizer {
        texts: HashMap<Rect, String>,
    }

    impl CannedRecognizer {
        fn blank() -> Self {
            CannedRecognizer { texts: HashMap::new() }
        }

        fn seed(mut self, rect: Rect, text: &str) -> Self {
            self.texts.insert(rect, text.to_string());
            self
        }
    }

    impl Recognize for CannedRecognizer {
        fn recognize(&self, rect: Rect) -> Result<String> {
            Ok(self.texts.get(&rect).cloned().unwrap_or_default())
        }
    }

    struct FailingRecognizer;

    impl Recognize for FailingRecognizer {
        fn recognize(&self, _rect: Rect) -> Result<String> {
            Err(anyhow!("engine exploded"))
        }
    }

    #[test]
    fn test_blank_board_renders_all_unknown() {
        let out = scan_board(&CannedRecognizer::blank()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 16);

        let expected = vec!["?/?"; 16].join(" ");
        for line in lines {
            assert_eq!(line, expected);
        }
    }

    #[test]
    fn test_seeded_cell_appears_at_its_coordinate() {
        let (upper, lower) = cell_rects(0, 0);
        let recognizer = CannedRecognizer::blank()
            .seed(upper, "7")
            .seed(lower, "13");

        let out = scan_board(&recognizer).unwrap();
        assert!(out.starts_with("7/13 "));
    }

    #[test]
    fn test_garbled_text_renders_as_unknown() {
        let (upper, lower) = cell_rects(2, 3);
        let recognizer = CannedRecognizer::blank()
            .seed(upper, " 123 ")
            .seed(lower, "12x");

        let out = scan_board(&recognizer).unwrap();
        let line = out.lines().nth(2).unwrap();
        let cell = line.split(' ').nth(3).unwrap();
        assert_eq!(cell, "123/?");
    }

    #[test]
    fn test_every_line_has_sixteen_wellformed_cells() {
        let (upper, _) = cell_rects(5, 5);
        let recognizer = CannedRecognizer::blank().seed(upper, "512");
        let out = scan_board(&recognizer).unwrap();

        let cell_re = Regex::new(r"^(\d{1,3}|\?)/(\d{1,3}|\?)$").unwrap();
        for line in out.lines() {
            let cells: Vec<&str> = line.split(' ').collect();
            assert_eq!(cells.len(), 16);
            for cell in cells {
                assert!(cell_re.is_match(cell), "malformed cell: {cell:?}");
            }
        }
    }

    #[test]
    fn test_recognizer_failure_aborts_scan() {
        assert!(scan_board(&FailingRecognizer).is_err());
    }
}
