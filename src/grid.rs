//! Board geometry.
//!
//! The input is a scan of one fixed board layout: a 16×16 grid of cells,
//! each cell carrying two numbers printed one above the other. All offsets
//! are measured in pixels on that scan and are constants, never detected.

/// Rows/columns of the board.
pub const GRID_SIZE: u32 = 16;

/// Pixel x of the first column's label.
pub const X_ORIGIN: u32 = 44;
/// Pixel y of the first row's upper label.
pub const Y_ORIGIN: u32 = 40;
/// Horizontal pitch between columns.
pub const CELL_STRIDE_X: u32 = 71;
/// Vertical pitch between rows.
pub const CELL_STRIDE_Y: u32 = 72;
/// Label box size.
pub const LABEL_W: u32 = 66;
pub const LABEL_H: u32 = 32;
/// Vertical offset from the upper label to the lower one.
pub const LABEL_GAP: u32 = 36;

/// An axis-aligned pixel region of the board image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Returns the (upper, lower) sub-label rectangles of cell `(row, col)`.
///
/// Callers iterate `row, col` in `[0, GRID_SIZE)`; the arithmetic itself
/// has no failure mode.
pub fn cell_rects(row: u32, col: u32) -> (Rect, Rect) {
    let x0 = X_ORIGIN + CELL_STRIDE_X * col;
    let y0 = Y_ORIGIN + CELL_STRIDE_Y * row;

    let upper = Rect {
        x: x0,
        y: y0,
        width: LABEL_W,
        height: LABEL_H,
    };
    let lower = Rect {
        x: x0,
        y: y0 + LABEL_GAP,
        width: LABEL_W,
        height: LABEL_H,
    };

    (upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_cell_matches_layout_constants() {
        let (upper, lower) = cell_rects(0, 0);
        assert_eq!(upper, Rect { x: 44, y: 40, width: 66, height: 32 });
        assert_eq!(lower, Rect { x: 44, y: 76, width: 66, height: 32 });
    }

    #[test]
    fn test_cell_offsets_follow_stride() {
        let (upper, _) = cell_rects(3, 5);
        assert_eq!(upper.x, 44 + 71 * 5);
        assert_eq!(upper.y, 40 + 72 * 3);
    }

    #[test]
    fn test_sub_labels_share_column_and_never_overlap() {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (upper, lower) = cell_rects(row, col);
                assert_eq!(upper.x, lower.x);
                assert_eq!(upper.width, lower.width);
                // Lower box starts below the upper box's bottom edge.
                assert!(lower.y >= upper.y + upper.height);
            }
        }
    }

    #[test]
    fn test_distinct_cells_use_distinct_rectangles() {
        let mut seen: HashSet<Rect> = HashSet::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (upper, lower) = cell_rects(row, col);
                assert!(seen.insert(upper), "duplicate rect at ({row},{col})");
                assert!(seen.insert(lower), "duplicate rect at ({row},{col})");
            }
        }
        assert_eq!(seen.len(), (GRID_SIZE * GRID_SIZE * 2) as usize);
    }
}
