//! Arctan magic-square verifier.
//!
//! The scanned board is a 16×16 magic square of arctangents: every cell
//! holds a proper fraction `numer/denom` in lowest terms, the integers 1
//! through 512 each appear exactly once across the board, and the
//! arctangents along every row, every column, and both diagonals sum to
//! exactly 2π. This binary consumes the table the scanner writes (default
//! `atan.txt`) and checks all of those properties with exact arithmetic.
//!
//! The line check keeps the running sum as `n * π/2 + atan(x)` with
//! `0 <= atan(x) < π/2`, folding each cell in via the tangent addition
//! formula over big rationals, so no floating point is involved.

use anyhow::{ensure, Context, Result};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::path::PathBuf;

/// Rows/columns of the board.
const GRID_SIZE: usize = 16;

const DEFAULT_TABLE: &str = "atan.txt";

type Matrix = Vec<Vec<(i64, i64)>>;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE));

    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read board table {}", path.display()))?;

    let mat = parse_table(&input)?;

    verify_numbers(&mat)?;

    for r in 0..GRID_SIZE {
        verify_line(&mat, (0..GRID_SIZE).map(|c| (r, c)))
            .with_context(|| format!("row {} is not an arctan line", r))?;
    }
    for c in 0..GRID_SIZE {
        verify_line(&mat, (0..GRID_SIZE).map(|r| (r, c)))
            .with_context(|| format!("column {} is not an arctan line", c))?;
    }
    verify_line(&mat, (0..GRID_SIZE).map(|i| (i, i)))
        .context("main diagonal is not an arctan line")?;
    verify_line(&mat, (0..GRID_SIZE).map(|i| (i, GRID_SIZE - 1 - i)))
        .context("anti-diagonal is not an arctan line")?;

    println!("board verified: every line's arctangents sum to 2*pi");

    Ok(())
}

/// Parses the scanner's table: 16 lines of 16 space-separated
/// `<numer>/<denom>` cells. A `?` from an unreadable label fails here with
/// the offending token in the message.
fn parse_table(input: &str) -> Result<Matrix> {
    let mut mat = vec![];

    for (line_no, line) in input.lines().enumerate() {
        let mut row = vec![];

        for token in line.split_ascii_whitespace() {
            let (numer, denom) = token
                .split_once('/')
                .with_context(|| format!("malformed cell {:?} on line {}", token, line_no + 1))?;
            let numer: i64 = numer
                .parse()
                .with_context(|| format!("bad numerator in cell {:?} on line {}", token, line_no + 1))?;
            let denom: i64 = denom
                .parse()
                .with_context(|| format!("bad denominator in cell {:?} on line {}", token, line_no + 1))?;
            row.push((numer, denom));
        }
        ensure!(
            row.len() == GRID_SIZE,
            "line {} has {} cells, expected {}",
            line_no + 1,
            row.len(),
            GRID_SIZE
        );

        mat.push(row);
    }
    ensure!(
        mat.len() == GRID_SIZE,
        "table has {} lines, expected {}",
        mat.len(),
        GRID_SIZE
    );

    Ok(mat)
}

/// Checks that every cell is a proper fraction in lowest terms and that the
/// integers 1..=512 each appear exactly once across the board.
fn verify_numbers(mat: &Matrix) -> Result<()> {
    let mut xs = vec![];

    for &(numer, denom) in mat.iter().flatten() {
        ensure!(
            num_integer::gcd(numer, denom) == 1,
            "{}/{} is not in lowest terms",
            numer,
            denom
        );
        ensure!(numer < denom, "{}/{} is not a proper fraction", numer, denom);

        xs.push(numer);
        xs.push(denom);
    }

    xs.sort_unstable();
    ensure!(
        xs.into_iter().eq(1..=512i64),
        "board does not use each of 1..=512 exactly once"
    );

    Ok(())
}

/// Running sum of arctangents held exactly as `quarter_turns * pi/2 + atan(x)`.
///
/// Invariant: `0 <= atan(x) < pi/2`, i.e. `x >= 0`.
struct AtanSum {
    quarter_turns: u32,
    x: BigRational,
}

impl AtanSum {
    fn new() -> Self {
        AtanSum {
            quarter_turns: 0,
            x: BigRational::zero(),
        }
    }

    /// True iff the sum is exactly 2*pi.
    fn is_tau(&self) -> bool {
        self.quarter_turns == 4 && self.x.is_zero()
    }

    /// Adds `atan(y)` for `y >= 0`.
    ///
    /// With A = atan(x) and B = atan(y), both in [0, pi/2):
    /// `x*y == 1` means A + B == pi/2 exactly. Otherwise
    /// tan(A+B) = (x+y) / (1 - x*y); a negative value means
    /// pi/2 < A+B < pi, so a quarter turn is carried and the residual is
    /// tan(A+B - pi/2) = -1/tan(A+B).
    fn add(&mut self, y: BigRational) {
        let prod = &self.x * &y;

        if prod == BigRational::one() {
            self.quarter_turns += 1;
            self.x = BigRational::zero();
            return;
        }

        let tan_sum = (&self.x + &y) / (BigRational::one() - prod);

        if tan_sum.is_negative() {
            self.quarter_turns += 1;
            self.x = -tan_sum.recip();
        } else {
            self.x = tan_sum;
        }
    }
}

/// Checks that the arctangents of the given cells sum to exactly 2*pi.
fn verify_line(mat: &Matrix, cells: impl IntoIterator<Item = (usize, usize)>) -> Result<()> {
    let mut sum = AtanSum::new();

    for (r, c) in cells {
        let (numer, denom) = mat[r][c];
        sum.add(BigRational::new(numer.into(), denom.into()));
    }

    ensure!(
        sum.is_tau(),
        "arctangents sum to {} quarter turns plus atan({})",
        sum.quarter_turns,
        sum.x
    );

    Ok(())
}
