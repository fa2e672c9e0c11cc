use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell coordinate in a binary grid: `row` grows downward, `col` rightward.
///
/// Signed so that neighbours of border cells can be expressed; anything
/// outside the grid reads as background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The cell immediately to the west (same row, column − 1).
    #[inline]
    pub const fn west(self) -> Self {
        self.offset(0, -1)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Sorted perimeter measurements of one case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Perimeter step counts of the qualifying objects, ascending.
    pub sizes: Vec<usize>,
    /// Objects traced, including those rejected by the size filter.
    pub traced: usize,
    /// Marked cells at the end of the scan.
    pub marked: usize,
    pub latency_ms: f64,
}

impl CaseResult {
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
