use super::neighbors::NeighborRing;
use crate::image::BinaryImage;
use crate::types::GridPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Verdict of the size filter for one traced object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDecision {
    /// Distinct cells visited by the boundary walk.
    pub boundary_cells: usize,
    /// Cell count compared against the threshold (after expansion, if any).
    pub counted_cells: usize,
    /// Whether the single-pass neighbour expansion ran.
    pub expanded: bool,
    /// Reported measurement: the perimeter, when the object qualifies.
    pub accepted: Option<usize>,
}

/// Decide whether a traced object is large enough to report.
///
/// Small walks (at most `threshold` distinct cells) get one expansion pass
/// that adds the foreground neighbours of every boundary cell, catching cells
/// the walk never needed to visit. The pass does not chain: cells added by it
/// are not expanded themselves. The object qualifies when the resulting set
/// holds at least `threshold` cells, and then its `perimeter` is reported.
///
/// `boundary` is extended in place by the expansion.
pub fn apply_size_filter(
    image: &BinaryImage,
    boundary: &mut HashSet<GridPoint>,
    perimeter: usize,
    threshold: usize,
) -> SizeDecision {
    let boundary_cells = boundary.len();
    let expanded = boundary_cells <= threshold;
    if expanded {
        expand_once(image, boundary);
    }
    let counted_cells = boundary.len();
    SizeDecision {
        boundary_cells,
        counted_cells,
        expanded,
        accepted: (counted_cells >= threshold).then_some(perimeter),
    }
}

/// Add every in-image foreground neighbour of the current cells; returns the
/// number of cells added.
pub fn expand_once(image: &BinaryImage, cells: &mut HashSet<GridPoint>) -> usize {
    let snapshot: Vec<GridPoint> = cells.iter().copied().collect();
    let mut added = 0;
    for p in snapshot {
        for &n in NeighborRing::of(p).cells() {
            if image.is_foreground(n) && cells.insert(n) {
                added += 1;
            }
        }
    }
    added
}
