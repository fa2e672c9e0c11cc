use super::neighbors::NeighborRing;
use crate::image::BinaryImage;
use crate::types::GridPoint;
use log::{debug, warn};
use std::collections::HashSet;

/// Outcome of one boundary walk.
#[derive(Clone, Debug)]
pub struct BoundaryTrace {
    pub seed: GridPoint,
    /// Number of accepted boundary transitions. The closing step that
    /// re-enters the first transition is not counted.
    pub perimeter: usize,
    /// Distinct cells visited by the walk, seed included.
    pub boundary: HashSet<GridPoint>,
    /// Cells in visiting order, starting at the seed. A closed walk of a
    /// non-isolated object ends back on the seed.
    pub path: Vec<GridPoint>,
    /// True when the walk ended on the repeat of its start transition.
    pub closed: bool,
}

/// Walk the outline of the object containing `seed` with Moore-neighbour
/// tracing.
///
/// The first ring is entered from the cell west of the seed. Every later ring
/// is centred on the newest boundary point and entered from the ring cell that
/// preceded it (the backtrack). The walk ends when it is about to repeat its
/// first transition, i.e. when the first boundary point is found again while
/// standing on the seed. Every visited cell is added to `marked`.
///
/// Every transition is checked against the ones already made; the walk stops
/// on the first repeat, so the perimeter counts distinct transitions. With a
/// background west cell that repeat is the start transition. A seed entered
/// from a foreground west cell (an object running into the left image border)
/// can stop on another repeat, and `closed` is then false.
pub fn trace_boundary(
    image: &BinaryImage,
    marked: &mut HashSet<GridPoint>,
    seed: GridPoint,
) -> BoundaryTrace {
    let mut boundary = HashSet::from([seed]);
    let mut path = vec![seed];
    marked.insert(seed);

    let ring = NeighborRing::around(seed, seed.west()).expect("west cell is a Moore neighbour");
    let Some((idx, first)) = ring.find(|c| image.is_foreground(c)) else {
        debug!("trace {seed}: isolated cell");
        return BoundaryTrace {
            seed,
            perimeter: 0,
            boundary,
            path,
            closed: true,
        };
    };

    let mut perimeter = 1usize;
    let mut current = first;
    let mut backtrack = ring.preceding(idx);
    let mut transitions = HashSet::from([(seed, first)]);
    boundary.insert(first);
    path.push(first);
    marked.insert(first);

    let closed = loop {
        let ring = NeighborRing::around(current, backtrack)
            .expect("backtrack cell is adjacent to the current boundary point");
        // The point we arrived from is always foreground, so the scan cannot
        // come up empty.
        let (idx, next) = ring
            .find(|c| image.is_foreground(c))
            .expect("boundary point has a foreground neighbour");
        if !transitions.insert((current, next)) {
            break current == seed && next == first;
        }
        perimeter += 1;
        boundary.insert(next);
        path.push(next);
        marked.insert(next);
        backtrack = ring.preceding(idx);
        current = next;
    };

    if !closed {
        warn!("trace {seed}: walk never repeated its start transition ({perimeter} steps)");
    }
    debug!(
        "trace {seed}: perimeter {perimeter}, {} boundary cells",
        boundary.len()
    );
    BoundaryTrace {
        seed,
        perimeter,
        boundary,
        path,
        closed,
    }
}
