use crate::types::GridPoint;

/// Moore offsets `(d_row, d_col)` in clockwise order starting at north:
/// N, NE, E, SE, S, SW, W, NW.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// The eight cells around a centre in clockwise order.
///
/// A ring built with [`NeighborRing::around`] begins with the neighbour that
/// follows the entry cell and ends with the entry cell itself, so a scan over
/// [`cells`](Self::cells) examines the entry last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborRing {
    center: GridPoint,
    cells: [GridPoint; 8],
}

impl NeighborRing {
    /// Unrotated ring starting at the north neighbour.
    pub fn of(center: GridPoint) -> Self {
        let cells = MOORE_OFFSETS.map(|(dr, dc)| center.offset(dr, dc));
        Self { center, cells }
    }

    /// Ring around `center` rotated to start right after `entry`.
    ///
    /// Returns `None` when `entry` is not one of the eight neighbours.
    pub fn around(center: GridPoint, entry: GridPoint) -> Option<Self> {
        let mut ring = Self::of(center);
        let pos = ring.cells.iter().position(|&c| c == entry)?;
        ring.cells.rotate_left(pos + 1);
        Some(ring)
    }

    #[inline]
    pub fn center(&self) -> GridPoint {
        self.center
    }

    #[inline]
    pub fn cells(&self) -> &[GridPoint; 8] {
        &self.cells
    }

    /// Cell examined immediately before position `i`; for `i == 0` this wraps
    /// to the last cell (the entry of a rotated ring).
    #[inline]
    pub fn preceding(&self, i: usize) -> GridPoint {
        self.cells[(i + 7) % 8]
    }

    /// First cell in scan order satisfying `pred`, with its position.
    pub fn find<F>(&self, mut pred: F) -> Option<(usize, GridPoint)>
    where
        F: FnMut(GridPoint) -> bool,
    {
        self.cells
            .iter()
            .enumerate()
            .find(|&(_, &c)| pred(c))
            .map(|(i, &c)| (i, c))
    }
}
