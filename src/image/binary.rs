//! Owned binary raster in row-major layout (stride == width).
//!
//! One byte per cell: [`FOREGROUND`] (`1`) or [`BACKGROUND`] (`0`). Reads
//! outside the raster report background, which lets the tracer walk objects
//! that touch the image border without bounds checks at every call site.
use super::traits::ImageView;
use crate::types::GridPoint;
use std::fmt;

pub const FOREGROUND: u8 = 1;
pub const BACKGROUND: u8 = 0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryImage {
    /// Number of columns
    pub w: usize,
    /// Number of rows
    pub h: usize,
    /// Number of cells between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, each cell 0 or 1
    pub data: Vec<u8>,
}

impl BinaryImage {
    /// All-background raster of `w × h` cells.
    ///
    /// # Panics
    ///
    /// Panics if `w * h` overflows `usize`. Untrusted dimensions go through
    /// [`BinaryImage::cell_count`] first.
    pub fn new(w: usize, h: usize) -> Self {
        let cells = Self::cell_count(w, h).expect("grid dimensions overflow usize");
        Self {
            w,
            h,
            stride: w,
            data: vec![BACKGROUND; cells],
        }
    }

    /// Number of cells of a `w × h` raster, `None` on overflow.
    pub fn cell_count(w: usize, h: usize) -> Option<usize> {
        w.checked_mul(h)
    }

    /// Wrap raw cells; any non-zero byte becomes foreground.
    ///
    /// Returns `None` when `data` does not hold exactly `w * h` cells.
    pub fn from_raw(w: usize, h: usize, mut data: Vec<u8>) -> Option<Self> {
        if Self::cell_count(w, h) != Some(data.len()) {
            return None;
        }
        for v in &mut data {
            *v = u8::from(*v != 0);
        }
        Some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build from text rows where `'1'` is foreground and anything else is
    /// background. The width is the longest row; shorter rows are padded with
    /// background.
    pub fn from_text_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let w = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut img = Self::new(w, rows.len());
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().enumerate() {
                if ch == '1' {
                    img.set(x, y, true);
                }
            }
        }
        img
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, foreground: bool) {
        let i = self.idx(x, y);
        self.data[i] = u8::from(foreground);
    }

    /// Foreground test for any grid point; points outside the raster are
    /// background.
    #[inline]
    pub fn is_foreground(&self, p: GridPoint) -> bool {
        self.pixel_at(p) == Some(FOREGROUND)
    }

    pub fn foreground_count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v == FOREGROUND).count())
            .sum()
    }

    /// Copy surrounded by `border` cells of background on every side.
    pub fn padded(&self, border: usize) -> Self {
        let mut out = Self::new(self.w + 2 * border, self.h + 2 * border);
        for (y, row) in self.rows().enumerate() {
            let start = out.idx(border, y + border);
            out.data[start..start + self.w].copy_from_slice(row);
        }
        out
    }
}

impl ImageView for BinaryImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Renders the grid as lines of `0`/`1`, one line per row.
impl fmt::Display for BinaryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &v in row {
                f.write_str(if v == FOREGROUND { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
