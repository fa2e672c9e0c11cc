use crate::types::GridPoint;

/// Read access to a row-major raster addressed by `(x, y)` = `(col, row)`.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// True when `p` addresses a cell inside the raster.
    #[inline]
    fn contains(&self, p: GridPoint) -> bool {
        p.row >= 0
            && p.col >= 0
            && (p.row as usize) < self.height()
            && (p.col as usize) < self.width()
    }

    /// Pixel at a grid point, `None` outside the raster.
    #[inline]
    fn pixel_at(&self, p: GridPoint) -> Option<Self::Pixel> {
        if self.contains(p) {
            Some(self.row(p.row as usize)[p.col as usize])
        } else {
            None
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
