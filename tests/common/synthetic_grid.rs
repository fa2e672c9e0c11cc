use contour_tracer::image::BinaryImage;

/// Background grid with solid rectangles `(x, y, w, h)` painted in.
pub fn blocks(width: usize, height: usize, rects: &[(usize, usize, usize, usize)]) -> BinaryImage {
    let mut img = BinaryImage::new(width, height);
    for &(x0, y0, w, h) in rects {
        assert!(x0 + w <= width && y0 + h <= height, "rectangle out of bounds");
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.set(x, y, true);
            }
        }
    }
    img
}

/// `n × n` lattice of `size × size` squares separated by `gap` background
/// cells, with a `gap`-wide background frame.
pub fn square_lattice(n: usize, size: usize, gap: usize) -> BinaryImage {
    assert!(size > 0 && gap > 0, "size and gap must be positive");
    let side = n * size + (n + 1) * gap;
    let mut rects = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            rects.push((gap + i * (size + gap), gap + j * (size + gap), size, size));
        }
    }
    blocks(side, side, &rects)
}

/// Deterministic pseudo-random grid with a background frame.
pub fn noise(width: usize, height: usize, fill_per_mille: u32, mut state: u64) -> BinaryImage {
    let mut img = BinaryImage::new(width, height);
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if ((state >> 33) % 1000) < u64::from(fill_per_mille) {
                img.set(x, y, true);
            }
        }
    }
    img
}

/// Serialise grids into the multi-case text format, with terminator.
pub fn case_stream(grids: &[BinaryImage]) -> String {
    let mut text = String::new();
    for grid in grids {
        text.push_str(&format!("{} {}\n", grid.h, grid.w));
        text.push_str(&grid.to_string());
    }
    text.push_str("0 0\n");
    text
}
