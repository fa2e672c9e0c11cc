use contour_tracer::image::BinaryImage;
use contour_tracer::{ContourEngine, ContourOptions};

fn main() {
    env_logger::init();

    // Demo stub: a square, a bar and a speck of noise on a bordered grid
    let grid = BinaryImage::from_text_rows(&[
        "000000000000",
        "011100000000",
        "011100111110",
        "011100111110",
        "000000000000",
        "000010000000",
        "000000000000",
    ]);

    let mut engine = ContourEngine::new(ContourOptions::default());
    let res = engine.process(grid);
    println!(
        "objects={} traced={} sizes={:?} latency_ms={:.3}",
        res.sizes.len(),
        res.traced,
        res.sizes,
        res.latency_ms
    );
}
