use contour_tracer::config::image;
use contour_tracer::image::io::{load_binary_image, save_debug_mask, write_json_file};
use contour_tracer::ContourEngine;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = image::load_config(Path::new(&config_path))?;

    let grid = load_binary_image(
        &config.input,
        config.binarize.threshold,
        config.binarize.invert,
    )?
    .padded(config.binarize.border);

    let mut engine = ContourEngine::new(config.contour);
    let report = engine.process_with_diagnostics(grid);

    write_json_file(&config.output.report_json, &report)?;
    if let Some(mask_path) = &config.output.debug_mask {
        save_debug_mask(
            engine.image(),
            engine.marked(),
            report.boundary_points(),
            mask_path,
        )?;
        println!("Saved debug mask to {}", mask_path.display());
    }

    println!(
        "Traced {} object(s), {} above {} cells: {:?}",
        report.result.traced,
        report.result.sizes.len(),
        config.contour.min_object_size,
        report.result.sizes
    );
    println!(
        "Saved report to {} ({:.3} ms)",
        config.output.report_json.display(),
        report.timing.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: contour_image <config.json>".to_string()
}
