use contour_tracer::cases::{dump_grid, run_cases_with};
use contour_tracer::ContourOptions;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut dump = false;
    let mut paths = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dump" => dump = true,
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }
    let input_path = paths.first().ok_or_else(usage)?;
    if paths.len() > 2 {
        return Err(usage());
    }

    let input: Box<dyn BufRead> = if input_path == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(input_path)
            .map_err(|e| format!("Failed to open {input_path}: {e}"))?;
        Box::new(BufReader::new(file))
    };
    let mut output: Box<dyn Write> = match paths.get(1) {
        Some(path) => {
            let file =
                File::create(path).map_err(|e| format!("Failed to create {path}: {e}"))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let cases = run_cases_with(input, &mut output, ContourOptions::default(), |_, grid| {
        if dump {
            dump_grid(&mut io::stderr().lock(), grid)?;
        }
        Ok(())
    })
    .map_err(|e| e.to_string())?;
    log::info!("processed {cases} case(s)");

    Ok(())
}

fn usage() -> String {
    "Usage: contour_cases <input|-> [output] [--dump]".to_string()
}
