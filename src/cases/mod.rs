//! Text front end: multi-case input stream in, per-case report out.
//!
//! Input is a sequence of `rows cols` headers each followed by `rows` lines of
//! `'0'`/`'1'`, terminated by `0 0` (or end of input). Output is one
//! `Case <n>` block per case with the ascending perimeters or
//! `No objects found`, blocks separated by a blank line.
//!
//! ```
//! use contour_tracer::cases::run_cases;
//! use contour_tracer::ContourOptions;
//!
//! let input = "5 5\n00000\n01110\n01110\n01110\n00000\n0 0\n";
//! let mut out = Vec::new();
//! let cases = run_cases(input.as_bytes(), &mut out, ContourOptions::default()).unwrap();
//! assert_eq!(cases, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "Case 1\n8\n");
//! ```

mod error;
mod reader;
mod report;

pub use error::CaseError;
pub use reader::{CaseReader, MAX_CASE_CELLS};
pub use report::{dump_grid, write_report, write_reports, CaseReport, NO_OBJECTS};

use crate::contour::{ContourEngine, ContourOptions};
use crate::image::BinaryImage;
use std::io::{self, BufRead, Write};

/// Process every case of `input` and stream the reports to `output`.
/// Returns the number of cases processed.
pub fn run_cases<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: ContourOptions,
) -> Result<usize, CaseError> {
    run_cases_with(input, output, options, |_, _| Ok(()))
}

/// Like [`run_cases`], calling `inspect(ordinal, grid)` on every grid before
/// it is scanned (used for debug dumps).
pub fn run_cases_with<R, W, F>(
    input: R,
    output: &mut W,
    options: ContourOptions,
    mut inspect: F,
) -> Result<usize, CaseError>
where
    R: BufRead,
    W: Write,
    F: FnMut(usize, &BinaryImage) -> io::Result<()>,
{
    let mut reader = CaseReader::new(input);
    let mut engine = ContourEngine::new(options);
    while let Some(image) = reader.next_case()? {
        let ordinal = reader.cases_read();
        inspect(ordinal, &image)?;
        let result = engine.process(image);
        write_report(output, &CaseReport::new(ordinal, result.sizes))?;
    }
    output.flush()?;
    Ok(reader.cases_read())
}
