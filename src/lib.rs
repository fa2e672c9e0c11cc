#![doc = include_str!("../README.md")]

pub mod cases;
pub mod config;
pub mod contour;
pub mod diagnostics;
pub mod image;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::cases::{run_cases, CaseError, CaseReader, CaseReport};
pub use crate::contour::{trace_contours, ContourEngine, ContourOptions};
pub use crate::diagnostics::CaseDiagnostics;
pub use crate::types::{CaseResult, GridPoint};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use contour_tracer::prelude::*;
///
/// let grid = BinaryImage::from_text_rows(&["00000", "01110", "01110", "01110", "00000"]);
/// let mut engine = ContourEngine::new(ContourOptions::default());
/// let result = engine.process(grid);
/// assert_eq!(result.sizes, vec![8]);
/// ```
pub mod prelude {
    pub use crate::image::{BinaryImage, ImageView};
    pub use crate::{CaseResult, ContourEngine, ContourOptions, GridPoint};
}
