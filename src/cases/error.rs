use thiserror::Error;

/// Failures while reading a case stream or writing its report.
///
/// Every variant ends the run; cases already reported stay written.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `rows cols`, found {content:?}")]
    MalformedDimensions { line: usize, content: String },

    #[error("line {line}, column {column}: invalid pixel {found:?}, expected '0' or '1'")]
    InvalidPixel {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line}: {rows}x{cols} grid exceeds the {limit}-cell limit")]
    GridTooLarge {
        line: usize,
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("case {case}: expected {expected} rows, input ended after {found}")]
    TruncatedCase {
        case: usize,
        expected: usize,
        found: usize,
    },
}
