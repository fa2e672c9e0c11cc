use super::error::CaseError;
use crate::image::BinaryImage;
use log::debug;
use std::io::BufRead;

/// Largest grid, in cells, a case header may announce.
pub const MAX_CASE_CELLS: usize = 1 << 28;

/// Pulls cases out of a text stream.
///
/// Each case is a `rows cols` line followed by `rows` lines of `'0'`/`'1'`.
/// A `0 0` line, or the end of the stream where a dimension line is expected,
/// ends the input. Row lines shorter than `cols` are padded with background;
/// characters past `cols` are ignored. Headers announcing more than
/// [`MAX_CASE_CELLS`] cells are rejected before anything is allocated.
pub struct CaseReader<R> {
    input: R,
    line: String,
    line_no: usize,
    cases: usize,
    finished: bool,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_no: 0,
            cases: 0,
            finished: false,
        }
    }

    /// Number of cases read so far.
    pub fn cases_read(&self) -> usize {
        self.cases
    }

    /// Read the next case; `Ok(None)` once the input is exhausted.
    pub fn next_case(&mut self) -> Result<Option<BinaryImage>, CaseError> {
        if self.finished {
            return Ok(None);
        }
        let Some((rows, cols)) = self.read_dimensions()? else {
            self.finished = true;
            return Ok(None);
        };
        self.cases += 1;

        let mut image = BinaryImage::new(cols, rows);
        for y in 0..rows {
            if !self.read_line()? {
                return Err(CaseError::TruncatedCase {
                    case: self.cases,
                    expected: rows,
                    found: y,
                });
            }
            let mut width = 0;
            for (x, ch) in self.line.chars().enumerate() {
                if x == cols {
                    debug!("line {}: ignoring cells past column {cols}", self.line_no);
                    break;
                }
                match ch {
                    '0' => {}
                    '1' => image.set(x, y, true),
                    found => {
                        return Err(CaseError::InvalidPixel {
                            line: self.line_no,
                            column: x + 1,
                            found,
                        })
                    }
                }
                width = x + 1;
            }
            if width < cols {
                debug!(
                    "line {}: {width} of {cols} cells, padding with background",
                    self.line_no
                );
            }
        }
        debug!("case {}: loaded {rows}x{cols} grid", self.cases);
        Ok(Some(image))
    }

    fn read_dimensions(&mut self) -> Result<Option<(usize, usize)>, CaseError> {
        loop {
            if !self.read_line()? {
                return Ok(None);
            }
            if !self.line.trim().is_empty() {
                break;
            }
        }
        let malformed = || CaseError::MalformedDimensions {
            line: self.line_no,
            content: self.line.clone(),
        };
        let mut fields = self.line.split_whitespace();
        let (Some(rows), Some(cols), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        let (Ok(rows), Ok(cols)) = (rows.parse::<usize>(), cols.parse::<usize>()) else {
            return Err(malformed());
        };
        if rows == 0 && cols == 0 {
            return Ok(None);
        }
        match BinaryImage::cell_count(cols, rows) {
            Some(cells) if cells <= MAX_CASE_CELLS => Ok(Some((rows, cols))),
            _ => Err(CaseError::GridTooLarge {
                line: self.line_no,
                rows,
                cols,
                limit: MAX_CASE_CELLS,
            }),
        }
    }

    /// Read one line into `self.line` without its terminator; false at EOF.
    fn read_line(&mut self) -> Result<bool, CaseError> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        let trimmed = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(trimmed);
        Ok(true)
    }
}

impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<BinaryImage, CaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next_case();
        if next.is_err() {
            self.finished = true;
        }
        next.transpose()
    }
}
