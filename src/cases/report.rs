use crate::image::BinaryImage;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

pub const NO_OBJECTS: &str = "No objects found";

/// Report block of one case: `Case <n>` followed by the measurement line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// 1-based position of the case in the input.
    pub ordinal: usize,
    /// Qualifying perimeters, ascending.
    pub sizes: Vec<usize>,
}

impl CaseReport {
    pub fn new(ordinal: usize, mut sizes: Vec<usize>) -> Self {
        sizes.sort_unstable();
        Self { ordinal, sizes }
    }

    /// Space-separated sizes, or [`NO_OBJECTS`] when there are none.
    pub fn sizes_line(&self) -> String {
        if self.sizes.is_empty() {
            return NO_OBJECTS.to_string();
        }
        self.sizes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Case {}", self.ordinal)?;
        write!(f, "{}", self.sizes_line())
    }
}

/// Write one report, preceded by a blank separator line unless it is the
/// first case.
pub fn write_report<W: Write>(out: &mut W, report: &CaseReport) -> io::Result<()> {
    if report.ordinal > 1 {
        writeln!(out)?;
    }
    writeln!(out, "{report}")
}

pub fn write_reports<W: Write>(out: &mut W, reports: &[CaseReport]) -> io::Result<()> {
    for report in reports {
        write_report(out, report)?;
    }
    Ok(())
}

/// Debug dump of a loaded grid with its dimensions.
pub fn dump_grid<W: Write>(out: &mut W, image: &BinaryImage) -> io::Result<()> {
    const RULE: &str = "----------------------------";
    writeln!(out, "Rows: {} Cols: {}", image.h, image.w)?;
    writeln!(out, "{RULE}")?;
    write!(out, "{image}")?;
    writeln!(out, "{RULE}")
}
