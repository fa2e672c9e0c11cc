//! Structured, serialisable diagnostics for one scanned case.
//!
//! [`CaseDiagnostics`] is what `ContourEngine::process_with_diagnostics`
//! returns and what the `contour_image` tool writes as JSON: the plain
//! [`CaseResult`](crate::types::CaseResult) plus one [`ObjectTrace`] per seed,
//! including objects the size filter rejected.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::contour::{BoundaryTrace, SizeDecision};
use crate::types::{CaseResult, GridPoint};
use serde::{Deserialize, Serialize};

/// Everything recorded about one traced object.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTrace {
    pub seed: GridPoint,
    pub perimeter: usize,
    /// Foreground cells of the object (its full 8-connected region).
    pub area: usize,
    pub closed: bool,
    pub filter: SizeDecision,
    /// Boundary walk in visiting order.
    pub path: Vec<GridPoint>,
}

impl ObjectTrace {
    pub fn new(trace: BoundaryTrace, filter: SizeDecision, area: usize) -> Self {
        Self {
            seed: trace.seed,
            perimeter: trace.perimeter,
            area,
            closed: trace.closed,
            filter,
            path: trace.path,
        }
    }

    pub fn accepted(&self) -> bool {
        self.filter.accepted.is_some()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub foreground: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDiagnostics {
    pub input: InputDescriptor,
    pub result: CaseResult,
    pub objects: Vec<ObjectTrace>,
    pub timing: TimingBreakdown,
}

impl CaseDiagnostics {
    /// Objects that passed the size filter, in discovery order.
    pub fn accepted(&self) -> impl Iterator<Item = &ObjectTrace> {
        self.objects.iter().filter(|o| o.accepted())
    }

    /// Every boundary cell of every traced object.
    pub fn boundary_points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.objects.iter().flat_map(|o| o.path.iter().copied())
    }
}
