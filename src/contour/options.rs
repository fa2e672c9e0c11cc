use serde::{Deserialize, Serialize};

/// Options controlling the scan and the object size filter.
///
/// - `min_object_size`: objects whose (possibly expanded) boundary covers
///   fewer cells are discarded as noise.
/// - `fast_skip`: when the scanner lands on an already claimed cell it jumps
///   over the rest of the foreground run in that row. The skip stops at the
///   last interior column and never carries over to the next row. Results
///   are identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourOptions {
    /// Minimum number of distinct cells for an object to be reported.
    pub min_object_size: usize,
    /// Skip runs of claimed foreground cells during the raster scan.
    pub fast_skip: bool,
}

pub const DEFAULT_MIN_OBJECT_SIZE: usize = 5;

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            min_object_size: DEFAULT_MIN_OBJECT_SIZE,
            fast_skip: true,
        }
    }
}

impl ContourOptions {
    pub fn with_min_object_size(mut self, min_object_size: usize) -> Self {
        self.min_object_size = min_object_size;
        self
    }

    pub fn with_fast_skip(mut self, fast_skip: bool) -> Self {
        self.fast_skip = fast_skip;
        self
    }
}
