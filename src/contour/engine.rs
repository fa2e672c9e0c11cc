use super::filter::apply_size_filter;
use super::neighbors::NeighborRing;
use super::options::ContourOptions;
use super::tracer::trace_boundary;
use crate::diagnostics::{CaseDiagnostics, InputDescriptor, ObjectTrace, TimingBreakdown};
use crate::image::{BinaryImage, FOREGROUND};
use crate::types::{CaseResult, GridPoint};
use log::debug;
use std::collections::HashSet;
use std::time::Instant;

/// Stateful scanner for one case at a time.
///
/// Owns the grid, the marked set and the measurements of the current case.
/// [`load`](Self::load) replaces the grid and clears everything else, so no
/// state leaks from one case into the next.
pub struct ContourEngine {
    options: ContourOptions,
    image: BinaryImage,
    marked: HashSet<GridPoint>,
    sizes: Vec<usize>,
    objects: Vec<ObjectTrace>,
    stack: Vec<GridPoint>,
}

impl ContourEngine {
    pub fn new(options: ContourOptions) -> Self {
        Self {
            options,
            image: BinaryImage::default(),
            marked: HashSet::new(),
            sizes: Vec::new(),
            objects: Vec::new(),
            stack: Vec::with_capacity(64),
        }
    }

    pub fn options(&self) -> &ContourOptions {
        &self.options
    }

    /// Start a new case with `image`.
    pub fn load(&mut self, image: BinaryImage) {
        self.image = image;
        self.marked.clear();
        self.sizes.clear();
        self.objects.clear();
    }

    pub fn image(&self) -> &BinaryImage {
        &self.image
    }

    pub fn marked(&self) -> &HashSet<GridPoint> {
        &self.marked
    }

    pub fn marked_len(&self) -> usize {
        self.marked.len()
    }

    /// Objects traced so far in this case, rejected ones included.
    pub fn objects(&self) -> &[ObjectTrace] {
        &self.objects
    }

    /// Raster-scan the interior of the loaded grid and trace every unmarked
    /// foreground cell found. Returns all qualifying perimeters of the case,
    /// ascending. Scanning the same case again finds no new seed.
    pub fn scan(&mut self) -> Vec<usize> {
        let (w, h) = (self.image.w, self.image.h);
        if w >= 3 && h >= 3 {
            for y in 1..h - 1 {
                let mut x = 1;
                while x < w - 1 {
                    if self.image.get(x, y) != FOREGROUND {
                        x += 1;
                        continue;
                    }
                    let p = GridPoint::new(y as i32, x as i32);
                    if !self.marked.contains(&p) {
                        self.trace_object(p);
                        x += 1;
                    } else if self.options.fast_skip {
                        x = self.skip_claimed_run(x, y);
                    } else {
                        x += 1;
                    }
                }
            }
        }
        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        sizes
    }

    /// Load `image`, scan it and summarise the case.
    pub fn process(&mut self, image: BinaryImage) -> CaseResult {
        let start = Instant::now();
        self.load(image);
        let sizes = self.scan();
        CaseResult {
            sizes,
            traced: self.objects.len(),
            marked: self.marked.len(),
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Same as [`process`](Self::process) but keeps per-object traces and
    /// stage timings.
    pub fn process_with_diagnostics(&mut self, image: BinaryImage) -> CaseDiagnostics {
        let start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let input = InputDescriptor {
            width: image.w,
            height: image.h,
            foreground: image.foreground_count(),
        };
        timing.measure("load", || self.load(image));
        let sizes = timing.measure("scan", || self.scan());
        timing.total_ms = start.elapsed().as_secs_f64() * 1000.0;
        CaseDiagnostics {
            input,
            result: CaseResult {
                sizes,
                traced: self.objects.len(),
                marked: self.marked.len(),
                latency_ms: timing.total_ms,
            },
            objects: self.objects.clone(),
            timing,
        }
    }

    fn trace_object(&mut self, seed: GridPoint) {
        let mut trace = trace_boundary(&self.image, &mut self.marked, seed);
        let decision = apply_size_filter(
            &self.image,
            &mut trace.boundary,
            trace.perimeter,
            self.options.min_object_size,
        );
        let area = self.claim_region(seed);
        match decision.accepted {
            Some(perimeter) => {
                debug!("object at {seed}: perimeter {perimeter}, area {area}");
                self.sizes.push(perimeter);
            }
            None => debug!(
                "object at {seed}: discarded, {} cells < {}",
                decision.counted_cells, self.options.min_object_size
            ),
        }
        self.objects.push(ObjectTrace::new(trace, decision, area));
    }

    /// Mark the whole 8-connected foreground region of `seed` so none of its
    /// cells can seed another trace. Returns the region size.
    fn claim_region(&mut self, seed: GridPoint) -> usize {
        let mut region = HashSet::from([seed]);
        self.stack.clear();
        self.stack.push(seed);
        while let Some(p) = self.stack.pop() {
            for &n in NeighborRing::of(p).cells() {
                if self.image.is_foreground(n) && region.insert(n) {
                    self.stack.push(n);
                }
            }
        }
        let area = region.len();
        self.marked.extend(region);
        area
    }

    /// Column just past the foreground run that starts at the claimed cell
    /// `(x, y)`, capped at the last interior column.
    fn skip_claimed_run(&self, mut x: usize, y: usize) -> usize {
        let end = self.image.w - 1;
        while x < end && self.image.get(x, y) == FOREGROUND {
            debug_assert!(
                self.marked
                    .contains(&GridPoint::new(y as i32, x as i32)),
                "foreground run next to a claimed cell must be claimed"
            );
            x += 1;
        }
        x
    }
}

impl Default for ContourEngine {
    fn default() -> Self {
        Self::new(ContourOptions::default())
    }
}
