use super::*;
use crate::image::BinaryImage;
use crate::types::{CaseResult, GridPoint};
use std::collections::HashSet;

fn grid(rows: &[&str]) -> BinaryImage {
    BinaryImage::from_text_rows(rows)
}

/// Solid `w × h` block surrounded by `pad` cells of background.
fn block(w: usize, h: usize, pad: usize) -> BinaryImage {
    let mut img = BinaryImage::new(w + 2 * pad, h + 2 * pad);
    for y in pad..pad + h {
        for x in pad..pad + w {
            img.set(x, y, true);
        }
    }
    img
}

fn scan_both_ways(img: &BinaryImage) -> (Vec<usize>, Vec<usize>) {
    let fast = trace_contours(img, ContourOptions::default().with_fast_skip(true));
    let plain = trace_contours(img, ContourOptions::default().with_fast_skip(false));
    (fast, plain)
}

const RING_WITH_DOT: [&str; 11] = [
    "00000000000",
    "01111111110",
    "01111111110",
    "01100000110",
    "01100000110",
    "01100100110",
    "01100000110",
    "01100000110",
    "01111111110",
    "01111111110",
    "00000000000",
];

const FIGURE_EIGHT: [&str; 7] = [
    "0000000", "0111000", "0101000", "0111110", "0001010", "0001110", "0000000",
];

#[test]
fn solid_square_example() {
    let img = grid(&["00000", "01110", "01110", "01110", "00000"]);
    assert_eq!(trace_contours(&img, ContourOptions::default()), vec![8]);
}

#[test]
fn empty_grid_has_no_objects() {
    let mut engine = ContourEngine::default();
    let result = engine.process(BinaryImage::new(6, 4));
    assert!(result.is_empty());
    assert_eq!(result.traced, 0);
    assert_eq!(result.marked, 0);
}

#[test]
fn degenerate_grids_have_no_interior() {
    let mut engine = ContourEngine::default();
    assert!(engine.process(grid(&["11111", "11111"])).is_empty());
    assert!(engine.process(grid(&["11", "11", "11"])).is_empty());
    assert!(engine.process(BinaryImage::new(0, 0)).is_empty());
}

#[test]
fn isolated_pixel_is_traced_then_discarded() {
    let mut engine = ContourEngine::default();
    let result = engine.process(grid(&["000", "010", "000"]));
    assert!(result.is_empty());
    assert_eq!(result.traced, 1);
    let object = &engine.objects()[0];
    assert_eq!(object.perimeter, 0);
    assert_eq!(object.path, vec![GridPoint::new(1, 1)]);
    assert!(!object.accepted());
}

#[test]
fn rectangle_perimeter_matches_closed_form() {
    for w in 3..=7 {
        for h in 3..=7 {
            let img = block(w, h, 2);
            assert_eq!(
                trace_contours(&img, ContourOptions::default()),
                vec![2 * (w + h) - 4],
                "{w}x{h} block"
            );
        }
    }
}

#[test]
fn two_blobs_are_reported_ascending() {
    let img = grid(&[
        "0000000000",
        "0111110000",
        "0111110000",
        "0111110000",
        "0111110000",
        "0000000000",
        "0000001110",
        "0000001110",
        "0000001110",
        "0000000000",
    ]);
    let mut engine = ContourEngine::default();
    let result = engine.process(img);
    assert_eq!(result.sizes, vec![8, 14]);
    // Discovery order is raster order; only the report is sorted.
    let perimeters: Vec<usize> = engine.objects().iter().map(|o| o.perimeter).collect();
    assert_eq!(perimeters, vec![14, 8]);
}

#[test]
fn walk_visits_square_clockwise_and_returns_to_seed() {
    let img = grid(&["00000", "01110", "01110", "01110", "00000"]);
    let mut marked = HashSet::new();
    let trace = trace_boundary(&img, &mut marked, GridPoint::new(1, 1));
    let expected: Vec<GridPoint> = [
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 3),
        (3, 3),
        (3, 2),
        (3, 1),
        (2, 1),
        (1, 1),
    ]
    .into_iter()
    .map(GridPoint::from)
    .collect();
    assert_eq!(trace.path, expected);
    assert_eq!(trace.perimeter, 8);
    assert!(trace.closed);
    assert_eq!(trace.boundary.len(), 8);
    assert!(!trace.boundary.contains(&GridPoint::new(2, 2)));
    assert_eq!(marked, trace.boundary);
}

#[test]
fn walk_closes_for_every_approach_direction() {
    let seed = GridPoint::new(2, 2);
    for &(dr, dc) in MOORE_OFFSETS.iter() {
        let mut img = BinaryImage::new(5, 5);
        img.set(2, 2, true);
        img.set((2 + dc) as usize, (2 + dr) as usize, true);
        let neighbour = seed.offset(dr, dc);

        let mut marked = HashSet::new();
        let trace = trace_boundary(&img, &mut marked, seed);
        assert!(trace.closed, "neighbour at ({dr}, {dc})");
        assert_eq!(trace.perimeter, 2, "neighbour at ({dr}, {dc})");
        assert_eq!(trace.path, vec![seed, neighbour, seed]);
        assert_eq!(marked.len(), 2);
    }
}

#[test]
fn figure_eight_is_walked_through_the_waist() {
    let img = grid(&FIGURE_EIGHT);
    let mut marked = HashSet::new();
    let trace = trace_boundary(&img, &mut marked, GridPoint::new(1, 1));
    assert!(trace.closed);
    assert_eq!(trace.perimeter, 14);
    // Both loops are walked; the shared corner (3, 3) is cut diagonally.
    assert!(trace.boundary.contains(&GridPoint::new(2, 1)));
    assert!(trace.boundary.contains(&GridPoint::new(5, 5)));
    assert!(!trace.boundary.contains(&GridPoint::new(3, 3)));
    assert_eq!(trace.path.last(), Some(&GridPoint::new(1, 1)));

    let mut engine = ContourEngine::default();
    let result = engine.process(img);
    assert_eq!(result.sizes, vec![14]);
    assert_eq!(engine.objects()[0].area, 15);
}

#[test]
fn diagonal_contact_joins_objects() {
    let img = grid(&[
        "00000000", "01110000", "01110000", "01110000", "00001110", "00001110", "00001110",
        "00000000",
    ]);
    let mut engine = ContourEngine::default();
    let result = engine.process(img);
    assert_eq!(result.sizes, vec![18]);
    assert_eq!(result.traced, 1);
}

#[test]
fn hole_and_its_contents_are_handled_once() {
    let mut engine = ContourEngine::default();
    let result = engine.process(grid(&RING_WITH_DOT));
    // The ring's inner outline is never a seed; the dot inside is traced and
    // discarded as too small.
    assert_eq!(result.sizes, vec![32]);
    assert_eq!(result.traced, 2);
    assert_eq!(engine.objects()[0].area, 56);
    assert_eq!(engine.objects()[1].seed, GridPoint::new(5, 5));
}

#[test]
fn concave_shapes_are_single_objects() {
    let u = grid(&["0000000", "0110110", "0110110", "0111110", "0000000"]);
    assert_eq!(trace_contours(&u, ContourOptions::default()), vec![14]);

    let comb = grid(&[
        "000000000",
        "011111110",
        "010101010",
        "010101010",
        "000000000",
    ]);
    assert_eq!(trace_contours(&comb, ContourOptions::default()), vec![22]);
}

#[test]
fn thin_lines_walk_out_and_back() {
    let line = grid(&["000000000", "011111110", "000000000"]);
    assert_eq!(trace_contours(&line, ContourOptions::default()), vec![12]);

    let vertical = grid(&["000", "010", "010", "010", "010", "010", "000"]);
    assert_eq!(trace_contours(&vertical, ContourOptions::default()), vec![8]);
}

#[test]
fn short_diagonal_is_below_threshold() {
    let diagonal = grid(&["000000", "010000", "001000", "000100", "000010", "000000"]);
    let mut engine = ContourEngine::default();
    let result = engine.process(diagonal);
    assert!(result.is_empty());
    let object = &engine.objects()[0];
    assert_eq!(object.perimeter, 6);
    assert_eq!(object.filter.counted_cells, 4);

    let lowered = ContourOptions::default().with_min_object_size(4);
    let anti = grid(&["000000", "000010", "000100", "001000", "010000", "000000"]);
    assert_eq!(trace_contours(&anti, lowered), vec![6]);
}

#[test]
fn expansion_lets_plus_shape_qualify() {
    let plus = grid(&["00000", "00100", "01110", "00100", "00000"]);
    let mut engine = ContourEngine::default();
    let result = engine.process(plus);
    assert_eq!(result.sizes, vec![4]);
    let decision = engine.objects()[0].filter;
    assert_eq!(decision.boundary_cells, 4);
    assert!(decision.expanded);
    assert_eq!(decision.counted_cells, 5);
}

#[test]
fn fast_skip_does_not_change_results() {
    let samples: Vec<BinaryImage> = vec![
        grid(&RING_WITH_DOT),
        grid(&FIGURE_EIGHT),
        grid(&["0000000", "0110110", "0110110", "0111110", "0000000"]),
        grid(&["11100", "11100", "11100", "00000"]),
        block(6, 4, 1),
    ];
    for img in &samples {
        let (fast, plain) = scan_both_ways(img);
        assert_eq!(fast, plain, "grid:\n{img}");
    }
}

#[test]
fn marked_set_is_bounded_by_foreground() {
    let img = grid(&RING_WITH_DOT);
    let foreground = img.foreground_count();
    let mut engine = ContourEngine::default();
    engine.load(img);
    let first = engine.scan();
    assert!(engine.marked_len() <= foreground);
    assert_eq!(engine.marked_len(), foreground);
    assert!(engine.marked().iter().all(|&p| engine.image().is_foreground(p)));

    let traced = engine.objects().len();
    let second = engine.scan();
    assert_eq!(first, second, "rescan must not add objects");
    assert_eq!(engine.objects().len(), traced);
}

#[test]
fn load_resets_case_state() {
    let mut engine = ContourEngine::default();
    let first = engine.process(block(3, 3, 1));
    assert_eq!(first.sizes, vec![8]);
    let second = engine.process(grid(&["000", "000", "000"]));
    assert!(second.is_empty());
    assert_eq!(engine.marked_len(), 0);
    assert!(engine.objects().is_empty());
}

#[test]
fn object_touching_left_border_still_terminates() {
    let img = grid(&["11100", "11100", "11100", "00000"]);
    let mut engine = ContourEngine::default();
    let result = engine.process(img);
    assert_eq!(result.traced, 1);
    assert_eq!(result.marked, 9);
    let object = &engine.objects()[0];
    assert!(!object.closed);
    assert_eq!(object.perimeter, 9);
}

#[test]
fn diagnostics_cover_every_seed() {
    let mut engine = ContourEngine::default();
    let diagnostics = engine.process_with_diagnostics(grid(&RING_WITH_DOT));
    assert_eq!(diagnostics.input.foreground, 57);
    assert_eq!(diagnostics.objects.len(), 2);
    assert_eq!(diagnostics.accepted().count(), 1);
    assert_eq!(diagnostics.result.sizes, vec![32]);
    let labels: Vec<&str> = diagnostics
        .timing
        .stages
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(labels, vec!["load", "scan"]);
    assert!(diagnostics.boundary_points().count() >= 33);
}

#[test]
fn process_reports_sizes_counts_and_latency() {
    let mut engine = ContourEngine::default();
    let result = engine.process(block(3, 3, 1));
    assert!(result.latency_ms >= 0.0);
    assert_eq!(
        result,
        CaseResult {
            sizes: vec![8],
            traced: 1,
            marked: 9,
            latency_ms: result.latency_ms,
        }
    );
}
