//! Public API exercised end to end: notation → strokes → count, and
//! radii → cost → plan.

use sst_core::{
    Error, PLUS_SAMPLES, PaintedGrid, PlusSignCounter, PlusStrategy, STACK_SAMPLES,
    count_plus_signs, format_strokes, minimum_stabilization_cost, parse_strokes,
    stabilization_plan, strokes_from_parts,
};

#[test]
fn plus_samples_through_notation() {
    for sample in PLUS_SAMPLES {
        let strokes = strokes_from_parts(sample.lengths, sample.directions).unwrap();
        let notation = format_strokes(&strokes);
        let reparsed = parse_strokes(&notation).unwrap();
        assert_eq!(reparsed, strokes);

        for strategy in [PlusStrategy::Unit, PlusStrategy::Sweep] {
            let got = PlusSignCounter::new(strategy).count(&reparsed).unwrap();
            assert_eq!(got, sample.expected, "{} via {strategy}", sample.name);
        }
    }
}

#[test]
fn stack_samples_with_plans() {
    for sample in STACK_SAMPLES {
        let n = sample.radii.len();
        let cost = minimum_stabilization_cost(n, sample.radii, sample.inflate, sample.deflate)
            .unwrap();
        let plan = stabilization_plan(n, sample.radii, sample.inflate, sample.deflate).unwrap();
        assert_eq!(cost, sample.expected, "{}", sample.name);
        assert_eq!(plan.cost, cost, "{}", sample.name);
    }
}

#[test]
fn equal_stack_plan_splits_the_change() {
    let plan = stabilization_plan(3, &[100, 100, 100], 2, 3).unwrap();
    assert_eq!(plan.radii, vec![99, 100, 101]);
    assert_eq!((plan.inflated, plan.deflated), (1, 1));
}

#[test]
fn grid_exposes_compressed_axes() {
    let strokes = parse_strokes("U6 L3 D4 R5 U1 L6 U3 R3 D4").unwrap();
    let grid = PaintedGrid::from_strokes(&strokes).unwrap();
    assert!(!grid.is_degenerate());
    assert_eq!(grid.x_axis().values(), &[-4, -3, -1, 0, 2]);
    assert_eq!(grid.y_axis().values(), &[0, 2, 3, 6]);
    assert_eq!(grid.count(PlusStrategy::Unit), 4);
}

#[test]
fn errors_are_distinct_from_zero_answers() {
    assert_eq!(count_plus_signs(4, &[5, 2, 5, 2], "RDLU"), Ok(0));
    let err = count_plus_signs(4, &[5, 2, 5, 2], "RDL?").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("invalid input"));

    assert_eq!(minimum_stabilization_cost(2, &[1, 2], 1, 1), Ok(0));
    assert!(matches!(
        minimum_stabilization_cost(2, &[1, -2], 1, 1),
        Err(Error::NonPositiveRadius { index: 1, .. })
    ));
}

#[test]
fn long_strokes_do_not_blow_up() {
    let strokes = parse_strokes(
        "R1000000000 U1000000000 L2000000000 D2000000000 R2000000000 U1000000000 L1000000000",
    )
    .unwrap();
    let unit = PlusSignCounter::new(PlusStrategy::Unit).count(&strokes).unwrap();
    let sweep = PlusSignCounter::new(PlusStrategy::Sweep).count(&strokes).unwrap();
    assert_eq!(unit, sweep);
}
