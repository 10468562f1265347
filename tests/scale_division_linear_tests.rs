use scalediv::core::{
    MAX_MAJOR_MARKS, MAX_MINOR_MARKS, MarkOrder, ScaleDivision, ScaleMode, TickLevel,
};

fn linear(x1: f64, x2: f64, max_major: usize, max_minor: usize) -> ScaleDivision {
    let mut division = ScaleDivision::new();
    division
        .rebuild(
            x1,
            x2,
            max_major,
            max_minor,
            ScaleMode::Linear,
            0.0,
            MarkOrder::Ascending,
        )
        .expect("linear rebuild");
    division
}

fn linear_fixed(x1: f64, x2: f64, max_minor: usize, step: f64) -> ScaleDivision {
    let mut division = ScaleDivision::new();
    division
        .rebuild(
            x1,
            x2,
            5,
            max_minor,
            ScaleMode::Linear,
            step,
            MarkOrder::Ascending,
        )
        .expect("linear rebuild");
    division
}

#[test]
fn unit_range_gets_step_two_with_both_bounds_marked() {
    let division = linear(0.0, 10.0, 5, 5);

    assert_eq!(division.major_step(), 2.0);
    assert_eq!(division.major_marks(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(division.bounds(), (0.0, 10.0));
    assert!(!division.is_log());
}

#[test]
fn minor_marks_subdivide_each_major_interval() {
    let division = linear(0.0, 10.0, 5, 5);

    assert_eq!(division.minor_count(), 15);
    assert_eq!(&division.minor_marks()[..3], &[0.5, 1.0, 1.5]);
    assert_eq!(division.minor_mark(14), Some(9.5));
    assert!(division.minor_marks().iter().all(|mark| (0.0..=10.0).contains(mark)));
}

#[test]
fn equal_bounds_produce_an_empty_division() {
    let division = linear(3.0, 3.0, 5, 5);

    assert!(division.is_empty());
    assert_eq!(division.major_step(), 0.0);
    assert_eq!(division.bounds(), (3.0, 3.0));
}

#[test]
fn indivisible_minor_step_falls_back_to_midpoints() {
    let division = linear(0.0, 10.0, 2, 3);
    assert_eq!(division.major_step(), 5.0);
    assert_eq!(division.major_marks(), &[0.0, 5.0, 10.0]);
    assert_eq!(division.minor_marks(), &[2.5, 7.5]);

    let fixed = linear_fixed(0.0, 9.0, 2, 3.0);
    assert_eq!(fixed.major_marks(), &[0.0, 3.0, 6.0, 9.0]);
    assert_eq!(fixed.minor_marks(), &[1.5, 4.5, 7.5]);
}

#[test]
fn minor_marks_start_below_the_first_major_mark() {
    let division = linear(0.3, 9.7, 5, 2);

    assert_eq!(division.major_step(), 2.0);
    assert_eq!(division.major_marks(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(division.minor_marks(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
}

#[test]
fn boundary_tolerance_keeps_marks_within_a_tenth_of_a_percent_of_a_step() {
    let near = linear(0.0, 9.9999, 5, 0);
    assert_eq!(near.major_marks(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    let far = linear(0.0, 9.99, 5, 0);
    assert_eq!(far.major_marks(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn zero_minor_budget_disables_minor_marks() {
    let division = linear(0.0, 10.0, 5, 0);
    assert_eq!(division.major_count(), 6);
    assert_eq!(division.minor_count(), 0);
}

#[test]
fn fixed_step_is_used_by_magnitude() {
    let division = linear_fixed(0.0, 1.0, 0, -0.25);

    assert_eq!(division.major_step(), 0.25);
    assert_eq!(division.major_marks(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn zero_major_budget_is_treated_as_one_step() {
    let division = linear(0.0, 10.0, 0, 0);
    assert_eq!(division.major_step(), 10.0);
    assert_eq!(division.major_marks(), &[0.0, 10.0]);
}

#[test]
fn negative_ranges_are_divided_on_step_multiples() {
    let division = linear(-7.0, 3.0, 5, 0);
    assert_eq!(division.major_step(), 2.0);
    assert_eq!(division.major_marks(), &[-6.0, -4.0, -2.0, 0.0, 2.0]);
}

#[test]
fn major_mark_count_is_capped() {
    let division = linear_fixed(0.0, 1.0e9, 0, 1.0);

    assert_eq!(division.major_count(), MAX_MAJOR_MARKS);
    assert_eq!(division.major_mark(0), Some(0.0));
    assert_eq!(division.major_mark(MAX_MAJOR_MARKS - 1), Some(1.0e9));
}

#[test]
fn tiny_fixed_step_still_hits_the_major_cap() {
    let division = linear_fixed(0.0, 10.0, 0, 1.0e-308);

    assert_eq!(division.major_count(), MAX_MAJOR_MARKS);
    assert_eq!(division.major_mark(0), Some(0.0));
    assert_eq!(division.major_mark(MAX_MAJOR_MARKS - 1), Some(10.0));
}

#[test]
fn overflowing_width_leaves_an_empty_division() {
    let division = linear(0.0, 1.7e308, 1, 0);
    assert!(division.is_empty());
    assert_eq!(division.major_step(), 0.0);

    let division = linear(-1.0e308, 1.0e308, 5, 5);
    assert!(division.is_empty());
    assert_eq!(division.major_step(), 0.0);
    assert_eq!(division.bounds(), (-1.0e308, 1.0e308));
}

#[test]
fn minor_marks_fall_back_to_midpoints_past_the_total_budget() {
    let division = linear_fixed(0.0, 1.0e9, 10_000, 1.0);

    assert_eq!(division.major_count(), MAX_MAJOR_MARKS);
    assert!(division.minor_count() <= MAX_MINOR_MARKS);
    assert_eq!(division.minor_count(), division.major_count() - 1);
    assert_eq!(division.minor_mark(0), Some(0.5));
}

#[test]
fn rebuild_replaces_previous_marks() {
    let mut division = linear(0.0, 10.0, 5, 5);
    division
        .rebuild(
            0.0,
            1.0,
            2,
            0,
            ScaleMode::Linear,
            0.0,
            MarkOrder::Ascending,
        )
        .expect("second rebuild");

    assert_eq!(division.major_marks(), &[0.0, 0.5, 1.0]);
    assert!(division.minor_marks().is_empty());
}

#[test]
fn rejected_rebuild_leaves_previous_state_intact() {
    let mut division = linear(0.0, 10.0, 5, 5);
    let before = division.clone();

    assert!(
        division
            .rebuild(
                f64::NAN,
                1.0,
                5,
                5,
                ScaleMode::Linear,
                0.0,
                MarkOrder::Ascending,
            )
            .is_err()
    );
    assert!(
        division
            .rebuild(
                0.0,
                1.0,
                5,
                5,
                ScaleMode::Linear,
                f64::INFINITY,
                MarkOrder::Ascending,
            )
            .is_err()
    );
    assert!(
        division
            .rebuild(
                0.0,
                1.0,
                5,
                5,
                ScaleMode::Linear,
                1.0e-310,
                MarkOrder::Ascending,
            )
            .is_err()
    );
    assert_eq!(division, before);
}

#[test]
fn identical_rebuilds_compare_equal_and_different_ones_do_not() {
    let first = linear(-2.5, 17.0, 6, 4);
    let second = linear(-2.5, 17.0, 6, 4);
    assert_eq!(first, second);

    let fewer_minor = linear(-2.5, 17.0, 6, 2);
    assert_ne!(first, fewer_minor);
}

#[test]
fn reset_restores_the_initial_state() {
    let mut division = linear(0.0, 10.0, 5, 5);
    division.reset();

    assert_eq!(division, ScaleDivision::new());
    assert!(division.is_empty());
    assert_eq!(division.major_step(), 0.0);
    assert_eq!(division.bounds(), (0.0, 0.0));
    assert_eq!(division.mode(), ScaleMode::Linear);
}

#[test]
fn ticks_merge_levels_in_value_order() {
    let division = linear(0.0, 10.0, 2, 3);
    let ticks = division.ticks();

    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    let levels: Vec<TickLevel> = ticks.iter().map(|tick| tick.level).collect();
    assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    assert_eq!(
        levels,
        vec![
            TickLevel::Major,
            TickLevel::Minor,
            TickLevel::Major,
            TickLevel::Minor,
            TickLevel::Major,
        ]
    );
}
