use scalediv::telemetry::{init_default_tracing, init_tracing_with_filter};
use scalediv::{DivisionRequest, ScaleDivision};

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_the_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("scalediv=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_installs_a_single_global_subscriber() {
    assert!(init_default_tracing());
    assert!(!init_tracing_with_filter("scalediv=trace"));
}

#[test]
fn rebuilds_do_not_require_a_subscriber() {
    let division =
        ScaleDivision::from_request(&DivisionRequest::new(0.0, 10.0)).expect("valid request");
    assert_eq!(division.major_count(), 6);
}
