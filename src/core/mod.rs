pub mod nice_number;
pub mod numeric;
pub mod scale_division;
pub mod sequence;

pub use nice_number::{ceil_125, floor_125};
pub use numeric::{range_limits, sign, sort_values, value_limits};
pub use scale_division::{
    BORDER_EPS, LOG_MAX, LOG_MIN, MAX_MAJOR_MARKS, MAX_MINOR_MARKS, MAX_MINOR_STEPS, MarkOrder,
    STEP_EPS, ScaleDivision, ScaleMode, Tick, TickLevel,
};
pub use sequence::{
    Monotonicity, array_max, array_min, check_mono, lin_space, log_space, twist_array,
};
