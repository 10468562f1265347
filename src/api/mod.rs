//! Caller-facing layers around the division engine: serializable requests,
//! pixel-derived step budgets and the versioned JSON contract.

mod axis_budget;
mod division_request;
mod json_contract;

pub use axis_budget::{
    AXIS_MAJOR_TARGET_SPACING_PX, AXIS_MINOR_TARGET_SPACING_PX, AxisSpacing, major_step_budget,
    minor_step_budget,
};
pub use division_request::{DEFAULT_MAX_MAJOR_STEPS, DEFAULT_MAX_MINOR_STEPS, DivisionRequest};
pub use json_contract::{SCALE_DIVISION_JSON_SCHEMA_V1, ScaleDivisionJsonContractV1};
