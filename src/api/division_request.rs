use serde::{Deserialize, Serialize};

use crate::core::scale_division::validate_rebuild_input;
use crate::core::{MarkOrder, ScaleDivision, ScaleMode};
use crate::error::{ScaleError, ScaleResult};

pub const DEFAULT_MAX_MAJOR_STEPS: usize = 5;
pub const DEFAULT_MAX_MINOR_STEPS: usize = 5;

/// Serializable set of inputs for one [`ScaleDivision::rebuild`] call.
///
/// Host applications can persist axis setups as JSON and replay them without
/// spelling out every positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionRequest {
    pub x1: f64,
    pub x2: f64,
    #[serde(default = "default_max_major_steps")]
    pub max_major_steps: usize,
    #[serde(default = "default_max_minor_steps")]
    pub max_minor_steps: usize,
    #[serde(default)]
    pub mode: ScaleMode,
    /// Fixed major step; `0.0` selects the step automatically.
    #[serde(default)]
    pub step: f64,
    #[serde(default)]
    pub order: MarkOrder,
}

impl DivisionRequest {
    /// Creates a linear, ascending, auto-step request with default step budgets.
    #[must_use]
    pub fn new(x1: f64, x2: f64) -> Self {
        Self {
            x1,
            x2,
            max_major_steps: default_max_major_steps(),
            max_minor_steps: default_max_minor_steps(),
            mode: ScaleMode::default(),
            step: 0.0,
            order: MarkOrder::default(),
        }
    }

    /// Sets the major and minor step budgets.
    #[must_use]
    pub fn with_steps(mut self, max_major_steps: usize, max_minor_steps: usize) -> Self {
        self.max_major_steps = max_major_steps;
        self.max_minor_steps = max_minor_steps;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets a fixed major step (decades for logarithmic scales).
    #[must_use]
    pub fn with_fixed_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: MarkOrder) -> Self {
        self.order = order;
        self
    }

    /// Checks the request the same way [`ScaleDivision::rebuild`] does.
    pub fn validate(&self) -> ScaleResult<()> {
        validate_rebuild_input(self.x1, self.x2, self.mode, self.step)
    }

    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        let request: Self = serde_json::from_str(input).map_err(|e| {
            ScaleError::InvalidData(format!("failed to parse division request json: {e}"))
        })?;
        request.validate()?;
        Ok(request)
    }

    pub fn to_json_pretty(&self) -> ScaleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize division request json: {e}"))
        })
    }
}

impl ScaleDivision {
    /// Builds a new division from `request`.
    pub fn from_request(request: &DivisionRequest) -> ScaleResult<Self> {
        let mut division = Self::new();
        division.rebuild_with(request)?;
        Ok(division)
    }

    /// Rebuilds this division from `request`.
    pub fn rebuild_with(&mut self, request: &DivisionRequest) -> ScaleResult<()> {
        self.rebuild(
            request.x1,
            request.x2,
            request.max_major_steps,
            request.max_minor_steps,
            request.mode,
            request.step,
            request.order,
        )
    }
}

fn default_max_major_steps() -> usize {
    DEFAULT_MAX_MAJOR_STEPS
}

fn default_max_minor_steps() -> usize {
    DEFAULT_MAX_MINOR_STEPS
}
