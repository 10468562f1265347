use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

pub const AXIS_MAJOR_TARGET_SPACING_PX: f64 = 72.0;
pub const AXIS_MINOR_TARGET_SPACING_PX: f64 = 12.0;

/// Pixel spacing targets used to turn an axis length into step budgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpacing {
    pub major_spacing_px: f64,
    pub minor_spacing_px: f64,
    pub min_major_steps: usize,
    pub max_major_steps: usize,
}

impl Default for AxisSpacing {
    fn default() -> Self {
        Self {
            major_spacing_px: AXIS_MAJOR_TARGET_SPACING_PX,
            minor_spacing_px: AXIS_MINOR_TARGET_SPACING_PX,
            min_major_steps: 1,
            max_major_steps: 10,
        }
    }
}

impl AxisSpacing {
    pub fn validate(self) -> ScaleResult<Self> {
        if !self.major_spacing_px.is_finite() || self.major_spacing_px <= 0.0 {
            return Err(ScaleError::InvalidData(
                "axis major spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.minor_spacing_px.is_finite() || self.minor_spacing_px <= 0.0 {
            return Err(ScaleError::InvalidData(
                "axis minor spacing must be finite and > 0".to_owned(),
            ));
        }
        if self.max_major_steps < self.min_major_steps {
            return Err(ScaleError::InvalidData(
                "axis max major steps must be >= min major steps".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Returns `(max_major_steps, max_minor_steps)` for an axis `axis_span_px` long.
    #[must_use]
    pub fn budget(&self, axis_span_px: f64) -> (usize, usize) {
        let major_steps = major_step_budget(axis_span_px, self);
        (
            major_steps,
            minor_step_budget(axis_span_px, major_steps, self),
        )
    }
}

/// Number of major intervals that fit on the axis at the target spacing.
///
/// Clamped to `[min_major_steps, max_major_steps]`; invalid spans or spacings
/// fall back to the minimum.
#[must_use]
pub fn major_step_budget(axis_span_px: f64, spacing: &AxisSpacing) -> usize {
    let min_steps = spacing.min_major_steps.max(1);
    let max_steps = spacing.max_major_steps.max(min_steps);
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_steps;
    }
    if !spacing.major_spacing_px.is_finite() || spacing.major_spacing_px <= 0.0 {
        return min_steps;
    }

    let raw = (axis_span_px / spacing.major_spacing_px).floor() as usize;
    raw.clamp(min_steps, max_steps)
}

/// Number of minor intervals per major interval at the minor target spacing.
#[must_use]
pub fn minor_step_budget(axis_span_px: f64, major_steps: usize, spacing: &AxisSpacing) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return 0;
    }
    if !spacing.minor_spacing_px.is_finite() || spacing.minor_spacing_px <= 0.0 {
        return 0;
    }

    let interval_px = axis_span_px / major_steps.max(1) as f64;
    (interval_px / spacing.minor_spacing_px).floor() as usize
}
