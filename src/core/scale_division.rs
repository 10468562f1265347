use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace, warn};

use crate::core::nice_number::ceil_125;
use crate::core::numeric::{range_limits, sort_values, value_limits};
use crate::core::sequence::{lin_space, log_space, twist_array};
use crate::error::{ScaleError, ScaleResult};

/// Slack, relative to the major step, for boundary ticks and step divisibility.
pub const STEP_EPS: f64 = 1.0e-3;
/// Relative slack for accepting minor marks at the scale boundaries.
pub const BORDER_EPS: f64 = 1.0e-10;
/// Hard cap on the number of major marks of one division.
pub const MAX_MAJOR_MARKS: usize = 10_000;
/// Hard cap on the requested number of minor intervals per major interval.
pub const MAX_MINOR_STEPS: usize = 10_000;
/// Budget for the minor marks of one division; above it only midpoints are placed.
pub const MAX_MINOR_MARKS: usize = 100_000;
/// Smallest bound a logarithmic division is built for.
pub const LOG_MIN: f64 = 1.0e-100;
/// Largest bound a logarithmic division is built for.
pub const LOG_MAX: f64 = 1.0e100;

/// Shrinks the scale width slightly so that exactly divisible ranges do not
/// round up to the next step.
const WIDTH_FACTOR: f64 = 0.999_999;

/// Spacing model of a scale division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Marks evenly spaced in raw value units.
    #[default]
    Linear,
    /// Marks evenly spaced in decades; bounds must be > 0.
    Logarithmic,
}

/// Orientation of the stored mark sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarkOrder {
    /// Marks run from `min(x1, x2)` to `max(x1, x2)`.
    #[default]
    Ascending,
    /// Marks run from `x1` towards `x2`, descending when `x2 < x1`.
    FollowBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLevel {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub level: TickLevel,
}

/// Major and minor mark positions of one axis scale.
///
/// A division starts empty and is fully replaced by every successful
/// [`ScaleDivision::rebuild`]. Equality is exact on every field, marks
/// included, so two divisions only compare equal when they were built from
/// identical inputs.
///
/// ```rust
/// use scalediv::core::{MarkOrder, ScaleDivision, ScaleMode};
///
/// let mut division = ScaleDivision::new();
/// division
///     .rebuild(0.0, 10.0, 5, 5, ScaleMode::Linear, 0.0, MarkOrder::Ascending)
///     .expect("finite bounds");
/// assert_eq!(division.major_step(), 2.0);
/// assert_eq!(division.major_marks(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleDivision {
    lower_bound: f64,
    upper_bound: f64,
    major_step: f64,
    mode: ScaleMode,
    major_marks: Vec<f64>,
    minor_marks: Vec<f64>,
}

impl ScaleDivision {
    /// Creates an empty division, identical to the [`reset`](Self::reset) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds major and minor marks for the range spanned by `x1` and `x2`.
    ///
    /// With `step == 0.0` the major step is chosen from `{1, 2, 5} × 10^n` so
    /// that at most `max_major_steps` intervals cover the range; otherwise
    /// `|step|` is used as given (in decades for logarithmic scales). The minor
    /// step is always derived from `max_minor_steps`.
    ///
    /// Logarithmic scales spanning less than one decade get a linear division
    /// whose stored major step is converted to decades.
    ///
    /// Non-finite inputs and non-positive logarithmic bounds are rejected and
    /// leave `self` untouched. Degenerate ranges succeed with empty marks.
    #[allow(clippy::too_many_arguments)]
    pub fn rebuild(
        &mut self,
        x1: f64,
        x2: f64,
        max_major_steps: usize,
        max_minor_steps: usize,
        mode: ScaleMode,
        step: f64,
        order: MarkOrder,
    ) -> ScaleResult<()> {
        if let Err(err) = validate_rebuild_input(x1, x2, mode, step) {
            warn!(error = %err, x1, x2, step, ?mode, "rejecting scale division rebuild");
            return Err(err);
        }

        let (lower_bound, upper_bound) = sort_values(x1, x2);
        let mut next = Self {
            lower_bound,
            upper_bound,
            major_step: 0.0,
            mode,
            major_marks: Vec::new(),
            minor_marks: Vec::new(),
        };

        let max_major_steps = max_major_steps.max(1);
        let max_minor_steps = max_minor_steps.min(MAX_MINOR_STEPS);
        let step = step.abs();
        match mode {
            ScaleMode::Linear => next.build_linear(max_major_steps, max_minor_steps, step),
            ScaleMode::Logarithmic => next.build_log(max_major_steps, max_minor_steps, step)?,
        }

        if order == MarkOrder::FollowBounds && x2 < x1 {
            std::mem::swap(&mut next.lower_bound, &mut next.upper_bound);
            twist_array(&mut next.major_marks);
            twist_array(&mut next.minor_marks);
        }

        debug!(
            lower_bound = next.lower_bound,
            upper_bound = next.upper_bound,
            major_step = next.major_step,
            major_count = next.major_marks.len(),
            minor_count = next.minor_marks.len(),
            ?mode,
            "rebuilt scale division"
        );
        *self = next;
        Ok(())
    }

    /// Clears all marks and zeroes bounds, step and mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// First boundary, `min(x1, x2)` unless descending marks were requested.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Second boundary, `max(x1, x2)` unless descending marks were requested.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    /// Major step width; measured in decades for logarithmic divisions.
    #[must_use]
    pub fn major_step(&self) -> f64 {
        self.major_step
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn is_log(&self) -> bool {
        self.mode == ScaleMode::Logarithmic
    }

    #[must_use]
    pub fn major_marks(&self) -> &[f64] {
        &self.major_marks
    }

    #[must_use]
    pub fn minor_marks(&self) -> &[f64] {
        &self.minor_marks
    }

    #[must_use]
    pub fn major_count(&self) -> usize {
        self.major_marks.len()
    }

    #[must_use]
    pub fn minor_count(&self) -> usize {
        self.minor_marks.len()
    }

    #[must_use]
    pub fn major_mark(&self, index: usize) -> Option<f64> {
        self.major_marks.get(index).copied()
    }

    #[must_use]
    pub fn minor_mark(&self, index: usize) -> Option<f64> {
        self.minor_marks.get(index).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.major_marks.is_empty() && self.minor_marks.is_empty()
    }

    /// Returns major and minor marks merged in mark order, each tagged with its level.
    ///
    /// Coinciding major and minor values are both kept, major first.
    #[must_use]
    pub fn ticks(&self) -> Vec<Tick> {
        let mut ticks: Vec<Tick> = self
            .major_marks
            .iter()
            .map(|value| Tick {
                value: *value,
                level: TickLevel::Major,
            })
            .chain(self.minor_marks.iter().map(|value| Tick {
                value: *value,
                level: TickLevel::Minor,
            }))
            .collect();

        if self.lower_bound > self.upper_bound {
            ticks.sort_by(|left, right| right.value.total_cmp(&left.value));
        } else {
            ticks.sort_by(|left, right| left.value.total_cmp(&right.value));
        }
        ticks
    }

    /// Checks that a division, typically one restored from storage, is one
    /// [`ScaleDivision::rebuild`] could have produced.
    ///
    /// Values must be finite, logarithmic values positive, both mark vectors
    /// must run in the direction of the stored bounds, and marks must lie
    /// inside the bounds: minor marks up to rounding noise, major marks up to
    /// `STEP_EPS` of a major step (in decades for multi-decade logarithmic
    /// divisions).
    pub fn validate(&self) -> ScaleResult<()> {
        let all_finite = [self.lower_bound, self.upper_bound, self.major_step]
            .iter()
            .chain(&self.major_marks)
            .chain(&self.minor_marks)
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(ScaleError::InvalidData(
                "division contains non-finite values".to_owned(),
            ));
        }

        let descending = self.lower_bound > self.upper_bound;
        let follows_bounds = |marks: &[f64]| {
            marks.windows(2).all(|pair| {
                if descending {
                    pair[0] >= pair[1]
                } else {
                    pair[0] <= pair[1]
                }
            })
        };
        if !follows_bounds(self.major_marks.as_slice())
            || !follows_bounds(self.minor_marks.as_slice())
        {
            return Err(ScaleError::InvalidData(
                "division marks do not follow the order of its bounds".to_owned(),
            ));
        }

        let (lower, upper) = sort_values(self.lower_bound, self.upper_bound);
        let noise = BORDER_EPS * lower.abs().max(upper.abs());
        let within = |value: f64, low: f64, high: f64, slack: f64| {
            value >= low - slack && value <= high + slack
        };

        let major_ok = match self.mode {
            ScaleMode::Linear => {
                let slack = STEP_EPS * self.major_step.abs() + noise;
                self.major_marks
                    .iter()
                    .all(|mark| within(*mark, lower, upper, slack))
            }
            ScaleMode::Logarithmic => {
                let positive = |mark: &f64| *mark > 0.0;
                if lower <= 0.0
                    || !self.major_marks.iter().all(positive)
                    || !self.minor_marks.iter().all(positive)
                {
                    return Err(ScaleError::InvalidLogBounds {
                        x1: self.lower_bound,
                        x2: self.upper_bound,
                    });
                }

                let (log_lower, log_upper) = (lower.log10(), upper.log10());
                if log_upper - log_lower < 1.0 {
                    let slack = STEP_EPS * 10_f64.powf(self.major_step) + noise;
                    self.major_marks
                        .iter()
                        .all(|mark| within(*mark, lower, upper, slack))
                } else {
                    let slack = STEP_EPS * self.major_step.abs()
                        + BORDER_EPS * log_lower.abs().max(log_upper.abs()).max(1.0);
                    self.major_marks
                        .iter()
                        .all(|mark| within(mark.log10(), log_lower, log_upper, slack))
                }
            }
        };
        let minor_ok = self
            .minor_marks
            .iter()
            .all(|mark| within(*mark, lower, upper, noise));
        if !major_ok || !minor_ok {
            return Err(ScaleError::InvalidData(
                "division marks lie outside its bounds".to_owned(),
            ));
        }
        Ok(())
    }

    /// Builds an ascending linear division over `[lower_bound, upper_bound]`.
    fn build_linear(&mut self, max_major_steps: usize, max_minor_steps: usize, step: f64) {
        self.major_marks.clear();
        self.minor_marks.clear();

        let lower = self.lower_bound;
        let upper = self.upper_bound;
        if lower == upper {
            self.major_step = 0.0;
            return;
        }

        self.major_step = if step == 0.0 {
            ceil_125((upper - lower).abs() * WIDTH_FACTOR / max_major_steps as f64)
        } else {
            step
        };
        let major_step = self.major_step;
        if major_step == 0.0 {
            return;
        }
        if !major_step.is_finite() {
            warn!(lower, upper, "scale width overflows the major step, leaving division empty");
            self.major_step = 0.0;
            return;
        }

        let (first_tick, last_tick) = major_tick_span(lower, upper, major_step);
        let major_count = major_mark_count(first_tick, last_tick, major_step);
        self.major_marks = lin_space(major_count, first_tick, last_tick);

        let Some(first_major) = self.major_marks.first().copied() else {
            return;
        };
        if max_minor_steps < 1 {
            return;
        }

        let mut minor_step = ceil_125(major_step / max_minor_steps as f64);
        if minor_step == 0.0 {
            return;
        }

        let intervals = (major_step / minor_step).round().abs();
        let mut per_interval = (intervals as usize).saturating_sub(1);
        if (intervals * minor_step - major_step).abs() > STEP_EPS * major_step {
            trace!(major_step, minor_step, "minor step does not divide major step, using midpoint");
            per_interval = 1;
            minor_step = major_step * 0.5;
        }
        if per_interval.saturating_mul(self.major_marks.len() + 1) > MAX_MINOR_MARKS {
            warn!(
                per_interval,
                major_count = self.major_marks.len(),
                cap = MAX_MINOR_MARKS,
                "minor mark budget exceeded, using midpoints"
            );
            per_interval = 1;
            minor_step = major_step * 0.5;
        }

        let below_first = (first_major > lower).then_some(first_major - major_step);
        let mut minor_marks =
            Vec::with_capacity(per_interval.saturating_mul(self.major_marks.len() + 1));
        for base in below_first.into_iter().chain(self.major_marks.iter().copied()) {
            let mut value = base;
            for _ in 0..per_interval {
                value += minor_step;
                if let Some(mark) = range_limits(value, lower, upper, BORDER_EPS, 0.0) {
                    minor_marks.push(mark);
                }
            }
        }
        self.minor_marks = minor_marks;
    }

    /// Builds an ascending logarithmic division over `[lower_bound, upper_bound]`.
    ///
    /// Bounds are clamped into `[LOG_MIN, LOG_MAX]` before anything else.
    fn build_log(
        &mut self,
        max_major_steps: usize,
        max_minor_steps: usize,
        step: f64,
    ) -> ScaleResult<()> {
        self.lower_bound = value_limits(self.lower_bound, LOG_MIN, LOG_MAX);
        self.upper_bound = value_limits(self.upper_bound, LOG_MIN, LOG_MAX);
        self.major_marks.clear();
        self.minor_marks.clear();

        let lower = self.lower_bound;
        let upper = self.upper_bound;
        if lower == upper {
            self.major_step = 0.0;
            return Ok(());
        }

        let width = upper.log10() - lower.log10();
        if width < 1.0 {
            trace!(width, "log scale spans less than one decade, building linear division");
            self.build_linear(max_major_steps, max_minor_steps, 0.0);
            if self.major_step > 0.0 {
                self.major_step = self.major_step.log10();
            }
            return Ok(());
        }

        let major_step = if step == 0.0 {
            ceil_125(width * WIDTH_FACTOR / max_major_steps as f64)
        } else {
            step
        }
        .max(1.0);
        self.major_step = major_step;

        let log_first = ((lower.log10() - STEP_EPS * major_step) / major_step).ceil() * major_step;
        let log_last = ((upper.log10() + STEP_EPS * major_step) / major_step).floor() * major_step;
        let major_count = major_mark_count(log_first, log_last, major_step);
        if major_count == 0 {
            return Ok(());
        }
        let first_tick = 10_f64.powf(log_first);
        let last_tick = 10_f64.powf(log_last);
        self.major_marks = log_space(major_count, first_tick, last_tick)?;

        if max_minor_steps < 1 {
            return Ok(());
        }

        self.minor_marks = if major_step < 1.1 {
            self.one_decade_minor_marks(max_minor_steps, first_tick)
        } else {
            self.multi_decade_minor_marks(max_minor_steps, first_tick)
        };
        Ok(())
    }

    /// Minor marks at fixed multiples of each major mark, for a one decade step.
    fn one_decade_minor_marks(&self, max_minor_steps: usize, first_tick: f64) -> Vec<f64> {
        let factors: SmallVec<[f64; 8]> = match max_minor_steps {
            8.. => (2_u8..=9).map(f64::from).collect(),
            4..=7 => smallvec![2.0, 4.0, 6.0, 8.0],
            2..=3 => smallvec![2.0, 5.0],
            _ => smallvec![5.0],
        };

        let lower = self.lower_bound;
        let upper = self.upper_bound;
        let below_first =
            (lower < first_tick).then(|| first_tick / 10_f64.powf(self.major_step));

        let mut minor_marks = Vec::with_capacity((self.major_marks.len() + 1) * factors.len());
        for base in below_first.into_iter().chain(self.major_marks.iter().copied()) {
            for factor in &factors {
                if let Some(mark) = range_limits(base * factor, lower, upper, BORDER_EPS, 0.0) {
                    minor_marks.push(mark);
                }
            }
        }
        minor_marks
    }

    /// Minor marks every `{1, 2, 5} × 10^n` decades, for a multi-decade step.
    ///
    /// Nothing is produced when the sub-step does not divide the major step.
    fn multi_decade_minor_marks(&self, max_minor_steps: usize, first_tick: f64) -> Vec<f64> {
        let major_step = self.major_step;
        let max_minor = max_minor_steps as f64;
        let minor_step = ceil_125((major_step - STEP_EPS * (major_step / max_minor)) / max_minor)
            .max(1.0);

        let intervals = (major_step / minor_step).round();
        if (intervals * minor_step - major_step).abs() > STEP_EPS * major_step {
            trace!(major_step, minor_step, "minor decade step does not divide major step");
            return Vec::new();
        }
        let per_interval = (intervals as usize).saturating_sub(1);
        if per_interval < 1 {
            return Vec::new();
        }

        let lower = self.lower_bound;
        let upper = self.upper_bound;
        let minor_factor = 10_f64.powf(minor_step).max(10.0);
        let below_first = (lower < first_tick).then(|| first_tick / 10_f64.powf(major_step));

        let mut minor_marks = Vec::with_capacity((self.major_marks.len() + 1) * per_interval);
        for base in below_first.into_iter().chain(self.major_marks.iter().copied()) {
            let mut value = base;
            for _ in 0..per_interval {
                value *= minor_factor;
                if let Some(mark) = range_limits(value, lower, upper, BORDER_EPS, 0.0) {
                    minor_marks.push(mark);
                }
            }
        }
        minor_marks
    }
}

/// Checks the inputs of [`ScaleDivision::rebuild`] without touching any state.
pub(crate) fn validate_rebuild_input(
    x1: f64,
    x2: f64,
    mode: ScaleMode,
    step: f64,
) -> ScaleResult<()> {
    if !x1.is_finite() || !x2.is_finite() {
        return Err(ScaleError::InvalidBounds { x1, x2 });
    }
    if !step.is_finite() {
        return Err(ScaleError::InvalidData(
            "fixed major step must be finite".to_owned(),
        ));
    }
    if step != 0.0 && !step.is_normal() {
        return Err(ScaleError::InvalidData(format!(
            "fixed major step {step:e} is subnormal"
        )));
    }
    if mode == ScaleMode::Logarithmic && (x1 <= 0.0 || x2 <= 0.0) {
        return Err(ScaleError::InvalidLogBounds { x1, x2 });
    }
    Ok(())
}

/// First and last multiples of `step` inside `[lower, upper]` widened by `STEP_EPS * step`.
///
/// When `step` is so small against the bounds that the multiple count is not
/// representable, the bounds themselves are the closest multiples at `f64`
/// precision.
fn major_tick_span(lower: f64, upper: f64, step: f64) -> (f64, f64) {
    let first = ((lower - STEP_EPS * step) / step).ceil() * step;
    let last = ((upper + STEP_EPS * step) / step).floor() * step;
    (
        if first.is_finite() { first } else { lower },
        if last.is_finite() { last } else { upper },
    )
}

/// Number of marks from `first` to `last` at `step`, capped at [`MAX_MAJOR_MARKS`].
fn major_mark_count(first: f64, last: f64, step: f64) -> usize {
    let intervals = ((last - first) / step).round();
    if intervals.is_nan() || intervals < 0.0 {
        return 0;
    }

    let count = intervals + 1.0;
    if count > MAX_MAJOR_MARKS as f64 {
        warn!(
            requested = count,
            cap = MAX_MAJOR_MARKS,
            "major mark count capped"
        );
        return MAX_MAJOR_MARKS;
    }
    count as usize
}
