//! scalediv: nice axis scale divisions.
//!
//! The crate computes major and minor tick positions for a value range, in
//! linear or logarithmic mode, choosing step widths from `{1, 2, 5} × 10^n`.
//! Rendering and coordinate mapping stay with the caller.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisSpacing, DivisionRequest};
pub use crate::core::{MarkOrder, ScaleDivision, ScaleMode};
pub use error::{ScaleError, ScaleResult};
