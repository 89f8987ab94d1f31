//! Ballistic curves - piecewise functions over range, armor differential or wear

mod interpolate;

pub use interpolate::{evaluate, hermite};

use serde::{Deserialize, Serialize};

/// How a segment blends towards the next control point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    Cubic,
}

/// One control point of a ballistic curve
///
/// Points are ordered ascending by `time`. The interpolation mode of a point
/// governs the segment that starts at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time: f64,
    pub value: f64,
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Tangent entering this point (cubic segments only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrive_tangent: Option<f64>,
    /// Tangent leaving this point (cubic segments only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_tangent: Option<f64>,
}

impl CurvePoint {
    /// Create a linear control point
    pub fn linear(time: f64, value: f64) -> Self {
        CurvePoint {
            time,
            value,
            interpolation: Interpolation::Linear,
            arrive_tangent: None,
            leave_tangent: None,
        }
    }

    /// Create a cubic control point with explicit tangents
    pub fn cubic(time: f64, value: f64, arrive_tangent: f64, leave_tangent: f64) -> Self {
        CurvePoint {
            time,
            value,
            interpolation: Interpolation::Cubic,
            arrive_tangent: Some(arrive_tangent),
            leave_tangent: Some(leave_tangent),
        }
    }
}

/// Build a linear curve from `(time, value)` pairs
pub fn linear_curve(points: &[(f64, f64)]) -> Vec<CurvePoint> {
    points.iter().map(|&(t, v)| CurvePoint::linear(t, v)).collect()
}
