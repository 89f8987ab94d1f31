//! Curve evaluation - linear blend and cubic Hermite segments

use super::{CurvePoint, Interpolation};

/// Evaluate a curve at `x`
///
/// - Empty curve: 0
/// - `x` at or before the first point: first value (no extrapolation)
/// - `x` at or after the last point: last value
/// - Otherwise the bracketing segment is blended using the left point's mode
pub fn evaluate(curve: &[CurvePoint], x: f64) -> f64 {
    let (first, last) = match (curve.first(), curve.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };

    if x.is_nan() || x <= first.time {
        return first.value;
    }
    if x >= last.time {
        return last.value;
    }

    // First point strictly after x; x > first.time guarantees idx >= 1
    let idx = curve.partition_point(|p| p.time <= x);
    let left = &curve[idx - 1];
    let right = &curve[idx];

    let span = right.time - left.time;
    if span <= 0.0 {
        return right.value;
    }
    let s = (x - left.time) / span;

    match left.interpolation {
        Interpolation::Linear => left.value + (right.value - left.value) * s,
        Interpolation::Cubic => hermite(
            s,
            span,
            left.value,
            left.leave_tangent.unwrap_or(0.0),
            right.value,
            right.arrive_tangent.unwrap_or(0.0),
        ),
    }
}

/// Cubic Hermite spline on the unit interval
///
/// `s` is the normalized position in the segment, `span` the segment width
/// (tangents are per unit of curve input, so they scale with it).
pub fn hermite(s: f64, span: f64, p0: f64, m0: f64, p1: f64, m1: f64) -> f64 {
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * p0 + h10 * span * m0 + h01 * p1 + h11 * span * m1
}
