//! Smooth-curve fitting over ordered point sequences
//!
//! The locomotion core stores plain polylines; rendering and mid-segment
//! sampling go through a C1 Catmull-Rom curve fitted through those points.
//! Sampling never mutates the input: downstream components keep reading the
//! stored points, not the fitted curve.

use glam::Vec2;

/// Number of curve segments of an open polyline through `points`.
pub fn segment_count(points: &[Vec2]) -> usize {
    points.len().saturating_sub(1)
}

/// Control tangent at point `i` of an open curve (clamped at the ends).
fn control_tangent(points: &[Vec2], i: usize) -> Vec2 {
    let prev = points[i.saturating_sub(1)];
    let next = points[(i + 1).min(points.len() - 1)];
    (next - prev) * 0.5
}

fn hermite(p1: Vec2, m1: Vec2, p2: Vec2, m2: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    p1 * (2.0 * t3 - 3.0 * t2 + 1.0)
        + m1 * (t3 - 2.0 * t2 + t)
        + p2 * (-2.0 * t3 + 3.0 * t2)
        + m2 * (t3 - t2)
}

fn hermite_derivative(p1: Vec2, m1: Vec2, p2: Vec2, m2: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    p1 * (6.0 * t2 - 6.0 * t)
        + m1 * (3.0 * t2 - 4.0 * t + 1.0)
        + p2 * (-6.0 * t2 + 6.0 * t)
        + m2 * (3.0 * t2 - 2.0 * t)
}

/// Position on the open curve within `segment` at parameter `t` in [0, 1].
///
/// Out-of-range segments clamp to the nearest endpoint; an empty input
/// yields the origin.
pub fn position(points: &[Vec2], segment: usize, t: f32) -> Vec2 {
    match points.len() {
        0 => Vec2::ZERO,
        1 => points[0],
        n if segment >= n - 1 => points[n - 1],
        _ => {
            let p1 = points[segment];
            let p2 = points[segment + 1];
            let m1 = control_tangent(points, segment);
            let m2 = control_tangent(points, segment + 1);
            hermite(p1, m1, p2, m2, t.clamp(0.0, 1.0))
        }
    }
}

/// Unit tangent of the open curve within `segment` at parameter `t`.
///
/// Falls back to the segment chord (or +x) when the curve is locally
/// degenerate, so callers never see a zero direction.
pub fn tangent(points: &[Vec2], segment: usize, t: f32) -> Vec2 {
    let n = points.len();
    if n < 2 {
        return Vec2::X;
    }
    let segment = segment.min(n - 2);
    let p1 = points[segment];
    let p2 = points[segment + 1];
    let m1 = control_tangent(points, segment);
    let m2 = control_tangent(points, segment + 1);
    let velocity = hermite_derivative(p1, m1, p2, m2, t.clamp(0.0, 1.0));
    let dir = velocity.normalize_or_zero();
    if dir != Vec2::ZERO {
        return dir;
    }
    let chord = (p2 - p1).normalize_or_zero();
    if chord != Vec2::ZERO {
        chord
    } else {
        Vec2::X
    }
}

/// Densify an open polyline into a smooth curve with `samples_per_segment`
/// intermediate points per segment. The final point is always included.
pub fn flatten_open(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let segments = segment_count(points);
    if segments == 0 || samples_per_segment == 0 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(segments * samples_per_segment + 1);
    for segment in 0..segments {
        for k in 0..samples_per_segment {
            let t = k as f32 / samples_per_segment as f32;
            out.push(position(points, segment, t));
        }
    }
    out.push(points[points.len() - 1]);
    out
}

/// Densify a closed polygon into a smooth closed curve. The first point is
/// not repeated at the end; the host closes the path.
pub fn flatten_closed(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let n = points.len();
    if n < 3 || samples_per_segment == 0 {
        return points.to_vec();
    }
    let wrap_tangent = |i: usize| (points[(i + 1) % n] - points[(i + n - 1) % n]) * 0.5;
    let mut out = Vec::with_capacity(n * samples_per_segment);
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let m1 = wrap_tangent(i);
        let m2 = wrap_tangent((i + 1) % n);
        for k in 0..samples_per_segment {
            let t = k as f32 / samples_per_segment as f32;
            out.push(hermite(p1, m1, p2, m2, t));
        }
    }
    out
}
