//! Body contour synthesis
//!
//! Derives a symmetric closed outline from the spine: one sample per curve
//! segment at its parametric midpoint, pushed out on both sides of the
//! tangent by a piecewise depth profile (narrow head, wide torso, tapering
//! tail). The outline carries no state of its own and is rebuilt each tick.

use glam::Vec2;

use crate::curve;
use crate::spine::SpineChain;

/// Closed outline polygon: right side forward, then left side backward.
#[derive(Debug, Clone, Default)]
pub struct BodyOutline {
    points: Vec<Vec2>,
}

impl BodyOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline polygon in closed winding order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of spine curve segments sampled on each side.
    pub fn sample_count(&self) -> usize {
        self.points.len() / 2
    }

    /// The (right, left) outline points synthesized for curve segment `i`.
    pub fn point_pair(&self, i: usize) -> (Vec2, Vec2) {
        (self.points[i], self.points[self.points.len() - 1 - i])
    }

    /// Rebuild the outline from the spine's current curve.
    pub fn update(&mut self, spine: &SpineChain) {
        self.points.clear();
        let spine_points = spine.points();
        let segments = curve::segment_count(spine_points);
        if segments == 0 {
            return;
        }
        let total = spine_points.len();
        let mut left = Vec::with_capacity(segments);
        for i in 0..segments {
            let pos = curve::position(spine_points, i, 0.5);
            let normal = curve::tangent(spine_points, i, 0.5).perp();
            let depth = depth_profile(i, total);
            self.points.push(pos + normal * depth);
            left.push(pos - normal * depth);
        }
        self.points.extend(left.into_iter().rev());
    }
}

/// Lateral half-width of the body at curve segment `i` of a spine with
/// `total` points. First matching rule wins; the cosine fallback covers the
/// gap at i == 4 and whatever short creatures leave unhandled.
fn depth_profile(i: usize, total: usize) -> f32 {
    let last_segment = total.saturating_sub(2);
    let x = i as f32;
    if i == 0 {
        5.0
    } else if i == last_segment {
        1.0
    } else if i < 4 {
        25.0 * (x / 4.0).sin() + 5.0
    } else if (5..12).contains(&i) {
        25.0 * ((x - 3.0) / 4.0).sin()
    } else if i >= 12 {
        13.0 * ((x - 12.0) / 6.0).cos() + 2.0
    } else {
        15.0 * (x / total as f32).cos()
    }
}
