//! Leg solving
//!
//! Derives a bent three-point leg from a hip on the spine and an ankle at
//! the foot. Legs carry no state of their own; the whole set is recomputed
//! from the gait and spine every tick.

use glam::Vec2;

use crate::curve;
use crate::gait::{Foot, GaitController};
use crate::spine::SpineChain;

/// Distance the knee is pushed off the hip-ankle midpoint
pub const KNEE_LIFT: f32 = 20.0;

/// One frame's leg geometry
#[derive(Debug, Clone, Copy)]
pub struct Leg {
    pub hip: Vec2,
    pub knee: Vec2,
    pub ankle: Vec2,
}

impl Leg {
    /// The leg as an ordered polyline for curve fitting.
    pub fn points(&self) -> [Vec2; 3] {
        [self.hip, self.knee, self.ankle]
    }
}

/// Solve one leg: hip at the foot's base point, ankle at the foot, knee at
/// their midpoint displaced along the spine tangent at the base segment's
/// midpoint, which bends the leg instead of drawing it straight.
pub fn solve(spine: &SpineChain, foot: &Foot) -> Leg {
    let hip = spine.point(foot.base_index);
    let ankle = foot.position;
    let tangent = curve::tangent(spine.points(), foot.base_index, 0.5);
    let knee = (hip + ankle) * 0.5 + tangent * KNEE_LIFT;
    Leg { hip, knee, ankle }
}

/// Solve every leg for the current frame.
pub fn solve_all(spine: &SpineChain, gait: &GaitController, out: &mut Vec<Leg>) {
    out.clear();
    out.extend(gait.feet().iter().map(|foot| solve(spine, foot)));
}
