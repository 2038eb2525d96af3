//! Per-foot gait state machines
//!
//! Each foot tracks an anchor that travels with the spine; when the foot is
//! left too far behind it steps to catch up. Step starts are gated on the
//! paired foot being idle, which keeps pairs out of phase (soft alternation:
//! only the start of a step is gated, not ongoing overlap).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::spine::SpineChain;

/// Lateral offset of the step anchor from the spine direction, degrees
pub const STANCE_ANGLE_DEG: f32 = 55.0;
/// Distance from the base point to the step anchor
pub const STEP_REACH: f32 = 40.0;
/// Distance from the anchor at which a foot begins a step
pub const STEP_TRIGGER: f32 = 85.0;
/// Maximum foot travel per tick while stepping
pub const STEP_SPEED: f32 = 30.0;

/// Which side of the body a foot is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn stance_offset(self) -> f32 {
        match self {
            Side::Left => -STANCE_ANGLE_DEG.to_radians(),
            Side::Right => STANCE_ANGLE_DEG.to_radians(),
        }
    }
}

/// One foot of a leg pair
#[derive(Debug, Clone)]
pub struct Foot {
    /// Current planted (or mid-step) position
    pub position: Vec2,
    /// Index of the spine point this foot is anchored near; always leaves a
    /// valid successor at `base_index + 1`
    pub base_index: usize,
    pub side: Side,
    /// True while the foot is travelling toward its anchor
    pub stepping: bool,
}

/// Gait state for all feet of one creature. Feet live in a flat vector;
/// pairing is index-based, `pairs[k] = (left, right)`.
#[derive(Debug, Clone, Default)]
pub struct GaitController {
    feet: Vec<Foot>,
    pairs: Vec<(usize, usize)>,
}

impl GaitController {
    /// Attach `feet_pairs` pairs of feet to the spine, spread evenly over
    /// the section between head and tail. Base indices are clamped so every
    /// foot keeps a successor point for its anchor direction; a spine too
    /// short to attach to yields a legless controller.
    pub fn new(
        spine: &SpineChain,
        head_size: usize,
        tail_size: usize,
        feet_pairs: usize,
    ) -> Self {
        let total = spine.len();
        if feet_pairs == 0 || total < 2 {
            return Self::default();
        }
        let leg_spacing = (total as f32 - head_size as f32 - tail_size as f32) / feet_pairs as f32;
        let mut feet = Vec::with_capacity(feet_pairs * 2);
        let mut pairs = Vec::with_capacity(feet_pairs);
        for k in 0..feet_pairs {
            let raw = (head_size as f32 + leg_spacing * k as f32).round().max(0.0);
            let base_index = (raw as usize).min(total - 2);
            let base = spine.point(base_index);
            let left = feet.len();
            for side in [Side::Left, Side::Right] {
                feet.push(Foot {
                    position: base,
                    base_index,
                    side,
                    stepping: false,
                });
            }
            pairs.push((left, left + 1));
        }
        Self { feet, pairs }
    }

    pub fn feet(&self) -> &[Foot] {
        &self.feet
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Anchor the foot is trying to stand on, given the current spine: a
    /// point [`STEP_REACH`] away from the base point, rotated
    /// [`STANCE_ANGLE_DEG`] off the base-to-successor direction.
    pub fn step_anchor(spine: &SpineChain, foot: &Foot) -> Vec2 {
        let base = spine.point(foot.base_index);
        let toward_tail = spine.point(foot.base_index + 1) - base;
        let angle = toward_tail.y.atan2(toward_tail.x) + foot.side.stance_offset();
        base + Vec2::new(angle.cos(), angle.sin()) * STEP_REACH
    }

    /// One gait tick for every foot.
    pub fn update(&mut self, spine: &SpineChain) {
        for k in 0..self.feet.len() {
            let anchor = Self::step_anchor(spine, &self.feet[k]);
            let opposite_stepping = self.feet[self.opposite_of(k)].stepping;

            let foot = &self.feet[k];
            if !foot.stepping
                && foot.position.distance(anchor) > STEP_TRIGGER
                && !opposite_stepping
            {
                log::trace!(
                    "foot {} ({:?} of base {}) starts stepping",
                    k,
                    foot.side,
                    foot.base_index
                );
                self.feet[k].stepping = true;
            }

            if self.feet[k].stepping {
                let foot = &mut self.feet[k];
                let remaining = anchor - foot.position;
                if remaining.length() <= STEP_SPEED {
                    foot.position = anchor;
                    foot.stepping = false;
                } else {
                    foot.position += remaining.normalize_or_zero() * STEP_SPEED;
                }
            }
        }
    }

    /// Index of the paired foot on the other side.
    fn opposite_of(&self, foot_index: usize) -> usize {
        let (left, right) = self.pairs[foot_index / 2];
        if foot_index == left {
            right
        } else {
            left
        }
    }
}
