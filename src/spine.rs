//! Follow-the-leader spine chain
//!
//! Drags an ordered point sequence toward a moving target while keeping
//! consecutive points exactly `spacing` apart and bounding the directed
//! angle between consecutive links, like a chain pulled across a table.

use glam::Vec2;

/// Radius around the target inside which the head stops moving
pub const DEAD_ZONE: f32 = 45.0;
/// Maximum head movement per tick
pub const MAX_STEP: f32 = 10.0;
/// Maximum directed angle between consecutive links, degrees
pub const MAX_BEND_DEG: f32 = 20.0;

/// Signed angle from `a` to `b` in radians, in [-pi, pi].
pub(crate) fn directed_angle(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b).atan2(a.dot(b))
}

/// Ordered spine points with fixed spacing, head at index 0.
#[derive(Debug, Clone)]
pub struct SpineChain {
    points: Vec<Vec2>,
    spacing: f32,
}

impl SpineChain {
    /// Lay out `count` points from `origin` along +x at `spacing` intervals,
    /// head first.
    pub fn new(count: usize, spacing: f32, origin: Vec2) -> Self {
        let points = (0..count)
            .map(|i| origin + Vec2::new(i as f32 * spacing, 0.0))
            .collect();
        Self { points, spacing }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Point at `index`; callers hold indices validated at construction.
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    /// One pursuit-and-relaxation tick toward `target`.
    ///
    /// The head chases the target (stopping inside the dead zone), then a
    /// single head-to-tail sweep repositions every trailing point at exactly
    /// `spacing` behind its leader, clamping each link's direction to within
    /// [`MAX_BEND_DEG`] of the previous link. Each point is written once.
    pub fn update(&mut self, target: Vec2) {
        let Some(&head) = self.points.first() else {
            return;
        };

        let to_target = target - head;
        let mut pursuit_dir = Vec2::X;
        if to_target.length() > DEAD_ZONE {
            let step = to_target.clamp_length_max(MAX_STEP);
            self.points[0] += step;
            pursuit_dir = step.normalize_or_zero();
        }

        let max_bend = MAX_BEND_DEG.to_radians();
        let mut last_dir: Option<Vec2> = None;
        for i in 0..self.points.len().saturating_sub(1) {
            // Link direction from the trailing point toward its leader.
            let mut dir = (self.points[i] - self.points[i + 1]).normalize_or_zero();
            if dir == Vec2::ZERO {
                // Coincident points: inherit the previous link's direction,
                // or the head's movement direction for the first link.
                dir = last_dir.unwrap_or(pursuit_dir);
            }
            if let Some(prev) = last_dir {
                if directed_angle(prev, dir).abs() > max_bend {
                    // No extra bend beyond the limit: keep the previous
                    // link's direction.
                    dir = prev;
                }
            }
            self.points[i + 1] = self.points[i] - dir * self.spacing;
            last_dir = Some(dir);
        }
    }
}
