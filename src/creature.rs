//! Creature orchestration
//!
//! Runs the locomotion passes in fixed order each tick:
//! spine pursuit -> body outline -> gait -> legs.

use glam::Vec2;

use crate::body::BodyOutline;
use crate::config::{ConfigError, CreatureConfig, CreatureStyle};
use crate::curve;
use crate::gait::GaitController;
use crate::leg::{self, Leg};
use crate::spine::SpineChain;
use crate::{CreatureRenderData, FootRenderData, LegRenderData};

/// Circle radius feet are rendered with
pub const FOOT_RADIUS: f32 = 5.0;
/// Curve densification used for render polylines
const RENDER_SAMPLES_PER_SEGMENT: usize = 8;

/// One articulated creature: spine, outline, gait state and current legs.
pub struct Creature {
    spine: SpineChain,
    outline: BodyOutline,
    gait: GaitController,
    legs: Vec<Leg>,
    style: CreatureStyle,
    highlighted: bool,
}

impl Creature {
    /// Build a creature from a validated configuration. Degenerate but
    /// harmless configurations produce trivial spines or legless creatures
    /// rather than failing.
    pub fn new(config: CreatureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spine = SpineChain::new(config.total_points(), config.spacing, config.origin);
        let gait =
            GaitController::new(&spine, config.head_size, config.tail_size, config.feet_pairs);
        log::debug!(
            "created creature with {} spine points, {} feet",
            spine.len(),
            gait.feet().len()
        );
        Ok(Self {
            spine,
            outline: BodyOutline::new(),
            gait,
            legs: Vec::new(),
            style: config.style,
            highlighted: false,
        })
    }

    /// One simulation tick toward the latest known target.
    pub fn update(&mut self, target: Vec2) {
        self.spine.update(target);
        self.outline.update(&self.spine);
        self.gait.update(&self.spine);
        leg::solve_all(&self.spine, &self.gait, &mut self.legs);
    }

    pub fn spine(&self) -> &SpineChain {
        &self.spine
    }

    pub fn outline(&self) -> &BodyOutline {
        &self.outline
    }

    pub fn gait(&self) -> &GaitController {
        &self.gait
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Cosmetic selection flag, surfaced in render data only.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Smooth, ready-to-draw geometry for the current frame. Curve fitting
    /// happens here, on copies; stored simulation points are untouched.
    pub fn render_data(&self) -> CreatureRenderData {
        let legs = self
            .legs
            .iter()
            .map(|leg| LegRenderData {
                points: curve::flatten_open(&leg.points(), RENDER_SAMPLES_PER_SEGMENT),
            })
            .collect();
        let feet = self
            .gait
            .feet()
            .iter()
            .map(|foot| FootRenderData {
                position: foot.position,
                radius: FOOT_RADIUS,
                stepping: foot.stepping,
            })
            .collect();
        CreatureRenderData {
            spine: curve::flatten_open(self.spine.points(), RENDER_SAMPLES_PER_SEGMENT),
            outline: curve::flatten_closed(self.outline.points(), RENDER_SAMPLES_PER_SEGMENT),
            legs,
            feet,
            style: self.style.clone(),
            highlighted: self.highlighted,
        }
    }
}
