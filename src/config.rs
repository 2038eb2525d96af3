//! Creature configuration
//!
//! Explicit immutable configuration with named, validated fields and
//! documented defaults. Styling is opaque to the locomotion core and is
//! passed through to render data unexamined.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that cannot produce a creature
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("spine spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),
}

/// Opaque styling handed through to the rendering host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureStyle {
    /// Stroke color as RGBA
    pub stroke_color: [u8; 4],
    pub stroke_width: f32,
    pub round_cap: bool,
}

impl Default for CreatureStyle {
    fn default() -> Self {
        Self {
            stroke_color: [50, 160, 60, 255],
            stroke_width: 20.0,
            round_cap: true,
        }
    }
}

/// Creature construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureConfig {
    /// Spine points in the head section
    pub head_size: usize,
    /// Spine points between head and tail
    pub mid_size: usize,
    /// Spine points in the tail section
    pub tail_size: usize,
    /// Number of leg pairs; 0 yields a legless creature
    pub feet_pairs: usize,
    /// Fixed distance between consecutive spine points
    pub spacing: f32,
    /// Initial head position; the spine is laid out from here along +x
    pub origin: Vec2,
    /// Styling passed through to render data
    pub style: CreatureStyle,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            head_size: 2,
            mid_size: 10,
            tail_size: 3,
            feet_pairs: 4,
            spacing: 10.0,
            origin: Vec2::ZERO,
            style: CreatureStyle::default(),
        }
    }
}

impl CreatureConfig {
    /// Total number of spine points
    pub fn total_points(&self) -> usize {
        self.head_size + self.mid_size + self.tail_size
    }

    /// Reject configurations that would corrupt the simulation. Degenerate
    /// but harmless configurations (zero feet pairs, very short spines) are
    /// accepted and degrade gracefully instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}
