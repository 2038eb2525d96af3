//! Procedural locomotion for articulated 2D creatures
//!
//! This crate implements:
//! - Follow-the-leader spine chains with fixed spacing and bounded curvature
//! - Body contour synthesis from a piecewise depth profile
//! - Alternating per-foot gait state machines
//! - Three-point bent-leg solving from hip and ankle positions
//!
//! The host owns the render loop: it forwards pointer events to a [`Scene`]
//! and calls [`Scene::update`] once per frame, then draws the geometry from
//! [`Creature::render_data`]. The crate neither draws pixels nor owns the
//! event loop.

use glam::Vec2;

pub mod body;
pub mod config;
pub mod creature;
pub mod curve;
pub mod gait;
pub mod leg;
pub mod scene;
pub mod spine;

// Re-export main types for convenience
pub use body::BodyOutline;
pub use config::{ConfigError, CreatureConfig, CreatureStyle};
pub use creature::Creature;
pub use gait::{Foot, GaitController, Side};
pub use leg::Leg;
pub use scene::Scene;
pub use spine::SpineChain;

/// Smooth polyline for one leg
#[derive(Debug, Clone)]
pub struct LegRenderData {
    pub points: Vec<Vec2>,
}

/// Render data for one foot, drawn as a circle
#[derive(Debug, Clone)]
pub struct FootRenderData {
    pub position: Vec2,
    pub radius: f32,
    pub stepping: bool,
}

/// Ready-to-draw geometry for an entire creature
#[derive(Debug, Clone)]
pub struct CreatureRenderData {
    /// Smooth open curve through the spine points
    pub spine: Vec<Vec2>,
    /// Smooth closed body outline
    pub outline: Vec<Vec2>,
    pub legs: Vec<LegRenderData>,
    pub feet: Vec<FootRenderData>,
    /// Styling passed through unexamined from the configuration
    pub style: CreatureStyle,
    pub highlighted: bool,
}
