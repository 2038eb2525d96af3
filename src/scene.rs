//! Scene management
//!
//! Owns a set of independent creatures plus the latest known pointer target
//! and updates everything sequentially once per frame. The target replaces
//! the original's process-global pointer state: the host's input handler
//! calls [`Scene::on_target_moved`], and each creature reads the value
//! passed into its update.

use glam::Vec2;

use crate::config::{ConfigError, CreatureConfig};
use crate::creature::Creature;
use crate::CreatureRenderData;

/// A set of creatures chasing a shared pointer target.
pub struct Scene {
    creatures: Vec<Creature>,
    target: Vec2,
}

impl Scene {
    /// Create a scene for a view of the given size; the target starts at
    /// the view center until the first pointer event arrives.
    pub fn new(bounds: Vec2) -> Self {
        Self {
            creatures: Vec::new(),
            target: bounds * 0.5,
        }
    }

    /// Add a creature; returns its index for later lookups.
    pub fn spawn(&mut self, config: CreatureConfig) -> Result<usize, ConfigError> {
        let creature = Creature::new(config)?;
        self.creatures.push(creature);
        let index = self.creatures.len() - 1;
        log::info!(
            "spawned creature {} with {} feet. population: {}",
            index,
            self.creatures[index].gait().feet().len(),
            self.creatures.len()
        );
        Ok(index)
    }

    /// Record the newest pointer position; read at the next update.
    pub fn on_target_moved(&mut self, point: Vec2) {
        self.target = point;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// One frame: update every creature against the latest target.
    pub fn update(&mut self) {
        for creature in &mut self.creatures {
            creature.update(self.target);
        }
    }

    /// Press-to-highlight, release-to-clear; out-of-range indices are
    /// ignored.
    pub fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        if let Some(creature) = self.creatures.get_mut(index) {
            creature.set_highlighted(highlighted);
        }
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.creatures
    }

    pub fn count(&self) -> usize {
        self.creatures.len()
    }

    /// Render geometry for every creature, in spawn order.
    pub fn render_data(&self) -> Vec<CreatureRenderData> {
        self.creatures.iter().map(Creature::render_data).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_defaults_to_center() {
        let scene = Scene::new(Vec2::new(800.0, 600.0));
        assert_eq!(scene.target(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_creatures_update_independently() {
        let mut scene = Scene::new(Vec2::new(800.0, 600.0));
        let a = scene
            .spawn(CreatureConfig {
                origin: Vec2::new(80.0, 300.0),
                ..CreatureConfig::default()
            })
            .unwrap();
        let b = scene
            .spawn(CreatureConfig {
                origin: Vec2::new(80.0, 100.0),
                feet_pairs: 2,
                ..CreatureConfig::default()
            })
            .unwrap();

        scene.on_target_moved(Vec2::new(700.0, 500.0));
        for _ in 0..100 {
            scene.update();
        }

        let head_a = scene.creatures()[a].spine().point(0);
        let head_b = scene.creatures()[b].spine().point(0);
        assert!(head_a.distance(scene.target()) <= crate::spine::DEAD_ZONE + crate::spine::MAX_STEP);
        assert!(head_b.distance(scene.target()) <= crate::spine::DEAD_ZONE + crate::spine::MAX_STEP);
        assert_ne!(head_a, head_b);
    }

    #[test]
    fn test_highlight_out_of_range_is_ignored() {
        let mut scene = Scene::new(Vec2::new(100.0, 100.0));
        scene.set_highlighted(3, true); // no creatures yet, must not panic
        let index = scene.spawn(CreatureConfig::default()).unwrap();
        scene.set_highlighted(index, true);
        assert!(scene.creatures()[index].highlighted());
    }
}
