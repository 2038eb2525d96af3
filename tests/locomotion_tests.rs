//! Integration tests for whole-creature locomotion
//!
//! These tests drive complete creatures and long-running chains through the
//! public API, checking the simulation's standing invariants at every tick.

use glam::Vec2;
use lacerta::spine::{DEAD_ZONE, MAX_BEND_DEG};
use lacerta::{Creature, CreatureConfig, Scene, SpineChain};

fn directed_angle(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b).atan2(a.dot(b))
}

fn assert_chain_invariants(chain: &SpineChain, tick: usize) {
    let points = chain.points();
    for i in 0..points.len() - 1 {
        let gap = points[i].distance(points[i + 1]);
        assert!(
            (gap - chain.spacing()).abs() < 1e-3,
            "tick {}: spacing violated at link {} ({})",
            tick,
            i,
            gap
        );
    }
    let max_bend = MAX_BEND_DEG.to_radians() + 1e-3;
    for i in 1..points.len() - 1 {
        let a = points[i - 1] - points[i];
        let b = points[i] - points[i + 1];
        assert!(
            directed_angle(a, b).abs() <= max_bend,
            "tick {}: curvature violated at joint {}",
            tick,
            i
        );
    }
}

// ============================================================================
// Spine chain scenarios
// ============================================================================

#[test]
fn test_long_pursuit_scenario() {
    let mut chain = SpineChain::new(24, 10.0, Vec2::ZERO);
    let target = Vec2::new(500.0, 0.0);
    for tick in 0..200 {
        chain.update(target);
        assert_chain_invariants(&chain, tick);
    }
    assert!(
        chain.point(0).x > 400.0,
        "head did not reach the target region: {:?}",
        chain.point(0)
    );
    assert!(chain.point(0).distance(target) <= DEAD_ZONE);

    // Zero-length pursuit vector: target placed exactly on the head
    let head = chain.point(0);
    chain.update(head);
    assert_chain_invariants(&chain, 200);
    for point in chain.points() {
        assert!(point.is_finite());
    }
}

#[test]
fn test_orbiting_target_keeps_invariants() {
    let mut chain = SpineChain::new(15, 10.0, Vec2::ZERO);
    for tick in 0..400 {
        let angle = tick as f32 * 0.05;
        let target = Vec2::new(200.0 * angle.cos(), 200.0 * angle.sin());
        chain.update(target);
        assert_chain_invariants(&chain, tick);
    }
}

// ============================================================================
// Gait scenarios
// ============================================================================

/// Over a long run with a moving target, both feet of a pair are never
/// stepping simultaneously at the instant either one begins a step.
#[test]
fn test_gait_alternation_scenario() {
    let config = CreatureConfig {
        feet_pairs: 2,
        ..CreatureConfig::default()
    };
    let mut creature = Creature::new(config).unwrap();

    let mut step_starts = 0;
    for tick in 0..500 {
        // Target travels in a straight line past the creature
        let target = Vec2::new(-300.0 + tick as f32 * 4.0, 180.0);

        let before: Vec<bool> = creature.gait().feet().iter().map(|f| f.stepping).collect();
        creature.update(target);
        let after: Vec<bool> = creature.gait().feet().iter().map(|f| f.stepping).collect();

        for &(left, right) in creature.gait().pairs() {
            for (foot, opposite) in [(left, right), (right, left)] {
                let started = !before[foot] && after[foot];
                if started {
                    step_starts += 1;
                    assert!(
                        !after[opposite],
                        "tick {}: foot {} began stepping while its partner was stepping",
                        tick, foot
                    );
                }
            }
        }
    }
    assert!(step_starts > 0, "the gait never produced a step");
}

#[test]
fn test_full_creature_long_run_is_stable() {
    let mut scene = Scene::new(Vec2::new(800.0, 600.0));
    scene
        .spawn(CreatureConfig {
            origin: Vec2::new(80.0, 300.0),
            ..CreatureConfig::default()
        })
        .unwrap();
    scene
        .spawn(CreatureConfig {
            origin: Vec2::new(80.0, 500.0),
            feet_pairs: 2,
            ..CreatureConfig::default()
        })
        .unwrap();

    for tick in 0..600 {
        let angle = tick as f32 * 0.02;
        scene.on_target_moved(Vec2::new(
            400.0 + 250.0 * angle.cos(),
            300.0 + 180.0 * angle.sin(),
        ));
        scene.update();

        for creature in scene.creatures() {
            assert_chain_invariants(creature.spine(), tick);
            for leg in creature.legs() {
                for point in leg.points() {
                    assert!(point.is_finite(), "tick {}: leg geometry went non-finite", tick);
                }
            }
            for point in creature.outline().points() {
                assert!(point.is_finite(), "tick {}: outline went non-finite", tick);
            }
        }
    }

    let frames = scene.render_data();
    assert_eq!(frames.len(), 2);
    for frame in &frames {
        assert!(!frame.spine.is_empty());
        assert!(!frame.outline.is_empty());
        assert_eq!(frame.legs.len(), frame.feet.len());
    }
}
