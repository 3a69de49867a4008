// Host-side tests for tweens and the transition engine.

mod common;

use common::items;
use gallery_core::easing::{exponential_in_out, Easing};
use gallery_core::tween::Tween;
use gallery_core::{formation, AnimationSet, SceneRegistry, TransitionError};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const BASE: Duration = Duration::from_millis(2000);
const FRAME: Duration = Duration::from_millis(16);

fn scene(n: usize, rng: &mut StdRng) -> SceneRegistry {
    SceneRegistry::build(&items(n), rng)
}

fn run(set: &mut AnimationSet, scene: &mut SceneRegistry, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        set.update(FRAME, scene);
        elapsed += FRAME;
    }
}

#[test]
fn exponential_ease_hits_endpoints_exactly() {
    assert_eq!(exponential_in_out(0.0), 0.0);
    assert_eq!(exponential_in_out(1.0), 1.0);
    assert_eq!(exponential_in_out(0.5), 0.5);
    assert!((exponential_in_out(0.25) - 0.015_625).abs() < 1e-6);
    assert!((exponential_in_out(0.25) + exponential_in_out(0.75) - 1.0).abs() < 1e-6);
}

#[test]
fn exponential_ease_is_monotonic() {
    let mut prev = 0.0;
    for step in 1..=100 {
        let v = Easing::ExponentialInOut.apply(step as f32 / 100.0);
        assert!(v >= prev, "not monotonic at {step}");
        prev = v;
    }
}

#[test]
fn finished_tween_lands_exactly_on_end() {
    let start = Vec3::new(-1234.567, 89.01, 1999.9);
    let end = Vec3::new(0.1, -0.3, 701.7);
    let mut tween = Tween::new(start, end, Duration::from_millis(1300), Easing::ExponentialInOut);
    for _ in 0..200 {
        tween.advance(Duration::from_millis(7));
    }
    assert!(tween.is_finished());
    assert_eq!(tween.progress(), 1.0);
    assert_eq!(tween.value(), end);
}

#[test]
fn tween_midpoint_is_halfway() {
    let mut tween = Tween::new(Vec3::ZERO, Vec3::splat(100.0), Duration::from_secs(2), Easing::ExponentialInOut);
    let v = tween.advance(Duration::from_secs(1));
    assert!((v - Vec3::splat(50.0)).length() < 1e-3);
    assert!(!tween.is_finished());
}

#[test]
fn zero_length_tween_is_complete_immediately() {
    let tween = Tween::new(Vec3::ZERO, Vec3::ONE, Duration::ZERO, Easing::Linear);
    assert!(tween.is_finished());
    assert_eq!(tween.value(), Vec3::ONE);
}

#[test]
fn transform_creates_one_position_and_rotation_tween_per_panel() {
    let mut rng = StdRng::seed_from_u64(1);
    let scene = scene(20, &mut rng);
    let f = formation::generate(20);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.sphere, BASE, &mut rng).unwrap();
    assert_eq!(set.active_position_tweens(), 20);
    assert_eq!(set.active_rotation_tweens(), 20);
    assert!(set.is_settling());
}

#[test]
fn second_transform_replaces_the_first() {
    let mut rng = StdRng::seed_from_u64(2);
    let scene = scene(33, &mut rng);
    let f = formation::generate(33);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.grid, BASE, &mut rng).unwrap();
    set.transform(&scene, &f.helix, BASE, &mut rng).unwrap();
    assert_eq!(set.active_position_tweens(), 33);
    assert_eq!(set.active_rotation_tweens(), 33);
    assert_eq!(set.active_tweens(), 66);
}

#[test]
fn mismatched_lengths_are_refused() {
    let mut rng = StdRng::seed_from_u64(3);
    let scene = scene(3, &mut rng);
    let f = formation::generate(4);
    let mut set = AnimationSet::new();
    let err = set.transform(&scene, &f.table, BASE, &mut rng).unwrap_err();
    assert_eq!(err, TransitionError::LengthMismatch { panels: 3, targets: 4 });
    assert_eq!(set.active_tweens(), 0);
}

#[test]
fn durations_are_staggered_between_base_and_twice_base() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut scene = scene(40, &mut rng);
    let f = formation::generate(40);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.table, BASE, &mut rng).unwrap();

    set.update(BASE - Duration::from_millis(1), &mut scene);
    assert_eq!(set.active_tweens(), 80, "nothing may finish before the base duration");

    set.update(Duration::from_millis(1), &mut scene);
    set.update(BASE, &mut scene);
    assert_eq!(set.active_tweens(), 0);
    assert!(set.is_idle());
}

#[test]
fn settled_transition_matches_targets_exactly() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = scene(50, &mut rng);
    let f = formation::generate(50);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.sphere, BASE, &mut rng).unwrap();
    run(&mut set, &mut scene, BASE * 2);

    for (panel, target) in scene.panels().iter().zip(f.sphere.iter()) {
        assert!(panel.matches(target), "panel {} off target", panel.index());
    }
}

#[test]
fn grid_then_helix_ends_on_helix() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut scene = scene(50, &mut rng);
    let f = formation::generate(50);
    let mut set = AnimationSet::new();

    set.transform(&scene, &f.grid, BASE, &mut rng).unwrap();
    set.update(FRAME, &mut scene);
    set.transform(&scene, &f.helix, BASE, &mut rng).unwrap();
    run(&mut set, &mut scene, BASE * 2 + BASE * 2);

    for (panel, target) in scene.panels().iter().zip(f.helix.iter()) {
        assert_eq!(panel.position(), target.position);
        assert_eq!(panel.rotation(), target.rotation);
    }
}

#[test]
fn cancel_keeps_panels_where_interpolation_left_them() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut scene = scene(10, &mut rng);
    let f = formation::generate(10);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.table, BASE, &mut rng).unwrap();
    set.update(Duration::from_millis(1500), &mut scene);

    let frozen: Vec<Vec3> = scene.panels().iter().map(|p| p.position()).collect();
    set.cancel_all();
    assert!(set.is_idle());
    set.update(Duration::from_millis(1500), &mut scene);
    let after: Vec<Vec3> = scene.panels().iter().map(|p| p.position()).collect();
    assert_eq!(frozen, after);
}

#[test]
fn step_reports_redraw_until_settled() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut scene = scene(5, &mut rng);
    let f = formation::generate(5);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.grid, BASE, &mut rng).unwrap();

    let first = set.update(FRAME, &mut scene);
    assert!(first.moved && first.settling && first.needs_redraw());

    let last = set.update(BASE * 2, &mut scene);
    assert!(last.settled);
    assert!(!last.settling);

    let idle = set.update(FRAME, &mut scene);
    assert!(!idle.needs_redraw());
}

#[test]
fn empty_scene_transition_is_harmless() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut scene = scene(0, &mut rng);
    let f = formation::generate(0);
    let mut set = AnimationSet::new();
    set.transform(&scene, &f.helix, BASE, &mut rng).unwrap();
    assert_eq!(set.active_tweens(), 0);
    set.update(FRAME, &mut scene);
}
