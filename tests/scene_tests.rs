// Host-side tests for panel construction.

mod common;

use common::items;
use gallery_core::constants::SCATTER_EXTENT;
use gallery_core::SceneRegistry;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn one_panel_per_item_in_item_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let source = items(17);
    let scene = SceneRegistry::build(&source, &mut rng);
    assert_eq!(scene.len(), 17);
    for (i, panel) in scene.panels().iter().enumerate() {
        assert_eq!(panel.index(), i);
        assert_eq!(panel.item(), &source[i]);
    }
}

#[test]
fn panels_start_scattered_inside_the_cube_facing_forward() {
    let mut rng = StdRng::seed_from_u64(12);
    let scene = SceneRegistry::build(&items(200), &mut rng);
    for panel in scene.panels() {
        let p = panel.position();
        for axis in [p.x, p.y, p.z] {
            assert!((-SCATTER_EXTENT..=SCATTER_EXTENT).contains(&axis), "{p:?}");
        }
        assert_eq!(panel.rotation(), Vec3::ZERO);
    }
}

#[test]
fn scatter_axes_are_independent() {
    let mut rng = StdRng::seed_from_u64(13);
    let scene = SceneRegistry::build(&items(50), &mut rng);
    let diagonal = scene
        .panels()
        .iter()
        .filter(|p| p.position().x == p.position().y && p.position().y == p.position().z)
        .count();
    assert_eq!(diagonal, 0);
    let spread = scene
        .panels()
        .iter()
        .map(|p| p.position().x)
        .fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
    assert!(spread.1 - spread.0 > SCATTER_EXTENT, "x spread too narrow: {spread:?}");
}

#[test]
fn same_seed_same_scatter() {
    let a = SceneRegistry::build(&items(30), &mut StdRng::seed_from_u64(14));
    let b = SceneRegistry::build(&items(30), &mut StdRng::seed_from_u64(14));
    for (pa, pb) in a.panels().iter().zip(b.panels()) {
        assert_eq!(pa.position(), pb.position());
    }
}

#[test]
fn empty_item_list_builds_empty_scene() {
    let scene = SceneRegistry::build(&[], &mut StdRng::seed_from_u64(15));
    assert!(scene.is_empty());
    assert!(scene.get(0).is_none());
}
