// Host-side tests for the formation layouts.

use gallery_core::formation::{self, look_at_euler, FormationKind, TargetTransform};
use glam::Vec3;

const TOL: f32 = 1e-2;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < TOL
}

#[test]
fn every_formation_has_one_target_per_item() {
    for n in [0usize, 1, 2, 7, 10, 25, 50, 123] {
        let f = formation::generate(n);
        for kind in FormationKind::ALL {
            assert_eq!(f.get(kind).len(), n, "{kind} for n={n}");
        }
        assert_eq!(f.item_count(), n);
    }
}

#[test]
fn empty_collection_yields_empty_formations() {
    let f = formation::generate(0);
    assert!(f.table.is_empty());
    assert!(f.sphere.is_empty());
    assert!(f.helix.is_empty());
    assert!(f.grid.is_empty());
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(formation::generate(37), formation::generate(37));
}

#[test]
fn table_is_a_ten_column_lattice() {
    let f = formation::generate(12);
    assert!(approx(f.table.targets[0].position, Vec3::new(-1900.0, 800.0, 0.0)));
    assert!(approx(f.table.targets[9].position, Vec3::new(1700.0, 800.0, 0.0)));
    assert!(approx(f.table.targets[10].position, Vec3::new(-1900.0, 400.0, 0.0)));
    assert!(approx(f.table.targets[11].position, Vec3::new(-1500.0, 400.0, 0.0)));
    for t in f.table.iter() {
        assert_eq!(t.rotation, Vec3::ZERO);
        assert_eq!(t.position.z, 0.0);
    }
}

#[test]
fn sphere_points_sit_on_radius_and_face_outward() {
    for n in [1usize, 2, 13, 50, 200] {
        let f = formation::generate(n);
        for (i, t) in f.sphere.iter().enumerate() {
            let r = t.position.length();
            assert!((r - 800.0).abs() < 0.1, "n={n} i={i} r={r}");
            let facing = t.forward().dot(t.position.normalize());
            assert!(facing > 0.9, "n={n} i={i} facing={facing}");
        }
    }
}

#[test]
fn sphere_starts_at_the_south_pole() {
    let f = formation::generate(50);
    let first = f.sphere.targets[0].position;
    assert!(approx(first, Vec3::new(0.0, -800.0, 0.0)));
}

#[test]
fn helix_points_sit_on_cylinder_and_descend() {
    let n = 60;
    let f = formation::generate(n);
    for (i, t) in f.helix.iter().enumerate() {
        let p = t.position;
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        assert!((radial - 900.0).abs() < 0.1, "i={i} radial={radial}");
        assert!((p.y - (450.0 - 15.0 * i as f32)).abs() < TOL);

        let outward = Vec3::new(p.x, 0.0, p.z).normalize();
        assert!(t.forward().dot(outward) > 0.9, "i={i}");
    }
    for pair in f.helix.targets.windows(2) {
        assert!((pair[0].position.y - pair[1].position.y - 15.0).abs() < TOL);
    }
}

#[test]
fn helix_first_item_is_opposite_the_viewer() {
    // theta = PI puts item 0 on the -Z side of the axis
    let f = formation::generate(1);
    assert!(approx(f.helix.targets[0].position, Vec3::new(0.0, 450.0, -900.0)));
}

#[test]
fn grid_is_five_by_five_layers() {
    let f = formation::generate(60);
    let g = &f.grid.targets;
    assert!(approx(g[0].position, Vec3::new(-800.0, 800.0, -2000.0)));
    assert!(approx(g[4].position, Vec3::new(800.0, 800.0, -2000.0)));
    assert!(approx(g[5].position, Vec3::new(-800.0, 400.0, -2000.0)));
    assert!(approx(g[24].position, Vec3::new(800.0, -800.0, -2000.0)));
    assert!(approx(g[25].position, Vec3::new(-800.0, 800.0, -1000.0)));
    assert!(approx(g[59].position, Vec3::new(800.0, 400.0, 0.0)));
    assert!(g.iter().all(|t| t.rotation == Vec3::ZERO));
}

#[test]
fn look_at_straight_ahead_is_identity() {
    let r = look_at_euler(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), Vec3::Y);
    assert!(r.length() < 1e-5, "{r:?}");
}

#[test]
fn look_at_along_up_axis_does_not_produce_nan() {
    let t = TargetTransform::looking_at(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0));
    assert!(t.rotation.is_finite());
    assert!(t.forward().dot(Vec3::Y) > 0.99);
}

#[test]
fn formation_ids_round_trip() {
    for kind in FormationKind::ALL {
        assert_eq!(kind.id().parse::<FormationKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.id());
    }
    assert!("pyramid".parse::<FormationKind>().is_err());
}

#[test]
fn keyboard_shortcuts_map_to_formations() {
    assert_eq!(FormationKind::from_shortcut("t"), Some(FormationKind::Table));
    assert_eq!(FormationKind::from_shortcut("2"), Some(FormationKind::Sphere));
    assert_eq!(FormationKind::from_shortcut("H"), Some(FormationKind::Helix));
    assert_eq!(FormationKind::from_shortcut("4"), Some(FormationKind::Grid));
    assert_eq!(FormationKind::from_shortcut("x"), None);
}
