//! Target layouts for the four preset formations.
//!
//! Every formation is an index-aligned list of [`TargetTransform`]s: entry `i`
//! is where panel `i` should end up. Generation is pure and deterministic in
//! the item count.

use crate::constants::*;
use glam::{EulerRot, Mat3, Quat, Vec3};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// The four preset arrangements a user can switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormationKind {
    Table,
    Sphere,
    Helix,
    Grid,
}

impl FormationKind {
    pub const ALL: [FormationKind; 4] = [
        FormationKind::Table,
        FormationKind::Sphere,
        FormationKind::Helix,
        FormationKind::Grid,
    ];

    /// Stable identifier, also used as the DOM id of the matching button.
    pub fn id(self) -> &'static str {
        match self {
            FormationKind::Table => "table",
            FormationKind::Sphere => "sphere",
            FormationKind::Helix => "helix",
            FormationKind::Grid => "grid",
        }
    }

    /// Keyboard shortcut: initial letter or position in the menu (1-4).
    pub fn from_shortcut(key: &str) -> Option<FormationKind> {
        match key {
            "t" | "T" | "1" => Some(FormationKind::Table),
            "s" | "S" | "2" => Some(FormationKind::Sphere),
            "h" | "H" | "3" => Some(FormationKind::Helix),
            "g" | "G" | "4" => Some(FormationKind::Grid),
            _ => None,
        }
    }
}

impl fmt::Display for FormationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormationKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown formation '{s}'"))
    }
}

/// Position plus Euler orientation (XYZ order, radians) for one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl TargetTransform {
    pub fn facing_forward(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Transform at `position` whose local +Z axis points at `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            rotation: look_at_euler(position, target, Vec3::Y),
        }
    }

    pub fn orientation(&self) -> Quat {
        euler_to_quat(self.rotation)
    }

    /// Direction of the panel's local +Z axis in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }
}

/// One named, ordered target set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Formation {
    pub targets: Vec<TargetTransform>,
}

impl Formation {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TargetTransform> {
        self.targets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TargetTransform> {
        self.targets.iter()
    }
}

impl FromIterator<TargetTransform> for Formation {
    fn from_iter<I: IntoIterator<Item = TargetTransform>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

/// All four formations for one item count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Formations {
    pub table: Formation,
    pub sphere: Formation,
    pub helix: Formation,
    pub grid: Formation,
}

impl Formations {
    pub fn get(&self, kind: FormationKind) -> &Formation {
        match kind {
            FormationKind::Table => &self.table,
            FormationKind::Sphere => &self.sphere,
            FormationKind::Helix => &self.helix,
            FormationKind::Grid => &self.grid,
        }
    }

    /// Item count the formations were generated for.
    pub fn item_count(&self) -> usize {
        self.table.len()
    }
}

pub fn generate(n: usize) -> Formations {
    Formations {
        table: (0..n).map(table_target).collect(),
        sphere: (0..n).map(|i| sphere_target(i, n)).collect(),
        helix: (0..n).map(helix_target).collect(),
        grid: (0..n).map(grid_target).collect(),
    }
}

pub fn table_target(i: usize) -> TargetTransform {
    let col = (i % TABLE_COLUMNS) as f32;
    let row = (i / TABLE_COLUMNS) as f32;
    TargetTransform::facing_forward(Vec3::new(
        col * TABLE_SPACING + TABLE_ORIGIN_X,
        -row * TABLE_SPACING + TABLE_ORIGIN_Y,
        0.0,
    ))
}

/// Equal-area spiral over the sphere; panels face away from the centre.
pub fn sphere_target(i: usize, n: usize) -> TargetTransform {
    let l = n as f32;
    let phi = (-1.0 + 2.0 * i as f32 / l).clamp(-1.0, 1.0).acos();
    let theta = (l * PI).sqrt() * phi;
    let position = from_spherical(SPHERE_RADIUS, phi, theta);
    TargetTransform::looking_at(position, position * 2.0)
}

/// Descending spiral around the y axis; panels face away from the axis.
pub fn helix_target(i: usize) -> TargetTransform {
    let theta = i as f32 * HELIX_ANGLE_STEP + PI;
    let y = -(i as f32 * HELIX_RISE_PER_ITEM) + HELIX_TOP_Y;
    let position = from_cylindrical(HELIX_RADIUS, theta, y);
    let outward = Vec3::new(position.x * 2.0, position.y, position.z * 2.0);
    TargetTransform::looking_at(position, outward)
}

pub fn grid_target(i: usize) -> TargetTransform {
    let col = (i % GRID_COLUMNS) as f32;
    let row = ((i / GRID_COLUMNS) % GRID_ROWS) as f32;
    let layer = (i / (GRID_COLUMNS * GRID_ROWS)) as f32;
    TargetTransform::facing_forward(Vec3::new(
        col * GRID_SPACING + GRID_ORIGIN_X,
        -row * GRID_SPACING + GRID_ORIGIN_Y,
        layer * GRID_LAYER_SPACING + GRID_ORIGIN_Z,
    ))
}

/// `phi` is the polar angle from +Y, `theta` the azimuth around Y from +Z.
#[inline]
pub fn from_spherical(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi_r = phi.sin() * radius;
    Vec3::new(
        sin_phi_r * theta.sin(),
        phi.cos() * radius,
        sin_phi_r * theta.cos(),
    )
}

#[inline]
pub fn from_cylindrical(radius: f32, theta: f32, y: f32) -> Vec3 {
    Vec3::new(radius * theta.sin(), y, radius * theta.cos())
}

#[inline]
pub fn euler_to_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Euler angles (XYZ) for an object at `eye` whose +Z axis points at `target`.
pub fn look_at_euler(eye: Vec3, target: Vec3, up: Vec3) -> Vec3 {
    let basis = look_at_basis(eye, target, up);
    let (x, y, z) = Quat::from_mat3(&basis).to_euler(EulerRot::XYZ);
    Vec3::new(x, y, z)
}

// Degenerate directions get nudged off the up axis instead of producing NaNs.
fn look_at_basis(eye: Vec3, target: Vec3, up: Vec3) -> Mat3 {
    let mut z = target - eye;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize();
    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        if (up.z.abs() - 1.0).abs() < f32::EPSILON {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    x = x.normalize();
    let y = z.cross(x);
    Mat3::from_cols(x, y, z)
}
