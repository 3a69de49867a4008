//! Live panel objects, one per photo item.

use crate::constants::SCATTER_EXTENT;
use crate::formation::{euler_to_quat, TargetTransform};
use crate::photo::Item;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// Renderable panel bound 1:1 to an [`Item`].
///
/// Position and rotation are written only by the transition engine.
#[derive(Clone, Debug)]
pub struct PanelObject {
    item: Item,
    position: Vec3,
    rotation: Vec3,
}

impl PanelObject {
    pub fn new(item: Item, position: Vec3) -> Self {
        Self {
            item,
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn index(&self) -> usize {
        self.item.index
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles, XYZ order, radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn orientation(&self) -> Quat {
        euler_to_quat(self.rotation)
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }

    pub fn matches(&self, target: &TargetTransform) -> bool {
        self.position == target.position && self.rotation == target.rotation
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub(crate) fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }
}

/// Ordered panel list; panel `i` pairs with target `i` of every formation.
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    panels: Vec<PanelObject>,
}

impl SceneRegistry {
    /// One panel per item, scattered uniformly in the initial cube, facing forward.
    pub fn build<R: Rng>(items: &[Item], rng: &mut R) -> Self {
        let panels = items
            .iter()
            .map(|item| PanelObject::new(item.clone(), scatter_position(rng)))
            .collect();
        Self { panels }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[PanelObject] {
        &self.panels
    }

    pub fn get(&self, index: usize) -> Option<&PanelObject> {
        self.panels.get(index)
    }

    pub(crate) fn panels_mut(&mut self) -> &mut [PanelObject] {
        &mut self.panels
    }
}

fn scatter_position<R: Rng>(rng: &mut R) -> Vec3 {
    let mut axis = || rng.gen::<f32>() * 2.0 * SCATTER_EXTENT - SCATTER_EXTENT;
    Vec3::new(axis(), axis(), axis())
}
