//! Scene storage
//!
//! The ordered collection of shapes on the canvas. Insertion order is the
//! base z-order; a two-level z marker (0 or 1) raises the selected shape
//! above the rest without reordering the sequence. Hit-testing walks the
//! insertion order in reverse so the topmost shape wins.

use serde::{Deserialize, Serialize};

use shapekit_core::{Point, ShapeId};

use crate::model::Shape;

/// Z marker for unselected shapes.
pub const Z_BASE: u8 = 0;

/// Z marker raising the selected shape above the rest.
pub const Z_RAISED: u8 = 1;

/// A shape plus its z marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub shape: Shape,
    /// 0 for unselected shapes, 1 for the raised selection.
    pub z: u8,
}

/// Ordered shape storage. The selection frame is owned by the editor, not
/// stored here, so scene operations can never touch it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a shape; it becomes the new topmost element.
    pub fn push(&mut self, shape: Shape) {
        self.items.push(SceneItem { shape, z: Z_BASE });
    }

    /// Removes and returns the shape with the given id, if present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.items.iter().position(|item| item.shape.id() == id)?;
        Some(self.items.remove(index).shape)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.items
            .iter()
            .find(|item| item.shape.id() == id)
            .map(|item| &item.shape)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.items
            .iter_mut()
            .find(|item| item.shape.id() == id)
            .map(|item| &mut item.shape)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.items.iter().any(|item| item.shape.id() == id)
    }

    /// Z marker of the shape with the given id.
    pub fn z_of(&self, id: ShapeId) -> Option<u8> {
        self.items
            .iter()
            .find(|item| item.shape.id() == id)
            .map(|item| item.z)
    }

    pub fn set_z(&mut self, id: ShapeId, z: u8) {
        if let Some(item) = self.items.iter_mut().find(|item| item.shape.id() == id) {
            item.z = z;
        }
    }

    /// Topmost shape containing the point, walking insertion order in
    /// reverse. Returns its id.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.shape.contains(point))
            .map(|item| item.shape.id())
    }

    /// Items in paint order: z marker first (0 below 1), insertion order
    /// within each level. The sort is stable so unselected shapes keep
    /// their relative stacking.
    pub fn draw_order(&self) -> Vec<&SceneItem> {
        let mut ordered: Vec<&SceneItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.z);
        ordered
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
