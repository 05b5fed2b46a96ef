//! Tests for scene storage: insertion order, z markers, and hit-testing.

use shapekit_editor::catalog::create_shape;
use shapekit_editor::{Point, Scene, ShapeId, ShapeKind};

fn scene_with(kinds: &[ShapeKind]) -> (Scene, Vec<ShapeId>) {
    let mut scene = Scene::new();
    let mut ids = Vec::new();
    for &kind in kinds {
        let shape = create_shape(kind);
        ids.push(shape.id());
        scene.push(shape);
    }
    (scene, ids)
}

#[test]
fn test_push_and_lookup() {
    let (scene, ids) = scene_with(&[ShapeKind::Rectangle, ShapeKind::Ellipse]);
    assert_eq!(scene.len(), 2);
    assert!(!scene.is_empty());
    assert!(scene.contains(ids[0]));
    assert_eq!(scene.get(ids[1]).map(|s| s.kind()), Some(ShapeKind::Ellipse));
    assert!(scene.get(ShapeId::new()).is_none());
}

#[test]
fn test_remove_returns_the_shape() {
    let (mut scene, ids) = scene_with(&[ShapeKind::Rectangle, ShapeKind::Ellipse]);
    let removed = scene.remove(ids[0]).unwrap();
    assert_eq!(removed.id(), ids[0]);
    assert_eq!(scene.len(), 1);
    assert!(!scene.contains(ids[0]));
    assert!(scene.remove(ids[0]).is_none());
}

#[test]
fn test_new_shapes_start_at_base_z() {
    let (mut scene, ids) = scene_with(&[ShapeKind::Rectangle]);
    assert_eq!(scene.z_of(ids[0]), Some(0));
    scene.set_z(ids[0], 1);
    assert_eq!(scene.z_of(ids[0]), Some(1));
    assert_eq!(scene.z_of(ShapeId::new()), None);
}

#[test]
fn test_hit_test_prefers_later_insertion() {
    // Two 100x50 rectangles stacked at the origin; the later one wins.
    let (scene, ids) = scene_with(&[ShapeKind::Rectangle, ShapeKind::Rectangle]);
    assert_eq!(scene.hit_test(Point::new(50.0, 25.0)), Some(ids[1]));
    assert_eq!(scene.hit_test(Point::new(500.0, 25.0)), None);
}

#[test]
fn test_hit_test_ignores_z_markers() {
    // Raising a shape's z changes paint order, not pick order: picking
    // still walks insertion order in reverse.
    let (mut scene, ids) = scene_with(&[ShapeKind::Rectangle, ShapeKind::Rectangle]);
    scene.set_z(ids[0], 1);
    assert_eq!(scene.hit_test(Point::new(50.0, 25.0)), Some(ids[1]));
}

#[test]
fn test_draw_order_raises_marked_shape_stably() {
    let (mut scene, ids) = scene_with(&[
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
    ]);
    scene.set_z(ids[1], 1);

    let order: Vec<ShapeId> = scene.draw_order().iter().map(|item| item.shape.id()).collect();
    assert_eq!(order, vec![ids[0], ids[2], ids[1]]);
}
