//! Raster preview
//!
//! Rasterizes the draw list to an image buffer using tiny-skia. This is
//! the reference consumer of [`crate::render::build_draw_list`]: shapes
//! in paint order, each filled then stroked, with the frame border and
//! corner markers painted last. Hosts with their own renderer consume
//! the draw list directly instead.

use image::{Rgb, RgbImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::editor::Editor;
use crate::render::{build_draw_list, DrawShape, FrameOverlay};

fn to_color(color: shapekit_core::Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn bg_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(255, 255, 255, 255)
}

/// Converts a lyon outline (local coordinates) to a tiny-skia path.
fn to_skia_path(outline: &lyon::path::Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in outline.iter() {
        match event {
            lyon::path::Event::Begin { at } => pb.move_to(at.x, at.y),
            lyon::path::Event::Line { to, .. } => pb.line_to(to.x, to.y),
            lyon::path::Event::Quadratic { ctrl, to, .. } => {
                pb.quad_to(ctrl.x, ctrl.y, to.x, to.y)
            }
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

fn draw_shape(pixmap: &mut Pixmap, shape: &DrawShape) {
    let Some(path) = to_skia_path(&shape.outline) else {
        return;
    };
    let transform = Transform::from_translate(shape.origin.x as f32, shape.origin.y as f32);

    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color(to_color(shape.fill));
    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);

    paint.set_color(to_color(shape.stroke.color));
    let stroke = Stroke {
        width: shape.stroke.width as f32,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

fn draw_frame(pixmap: &mut Pixmap, overlay: &FrameOverlay) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color(to_color(overlay.border.color));

    let rect = Rect::from_xywh(
        overlay.bounds.x as f32,
        overlay.bounds.y as f32,
        overlay.bounds.width as f32,
        overlay.bounds.height as f32,
    );
    if let Some(r) = rect {
        let border = PathBuilder::from_rect(r);
        let stroke = Stroke {
            width: overlay.border.width as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&border, &paint, &stroke, Transform::identity(), None);
    }

    paint.set_color(to_color(overlay.marker_fill));
    for marker in &overlay.markers {
        let circle = PathBuilder::from_circle(
            marker.x as f32,
            marker.y as f32,
            overlay.marker_radius as f32,
        );
        if let Some(c) = circle {
            pixmap.fill_path(&c, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

/// Renders the editor's current state to an RGB image the size of its
/// canvas (rounded up to whole pixels).
pub fn render_to_image(editor: &Editor) -> RgbImage {
    let canvas = editor.canvas_size();
    let width = canvas.width.ceil().max(1.0) as u32;
    let height = canvas.height.ceil().max(1.0) as u32;

    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(bg_color());

    let list = build_draw_list(editor);
    for shape in &list.shapes {
        draw_shape(&mut pixmap, shape);
    }
    if let Some(overlay) = &list.frame {
        draw_frame(&mut pixmap, overlay);
    }

    // Convert Pixmap to RgbImage, alpha assumed opaque
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
