use anyhow::Context;
use tracing::info;

use shapekit::{init_logging, Editor, Key, Point, ShapeKind, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!("shapekit {} (built {})", VERSION, BUILD_DATE);

    // A 400x300 canvas with one shape of each kind, all at the default
    // offset, so the triangle (added last) is topmost.
    let mut editor = Editor::new(400.0, 300.0);
    editor.add_shape(ShapeKind::Rectangle);
    editor.add_shape(ShapeKind::Ellipse);
    let triangle = editor.add_shape(ShapeKind::Triangle);

    // Press on the stack, drag toward the center, release. The topmost
    // shape is selected and moved.
    editor.pointer_down(Point::new(60.0, 25.0));
    editor.pointer_move(Point::new(180.0, 130.0));
    editor.pointer_up(Point::new(180.0, 130.0));

    // Grab the selection frame's bottom-right marker and grow the shape.
    let bounds = editor.frame().bounds();
    let grip = Point::new(bounds.right() - 1.0, bounds.bottom() - 1.0);
    editor.pointer_down(grip);
    editor.pointer_move(Point::new(grip.x + 20.0, grip.y + 10.0));
    editor.pointer_up(Point::new(grip.x + 20.0, grip.y + 10.0));

    if let Some(shape) = editor.shape(triangle) {
        info!(
            "{} now at ({}, {}), {} x {}",
            shape.kind(),
            shape.origin().x,
            shape.origin().y,
            shape.size().width,
            shape.size().height
        );
    }

    // Preview with the selection frame still attached.
    if editor.take_dirty() {
        let image = shapekit::render_to_image(&editor);
        image
            .save("shapekit-preview.png")
            .context("saving preview image")?;
        info!(
            "Wrote shapekit-preview.png ({} x {})",
            image.width(),
            image.height()
        );
    }

    // Click empty canvas to deselect, then confirm Delete is a no-op
    // without a selection.
    editor.pointer_down(Point::new(395.0, 295.0));
    editor.pointer_up(Point::new(395.0, 295.0));
    editor.key_down(Key::Delete);
    info!("{} shapes on the canvas", editor.shape_count());

    Ok(())
}
