// render/ - Layer renderer
//
// Layers paint through the `Surface` trait so the same draw code runs
// against the RGBA `Canvas` (what the page shows) and a recording surface in
// tests. Drawing never mutates the scene.

mod canvas;
pub mod color;
mod layers;

pub use canvas::Canvas;
pub use color::{Rgb, Rgba};

use crate::scene::{Layer, Scene};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f32, color: impl Into<Rgba>) -> Self {
        Self { offset, color: color.into() }
    }
}

/// Fill style. Gradient coordinates are in the shape's local space.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Top-to-bottom gradient between `y0` and `y1`.
    Vertical { y0: f32, y1: f32, stops: Vec<ColorStop> },
    Radial { cx: f32, cy: f32, radius: f32, stops: Vec<ColorStop> },
}

impl Paint {
    pub fn solid(c: impl Into<Rgba>) -> Self {
        Paint::Solid(c.into())
    }
}

/// A 2D drawing target with a canvas-style transform and alpha stack.
pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, tx: f32, ty: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    fn rotate(&mut self, angle: f32);
    /// Global alpha multiplied into every subsequent draw.
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint);
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, paint: &Paint);
    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, width: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[(f32, f32)], paint: &Paint);
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba);
    /// Stroke the arc of angles [start, end] (radians, y down).
    fn stroke_arc(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32, width: f32, color: Rgba);

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint) {
        self.fill_ellipse(cx, cy, r, r, paint);
    }

    /// Make the finished frame visible to whoever reads the surface.
    fn present(&mut self) {}
}

/// Draw one frame: clear, zoom about the centre, then every visible layer
/// back to front. `time` is in seconds and only drives twinkle/shimmer.
pub fn draw_frame<S: Surface>(scene: &Scene, surface: &mut S, time: f64) {
    let (w, h) = surface.size();
    let zoom = scene.zoom();

    surface.clear();
    surface.save();
    surface.translate(w * 0.5, h * 0.5);
    surface.scale(zoom, zoom);
    surface.translate(-w * 0.5, -h * 0.5);

    for layer in Layer::DRAW_ORDER {
        if scene.is_visible(layer) {
            layers::draw(layer, scene, surface, time);
        }
    }

    surface.restore();
    surface.present();
}


#[cfg(test)]
mod tests {
    use super::recorder::{Op, Recorder};
    use super::*;
    use crate::scene::{Scene, Weather};

    #[test]
    fn frame_is_wrapped_in_zoom_transform() {
        let mut scene = Scene::new(800, 600, 1);
        scene.on_scroll(500.0);
        let mut rec = Recorder::new(800.0, 600.0);
        draw_frame(&scene, &mut rec, 0.0);

        assert_eq!(rec.ops[0], Op::Clear);
        assert_eq!(rec.ops[1], Op::Save);
        assert_eq!(rec.ops[2], Op::Translate(400.0, 300.0));
        assert_eq!(rec.ops[3], Op::Scale(1.5, 1.5));
        assert_eq!(rec.ops[4], Op::Translate(-400.0, -300.0));
        assert_eq!(rec.ops.last(), Some(&Op::Restore));
    }

    #[test]
    fn hidden_layers_draw_nothing() {
        let mut scene = Scene::new(800, 600, 1);
        for layer in Layer::DRAW_ORDER {
            scene.toggle_layer(layer);
        }
        let mut rec = Recorder::new(800.0, 600.0);
        draw_frame(&scene, &mut rec, 0.0);
        assert_eq!(rec.ops.len(), 6);
    }

    #[test]
    fn sky_is_painted_first_and_birds_last() {
        let scene = Scene::new(800, 600, 1);
        let mut rec = Recorder::new(800.0, 600.0);
        draw_frame(&scene, &mut rec, 0.0);

        let first_shape = rec.ops.iter().find(|op| !matches!(
            op,
            Op::Clear | Op::Save | Op::Restore | Op::Translate(..) | Op::Scale(..)
        ));
        assert!(matches!(first_shape, Some(Op::Rect { x, y, .. }) if *x == 0.0 && *y == 0.0));

        // Beaks are the only triangles in a sunny noon scene
        let last_polygon = rec.ops.iter().rev().find_map(|op| match op {
            Op::Polygon { points, .. } => Some(points.len()),
            _ => None,
        });
        assert_eq!(last_polygon, Some(3));
    }

    #[test]
    fn rainbow_sits_between_hills_and_trees() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Rainy);
        let mut rec = Recorder::new(800.0, 600.0);
        draw_frame(&scene, &mut rec, 0.0);

        let is_hill = |op: &Op| matches!(op, Op::Polygon { points, .. } if points.len() > 3);
        let is_trunk = |op: &Op| matches!(op, Op::Rect { w, h, .. } if *w == 8.0 && *h == 50.0);
        let is_arc = |op: &Op| matches!(op, Op::Arc { .. });

        let last_hill = rec.ops.iter().rposition(is_hill).unwrap();
        let first_arc = rec.ops.iter().position(is_arc).unwrap();
        let last_arc = rec.ops.iter().rposition(is_arc).unwrap();
        let first_trunk = rec.ops.iter().position(is_trunk).unwrap();

        assert!(last_hill < first_arc);
        assert!(last_arc < first_trunk);
    }
}
