// canvas.rs - Surface backed by a tiny-skia pixmap
//
// Output layout (for canvas `putImageData`):
//   row-major, 4 bytes per pixel, straight (non-premultiplied) alpha
//
// tiny-skia draws premultiplied; `present` converts into the output buffer
// after each frame. Drawing is aliased so coverage is exact per pixel.

use std::f32::consts::FRAC_PI_2;

use tiny_skia as sk;

use super::color::Rgba;
use super::{ColorStop, Paint, Surface};

#[derive(Clone, Copy)]
struct DrawState {
    transform: sk::Transform,
    alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self { transform: sk::Transform::identity(), alpha: 1.0 }
    }
}

pub struct Canvas {
    // None while either side is zero
    pixmap: Option<sk::Pixmap>,
    out: Vec<u8>,
    w: u32,
    h: u32,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Canvas {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            pixmap: sk::Pixmap::new(w, h),
            out: vec![0; (w as usize) * (h as usize) * 4],
            w,
            h,
            state: DrawState::default(),
            stack: Vec::new(),
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.pixmap = sk::Pixmap::new(w, h);
        self.out = vec![0; (w as usize) * (h as usize) * 4];
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    /// Straight-alpha RGBA as of the last `present`.
    pub fn pixels(&self) -> &[u8] {
        &self.out
    }

    /// Straight-alpha pixel straight from the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    fn paint(&self, paint: &Paint) -> sk::Paint<'static> {
        sk::Paint {
            shader: shader(paint, self.state.alpha),
            anti_alias: false,
            ..sk::Paint::default()
        }
    }

    fn solid(&self, color: Rgba) -> sk::Paint<'static> {
        self.paint(&Paint::Solid(color))
    }

    fn fill(&mut self, path: Option<sk::Path>, paint: &Paint) {
        let Some(path) = path else { return };
        let paint = self.paint(paint);
        let ts = self.state.transform;
        if let Some(pm) = self.pixmap.as_mut() {
            pm.fill_path(&path, &paint, sk::FillRule::EvenOdd, ts, None);
        }
    }

    fn stroke(&mut self, path: Option<sk::Path>, width: f32, color: Rgba) {
        let Some(path) = path else { return };
        if width.is_nan() || width <= 0.0 {
            return;
        }
        let paint = self.solid(color);
        let stroke = sk::Stroke { width, line_cap: sk::LineCap::Butt, ..sk::Stroke::default() };
        let ts = self.state.transform;
        if let Some(pm) = self.pixmap.as_mut() {
            pm.stroke_path(&path, &paint, &stroke, ts, None);
        }
    }
}

fn color(c: Rgba, alpha: f32) -> sk::Color {
    let a = (c.a * alpha).clamp(0.0, 1.0);
    sk::Color::from_rgba(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, a)
        .unwrap_or(sk::Color::TRANSPARENT)
}

fn stops(stops: &[ColorStop], alpha: f32) -> Vec<sk::GradientStop> {
    stops.iter().map(|s| sk::GradientStop::new(s.offset, color(s.color, alpha))).collect()
}

/// Gradient coordinates stay in local space; tiny-skia applies the draw
/// transform to the shader along with the path.
fn shader(paint: &Paint, alpha: f32) -> sk::Shader<'static> {
    let fallback = |s: &[ColorStop]| match s.last() {
        Some(last) => sk::Shader::SolidColor(color(last.color, alpha)),
        None => sk::Shader::SolidColor(sk::Color::TRANSPARENT),
    };

    match paint {
        Paint::Solid(c) => sk::Shader::SolidColor(color(*c, alpha)),
        Paint::Vertical { y0, y1, stops: s } => sk::LinearGradient::new(
            sk::Point::from_xy(0.0, *y0),
            sk::Point::from_xy(0.0, *y1),
            stops(s, alpha),
            sk::SpreadMode::Pad,
            sk::Transform::identity(),
        )
        .unwrap_or_else(|| fallback(s)),
        Paint::Radial { cx, cy, radius, stops: s } => {
            let centre = sk::Point::from_xy(*cx, *cy);
            sk::RadialGradient::new(
                centre,
                centre,
                *radius,
                stops(s, alpha),
                sk::SpreadMode::Pad,
                sk::Transform::identity(),
            )
            .unwrap_or_else(|| fallback(s))
        }
    }
}

fn oval(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<sk::Path> {
    let rect = sk::Rect::from_xywh(cx - rx, cy - ry, rx * 2.0, ry * 2.0)?;
    sk::PathBuilder::from_oval(rect)
}

/// Circular arc from `start` to `end` (radians, y down) as cubic segments
/// of at most a quarter turn.
fn arc(cx: f32, cy: f32, r: f32, start: f32, end: f32) -> Option<sk::Path> {
    let sweep = (end - start).clamp(-std::f32::consts::TAU, std::f32::consts::TAU);
    if r <= 0.0 || sweep == 0.0 || !sweep.is_finite() {
        return None;
    }
    let segments = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let point = |a: f32| (cx + r * a.cos(), cy + r * a.sin());
    let mut pb = sk::PathBuilder::new();
    let (x, y) = point(start);
    pb.move_to(x, y);

    for i in 0..segments {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        let (x0, y0) = point(a0);
        let (x1, y1) = point(a1);
        pb.cubic_to(
            x0 - k * r * a0.sin(),
            y0 + k * r * a0.cos(),
            x1 + k * r * a1.sin(),
            y1 - k * r * a1.cos(),
            x1,
            y1,
        );
    }
    pb.finish()
}

impl Surface for Canvas {
    fn size(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }

    fn clear(&mut self) {
        if let Some(pm) = self.pixmap.as_mut() {
            pm.fill(sk::Color::TRANSPARENT);
        }
        self.out.fill(0);
        self.state = DrawState::default();
        self.stack.clear();
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.transform = self.state.transform.pre_translate(tx, ty);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.pre_scale(sx, sy);
    }

    fn rotate(&mut self, angle: f32) {
        let r = sk::Transform::from_rotate(angle.to_degrees());
        self.state.transform = self.state.transform.pre_concat(r);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        let (x0, x1) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
        let (y0, y1) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
        let Some(rect) = sk::Rect::from_ltrb(x0, y0, x1, y1) else { return };

        let paint = self.paint(paint);
        let ts = self.state.transform;
        if let Some(pm) = self.pixmap.as_mut() {
            pm.fill_rect(rect, &paint, ts, None);
        }
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, paint: &Paint) {
        if rx > 0.0 && ry > 0.0 {
            self.fill(oval(cx, cy, rx, ry), paint);
        }
    }

    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, width: f32, color: Rgba) {
        if rx > 0.0 && ry > 0.0 {
            self.stroke(oval(cx, cy, rx, ry), width, color);
        }
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], paint: &Paint) {
        let [(x, y), rest @ ..] = points else { return };
        if rest.len() < 2 {
            return;
        }
        let mut pb = sk::PathBuilder::with_capacity(points.len() + 1, points.len() + 1);
        pb.move_to(*x, *y);
        for &(px, py) in rest {
            pb.line_to(px, py);
        }
        pb.close();
        self.fill(pb.finish(), paint);
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba) {
        if x0 == x1 && y0 == y1 {
            return;
        }
        let mut pb = sk::PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        self.stroke(pb.finish(), width, color);
    }

    fn stroke_arc(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32, width: f32, color: Rgba) {
        self.stroke(arc(cx, cy, r, start, end), width, color);
    }

    fn present(&mut self) {
        let Some(pm) = self.pixmap.as_ref() else { return };
        for (dst, px) in self.out.chunks_exact_mut(4).zip(pm.pixels()) {
            let c = px.demultiply();
            dst.copy_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
    }
}
