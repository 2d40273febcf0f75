// layers.rs - Per-layer draw routines
//
// Each routine reads the scene and paints through a `Surface`. Palettes are
// compile-time constants.

use std::f32::consts::PI;

use super::{ColorStop, Paint, Rgb, Rgba, Surface};
use crate::scene::{Layer, Scene, Weather};
use crate::world::{
    HILL_BASES, base_trees, day_progress, hill_outline, is_daytime, moon_position, night_progress,
    sun_position,
};

// Sky
const DAY_TOP: (Rgb, Rgb) = (Rgb::hex(0x87CEEB), Rgb::hex(0xFFB347));
const DAY_MID: (Rgb, Rgb) = (Rgb::hex(0x98D8E8), Rgb::hex(0xFFD700));
const DAY_BOTTOM: Rgb = Rgb::hex(0xB0E0E6);
const NIGHT_TOP: (Rgb, Rgb) = (Rgb::hex(0x191970), Rgb::hex(0x000033));
const NIGHT_MID: (Rgb, Rgb) = (Rgb::hex(0x4169E1), Rgb::hex(0x000080));
const NIGHT_BOTTOM: Rgb = Rgb::hex(0x000033);
const NIGHT_EASE: f32 = 0.7;
const STORM_SKY: [(f32, Rgb); 4] = [
    (0.0, Rgb::hex(0x2F4F4F)),
    (0.3, Rgb::hex(0x4A4A4A)),
    (0.7, Rgb::hex(0x696969)),
    (1.0, Rgb::hex(0x808080)),
];

// Stars
const FIXED_STARS: usize = 100;
const STAR_BAND_FRAC: f32 = 0.6;
const STAR_COLOR: Rgba = Rgb::hex(0xFFFFFF).alpha(0.8);

// Sun and moon
const SUN_GLOW: Rgb = Rgb::hex(0xFFFF00);
const SUN_CORE: Rgb = Rgb::hex(0xFFD700);
const MOON_GLOW: Rgb = Rgb::hex(0xFFFFFF);
const MOON_CORE: Rgb = Rgb::hex(0xF0F8FF);

// Clouds
const STORM_CLOUDS: usize = 20;
const STORM_CLOUD_COLOR: Rgba = Rgb::from_rgb(100, 100, 100).alpha(0.8);
/// Lobes as (dx, dy, radius), all in units of cloud size.
const CLOUD_LOBES: [(f32, f32, f32); 5] = [
    (0.0, 0.0, 0.3),
    (0.3, 0.0, 0.4),
    (0.6, 0.0, 0.3),
    (0.2, -0.2, 0.3),
    (0.5, -0.2, 0.3),
];

// Rain and leaves
const RAIN_DAY: Rgba = Rgb::from_rgb(174, 194, 224).alpha(0.9);
const RAIN_NIGHT: Rgba = Rgb::from_rgb(100, 120, 150).alpha(0.9);
const RAIN_WIDTH: f32 = 3.0;
const LEAF_COLOR: Rgba = Rgb::from_rgb(139, 69, 19).alpha(0.8);

const HILL_COLORS: [Rgb; 3] = [Rgb::hex(0x2D5016), Rgb::hex(0x3A5F23), Rgb::hex(0x4A6B2A)];

// Rainbow
const RAINBOW: [Rgb; 7] = [
    Rgb::hex(0xFF0000),
    Rgb::hex(0xFF7F00),
    Rgb::hex(0xFFFF00),
    Rgb::hex(0x00FF00),
    Rgb::hex(0x0000FF),
    Rgb::hex(0x4B0082),
    Rgb::hex(0x9400D3),
];
const BAND_WIDTH: f32 = 20.0;

// Trees
const TRUNK: Rgb = Rgb::hex(0x8B4513);
const FOLIAGE: Rgb = Rgb::hex(0x228B22);
/// Foliage circles as (dx, dy, radius) from the trunk top.
const CANOPY: [(f32, f32, f32); 4] = [
    (0.0, -15.0, 30.0),
    (-15.0, -25.0, 25.0),
    (15.0, -25.0, 25.0),
    (0.0, -35.0, 20.0),
];
/// Trees this far past the right edge are not drawn.
const TREE_CULL_MARGIN: f32 = 100.0;

// Birds
const BIRD_BODY: Rgb = Rgb::hex(0x2F2F2F);
const BIRD_OUTLINE: Rgb = Rgb::hex(0x1A1A1A);
const BEAK: Rgb = Rgb::hex(0xFFA500);

pub(super) fn draw<S: Surface>(layer: Layer, scene: &Scene, s: &mut S, time: f64) {
    // Phase only matters modulo 2π; keep it small before narrowing to f32
    let t = time.rem_euclid(std::f64::consts::TAU) as f32;

    match layer {
        Layer::Sky => sky(scene, s),
        Layer::Stars => stars(scene, s, t),
        Layer::Sun => sun(scene, s),
        Layer::Moon => moon(scene, s),
        Layer::Clouds => clouds(scene, s),
        Layer::Rain => rain(scene, s),
        Layer::Leaves => leaves(scene, s),
        Layer::Hills => hills(scene, s),
        Layer::Rainbow => rainbow(scene, s, t),
        Layer::Trees => trees(scene, s),
        Layer::Birds => birds(scene, s),
    }
}

fn sky<S: Surface>(scene: &Scene, s: &mut S) {
    let (w, h) = (scene.width() as f32, scene.height() as f32);
    let hour = scene.time_of_day();

    let stops: Vec<ColorStop> = if scene.weather() == Weather::Stormy {
        STORM_SKY.iter().map(|&(o, c)| ColorStop::new(o, c)).collect()
    } else if is_daytime(hour) {
        let p = day_progress(hour);
        vec![
            ColorStop::new(0.0, DAY_TOP.0.lerp(DAY_TOP.1, p)),
            ColorStop::new(0.5, DAY_MID.0.lerp(DAY_MID.1, p)),
            ColorStop::new(1.0, DAY_BOTTOM),
        ]
    } else {
        let f = night_progress(hour).powf(NIGHT_EASE);
        vec![
            ColorStop::new(0.0, NIGHT_TOP.0.lerp(NIGHT_TOP.1, f)),
            ColorStop::new(0.5, NIGHT_MID.0.lerp(NIGHT_MID.1, f)),
            ColorStop::new(1.0, NIGHT_BOTTOM),
        ]
    };

    s.fill_rect(0.0, 0.0, w, h, &Paint::Vertical { y0: 0.0, y1: h, stops });

    let lightning = &scene.storm().lightning;
    if scene.weather() == Weather::Stormy && lightning.active {
        let flash = Rgb::hex(0xFFFFFF).alpha(lightning.intensity);
        s.fill_rect(0.0, 0.0, w, h, &Paint::Solid(flash));
    }
}

fn stars<S: Surface>(scene: &Scene, s: &mut S, t: f32) {
    if is_daytime(scene.time_of_day()) {
        return;
    }
    let (w, h) = (scene.width() as f32, scene.height() as f32);
    let paint = Paint::Solid(STAR_COLOR);

    if w > 0.0 && h > 0.0 {
        let band = h * STAR_BAND_FRAC;
        for i in 0..FIXED_STARS {
            let fi = i as f32;
            let x = (fi * 37.0) % w;
            let y = (fi * 73.0) % band;
            let r = (t + fi).sin() * 0.5 + 1.0;
            s.fill_circle(x, y, r, &paint);
        }
    }

    let st = scene.stars();
    for i in 0..st.len() {
        let r = st.size[i] * (0.75 + 0.25 * (t + st.twinkle_phase[i]).sin());
        s.fill_circle(st.x[i], st.y[i], r, &paint);
    }
}

/// Radial halo then a solid disc.
fn glow_disc<S: Surface>(s: &mut S, (x, y): (f32, f32), glow: (Rgb, f32, f32), core: (Rgb, f32)) {
    let (tint, peak, radius) = glow;
    let halo = Paint::Radial {
        cx: x,
        cy: y,
        radius,
        stops: vec![
            ColorStop::new(0.0, tint.alpha(peak)),
            ColorStop::new(0.5, tint.alpha(peak * 0.5)),
            ColorStop::new(1.0, tint.alpha(0.0)),
        ],
    };
    s.fill_circle(x, y, radius, &halo);
    s.fill_circle(x, y, core.1, &Paint::solid(core.0));
}

fn sun<S: Surface>(scene: &Scene, s: &mut S) {
    let (w, h) = (scene.width() as f32, scene.height() as f32);
    if let Some(pos) = sun_position(scene.time_of_day(), w, h) {
        glow_disc(s, pos, (SUN_GLOW, 0.8, 80.0), (SUN_CORE, 30.0));
    }
}

fn moon<S: Surface>(scene: &Scene, s: &mut S) {
    let (w, h) = (scene.width() as f32, scene.height() as f32);
    if let Some(pos) = moon_position(scene.time_of_day(), w, h) {
        glow_disc(s, pos, (MOON_GLOW, 0.6, 60.0), (MOON_CORE, 20.0));
    }
}

fn cloud_shape<S: Surface>(s: &mut S, x: f32, y: f32, size: f32, paint: &Paint) {
    for (dx, dy, r) in CLOUD_LOBES {
        s.fill_circle(x + dx * size, y + dy * size, r * size, paint);
    }
}

/// Storm cloud size varies with index but not between frames.
fn storm_cloud_size(i: usize) -> f32 {
    80.0 + ((i * 53) % 120) as f32
}

fn clouds<S: Surface>(scene: &Scene, s: &mut S) {
    match scene.weather() {
        Weather::Sunny => {}
        Weather::Stormy => {
            let w = scene.width() as f32;
            if w <= 0.0 {
                return;
            }
            let paint = Paint::Solid(STORM_CLOUD_COLOR);
            for i in 0..STORM_CLOUDS {
                let x = (i as f32 * 200.0) % w;
                let y = 50.0 + (i as f32 * 0.5).sin() * 30.0;
                cloud_shape(s, x, y, storm_cloud_size(i), &paint);
            }
        }
        Weather::Rainy | Weather::Cloudy => {
            let c = scene.clouds();
            for i in 0..c.len() {
                let paint = Paint::Solid(Rgb::hex(0xFFFFFF).alpha(c.opacity[i]));
                cloud_shape(s, c.x[i], c.y[i], c.size[i], &paint);
            }
        }
    }
}

fn rain<S: Surface>(scene: &Scene, s: &mut S) {
    if !scene.weather().is_raining() {
        return;
    }
    let color = if is_daytime(scene.time_of_day()) { RAIN_DAY } else { RAIN_NIGHT };
    let r = scene.raindrops();
    for i in 0..r.len() {
        s.stroke_line(r.x[i], r.y[i], r.x[i], r.y[i] + r.length[i], RAIN_WIDTH, color);
    }
}

fn leaves<S: Surface>(scene: &Scene, s: &mut S) {
    if scene.weather() != Weather::Stormy {
        return;
    }
    let paint = Paint::Solid(LEAF_COLOR);
    let l = scene.leaves();
    for i in 0..l.len() {
        s.save();
        s.translate(l.x[i], l.y[i]);
        s.rotate(l.rotation[i]);
        s.fill_ellipse(0.0, 0.0, l.size[i], l.size[i] * 0.3, &paint);
        s.restore();
    }
}

fn hills<S: Surface>(scene: &Scene, s: &mut S) {
    let (w, h) = (scene.width() as f32, scene.height() as f32);
    let hilliness = scene.config().hilliness;
    for layer in 0..HILL_BASES.len() {
        let outline = hill_outline(layer, w, h, hilliness);
        s.fill_polygon(&outline, &Paint::solid(HILL_COLORS[layer]));
    }
}

fn rainbow<S: Surface>(scene: &Scene, s: &mut S, t: f32) {
    let config = scene.config();
    if scene.weather() != Weather::Rainy
        || config.rainbow_intensity <= 0.0
        || !is_daytime(config.time_of_day)
    {
        return;
    }

    let (w, h) = (scene.width() as f32, scene.height() as f32);
    let (cx, cy) = (w * 0.5, h * config.rainbow_position);
    let radius = w.min(h) * 0.5;

    s.save();
    for (i, color) in RAINBOW.iter().enumerate() {
        let r = radius - i as f32 * BAND_WIDTH;
        if r <= 0.0 {
            break;
        }
        let alpha = config.rainbow_intensity * (0.8 + 0.2 * (t + i as f32).sin());
        s.set_alpha(alpha.clamp(0.0, 1.0));
        s.stroke_arc(cx, cy, r, -PI, 0.0, BAND_WIDTH, (*color).into());
    }
    s.restore();
}

fn tree<S: Surface>(s: &mut S, x: f32, y: f32) {
    s.fill_rect(x - 4.0, y, 8.0, 50.0, &Paint::solid(TRUNK));
    let leaves = Paint::solid(FOLIAGE);
    for (dx, dy, r) in CANOPY {
        s.fill_circle(x + dx, y + dy, r, &leaves);
    }
}

fn trees<S: Surface>(scene: &Scene, s: &mut S) {
    let (w, h) = (scene.width() as f32, scene.height() as f32);
    let markers = scene.trees();
    let planted = markers.x.iter().copied().zip(markers.y.iter().copied());

    for (x, y) in base_trees(h).chain(planted) {
        if x < w + TREE_CULL_MARGIN {
            tree(s, x, y);
        }
    }
}

fn birds<S: Surface>(scene: &Scene, s: &mut S) {
    if !is_daytime(scene.time_of_day()) {
        return;
    }
    let body = Paint::solid(BIRD_BODY);
    let outline: Rgba = BIRD_OUTLINE.into();
    let beak = Paint::solid(BEAK);

    let b = scene.birds();
    for i in 0..b.len() {
        s.save();
        s.translate(b.x[i], b.y[i]);
        s.scale(if b.vx[i] > 0.0 { 1.0 } else { -1.0 }, 1.0);

        // Body, two wings, head
        let wing_y = b.wing_phase[i].sin() * 4.0;
        let parts = [
            (0.0, 0.0, 6.0, 3.0),
            (-3.0, wing_y, 8.0, 1.5),
            (-3.0, -wing_y, 8.0, 1.5),
            (6.0, 0.0, 2.0, 2.0),
        ];
        for (cx, cy, rx, ry) in parts {
            s.fill_ellipse(cx, cy, rx, ry, &body);
            s.stroke_ellipse(cx, cy, rx, ry, 1.0, outline);
        }

        s.fill_polygon(&[(8.0, 0.0), (10.0, -1.0), (10.0, 1.0)], &beak);
        s.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{Op, Recorder};
    use crate::scene::Scene;

    fn record(scene: &Scene, layer: Layer) -> Recorder {
        let mut rec = Recorder::new(scene.width() as f32, scene.height() as f32);
        draw(layer, scene, &mut rec, 0.0);
        rec
    }

    fn arcs(rec: &Recorder) -> usize {
        rec.count(|op| matches!(op, Op::Arc { .. }))
    }

    #[test]
    fn rainbow_needs_rain_and_daylight() {
        let mut scene = Scene::new(800, 600, 1);
        assert_eq!(arcs(&record(&scene, Layer::Rainbow)), 0);

        scene.set_weather(Weather::Rainy);
        assert_eq!(arcs(&record(&scene, Layer::Rainbow)), 7);

        scene.set_time_of_day(22.0);
        assert_eq!(arcs(&record(&scene, Layer::Rainbow)), 0);

        scene.set_time_of_day(12.0);
        scene.set_rainbow_intensity(0.0);
        assert_eq!(arcs(&record(&scene, Layer::Rainbow)), 0);
    }

    #[test]
    fn rainbow_rings_shrink_inward() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Rainy);
        scene.set_rainbow_position(0.5);
        let rec = record(&scene, Layer::Rainbow);
        let radii: Vec<f32> = rec.ops.iter().filter_map(|op| match op {
            Op::Arc { cx, cy, r, .. } => {
                assert_eq!((*cx, *cy), (400.0, 300.0));
                Some(*r)
            }
            _ => None,
        }).collect();
        assert_eq!(radii, vec![300.0, 280.0, 260.0, 240.0, 220.0, 200.0, 180.0]);
        assert!(rec.ops.iter().all(|op| match op {
            Op::Alpha(a) => (0.0..=1.0).contains(a),
            _ => true,
        }));
    }

    #[test]
    fn storm_sky_draws_twenty_grey_clouds() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Stormy);
        let rec = record(&scene, Layer::Clouds);
        assert_eq!(rec.count(|op| matches!(op, Op::Ellipse { .. })), 20 * CLOUD_LOBES.len());
        assert!(rec.ops.iter().all(|op| matches!(
            op,
            Op::Ellipse { paint: Paint::Solid(c), .. } if *c == STORM_CLOUD_COLOR
        )));
    }

    #[test]
    fn storm_clouds_are_stable_between_frames() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Stormy);
        assert_eq!(record(&scene, Layer::Clouds).ops, record(&scene, Layer::Clouds).ops);
        assert_eq!(storm_cloud_size(0), 80.0);
        assert!((0..STORM_CLOUDS).all(|i| (80.0..200.0).contains(&storm_cloud_size(i))));
    }

    #[test]
    fn sunny_sky_hides_clouds() {
        let scene = Scene::new(800, 600, 1);
        assert!(record(&scene, Layer::Clouds).ops.is_empty());
    }

    #[test]
    fn tracked_clouds_use_their_opacity() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Cloudy);
        let rec = record(&scene, Layer::Clouds);
        assert_eq!(rec.ops.len(), 8 * CLOUD_LOBES.len());
        match &rec.ops[0] {
            Op::Ellipse { paint: Paint::Solid(c), .. } => assert_eq!(c.a, scene.clouds().opacity[0]),
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn rain_darkens_at_night() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Rainy);
        let day = record(&scene, Layer::Rain);
        assert_eq!(day.ops.len(), 200);
        assert!(matches!(day.ops[0], Op::Line { color, .. } if color == RAIN_DAY));

        scene.set_time_of_day(23.0);
        let night = record(&scene, Layer::Rain);
        assert!(matches!(night.ops[0], Op::Line { color, .. } if color == RAIN_NIGHT));
    }

    #[test]
    fn rain_strokes_hang_below_each_drop() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Rainy);
        let rec = record(&scene, Layer::Rain);
        let drops = scene.raindrops();
        match rec.ops[3] {
            Op::Line { x0, y0, x1, y1, .. } => {
                assert_eq!((x0, y0), (drops.x[3], drops.y[3]));
                assert_eq!(x1, x0);
                assert_eq!(y1, drops.y[3] + drops.length[3]);
            }
            ref other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn sun_by_day_moon_by_night() {
        let mut scene = Scene::new(800, 600, 1);
        assert_eq!(record(&scene, Layer::Sun).ops.len(), 2);
        assert!(record(&scene, Layer::Moon).ops.is_empty());

        scene.set_time_of_day(2.0);
        assert!(record(&scene, Layer::Sun).ops.is_empty());
        let moon = record(&scene, Layer::Moon);
        assert!(matches!(moon.ops[1], Op::Ellipse { rx, .. } if rx == 20.0));
    }

    #[test]
    fn noon_sun_sits_at_top_of_arc() {
        let scene = Scene::new(800, 600, 1);
        let rec = record(&scene, Layer::Sun);
        match &rec.ops[1] {
            Op::Ellipse { cx, cy, rx, .. } => {
                assert!((cx - 400.0).abs() < 1e-3);
                assert!((cy - 180.0).abs() < 1e-3);
                assert_eq!(*rx, 30.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn stars_only_at_night() {
        let mut scene = Scene::new(800, 600, 1);
        assert!(record(&scene, Layer::Stars).ops.is_empty());
        scene.set_time_of_day(1.0);
        assert_eq!(record(&scene, Layer::Stars).ops.len(), FIXED_STARS);
    }

    #[test]
    fn user_stars_twinkle_around_their_size() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_time_of_day(1.0);
        scene.stars.spawn(50.0, 60.0, &mut 7);
        let rec = record(&scene, Layer::Stars);
        let size = scene.stars().size[0];
        match &rec.ops[FIXED_STARS] {
            Op::Ellipse { cx, cy, rx, .. } => {
                assert_eq!((*cx, *cy), (50.0, 60.0));
                assert!(*rx >= size * 0.5 - 1e-4 && *rx <= size + 1e-4);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn stormy_sky_flashes_with_lightning() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Stormy);
        assert_eq!(record(&scene, Layer::Sky).ops.len(), 1);

        scene.storm.strike();
        let rec = record(&scene, Layer::Sky);
        assert_eq!(rec.ops.len(), 2);
        assert!(matches!(&rec.ops[1], Op::Rect { paint: Paint::Solid(c), .. } if c.a == 0.8));
    }

    #[test]
    fn night_sky_top_deepens_toward_midnight_blue() {
        let top_stop = |hour: f32| {
            let mut scene = Scene::new(800, 600, 1);
            scene.set_time_of_day(hour);
            match &record(&scene, Layer::Sky).ops[0] {
                Op::Rect { paint: Paint::Vertical { stops, .. }, .. } => stops[0].color,
                op => panic!("expected sky gradient, got {op:?}"),
            }
        };

        // 21:00 is halfway through the evening half of the night
        let expected: Rgba = NIGHT_TOP.0.lerp(NIGHT_TOP.1, 0.5f32.powf(NIGHT_EASE)).into();
        assert_eq!(top_stop(21.0), expected);
        assert!(top_stop(23.9).b < expected.b);
    }

    #[test]
    fn three_hills_back_to_front() {
        let scene = Scene::new(800, 600, 1);
        let rec = record(&scene, Layer::Hills);
        let colors: Vec<Rgba> = rec.ops.iter().filter_map(|op| match op {
            Op::Polygon { paint: Paint::Solid(c), .. } => Some(*c),
            _ => None,
        }).collect();
        assert_eq!(colors, HILL_COLORS.map(Rgba::from).to_vec());
    }

    #[test]
    fn trees_include_planted_markers_and_skip_far_ones() {
        let mut scene = Scene::new(800, 600, 1);
        let trunks = |rec: &Recorder| rec.count(|op| matches!(op, Op::Rect { .. }));
        // x = 100 ..= 850 fall within 800 + 100
        assert_eq!(trunks(&record(&scene, Layer::Trees)), 6);

        scene.trees.push(300.0, 480.0);
        scene.trees.push(5000.0, 480.0);
        assert_eq!(trunks(&record(&scene, Layer::Trees)), 7);

        scene.resize(3000, 600);
        assert_eq!(trunks(&record(&scene, Layer::Trees)), 16);
    }

    #[test]
    fn birds_face_their_heading() {
        let mut scene = Scene::new(800, 600, 1);
        scene.birds.vx[0] = -1.0;
        let rec = record(&scene, Layer::Birds);
        assert_eq!(rec.ops[2], Op::Scale(-1.0, 1.0));
        assert_eq!(rec.count(|op| matches!(op, Op::Polygon { .. })), 5);
        assert_eq!(rec.count(|op| matches!(op, Op::StrokeEllipse { .. })), 20);
    }

    #[test]
    fn birds_hide_at_night() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_time_of_day(0.5);
        assert!(record(&scene, Layer::Birds).ops.is_empty());
    }

    #[test]
    fn leaves_spin_in_place() {
        let mut scene = Scene::new(800, 600, 1);
        scene.set_weather(Weather::Stormy);
        let rec = record(&scene, Layer::Leaves);
        assert_eq!(rec.count(|op| matches!(op, Op::Rotate(_))), 50);
        assert_eq!(
            rec.count(|op| matches!(op, Op::Save)),
            rec.count(|op| matches!(op, Op::Restore))
        );
    }
}
