use proptest::prelude::*;

use rainbow_engine::render::Rgb;
use rainbow_engine::scene::{LEAVES_PER_STORM, MAX_ZOOM, MIN_ZOOM, RAINDROPS_PER_SHOWER};
use rainbow_engine::sim::{self, Birds, FLOOR_FRAC, MIN_ALTITUDE};
use rainbow_engine::world::{is_daytime, moon_position, sun_position};
use rainbow_engine::{ClickMode, Scene, Weather};

fn weather() -> impl Strategy<Value = Weather> {
    prop::sample::select(Weather::ALL.to_vec())
}

proptest! {
    #[test]
    fn zoom_stays_clamped(deltas in prop::collection::vec(-5000.0f32..5000.0, 1..40)) {
        let mut scene = Scene::new(640, 480, 1);
        for d in deltas {
            scene.on_scroll(d);
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&scene.zoom()));
        }
    }

    #[test]
    fn weather_sets_populations(seq in prop::collection::vec(weather(), 1..10)) {
        let mut scene = Scene::new(640, 480, 2);
        for w in seq {
            scene.set_weather(w);
            let drops = if w.is_raining() { RAINDROPS_PER_SHOWER } else { 0 };
            let leaves = if w == Weather::Stormy { LEAVES_PER_STORM } else { 0 };
            prop_assert_eq!(scene.raindrops().len(), drops);
            prop_assert_eq!(scene.leaves().len(), leaves);
        }
    }

    #[test]
    fn exactly_one_of_sun_and_moon(hour in 0.0f32..24.0) {
        let sun = sun_position(hour, 800.0, 600.0);
        let moon = moon_position(hour, 800.0, 600.0);
        prop_assert!(sun.is_some() != moon.is_some());
        prop_assert_eq!(sun.is_some(), is_daytime(hour));
    }

    #[test]
    fn night_clicks_never_add_birds(hour in prop_oneof![0.0f32..5.99, 18.01f32..23.99]) {
        let mut scene = Scene::new(800, 600, 3);
        scene.set_time_of_day(hour);
        // Clouds sit in the top 200 px; click well below them
        scene.on_pointer_down(400.0, 450.0);
        prop_assert_eq!(scene.birds().len(), 5);
    }

    #[test]
    fn lerp_hits_endpoints(a in any::<u32>(), b in any::<u32>()) {
        let (ca, cb) = (Rgb::hex(a & 0xFFFFFF), Rgb::hex(b & 0xFFFFFF));
        prop_assert_eq!(ca.lerp(cb, 0.0), ca);
        prop_assert_eq!(ca.lerp(cb, 1.0), cb);
    }

    #[test]
    fn birds_turn_back_inside(
        x in -50.0f32..850.0,
        y in 0.0f32..600.0,
        vx in -2.0f32..2.0,
        vy in -1.0f32..1.0,
    ) {
        let mut birds = Birds::new();
        birds.spawn(x, y, &mut 5);
        birds.vx[0] = vx;
        birds.vy[0] = vy;
        birds.update(800.0, 600.0);

        if birds.x[0] > 800.0 {
            prop_assert!(birds.vx[0] <= 0.0);
        }
        if birds.x[0] < 0.0 {
            prop_assert!(birds.vx[0] >= 0.0);
        }
        if birds.y[0] > 600.0 * FLOOR_FRAC {
            prop_assert!(birds.vy[0] <= 0.0);
        }
        if birds.y[0] < MIN_ALTITUDE {
            prop_assert!(birds.vy[0] >= 0.0);
        }
    }

    #[test]
    fn stepping_keeps_rain_and_leaves_counts(w in weather(), frames in 1usize..120) {
        let mut scene = Scene::new(640, 480, 4);
        scene.set_weather(w);
        let (drops, leaves) = (scene.raindrops().len(), scene.leaves().len());
        for _ in 0..frames {
            sim::step(&mut scene);
        }
        prop_assert_eq!(scene.raindrops().len(), drops);
        prop_assert_eq!(scene.leaves().len(), leaves);
    }
}

#[test]
fn five_cycles_restore_click_mode() {
    let mut scene = Scene::new(800, 600, 1);
    let seen: Vec<ClickMode> = (0..5).map(|_| scene.cycle_click_mode()).collect();
    assert_eq!(seen, vec![
        ClickMode::Tree,
        ClickMode::Star,
        ClickMode::Rain,
        ClickMode::Cloud,
        ClickMode::Bird,
    ]);
}

#[test]
fn raindrops_recycle_from_the_top() {
    let mut scene = Scene::new(640, 480, 6);
    scene.set_weather(Weather::Rainy);
    for _ in 0..600 {
        sim::step(&mut scene);
    }
    let drops = scene.raindrops();
    for i in 0..drops.len() {
        assert!(drops.y[i] <= 480.0 + 8.0);
        assert!(drops.y[i] >= -drops.length[i]);
        assert!((0.0..640.0).contains(&drops.x[i]));
    }
}
