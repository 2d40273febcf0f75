// terrain.rs - Hill profiles and tree placement
//
// All coordinates are screen space.

/// Base line of each hill layer, back to front, as a fraction of height.
pub const HILL_BASES: [f32; 3] = [0.7, 0.75, 0.8];

/// Horizontal sample spacing of a hill's top edge.
pub const HILL_STEP: f32 = 20.0;

/// Where clicked trees are planted, as a fraction of height.
pub const GROUND_FRAC: f32 = 0.8;

/// Fixed trees: x in pixels, y as a fraction of height.
pub const TREE_LAYOUT: [(f32, f32); 15] = [
    (100.0, 0.68),
    (200.0, 0.72),
    (350.0, 0.70),
    (500.0, 0.75),
    (650.0, 0.73),
    (800.0, 0.71),
    (950.0, 0.74),
    (1100.0, 0.69),
    (1250.0, 0.72),
    (1400.0, 0.70),
    (1550.0, 0.73),
    (1700.0, 0.71),
    (1850.0, 0.75),
    (2000.0, 0.70),
    (2150.0, 0.72),
];

#[inline]
pub fn ground_y(h: f32) -> f32 {
    h * GROUND_FRAC
}

/// Fixed tree anchors for a surface of height `h`.
pub fn base_trees(h: f32) -> impl Iterator<Item = (f32, f32)> {
    TREE_LAYOUT.iter().map(move |&(x, fy)| (x, h * fy))
}

/// One sample of a hill's top edge. Both axes are perturbed by sine terms
/// scaled by `hilliness`; `layer` shifts the phase so layers don't line up.
#[inline]
pub fn hill_point(layer: usize, x: f32, base_y: f32, hilliness: f32) -> (f32, f32) {
    let hx = x + (x * 0.01 + layer as f32 * 0.5).sin() * 30.0 * hilliness;
    let hy = base_y + (x * 0.005).sin() * 20.0 * hilliness;
    (hx, hy)
}

/// Closed outline of one hill layer: bottom-left, the sampled top edge,
/// bottom-right.
pub fn hill_outline(layer: usize, w: f32, h: f32, hilliness: f32) -> Vec<(f32, f32)> {
    let base_y = h * HILL_BASES[layer.min(HILL_BASES.len() - 1)];
    let samples = (w / HILL_STEP).floor() as usize + 1;

    let mut pts = Vec::with_capacity(samples + 2);
    pts.push((0.0, h));
    for i in 0..samples {
        pts.push(hill_point(layer, i as f32 * HILL_STEP, base_y, hilliness));
    }
    pts.push((w, h));
    pts
}
