use constants::point_budget::{COLOUR_MAX, POSITION_EXTENT};
use rand::Rng;

/// A single generated point. Only lives between generation and the buffer write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: [f32; 3],
    pub colour: [f32; 3],
}

/// Draw one point: position uniform in the cube of half-size `POSITION_EXTENT`,
/// colour uniform in `[0, COLOUR_MAX]` per channel.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let mut position = [0.0; 3];
    for axis in &mut position {
        *axis = rng.gen_range(-POSITION_EXTENT..=POSITION_EXTENT);
    }

    let mut colour = [0.0; 3];
    for channel in &mut colour {
        *channel = rng.gen_range(0.0..=COLOUR_MAX);
    }

    Point { position, colour }
}

/// Generate `count` points in draw order.
pub fn random_batch<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Point> {
    (0..count).map(|_| random_point(rng)).collect()
}
