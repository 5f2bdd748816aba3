//! Seeded random instances for benches and smoke runs.

use rand::Rng;

use crate::stroke::{Direction, Stroke};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// `n` strokes with uniform directions and lengths in `1..=max_length`.
pub fn random_strokes(n: usize, max_length: u64, rng: &mut impl Rng) -> Vec<Stroke> {
    let max_length = max_length.max(1);
    (0..n)
        .map(|_| {
            let direction = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            Stroke::new(direction, rng.random_range(1..=max_length))
        })
        .collect()
}

/// `n` radii uniform in `1..=max_radius`.
pub fn random_radii(n: usize, max_radius: i64, rng: &mut impl Rng) -> Vec<i64> {
    let max_radius = max_radius.max(1);
    (0..n).map(|_| rng.random_range(1..=max_radius)).collect()
}
