//! Swipe classification for pointer and touch style input.
//!
//! The deltas are taken as `start - end`, so a drag towards larger y yields a
//! negative `dy` and classifies as `Up`. This matches the mapping shipped by
//! the browser version of the game and is kept for compatibility.

use super::action::Direction;

/// A point in input-device coordinates (pixels, terminal cells, ...)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Turn a drag from `start` to `end` into a direction intent.
///
/// The dominant axis wins; ties (including a zero-length drag) resolve to
/// the horizontal axis.
pub fn classify_swipe(start: Point, end: Point) -> Direction {
    let dx = start.x - end.x;
    let dy = start.y - end.y;

    if dx.abs() < dy.abs() {
        if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    } else if dx > 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}
