// Strategies for generating points.
//
// Coordinates are integer-valued: cross products of i16-ranged values stay
// exact in f64, so property tests never straddle the epsilon boundary and
// the four algorithms cannot legitimately disagree.
use proptest::collection::vec;
use proptest::prelude::*;

use crate::data::Point;

pub fn any_point() -> impl Strategy<Value = Point> {
  (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

pub fn any_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), 0..max)
}

// A tiny coordinate grid, forcing duplicates and colinear runs.
pub fn clustered_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
  vec(
    (0..8i32, 0..8i32).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y))),
    0..max,
  )
}
