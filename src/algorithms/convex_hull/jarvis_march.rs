use std::cmp::Ordering;

use crate::algorithms::convex_hull::degenerate_hull;
use crate::data::{Hull, Point};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// $O(n \cdot h)$ Convex hull of a set of points, where $h$ is the number of
/// hull vertices.
///
/// [Gift wrapping][wiki] (Jarvis march): starting from the leftmost point,
/// repeatedly pick the candidate no other point is clockwise of, wrapping
/// counter-clockwise until the start point comes around again. Colinear
/// candidates lose to the farther point, so no redundant vertices are
/// emitted and the wrap cannot revisit an edge.
///
/// Cheap when the hull is small and degrades towards $O(n^2)$ when most
/// points are hull vertices (e.g. points on a circle).
///
/// # Errors
/// Returns [`Error::WrapStalled`] if the wrap fails to close within `n`
/// steps. That guard can only trip on a broken tie-break, never on
/// degenerate input.
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull(pts: &[Point]) -> Result<Hull, Error> {
  if let Some(hull) = degenerate_hull(pts) {
    return Ok(hull);
  }
  let n = pts.len();
  let start = leftmost_point(pts);

  let mut hull: Vec<Point> = Vec::new();
  let mut current = start;
  // Each vertex is emitted exactly once, so the wrap must close within n
  // iterations.
  for _ in 0..n {
    hull.push(current);
    let mut candidate = pts[0];
    for pt in pts {
      match Orientation::new(&current, pt, &candidate) {
        Orientation::CounterClockWise => candidate = *pt,
        Orientation::CoLinear => {
          if current.cmp_distance_to(pt, &candidate) == Ordering::Greater {
            candidate = *pt;
          }
        }
        Orientation::ClockWise => {}
      }
    }
    current = candidate;
    if current == start {
      return Ok(Hull::new_unchecked(hull));
    }
  }
  Err(Error::WrapStalled)
}

// Leftmost point, ties broken towards the smallest y.
// O(n). The caller guarantees a non-empty slice.
fn leftmost_point(pts: &[Point]) -> Point {
  let mut leftmost = pts[0];
  for pt in &pts[1..] {
    if pt.array < leftmost.array {
      leftmost = *pt;
    }
  }
  leftmost
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn square_with_interior_point() {
    let pts = vec![
      Point::new(2.0, 2.0),
      Point::new(4.0, 4.0),
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(0.0, 4.0),
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
      hull.points(),
      &[
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
      ]
    );
  }

  #[test]
  fn convex_hull_colinear() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(2.0, 0.0),
      Point::new(3.0, 0.0),
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.points(), &[Point::new(0.0, 0.0), Point::new(3.0, 0.0)]);
  }

  #[test]
  fn colinear_edge_skips_midpoints() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(2.0, 0.0),
      Point::new(3.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(1.0, 1.0),
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
      hull.points(),
      &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(1.0, 1.0)]
    );
  }

  #[test]
  fn duplicated_hull_vertices() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(2.0, 3.0),
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
      hull.points(),
      &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)]
    );
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(any_points(100))] pts: Vec<Point>) {
    let hull = convex_hull(&pts).unwrap();
    // Prop #1: Results are valid.
    prop_assert_eq!(hull.validate().err(), None);
    // Prop #2: No points from the input set are outside the hull.
    for pt in pts.iter() {
      prop_assert_ne!(hull.locate(pt), PointLocation::Outside)
    }
    // Prop #3: All vertices are in the input set.
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt))
    }
  }

  #[proptest]
  fn wrap_never_stalls(#[strategy(vec((0..16i32, 0..16i32), 0..80))] coords: Vec<(i32, i32)>) {
    let pts: Vec<Point> = coords
      .into_iter()
      .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
      .collect();
    prop_assert!(convex_hull(&pts).is_ok())
  }
}
