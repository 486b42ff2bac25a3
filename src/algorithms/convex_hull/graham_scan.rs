use crate::algorithms::convex_hull::degenerate_hull;
use crate::data::{Hull, Point};
use crate::Error;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon
/// which contains all the given points.
///
/// Vertices are emitted counter-clockwise starting from the bottom-most
/// point (ties broken towards the smallest x). Points at the same angle
/// around the pivot are ordered closest-first; colinear candidates are
/// popped from the stack, so no three hull vertices are colinear.
///
/// Inputs with fewer than three distinct points hull to themselves, and
/// fully colinear inputs hull to their two extremes.
///
/// # Examples
///
/// ```rust
/// # use hullbench::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hullbench::data::Point;
/// let pts: Vec<Point> = vec![];
/// assert!(convex_hull(&pts).unwrap().is_empty());
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(pts: &[Point]) -> Result<Hull, Error> {
  if let Some(hull) = degenerate_hull(pts) {
    return Ok(hull);
  }
  let mut pts = pts.to_vec();
  let pivot = smallest_point(&pts);

  pts.sort_unstable_by(|a, b| {
    pivot
      .ccw_cmp_around(a, b)
      .then_with(|| pivot.cmp_distance_to(a, b))
  });
  pts.dedup();

  // The pivot sorts first. Pop while the top two entries and the candidate
  // fail to turn counter-clockwise.
  let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
  for pt in pts {
    while stack.len() >= 2 {
      let p1 = &stack[stack.len() - 2];
      let p2 = &stack[stack.len() - 1];
      if p1.orientation(p2, &pt).is_ccw() {
        break;
      }
      stack.pop();
    }
    stack.push(pt);
  }
  Ok(Hull::new_unchecked(stack))
}

// Bottom-most point, ties broken towards the smallest x.
// O(n). The caller guarantees a non-empty slice.
fn smallest_point(pts: &[Point]) -> Point {
  let mut smallest = pts[0];
  for pt in &pts[1..] {
    if (pt.array[1], pt.array[0]) < (smallest.array[1], smallest.array[0]) {
      smallest = *pt;
    }
  }
  smallest
}
