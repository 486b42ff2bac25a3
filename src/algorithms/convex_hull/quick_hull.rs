use crate::algorithms::convex_hull::degenerate_hull;
use crate::data::{Hull, Point};
use crate::orientation::signed_area_2x;
use crate::Error;

// https://en.wikipedia.org/wiki/Quickhull

// Properties:
//    No panics.
//    All results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// Expected $O(n \log n)$, worst-case $O(n^2)$ convex hull of a set of
/// points.
///
/// [QuickHull][wiki]: the extreme points in x split the set into the points
/// below and above the line between them. Each side recursively takes the
/// point farthest from its splitting edge; points inside the resulting
/// sub-triangle can never be hull vertices and are discarded, and the two
/// outer edges recurse. Vertices are emitted counter-clockwise.
///
/// Farthest-point ties go to the candidate farther from the edge start and
/// then to the first one found, keeping the recursion deterministic. The
/// worst case is met when every point is a hull vertex.
///
/// # Errors
/// Returns [`Error::RecursionLimit`] if the recursion outlives the input
/// size. Every level consumes its farthest point, so the guard can only
/// trip on a broken tie-break, never on degenerate input.
///
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
pub fn convex_hull(pts: &[Point]) -> Result<Hull, Error> {
  if let Some(hull) = degenerate_hull(pts) {
    return Ok(hull);
  }

  let a = min_x_point(pts);
  let b = max_x_point(pts);
  let below = clockwise_of(&a, &b, pts);
  let above = clockwise_of(&b, &a, pts);

  let mut hull: Vec<Point> = Vec::new();
  hull.push(a);
  expand(&a, &b, below, pts.len(), &mut hull)?;
  hull.push(b);
  expand(&b, &a, above, pts.len(), &mut hull)?;
  Ok(Hull::new_unchecked(hull))
}

// Append the hull vertices strictly between `p1` and `p2`, walking
// counter-clockwise. `pts` holds the points strictly clockwise of p1->p2;
// anything else is already inside the hull built so far.
fn expand(
  p1: &Point,
  p2: &Point,
  pts: Vec<Point>,
  depth: usize,
  hull: &mut Vec<Point>,
) -> Result<(), Error> {
  if pts.is_empty() {
    return Ok(());
  }
  if depth == 0 {
    return Err(Error::RecursionLimit);
  }

  let farthest = farthest_from(p1, p2, &pts);
  let outer1 = clockwise_of(p1, &farthest, &pts);
  let outer2 = clockwise_of(&farthest, p2, &pts);
  expand(p1, &farthest, outer1, depth - 1, hull)?;
  hull.push(farthest);
  expand(&farthest, p2, outer2, depth - 1, hull)?;
  Ok(())
}

// The point of `pts` farthest from the line p1->p2, measured by triangle
// area. Ties break towards the point farthest from `p1`, which keeps the
// survivors of an area tie colinear with an edge of the sub-triangle so
// they drop out of the recursion.
fn farthest_from(p1: &Point, p2: &Point, pts: &[Point]) -> Point {
  let mut farthest = pts[0];
  let mut best_area = signed_area_2x(p1, p2, &pts[0]).abs();
  for pt in &pts[1..] {
    let area = signed_area_2x(p1, p2, pt).abs();
    if area > best_area
      || (area == best_area && p1.cmp_distance_to(pt, &farthest) == std::cmp::Ordering::Greater)
    {
      best_area = area;
      farthest = *pt;
    }
  }
  farthest
}

// Points strictly clockwise of p1->p2.
fn clockwise_of(p1: &Point, p2: &Point, pts: &[Point]) -> Vec<Point> {
  pts
    .iter()
    .filter(|pt| p1.orientation(p2, pt).is_cw())
    .copied()
    .collect()
}

// Smallest x, ties broken towards the smallest y.
// O(n). The caller guarantees a non-empty slice.
fn min_x_point(pts: &[Point]) -> Point {
  let mut extreme = pts[0];
  for pt in &pts[1..] {
    if pt.array < extreme.array {
      extreme = *pt;
    }
  }
  extreme
}

// Largest x, ties broken towards the largest y.
// O(n). The caller guarantees a non-empty slice.
fn max_x_point(pts: &[Point]) -> Point {
  let mut extreme = pts[0];
  for pt in &pts[1..] {
    if pt.array > extreme.array {
      extreme = *pt;
    }
  }
  extreme
}
