use crate::algorithms::convex_hull::degenerate_hull;
use crate::data::{Hull, Point};
use crate::Error;

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] (Andrew's algorithm): sort the points by x (ties
/// by y), then build the lower chain left-to-right and the upper chain
/// right-to-left, popping chain entries that stop being counter-clockwise.
/// Each chain ends where the other begins, so dropping the final entry of
/// both and concatenating closes the hull.
///
/// Sort-dominated, no recursion, no randomization; the most predictable of
/// the four constructions.
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull(pts: &[Point]) -> Result<Hull, Error> {
  if let Some(hull) = degenerate_hull(pts) {
    return Ok(hull);
  }
  let mut pts = pts.to_vec();
  pts.sort_unstable();
  pts.dedup();

  let mut lower = chain(pts.iter());
  let mut upper = chain(pts.iter().rev());
  lower.pop();
  upper.pop();
  lower.append(&mut upper);
  Ok(Hull::new_unchecked(lower))
}

// Grow one monotone chain: pop entries that stop being counter-clockwise
// once `pt` is appended.
fn chain<'a, I>(pts: I) -> Vec<Point>
where
  I: Iterator<Item = &'a Point>,
{
  let mut chain: Vec<Point> = Vec::new();
  for &pt in pts {
    while chain.len() >= 2 {
      let p1 = &chain[chain.len() - 2];
      let p2 = &chain[chain.len() - 1];
      if p1.orientation(p2, &pt).is_ccw() {
        break;
      }
      chain.pop();
    }
    chain.push(pt);
  }
  chain
}
