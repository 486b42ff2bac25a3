use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;

use crate::Orientation;

/// A point in the plane.
///
/// Coordinates are wrapped in [`OrderedFloat`] so that points have a total
/// order (x, then y) and can be sorted and deduplicated. Equality is by
/// value; points carry no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point {
  pub array: [OrderedFloat<f64>; 2],
}

// Random sampling from the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen())
  }
}

impl Point {
  pub fn new(x: f64, y: f64) -> Point {
    Point {
      array: [OrderedFloat(x), OrderedFloat(y)],
    }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1].into_inner()
  }

  /// Squared euclidean distance to `rhs`. No square root is taken; the
  /// squared form compares exactly on integer-valued coordinates.
  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = self.x_coord() - rhs.x_coord();
    let dy = self.y_coord() - rhs.y_coord();
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Compare `p` and `q` by their counter-clockwise angle around `self`.
  ///
  /// Angular ties (colinear with `self`) compare equal. This is a total
  /// order only when `self` is the bottom-most point of the compared set,
  /// which is the position Graham scan sorts around.
  pub fn ccw_cmp_around(&self, p: &Point, q: &Point) -> Ordering {
    match Orientation::new(self, p, q) {
      Orientation::CounterClockWise => Ordering::Less,
      Orientation::ClockWise => Ordering::Greater,
      Orientation::CoLinear => Ordering::Equal,
    }
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Orientation::*;

  use proptest::prelude::*;

  use crate::testing::*;

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(1.0, 1.0), &Point::new(2.0, 2.0)),
      CoLinear
    );
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(0.0, 1.0), &Point::new(2.0, 2.0)),
      ClockWise
    );
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(0.0, 1.0), &Point::new(-2.0, 2.0)),
      CounterClockWise
    );
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(0.0, 0.0), &Point::new(0.0, 0.0)),
      CoLinear
    );
  }

  #[test]
  fn near_zero_cross_is_colinear() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(1.0, 0.0);
    assert_eq!(p1.orientation(&p2, &Point::new(2.0, 5e-10)), CoLinear);
    assert_eq!(p1.orientation(&p2, &Point::new(2.0, 5e-9)), CounterClockWise);
  }

  #[test]
  fn cmp_around_square() {
    let pivot = Point::new(0.0, 0.0);
    let east = Point::new(4.0, 0.0);
    let ne = Point::new(4.0, 4.0);
    let north = Point::new(0.0, 4.0);
    assert_eq!(pivot.ccw_cmp_around(&east, &ne), Ordering::Less);
    assert_eq!(pivot.ccw_cmp_around(&ne, &north), Ordering::Less);
    assert_eq!(pivot.ccw_cmp_around(&north, &east), Ordering::Greater);
  }

  proptest! {
    #[test]
    fn orientation_reverse(pt1 in any_point(), pt2 in any_point(), pt3 in any_point()) {
      let abc = Orientation::new(&pt1, &pt2, &pt3);
      let cba = Orientation::new(&pt3, &pt2, &pt1);
      prop_assert_eq!(abc, cba.reverse())
    }

    #[test]
    fn colinear_by_construction(pt1 in any_point(), pt2 in any_point()) {
      let pt3 = Point::new(
        pt2.x_coord() + (pt2.x_coord() - pt1.x_coord()),
        pt2.y_coord() + (pt2.y_coord() - pt1.y_coord()),
      );
      prop_assert!(Orientation::new(&pt1, &pt2, &pt3).is_colinear())
    }

    #[test]
    fn distance_cmp_matches_squared_distance(
      origin in any_point(), p in any_point(), q in any_point()
    ) {
      let expected = origin
        .squared_euclidean_distance(&p)
        .total_cmp(&origin.squared_euclidean_distance(&q));
      prop_assert_eq!(origin.cmp_distance_to(&p, &q), expected)
    }
  }
}
