use crate::data::Point;

/// Absolute tolerance used when classifying a cross product as zero.
///
/// Cross products with a magnitude at or below this threshold count as
/// colinear. Classification of triples near the threshold may differ from
/// the mathematically exact answer; this is the documented approximation of
/// the crate, not an error condition.
pub const EPSILON: f64 = 1e-9;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is classified from the sign of the cross product
  /// `(p2-p1) x (p3-p1)`, with [`EPSILON`] deciding when the product counts
  /// as zero.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullbench::data::Point;
  /// # use hullbench::Orientation;
  /// let p1 = Point::new(0.0, 0.0);
  /// let p2 = Point::new(0.0, 1.0); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0.0, 2.0)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1.0, 2.0)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1.0, 2.0)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let area = signed_area_2x(p1, p2, p3);
    if area > EPSILON {
      Orientation::CounterClockWise
    } else if area < -EPSILON {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Twice the signed area of the triangle `(p1, p2, p3)`.
///
/// Positive for counter-clockwise triangles. The magnitude is proportional
/// to the distance from `p3` to the line through `p1` and `p2`, which is
/// what QuickHull ranks candidates by.
pub fn signed_area_2x(p1: &Point, p2: &Point, p3: &Point) -> f64 {
  (p2.x_coord() - p1.x_coord()) * (p3.y_coord() - p1.y_coord())
    - (p2.y_coord() - p1.y_coord()) * (p3.x_coord() - p1.x_coord())
}
