pub mod graham_scan;
pub mod jarvis_march;
pub mod monotone_chain;
pub mod quick_hull;

use crate::data::{Hull, Point};
use crate::Error;

/// The four hull constructions, as a tagged variant dispatching to pure
/// functions. Every variant computes the same vertex set; they differ in
/// strategy and asymptotic cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  GrahamScan,
  JarvisMarch,
  QuickHull,
  MonotoneChain,
}

impl Algorithm {
  /// All algorithms, in reporting order.
  pub const ALL: [Algorithm; 4] = [
    Algorithm::GrahamScan,
    Algorithm::JarvisMarch,
    Algorithm::QuickHull,
    Algorithm::MonotoneChain,
  ];

  /// Stable name used in benchmark records.
  pub fn name(self) -> &'static str {
    match self {
      Algorithm::GrahamScan => "graham",
      Algorithm::JarvisMarch => "jarvis",
      Algorithm::QuickHull => "quickhull",
      Algorithm::MonotoneChain => "monotone_chain",
    }
  }

  /// Compute the convex hull of `pts` with this algorithm. The input is
  /// never mutated, so the same slice can be handed to every variant.
  pub fn convex_hull(self, pts: &[Point]) -> Result<Hull, Error> {
    match self {
      Algorithm::GrahamScan => graham_scan::convex_hull(pts),
      Algorithm::JarvisMarch => jarvis_march::convex_hull(pts),
      Algorithm::QuickHull => quick_hull::convex_hull(pts),
      Algorithm::MonotoneChain => monotone_chain::convex_hull(pts),
    }
  }
}

impl std::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(f, "{}", self.name())
  }
}

// Short-circuit for inputs with fewer than three distinct points: the hull
// is the deduplicated input itself (empty, a point, or a segment).
pub(crate) fn degenerate_hull(pts: &[Point]) -> Option<Hull> {
  let mut distinct = pts.to_vec();
  distinct.sort_unstable();
  distinct.dedup();
  if distinct.len() < 3 {
    Some(Hull::new_unchecked(distinct))
  } else {
    None
  }
}
