use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::algorithms::convex_hull::Algorithm;
use crate::data::Point;
use crate::Error;

/// Shape of a generated point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointDistribution {
  /// Uniform over the unit square.
  Uniform,
  /// Both coordinates drawn from a standard normal.
  Gaussian,
}

impl PointDistribution {
  pub const ALL: [PointDistribution; 2] = [PointDistribution::Uniform, PointDistribution::Gaussian];

  /// Stable name used in benchmark records.
  pub fn name(self) -> &'static str {
    match self {
      PointDistribution::Uniform => "uniform",
      PointDistribution::Gaussian => "gaussian",
    }
  }
}

impl std::fmt::Display for PointDistribution {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(f, "{}", self.name())
  }
}

/// Generate `n` points, deterministic given the rng state.
pub fn generate_points<R>(n: usize, distribution: PointDistribution, rng: &mut R) -> Vec<Point>
where
  R: Rng + ?Sized,
{
  match distribution {
    PointDistribution::Uniform => (0..n).map(|_| rng.gen()).collect(),
    PointDistribution::Gaussian => (0..n)
      .map(|_| Point::new(rng.sample(StandardNormal), rng.sample(StandardNormal)))
      .collect(),
  }
}

/// What to measure: which input sizes, which point distributions, how many
/// timing repetitions per cell, and the seed every generated set derives
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
  pub n_values: Vec<usize>,
  pub distributions: Vec<PointDistribution>,
  pub trials_per_n: usize,
  pub seed: u64,
}

impl Default for HarnessConfig {
  fn default() -> HarnessConfig {
    HarnessConfig {
      n_values: vec![10, 50, 100, 200, 400, 800, 1000],
      distributions: PointDistribution::ALL.to_vec(),
      trials_per_n: 5,
      seed: 0,
    }
  }
}

impl HarnessConfig {
  /// Reject configurations that cannot produce a meaningful run, before any
  /// point set is generated.
  pub fn validate(&self) -> Result<(), Error> {
    if self.n_values.is_empty() {
      return Err(Error::NoSampleSizes);
    }
    if self.n_values.iter().any(|&n| n == 0) {
      return Err(Error::ZeroSampleSize);
    }
    if self.distributions.is_empty() {
      return Err(Error::NoDistributions);
    }
    if self.trials_per_n == 0 {
      return Err(Error::NoTrials);
    }
    Ok(())
  }
}

/// One timed measurement: the sole contract with external reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRecord {
  pub algorithm: Algorithm,
  pub n: usize,
  pub distribution: PointDistribution,
  pub hull_size: usize,
  pub elapsed: Duration,
}

impl BenchmarkRecord {
  /// Elapsed wall-clock time in floating-point seconds.
  pub fn elapsed_seconds(&self) -> f64 {
    self.elapsed.as_secs_f64()
  }
}

/// Run every configured (distribution, n) cell and report one record per
/// algorithm.
///
/// Each cell generates a single point set from a stream seed derived from
/// the configured seed, and all four algorithms are timed against that
/// identical set; anything else would make the comparison meaningless. A
/// cell re-times each algorithm `trials_per_n` times and records the median
/// elapsed time, which shrugs off scheduler outliers better than the mean.
///
/// Records are emitted in (distribution, n, algorithm) order.
pub fn run(config: &HarnessConfig) -> Result<Vec<BenchmarkRecord>, Error> {
  config.validate()?;
  let mut records =
    Vec::with_capacity(config.distributions.len() * config.n_values.len() * Algorithm::ALL.len());
  for &distribution in &config.distributions {
    for &n in &config.n_values {
      let mut rng = SmallRng::seed_from_u64(stream_seed(config.seed, distribution, n));
      let pts = generate_points(n, distribution, &mut rng);
      for algorithm in Algorithm::ALL {
        let mut timings = Vec::with_capacity(config.trials_per_n);
        let mut hull_size = 0;
        for _ in 0..config.trials_per_n {
          let started = Instant::now();
          let hull = algorithm.convex_hull(&pts)?;
          timings.push(started.elapsed());
          hull_size = hull.len();
        }
        records.push(BenchmarkRecord {
          algorithm,
          n,
          distribution,
          hull_size,
          elapsed: median(&mut timings),
        });
      }
      // The four algorithms just saw the same set; their hull sizes must
      // agree.
      debug_assert!({
        let cell = &records[records.len() - Algorithm::ALL.len()..];
        cell.iter().all(|record| record.hull_size == cell[0].hull_size)
      });
    }
  }
  Ok(records)
}

// Decorrelate the per-cell rng streams from the user-facing seed
// (splitmix64 finalizer).
fn stream_seed(seed: u64, distribution: PointDistribution, n: usize) -> u64 {
  let tag: u64 = match distribution {
    PointDistribution::Uniform => 0x55,
    PointDistribution::Gaussian => 0xAA,
  };
  let mut z = seed ^ (n as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ tag;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

fn median(timings: &mut [Duration]) -> Duration {
  timings.sort_unstable();
  let mid = timings.len() / 2;
  if timings.len() % 2 == 0 {
    (timings[mid - 1] + timings[mid]) / 2
  } else {
    timings[mid]
  }
}
