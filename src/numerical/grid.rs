//! Grid of abscissa values shared by every series of one computation, and the detector
//! of grid points lying too close to the singularities of tan(x).
//!
//! y' = sec(x) - y*tan(x) is undefined at x = PI/2 + PI*n. Every grid point whose distance to
//! such a point does not exceed the grid step is an exclusion point: approximation methods
//! do not step into it, they take the exact solution value instead.
use crate::numerical::errors::ComputationError;
use log::debug;
use nalgebra::DVector;
use std::collections::BTreeSet;
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::RangeInclusive;

/// Indices of grid points that fall into a step-sized neighbourhood of a singularity
pub type ExclusionSet = BTreeSet<usize>;

/// Evenly spaced sequence x_0 = min, x_i = x_(i-1) + h, h = (max - min)/N
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    xs: DVector<f64>,
    min: f64,
    max: f64,
    step: f64,
}

impl Grid {
    /// Builds N+1 points over [min, max]. N = 0 gives the single point `min` and zero step.
    pub fn build(n: usize, min: f64, max: f64) -> Result<Grid, ComputationError> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ComputationError::InvalidInterval { min, max });
        }
        let len = n.checked_add(1).ok_or_else(|| {
            ComputationError::InvalidParameter(format!("N ({}) is too large", n))
        })?;
        if n == 0 {
            return Ok(Grid {
                xs: DVector::from_element(1, min),
                min,
                max,
                step: 0.0,
            });
        }
        let step = (max - min) / n as f64;
        let mut xs = DVector::zeros(len);
        xs[0] = min;
        for i in 1..=n {
            // x_i = x_(i-1) + h
            xs[i] = xs[i - 1] + step;
        }
        debug!("grid of {} points on [{}, {}] with step {}", len, min, max, step);
        Ok(Grid { xs, min, max, step })
    }

    pub fn xs(&self) -> &DVector<f64> {
        &self.xs
    }

    /// number of points, N + 1
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// number of steps N
    pub fn steps(&self) -> usize {
        self.xs.len() - 1
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// exclusion points of this grid with the window half-width equal to the grid step
    pub fn exclusions(&self) -> ExclusionSet {
        find_exclusions(self, self.step)
    }
}

/// Integers n such that PI/2 + PI*n lies in [min - h, max + h]. Empty when there are none.
pub fn singularity_periods(min: f64, max: f64, h: f64) -> RangeInclusive<i64> {
    let lowest = ((min - h - FRAC_PI_2) / PI).ceil() as i64;
    let highest = ((max + h - FRAC_PI_2) / PI).floor() as i64;
    lowest..=highest
}

/// x = PI/2 + PI*n
pub fn singularity(n: i64) -> f64 {
    FRAC_PI_2 + PI * n as f64
}

/// Marks every grid point x with x in [PI/2 + PI*n - h, PI/2 + PI*n + h] for some n in the
/// period range of the grid bounds. A single-point grid has no exclusions.
pub fn find_exclusions(grid: &Grid, h: f64) -> ExclusionSet {
    let mut exclusions = ExclusionSet::new();
    if grid.len() < 2 {
        return exclusions;
    }
    let periods = singularity_periods(grid.min(), grid.max(), h);
    for (index, &x) in grid.xs().iter().enumerate() {
        if is_exclusion_point(x, &periods, h) {
            exclusions.insert(index);
        }
    }
    debug!(
        "{} exclusion points found for periods {:?} with half-width {}",
        exclusions.len(),
        periods,
        h
    );
    exclusions
}

/// Only the periods whose window can reach x are tested, widened by one for rounding.
fn is_exclusion_point(x: f64, periods: &RangeInclusive<i64>, h: f64) -> bool {
    let near = singularity_periods(x, x, h);
    let lowest = (*near.start() - 1).max(*periods.start());
    let highest = (*near.end() + 1).min(*periods.end());
    (lowest..=highest).any(|n| {
        let s = singularity(n);
        x >= s - h && x <= s + h
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_unit_steps() {
        let grid = Grid::build(4, 0.0, 4.0).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.steps(), 4);
        assert_eq!(grid.step(), 1.0);
        assert_eq!(grid.xs().as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_build_accumulates_step() {
        let grid = Grid::build(100, 0.0, 7.0).unwrap();
        assert_eq!(grid.xs()[0], 0.0);
        for i in 1..grid.len() {
            assert_eq!(grid.xs()[i], grid.xs()[i - 1] + grid.step());
        }
        assert_relative_eq!(grid.xs()[100], 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_build_zero_steps() {
        let grid = Grid::build(0, 1.5, 2.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.xs()[0], 1.5);
        assert_eq!(grid.step(), 0.0);
        assert!(grid.exclusions().is_empty());
    }

    #[test]
    fn test_build_invalid_interval() {
        assert_eq!(
            Grid::build(10, 1.0, 1.0),
            Err(ComputationError::InvalidInterval { min: 1.0, max: 1.0 })
        );
        assert!(Grid::build(10, 2.0, -1.0).is_err());
        assert!(Grid::build(0, 2.0, -1.0).is_err());
        assert!(Grid::build(10, f64::NAN, 1.0).is_err());
        assert_eq!(
            Grid::build(10, 0.0, f64::INFINITY),
            Err(ComputationError::InvalidInterval { min: 0.0, max: f64::INFINITY })
        );
        assert!(Grid::build(10, f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_build_too_many_steps() {
        assert!(matches!(
            Grid::build(usize::MAX, 0.0, 1.0),
            Err(ComputationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_singularity_periods() {
        assert_eq!(singularity_periods(0.0, 5.0, 0.05), 0..=1);
        assert_eq!(singularity_periods(-5.0, 0.0, 0.1), -2..=-1);
        assert!(singularity_periods(0.0, 1.2, 0.12).is_empty());
        // the band around PI/2 reaches back to min when h is large enough
        assert_eq!(singularity_periods(0.0, 1.0, 1.0), 0..=0);
    }

    #[test]
    fn test_exclusions_contain_point_nearest_to_singularity() {
        let grid = Grid::build(100, 0.0, 5.0).unwrap();
        let exclusions = grid.exclusions();
        let nearest = (0..grid.len())
            .min_by(|&a, &b| {
                let da = (grid.xs()[a] - FRAC_PI_2).abs();
                let db = (grid.xs()[b] - FRAC_PI_2).abs();
                da.partial_cmp(&db).unwrap()
            })
            .unwrap();
        assert!(exclusions.contains(&nearest));
        // 3PI/2 ~ 4.712 is inside [0, 5] as well
        assert!(exclusions.contains(&94));
        assert!(!exclusions.contains(&0));
        assert!(!exclusions.contains(&60));
    }

    #[test]
    fn test_exclusions_negative_interval() {
        let grid = Grid::build(50, -5.0, 0.0).unwrap();
        let exclusions = grid.exclusions();
        // -PI/2 ~ -1.5708 -> index 34, -3PI/2 ~ -4.712 -> index 3
        assert!(exclusions.contains(&34));
        assert!(exclusions.contains(&3));
        assert!(!exclusions.contains(&20));
    }

    #[test]
    fn test_exclusions_agree_with_brute_force_window() {
        let grid = Grid::build(137, -7.0, 9.0).unwrap();
        let h = grid.step();
        let exclusions = grid.exclusions();
        for (index, &x) in grid.xs().iter().enumerate() {
            let near = (-10..=10).any(|n| {
                let s = singularity(n);
                x >= s - h && x <= s + h
            });
            assert_eq!(exclusions.contains(&index), near, "index {} x {}", index, x);
        }
    }

    #[test]
    fn test_exclusions_with_step_wider_than_period() {
        // h = 10: every window spans several periods
        for grid in [Grid::build(2, 0.0, 20.0).unwrap(), Grid::build(3, -4.0, 26.0).unwrap()] {
            let h = grid.step();
            let exclusions = grid.exclusions();
            for (index, &x) in grid.xs().iter().enumerate() {
                let near = (-20..=20).any(|n| {
                    let s = singularity(n);
                    x >= s - h && x <= s + h
                });
                assert_eq!(exclusions.contains(&index), near, "index {} x {}", index, x);
            }
        }
    }

    #[test]
    fn test_no_exclusions_away_from_singularities() {
        let grid = Grid::build(10, 0.0, 1.2).unwrap();
        assert!(grid.exclusions().is_empty());
    }
}
