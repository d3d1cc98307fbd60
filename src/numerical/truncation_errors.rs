//! Local and global truncation errors of the approximation methods.
//!
//! Local error: |y_exact(x_i) - y_i| at every point of a grid.
//! Global error: for every step count N of a range, the largest local error of the run on a
//! fresh grid [x0, x_max] with N steps; the abscissa of the resulting series is N itself.
use crate::numerical::approximation_methods::ApproximationMethod;
use crate::numerical::errors::ComputationError;
use crate::numerical::exact_solution::ExactSolution;
use crate::numerical::grid::{ExclusionSet, Grid};
use crate::numerical::series::Series;
use log::{debug, info};
use nalgebra::DVector;
use std::time::Instant;

/// Pointwise absolute deviation of the method from the exact solution on the same grid.
/// Exclusion points stay in the series, their error is zero.
pub fn local_truncation_error(
    x0: f64,
    y0: f64,
    grid: &Grid,
    method: ApproximationMethod,
) -> Result<Series, ComputationError> {
    let approximation = method.integrate(x0, y0, grid)?;
    let exact = ExactSolution::new(x0, y0)?.values(grid);
    let errors = exact.zip_map(approximation.ys(), |e, a| (e - a).abs());
    Ok(Series::new(
        method.name(),
        grid.xs().clone(),
        errors,
        approximation.exclusions().clone(),
    ))
}

/// Local truncation error over the grid [x_min, x_max] with N steps
pub fn local_truncation_error_on(
    x0: f64,
    y0: f64,
    n: usize,
    x_min: f64,
    x_max: f64,
    method: ApproximationMethod,
) -> Result<Series, ComputationError> {
    let grid = Grid::build(n, x_min, x_max)?;
    local_truncation_error(x0, y0, &grid, method)
}

/// Largest value of a run. Any NaN makes the result NaN, an empty run gives NaN.
pub fn max_error(errors: &DVector<f64>) -> f64 {
    errors
        .iter()
        .copied()
        .reduce(|max, e| {
            if max.is_nan() || e.is_nan() {
                f64::NAN
            } else {
                max.max(e)
            }
        })
        .unwrap_or(f64::NAN)
}

/// Maximum local truncation error as a function of the step count N in [n_min, n_max]
pub fn global_truncation_error(
    x0: f64,
    y0: f64,
    n_min: usize,
    n_max: usize,
    x_max: f64,
    method: ApproximationMethod,
) -> Result<Series, ComputationError> {
    if n_min > n_max {
        return Err(ComputationError::InvalidParameter(format!(
            "NMin ({}) must not exceed NMax ({})",
            n_min, n_max
        )));
    }
    if x0.is_nan() || x_max.is_nan() || x_max <= x0 {
        return Err(ComputationError::InvalidInterval {
            min: x0,
            max: x_max,
        });
    }
    ExactSolution::new(x0, y0)?;
    info!(
        "global truncation error of {} for N in {}..={} on [{}, {}]",
        method, n_min, n_max, x0, x_max
    );
    let start = Instant::now();

    let count = (n_max - n_min).checked_add(1).ok_or_else(|| {
        ComputationError::InvalidParameter(format!(
            "too many step counts in {}..={}",
            n_min, n_max
        ))
    })?;
    let mut ns = DVector::zeros(count);
    let mut ys = DVector::zeros(count);
    for (i, n) in (n_min..=n_max).enumerate() {
        let grid = Grid::build(n, x0, x_max)?;
        let local = local_truncation_error(x0, y0, &grid, method)?;
        ns[i] = n as f64;
        ys[i] = max_error(local.ys());
    }
    debug!(
        "{} runs of {} took {} milliseconds",
        count,
        method,
        start.elapsed().as_millis()
    );
    // N-axis has no exclusion points
    Ok(Series::new(method.name(), ns, ys, ExclusionSet::new()))
}
