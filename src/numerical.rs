//! Numerical solutions of y' = sec(x) - y*tan(x) and their truncation errors
//!
/// Example#1
/// ```
/// use SecTanODE::numerical::approximation_methods::ApproximationMethod;
/// use SecTanODE::numerical::grid::Grid;
/// use SecTanODE::numerical::truncation_errors::{global_truncation_error, local_truncation_error};
/// // y(0) = 1, x in [0, 7] with 100 steps
/// let grid = Grid::build(100, 0.0, 7.0).unwrap();
/// let rk = ApproximationMethod::RungeKutta.integrate(0.0, 1.0, &grid).unwrap();
/// assert_eq!(rk.ys()[0], 1.0);
/// // points close to PI/2 + PI*n take the exact value
/// println!("exclusion points: {:?}", rk.exclusions());
/// let local = local_truncation_error(0.0, 1.0, &grid, ApproximationMethod::Euler).unwrap();
/// assert_eq!(local.len(), 101);
/// // maximum local error for N = 1..=50
/// let global = global_truncation_error(0.0, 1.0, 1, 50, 7.0, ApproximationMethod::Euler).unwrap();
/// assert_eq!(global.xs()[0], 1.0);
/// ```
pub mod approximation_methods;
/// page-level api: which series to compute for solutions, local and global errors
pub mod chart_data;
pub mod errors;
/// y(x) = sin(x) + C*cos(x)
pub mod exact_solution;
pub mod grid;
pub mod series;
pub mod truncation_errors;
#[cfg(test)]
mod truncation_errors_tests;
