//! Fixed-step approximation methods for y' = f(x, y) = sec(x) - y*tan(x)
//!
//! All methods start from y_0 = y0 at x_0 = x0 and advance over the points of a [`Grid`].
//! At exclusion points the stepping formula is bypassed and the exact solution value
//! is taken instead, the next step then starts from that value.
//! NaN or infinite values that appear anyway are kept in the series as they are.
use crate::numerical::errors::ComputationError;
use crate::numerical::exact_solution::ExactSolution;
use crate::numerical::grid::Grid;
use crate::numerical::series::Series;
use nalgebra::DVector;
use strum_macros::{Display, EnumIter, IntoStaticStr};

pub const EULER_METHOD_NAME: &str = "Euler Method";
pub const IMPROVED_EULER_METHOD_NAME: &str = "Improved Euler Method";
pub const RUNGE_KUTTA_METHOD_NAME: &str = "Runge Kutta Method";

/// allowed distance between x0 and the first grid point
pub const X0_TOLERANCE: f64 = 1e-6;

/// y' = sec(x) - y*tan(x)
pub fn derivative(x: f64, y: f64) -> f64 {
    1.0 / x.cos() - y * x.tan()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ApproximationMethod {
    #[strum(to_string = "Euler Method")]
    Euler,
    #[strum(to_string = "Improved Euler Method")]
    ImprovedEuler,
    #[strum(to_string = "Runge Kutta Method")]
    RungeKutta,
}

impl ApproximationMethod {
    /// name of the series produced by the method
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// One step from (x, y) with step h, no exclusion handling
    pub fn step(self, x: f64, y: f64, h: f64) -> f64 {
        match self {
            // y_i = y_(i-1) + h * f(x_(i-1), y_(i-1))
            ApproximationMethod::Euler => y + h * derivative(x, y),
            ApproximationMethod::ImprovedEuler => {
                let k1 = h * derivative(x, y);
                let k2 = h * derivative(x + h, y + k1);
                y + 0.5 * (k1 + k2)
            }
            ApproximationMethod::RungeKutta => {
                let k1 = h * derivative(x, y);
                let k2 = h * derivative(x + 0.5 * h, y + 0.5 * k1);
                let k3 = h * derivative(x + 0.5 * h, y + 0.5 * k2);
                let k4 = h * derivative(x + h, y + k3);
                y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
            }
        }
    }

    /// Approximate solution on the grid. x0 must be the first grid point.
    pub fn integrate(self, x0: f64, y0: f64, grid: &Grid) -> Result<Series, ComputationError> {
        let xs = grid.xs();
        let first = xs[0];
        if !((x0 - first).abs() <= X0_TOLERANCE) {
            return Err(ComputationError::InvalidArgument(format!(
                "for {} x0 ({}) must be equal to the lower bound of the grid ({})",
                self, x0, first
            )));
        }
        let exact = ExactSolution::new(x0, y0)?;
        let exclusions = grid.exclusions();
        let h = grid.step();

        let mut ys = DVector::zeros(grid.len());
        ys[0] = y0;
        for i in 1..ys.len() {
            if exclusions.contains(&i) {
                ys[i] = exact.value_at(xs[i]);
                continue;
            }
            ys[i] = self.step(xs[i - 1], ys[i - 1], h);
        }
        Ok(Series::new(self.name(), xs.clone(), ys, exclusions))
    }
}

/// Approximate solution over the grid [x_min, x_max] with N steps
pub fn approximation(
    method: ApproximationMethod,
    x0: f64,
    y0: f64,
    n: usize,
    x_min: f64,
    x_max: f64,
) -> Result<Series, ComputationError> {
    let grid = Grid::build(n, x_min, x_max)?;
    method.integrate(x0, y0, &grid)
}
