//! Closed-form solution of y' = sec(x) - y*tan(x):
//!
//! y(x) = sin(x) + C*cos(x),  C = (y0 - sin(x0)) / cos(x0)
//!
//! The solution is defined everywhere; only the initial condition itself must not sit on a
//! singularity of tan(x), otherwise C is undefined.
use crate::numerical::errors::ComputationError;
use crate::numerical::grid::Grid;
use crate::numerical::series::Series;
use nalgebra::DVector;

pub const EXACT_SOLUTION_NAME: &str = "Exact Solution";

/// (x0, y0) pair anchoring the exact solution and every approximation method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialCondition {
    pub x0: f64,
    pub y0: f64,
}

impl InitialCondition {
    pub fn new(x0: f64, y0: f64) -> Self {
        InitialCondition { x0, y0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSolution {
    initial: InitialCondition,
    /// arbitrary constant C fixed by the initial condition
    c: f64,
}

impl ExactSolution {
    pub fn new(x0: f64, y0: f64) -> Result<ExactSolution, ComputationError> {
        let cos_x0 = x0.cos();
        // rounding of x0 itself grows with |x0|
        if cos_x0.abs() < f64::EPSILON * (1.0 + x0.abs()) {
            return Err(ComputationError::Domain { x0 });
        }
        let c = (y0 - x0.sin()) / cos_x0;
        Ok(ExactSolution {
            initial: InitialCondition::new(x0, y0),
            c,
        })
    }

    pub fn initial_condition(&self) -> InitialCondition {
        self.initial
    }

    pub fn constant(&self) -> f64 {
        self.c
    }

    pub fn value_at(&self, x: f64) -> f64 {
        x.sin() + self.c * x.cos()
    }

    /// y(x) at every grid point
    pub fn evaluate(&self, grid: &Grid) -> Series {
        let ys = grid.xs().map(|x| self.value_at(x));
        Series::new(
            EXACT_SOLUTION_NAME,
            grid.xs().clone(),
            ys,
            grid.exclusions(),
        )
    }

    pub fn values(&self, grid: &Grid) -> DVector<f64> {
        grid.xs().map(|x| self.value_at(x))
    }
}

/// Exact solution series over the grid [x_min, x_max] with N steps
pub fn exact_solution(
    x0: f64,
    y0: f64,
    n: usize,
    x_min: f64,
    x_max: f64,
) -> Result<Series, ComputationError> {
    let grid = Grid::build(n, x_min, x_max)?;
    Ok(ExactSolution::new(x0, y0)?.evaluate(&grid))
}
