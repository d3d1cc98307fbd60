//! Recompute-on-demand entry point for a presentation layer.
//!
//! A [`ChartParams`] snapshot plus a [`ChartPage`] give the set of series to show:
//! solutions, local truncation errors or global truncation errors. Only the series
//! marked visible are computed.
use crate::numerical::approximation_methods::ApproximationMethod;
use crate::numerical::errors::ComputationError;
use crate::numerical::exact_solution::ExactSolution;
use crate::numerical::grid::Grid;
use crate::numerical::series::{Series, y_bounds};
use crate::numerical::truncation_errors::{global_truncation_error, local_truncation_error};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub const X0_GIVEN: f64 = 0.0;
pub const Y0_GIVEN: f64 = 1.0;
pub const X_MAX_GIVEN: f64 = 7.0;
/// default number of steps
pub const N_DEFAULT: usize = 100;
pub const N_MIN_DEFAULT: usize = 0;
pub const N_MAX_DEFAULT: usize = 100;
/// largest accepted N of the solution and local error pages
pub const N_LIMIT: usize = 3000;
/// largest accepted NMax of the global error page
pub const N_MAX_LIMIT: usize = 1000;

/// Which series are requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodVisibility {
    pub exact: bool,
    pub euler: bool,
    pub improved_euler: bool,
    pub runge_kutta: bool,
}

impl Default for MethodVisibility {
    fn default() -> Self {
        MethodVisibility {
            exact: true,
            euler: true,
            improved_euler: true,
            runge_kutta: true,
        }
    }
}

impl MethodVisibility {
    pub fn is_visible(&self, method: ApproximationMethod) -> bool {
        match method {
            ApproximationMethod::Euler => self.euler,
            ApproximationMethod::ImprovedEuler => self.improved_euler,
            ApproximationMethod::RungeKutta => self.runge_kutta,
        }
    }

    pub fn visible_methods(&self) -> Vec<ApproximationMethod> {
        ApproximationMethod::iter()
            .filter(|m| self.is_visible(*m))
            .collect()
    }
}

/// Snapshot of every input of a computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartParams {
    pub x0: f64,
    pub y0: f64,
    /// number of steps of the solution and local error grids
    pub n: usize,
    /// right bound of the x-axis, also the x up to which global errors are computed
    pub x_max: f64,
    pub n_min: usize,
    pub n_max: usize,
    pub visibility: MethodVisibility,
}

impl Default for ChartParams {
    fn default() -> Self {
        ChartParams {
            x0: X0_GIVEN,
            y0: Y0_GIVEN,
            n: N_DEFAULT,
            x_max: X_MAX_GIVEN,
            n_min: N_MIN_DEFAULT,
            n_max: N_MAX_DEFAULT,
            visibility: MethodVisibility::default(),
        }
    }
}

impl ChartParams {
    pub fn validate(&self) -> Result<(), ComputationError> {
        let invalid = |msg: String| Err(ComputationError::InvalidParameter(msg));
        if !self.x0.is_finite() || !self.y0.is_finite() || !self.x_max.is_finite() {
            return invalid(format!(
                "x0 ({}), y0 ({}) and X ({}) must be finite numbers",
                self.x0, self.y0, self.x_max
            ));
        }
        if self.x_max <= self.x0 {
            return invalid(format!(
                "X ({}) must be greater than x0 ({})",
                self.x_max, self.x0
            ));
        }
        if self.n > N_LIMIT {
            return invalid(format!("N ({}) is too large, at most {}", self.n, N_LIMIT));
        }
        if self.n_max == 0 || self.n_max > N_MAX_LIMIT {
            return invalid(format!(
                "NMax ({}) must be positive and at most {}",
                self.n_max, N_MAX_LIMIT
            ));
        }
        if self.n_min > self.n_max {
            return invalid(format!(
                "NMin ({}) must not exceed NMax ({})",
                self.n_min, self.n_max
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ChartPage {
    #[strum(to_string = "Solutions")]
    Solutions,
    #[strum(to_string = "Local Truncation Error")]
    LocalTruncErrors,
    #[strum(to_string = "Global Truncation Error")]
    GlobalTruncErrors,
}

/// Series of one page with the axis bounds able to show all of them
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGraphs {
    pub page: ChartPage,
    pub series: Vec<Series>,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

pub fn compute_graphs(page: ChartPage, params: &ChartParams) -> Result<ChartGraphs, ComputationError> {
    params.validate()?;
    let (x0, y0) = (params.x0, params.y0);
    let methods = params.visibility.visible_methods();
    let mut series = Vec::new();
    let x_bounds = match page {
        ChartPage::Solutions => {
            let grid = Grid::build(params.n, x0, params.x_max)?;
            if params.visibility.exact {
                series.push(ExactSolution::new(x0, y0)?.evaluate(&grid));
            }
            for method in methods {
                series.push(method.integrate(x0, y0, &grid)?);
            }
            (x0, params.x_max)
        }
        ChartPage::LocalTruncErrors => {
            let grid = Grid::build(params.n, x0, params.x_max)?;
            for method in methods {
                series.push(local_truncation_error(x0, y0, &grid, method)?);
            }
            (x0, params.x_max)
        }
        ChartPage::GlobalTruncErrors => {
            for method in methods {
                series.push(global_truncation_error(
                    x0,
                    y0,
                    params.n_min,
                    params.n_max,
                    params.x_max,
                    method,
                )?);
            }
            (params.n_min as f64, params.n_max as f64)
        }
    };
    info!("page '{}': {} series computed", page, series.len());
    let y_bounds = y_bounds(&series);
    Ok(ChartGraphs {
        page,
        series,
        x_bounds,
        y_bounds,
    })
}
