// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::Utils::report::series_table;
use crate::numerical::approximation_methods::ApproximationMethod;
use crate::numerical::chart_data::{ChartPage, ChartParams, MethodVisibility, compute_graphs};
use crate::numerical::errors::ComputationError;
use crate::numerical::grid::Grid;
use crate::numerical::truncation_errors::{global_truncation_error, max_error};
use strum::IntoEnumIterator;

/// Runs one of the examples and returns the printed text
pub fn ivp_error_examples(example: usize) -> Result<String, ComputationError> {
    let mut out = String::new();
    match example {
        0 => {
            // all three pages for the default task: y(0) = 1, x in [0, 7], N = 100, NMax = 100
            let params = ChartParams::default();
            for page in ChartPage::iter() {
                let graphs = compute_graphs(page, &params)?;
                out.push_str(&series_table(&graphs));
                out.push('\n');
            }
        }
        1 => {
            // points of the grid that take the exact value instead of a step
            let grid = Grid::build(50, 0.0, 7.0)?;
            for i in grid.exclusions() {
                out.push_str(&format!("x[{}] = {:.4}\n", i, grid.xs()[i]));
            }
        }
        2 => {
            // how fast the worst error drops with N, away from singularities
            for method in ApproximationMethod::iter() {
                let global = global_truncation_error(0.0, 1.0, 10, 1000, 1.2, method)?;
                let first = global.ys()[0];
                let last = global.ys()[global.len() - 1];
                out.push_str(&format!(
                    "{}: max error {:.3e} at N = 10, {:.3e} at N = 1000, ratio {:.1}\n",
                    method,
                    first,
                    last,
                    first / last
                ));
            }
        }
        3 => {
            // largest global error of each method on the default task, only Runge-Kutta and Euler
            let params = ChartParams {
                n_max: 1000,
                visibility: MethodVisibility {
                    exact: false,
                    euler: true,
                    improved_euler: false,
                    runge_kutta: true,
                },
                ..ChartParams::default()
            };
            let graphs = compute_graphs(ChartPage::GlobalTruncErrors, &params)?;
            for series in graphs.series.iter() {
                out.push_str(&format!(
                    "{}: worst error over N in 0..=1000 is {:.3e}\n",
                    series.name(),
                    max_error(series.ys())
                ));
            }
        }
        _ => {
            return Err(ComputationError::InvalidParameter(format!(
                "no example number {}",
                example
            )));
        }
    }
    println!("{}", out);
    Ok(out)
}
