#[cfg(test)]
mod tests {
    use crate::numerical::approximation_methods::{ApproximationMethod, approximation};
    use crate::numerical::exact_solution::{ExactSolution, exact_solution};
    use crate::numerical::grid::Grid;
    use crate::numerical::series::Series;
    use crate::numerical::truncation_errors::{
        global_truncation_error, local_truncation_error, local_truncation_error_on, max_error,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;
    use strum::IntoEnumIterator;

    fn bits(series: &Series) -> Vec<(u64, u64)> {
        series
            .points()
            .iter()
            .map(|&(x, y)| (x.to_bits(), y.to_bits()))
            .collect()
    }

    /// least squares slope of y over x
    fn slope(xs: &[f64], ys: &[f64]) -> f64 {
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;
        let num: f64 = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();
        let den: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
        num / den
    }

    #[test]
    fn test_all_series_share_grid() {
        for &(x0, y0, n, x_max) in &[(0.0, 1.0, 100, 7.0), (-2.0, 3.0, 37, 4.5), (0.5, 0.0, 1, 0.6)] {
            let exact = exact_solution(x0, y0, n, x0, x_max).unwrap();
            for method in ApproximationMethod::iter() {
                let approx = approximation(method, x0, y0, n, x0, x_max).unwrap();
                let local = local_truncation_error_on(x0, y0, n, x0, x_max, method).unwrap();
                assert_eq!(approx.len(), exact.len());
                assert_eq!(approx.xs(), exact.xs());
                assert_eq!(local.xs(), exact.xs());
                assert_eq!(approx.exclusions(), exact.exclusions());
            }
        }
    }

    #[test]
    fn test_computations_are_idempotent() {
        for method in ApproximationMethod::iter() {
            let a = approximation(method, 0.0, 1.0, 300, 0.0, 7.0).unwrap();
            let b = approximation(method, 0.0, 1.0, 300, 0.0, 7.0).unwrap();
            assert_eq!(bits(&a), bits(&b));
            let a = global_truncation_error(0.0, 1.0, 0, 40, 7.0, method).unwrap();
            let b = global_truncation_error(0.0, 1.0, 0, 40, 7.0, method).unwrap();
            assert_eq!(bits(&a), bits(&b));
        }
        let a = exact_solution(0.0, 1.0, 300, 0.0, 7.0).unwrap();
        let b = exact_solution(0.0, 1.0, 300, 0.0, 7.0).unwrap();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_runge_kutta_converges_faster_than_euler() {
        let max_local = |n: usize, method: ApproximationMethod| {
            let series = local_truncation_error_on(0.0, 1.0, n, 0.0, 1.2, method).unwrap();
            max_error(series.ys())
        };
        let euler_ratio =
            max_local(10, ApproximationMethod::Euler) / max_local(1000, ApproximationMethod::Euler);
        let improved_ratio = max_local(10, ApproximationMethod::ImprovedEuler)
            / max_local(1000, ApproximationMethod::ImprovedEuler);
        let rk_ratio = max_local(10, ApproximationMethod::RungeKutta)
            / max_local(1000, ApproximationMethod::RungeKutta);
        assert!(euler_ratio > 50.0);
        assert!(improved_ratio > euler_ratio);
        assert!(rk_ratio > improved_ratio);
        // first order: ten times more steps, about ten times smaller error
        let euler_decade =
            max_local(10, ApproximationMethod::Euler) / max_local(100, ApproximationMethod::Euler);
        assert!(euler_decade > 5.0 && euler_decade < 20.0);
    }

    #[test]
    fn test_convergence_up_to_two() {
        // [0, 2] crosses PI/2, the exclusion fallback keeps the errors bounded
        let max_local = |n: usize, method: ApproximationMethod| {
            let series = local_truncation_error_on(0.0, 1.0, n, 0.0, 2.0, method).unwrap();
            max_error(series.ys())
        };
        for method in ApproximationMethod::iter() {
            assert!(max_local(1000, method) < max_local(10, method), "{}", method);
        }
        let euler_ratio =
            max_local(10, ApproximationMethod::Euler) / max_local(1000, ApproximationMethod::Euler);
        let rk_ratio = max_local(10, ApproximationMethod::RungeKutta)
            / max_local(1000, ApproximationMethod::RungeKutta);
        assert!(euler_ratio > 10.0);
        assert!(rk_ratio > euler_ratio);
    }

    #[test]
    fn test_exclusion_fallback_across_singularity() {
        let grid = Grid::build(100, 0.0, 5.0).unwrap();
        let exclusions = grid.exclusions();
        let nearest = grid
            .xs()
            .iter()
            .enumerate()
            .min_by(|a, b| {
                (a.1 - FRAC_PI_2)
                    .abs()
                    .partial_cmp(&(b.1 - FRAC_PI_2).abs())
                    .unwrap()
            })
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(nearest, 31);
        assert!(exclusions.contains(&nearest));

        let exact = ExactSolution::new(0.0, 1.0).unwrap().evaluate(&grid);
        for method in ApproximationMethod::iter() {
            let series = method.integrate(0.0, 1.0, &grid).unwrap();
            assert_eq!(series.ys()[nearest], exact.ys()[nearest]);
            let local = local_truncation_error(0.0, 1.0, &grid, method).unwrap();
            for &i in exclusions.iter() {
                assert_eq!(local.ys()[i], 0.0);
            }
            assert_eq!(local.non_finite_count(), 0);
        }
    }

    #[test]
    fn test_global_error_trends_downward() {
        for method in ApproximationMethod::iter() {
            let series = global_truncation_error(0.0, 1.0, 1, 50, 1.2, method).unwrap();
            let xs: Vec<f64> = series.xs().iter().copied().collect();
            let ys: Vec<f64> = series.ys().iter().copied().collect();
            assert!(slope(&xs, &ys) < 0.0, "{}", method);
            assert!(ys[49] < ys[1]);
        }
    }

    #[test]
    fn test_global_error_point_is_max_of_local_run() {
        let method = ApproximationMethod::ImprovedEuler;
        let global = global_truncation_error(0.0, 1.0, 5, 25, 3.0, method).unwrap();
        for (i, n) in (5..=25).enumerate() {
            let local = local_truncation_error_on(0.0, 1.0, n, 0.0, 3.0, method).unwrap();
            assert_eq!(global.ys()[i], max_error(local.ys()));
        }
    }

    #[test]
    fn test_global_error_with_zero_steps() {
        // a run of N = 0 has a single point: the initial condition itself
        let series =
            global_truncation_error(0.0, 1.0, 0, 3, 7.0, ApproximationMethod::Euler).unwrap();
        assert_eq!(series.xs()[0], 0.0);
        assert_eq!(series.ys()[0], 0.0);
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_default_task_global_errors_are_bounded() {
        // x in [0, 7] crosses PI/2, 3PI/2 and 5PI/2
        for method in ApproximationMethod::iter() {
            let series = global_truncation_error(0.0, 1.0, 0, 100, 7.0, method).unwrap();
            assert_eq!(series.len(), 101);
            assert!(series.ys().iter().all(|e| e.is_finite() && *e < 1.0));
        }
        let rk = global_truncation_error(0.0, 1.0, 100, 100, 7.0, ApproximationMethod::RungeKutta)
            .unwrap();
        let euler =
            global_truncation_error(0.0, 1.0, 100, 100, 7.0, ApproximationMethod::Euler).unwrap();
        assert!(rk.ys()[0] < euler.ys()[0]);
        assert_relative_eq!(rk.xs()[0], 100.0);
    }
}
