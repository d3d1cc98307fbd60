use crate::numerical::grid::ExclusionSet;
use itertools::Itertools;
use log::warn;
use nalgebra::DVector;

/// y-axis bounds used when there is nothing to show
pub const Y_AXIS_MIN_DEFAULT: f64 = -10.0;
pub const Y_AXIS_MAX_DEFAULT: f64 = 10.0;

/// Named sequence of (x, y) points produced by every computation.
/// Created once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    xs: DVector<f64>,
    ys: DVector<f64>,
    /// indices of points where the exact value was substituted (empty for N-based series)
    exclusions: ExclusionSet,
}

impl Series {
    pub fn new(
        name: impl Into<String>,
        xs: DVector<f64>,
        ys: DVector<f64>,
        exclusions: ExclusionSet,
    ) -> Series {
        debug_assert_eq!(xs.len(), ys.len());
        let series = Series {
            name: name.into(),
            xs,
            ys,
            exclusions,
        };
        let anomalies = series.non_finite_count();
        if anomalies > 0 {
            warn!(
                "series '{}' contains {} NaN or infinite values",
                series.name, anomalies
            );
        }
        series
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn xs(&self) -> &DVector<f64> {
        &self.xs
    }

    pub fn ys(&self) -> &DVector<f64> {
        &self.ys
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// ordered (x, y) pairs
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }

    pub fn non_finite_count(&self) -> usize {
        self.ys.iter().filter(|y| !y.is_finite()).count()
    }

    /// smallest and largest finite y
    pub fn y_min_max(&self) -> Option<(f64, f64)> {
        self.ys
            .iter()
            .copied()
            .filter(|y| y.is_finite())
            .minmax()
            .into_option()
    }
}

/// Bounds of the y-axis able to show every series. Zero is always kept in view;
/// without series the default bounds are returned.
pub fn y_bounds(series: &[Series]) -> (f64, f64) {
    if series.is_empty() {
        return (Y_AXIS_MIN_DEFAULT, Y_AXIS_MAX_DEFAULT);
    }
    series
        .iter()
        .filter_map(Series::y_min_max)
        .fold((0.0, 0.0), |(lo, hi), (min, max)| {
            (f64::min(lo, min), f64::max(hi, max))
        })
}
