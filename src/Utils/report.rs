/*
Pretty printing of computed series: one row per series with its size, exclusion points and range.
*/
use crate::numerical::chart_data::ChartGraphs;
use crate::numerical::series::Series;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, PartialEq, Tabled)]
pub struct SeriesSummary {
    #[tabled(rename = "series")]
    pub name: String,
    pub points: usize,
    #[tabled(rename = "exclusion points")]
    pub exclusions: usize,
    #[tabled(rename = "min y")]
    pub y_min: String,
    #[tabled(rename = "max y")]
    pub y_max: String,
    #[tabled(rename = "NaN/inf")]
    pub non_finite: usize,
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6e}", v),
        None => "-".to_string(),
    }
}

pub fn summarize(series: &[Series]) -> Vec<SeriesSummary> {
    series
        .iter()
        .map(|s| {
            let bounds = s.y_min_max();
            SeriesSummary {
                name: s.name().to_string(),
                points: s.len(),
                exclusions: s.exclusions().len(),
                y_min: format_value(bounds.map(|b| b.0)),
                y_max: format_value(bounds.map(|b| b.1)),
                non_finite: s.non_finite_count(),
            }
        })
        .collect()
}

/// page title followed by the table of its series
pub fn series_table(graphs: &ChartGraphs) -> String {
    let mut table = Table::new(summarize(&graphs.series));
    table.with(Style::modern_rounded());
    format!(
        "{} (x in [{}, {}], y in [{:.4}, {:.4}])\n{}",
        graphs.page,
        graphs.x_bounds.0,
        graphs.x_bounds.1,
        graphs.y_bounds.0,
        graphs.y_bounds.1,
        table
    )
}
