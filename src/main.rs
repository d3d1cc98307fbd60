#![allow(non_snake_case)]
use SecTanODE::Utils::logger::init_logger;
use SecTanODE::Utils::report::series_table;
use SecTanODE::Utils::task_parser::{TaskConfig, task_from_file};
use SecTanODE::numerical::chart_data::{ChartPage, compute_graphs};
use log::info;
use std::env;
use std::path::Path;
use std::time::Instant;
use strum::IntoEnumIterator;

/// SecTanODE [task_file]
/// without a task file the default task is solved: y(0) = 1, x in [0, 7], N = 100, NMax = 100
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let task = match env::args().nth(1) {
        Some(path) => task_from_file(Path::new(&path))?,
        None => TaskConfig::default(),
    };
    let current_dir = env::current_dir()?;
    let log_dir = task.log_to_file.then_some(current_dir.as_path());
    if let Some(log_path) = init_logger(task.log_level, log_dir)? {
        println!("log is written to {}", log_path.display());
    }
    info!("task: {:?}", task.params);

    for page in ChartPage::iter() {
        let start = Instant::now();
        let graphs = compute_graphs(page, &task.params)?;
        println!("{}", series_table(&graphs));
        info!("{} took {} milliseconds", page, start.elapsed().as_millis());
    }
    Ok(())
}
