//! different utility modules used throughout the project
/// console and file logging
pub mod logger;
/// tables with a summary of computed series
pub mod report;
/// parse task document with structure like " title1 key1: value1 key2: value2 title2 key3: value3" into computation parameters
pub mod task_parser;
