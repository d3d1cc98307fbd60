/// parse task document with structure like
/// ```text
/// initial
///   x0: 0.0
///   y0: 1.0
/// grid
///   N: 100
///   X: 7.0
/// ```
/// i.e. titles each followed by `key: value` lines, into the parameters of a computation.
/// Lines starting with //, #, % or ; are comments. Missing sections and keys keep their defaults.
use crate::Utils::logger::level_from_name;
use crate::numerical::chart_data::ChartParams;
use crate::numerical::errors::ComputationError;
use log::{LevelFilter, warn};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

type DocumentMap = HashMap<String, SectionMap>;
type SectionMap = HashMap<String, Value>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// integers are accepted where a real number is expected
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        if let Value::Integer(i) = self {
            usize::try_from(*i).ok()
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_string(&self) -> Option<&String> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// Parameters of the computation and of the logger read from a task document
#[derive(Debug, Clone, PartialEq)]
pub struct TaskConfig {
    pub params: ChartParams,
    pub log_level: LevelFilter,
    pub log_to_file: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            params: ChartParams::default(),
            log_level: LevelFilter::Info,
            log_to_file: false,
        }
    }
}

/// Parses a title (word characters without spaces)
fn parse_title(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    let (input, result) = parser.parse(input)?;
    // the first key starts on the next line
    let input = input.trim();
    Ok((input, result))
}

/// Parses a key (word characters without spaces)
fn parse_key(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    let (input, result) = parser.parse(input)?;
    Ok((input, result))
}

fn parse_value(input: &str) -> IResult<&str, Value> {
    // single value - everything up to whitespace, comma or semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\r' | '\n' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        // Try parsing as different types in order
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    let (input, result) = value_parser.parse(input)?;
    Ok((input, result))
}

/// Parses `key: value`
fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Value)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim(), result))
}

/// Parses a section with a title and one or more key-value pairs
fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;

    let mut section_map = HashMap::new();
    for (key, value) in pairs {
        section_map.insert(key, value);
    }
    Ok((input, (title, section_map)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and blank lines
fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire document into a HashMap
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;

    let mut result = HashMap::new();
    for (title, section_map) in sections.into_iter() {
        result
            .entry(title)
            .or_insert_with(HashMap::new)
            .extend(section_map);
    }
    Ok((input, result))
}

fn wrong_type(title: &str, key: &str, value: &Value, expected: &str) -> ComputationError {
    ComputationError::TaskParse(format!(
        "{}.{} = {} is not {}",
        title, key, value, expected
    ))
}

fn float_of(title: &str, key: &str, value: &Value) -> Result<f64, ComputationError> {
    value
        .as_float()
        .ok_or_else(|| wrong_type(title, key, value, "a real number"))
}

fn count_of(title: &str, key: &str, value: &Value) -> Result<usize, ComputationError> {
    value
        .as_count()
        .ok_or_else(|| wrong_type(title, key, value, "a non-negative integer"))
}

fn boolean_of(title: &str, key: &str, value: &Value) -> Result<bool, ComputationError> {
    value
        .as_boolean()
        .ok_or_else(|| wrong_type(title, key, value, "true or false"))
}

fn apply_document(document: &DocumentMap) -> Result<TaskConfig, ComputationError> {
    let mut task = TaskConfig::default();
    for (title, section) in document {
        for (key, value) in section {
            let (t, k) = (title.as_str(), key.as_str());
            let params = &mut task.params;
            match (t, k) {
                ("initial", "x0") => params.x0 = float_of(t, k, value)?,
                ("initial", "y0") => params.y0 = float_of(t, k, value)?,
                ("grid", "N") => params.n = count_of(t, k, value)?,
                ("grid", "X") => params.x_max = float_of(t, k, value)?,
                ("grid", "NMin") => params.n_min = count_of(t, k, value)?,
                ("grid", "NMax") => params.n_max = count_of(t, k, value)?,
                ("methods", "exact") => params.visibility.exact = boolean_of(t, k, value)?,
                ("methods", "euler") => params.visibility.euler = boolean_of(t, k, value)?,
                ("methods", "improved_euler") => {
                    params.visibility.improved_euler = boolean_of(t, k, value)?
                }
                ("methods", "runge_kutta") => {
                    params.visibility.runge_kutta = boolean_of(t, k, value)?
                }
                ("logging", "level") => {
                    let name = value
                        .as_string()
                        .ok_or_else(|| wrong_type(t, k, value, "a level name"))?;
                    task.log_level = level_from_name(name)?;
                }
                ("logging", "file") => task.log_to_file = boolean_of(t, k, value)?,
                ("initial" | "grid" | "methods" | "logging", _) => {
                    warn!("unknown key '{}' in section '{}' is ignored", k, t)
                }
                _ => warn!("unknown section '{}' is ignored", t),
            }
        }
    }
    Ok(task)
}

/// Task from the text of a document; an empty document gives the defaults
pub fn task_from_str(input: &str) -> Result<TaskConfig, ComputationError> {
    let filtered = filter_comments(input);
    if filtered.trim().is_empty() {
        return Ok(TaskConfig::default());
    }
    let document = match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(ComputationError::TaskParse(format!(
                    "failed to parse entire document. Remaining: '{}'",
                    remaining
                )));
            }
            parsed
        }
        Err(e) => return Err(ComputationError::TaskParse(format!("{:?}", e))),
    };
    let task = apply_document(&document)?;
    task.params.validate()?;
    Ok(task)
}

pub fn task_from_file(path: &Path) -> Result<TaskConfig, ComputationError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ComputationError::TaskParse(format!("cannot read {}: {}", path.display(), e))
    })?;
    task_from_str(&content)
}
