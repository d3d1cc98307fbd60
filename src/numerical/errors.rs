use std::fmt;

/// Error types of the computation engine and of the layer feeding it with parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationError {
    /// right bound of the interval is not greater than the left one
    InvalidInterval { min: f64, max: f64 },
    /// x0 does not coincide with the first grid point
    InvalidArgument(String),
    /// initial condition sits on a singularity of tan(x): cos(x0) = 0
    Domain { x0: f64 },
    /// parameter rejected before any computation (step count caps, bounds...)
    InvalidParameter(String),
    /// task document could not be parsed
    TaskParse(String),
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComputationError::InvalidInterval { min, max } => write!(
                f,
                "Invalid interval: max ({}) must be greater than min ({})",
                max, min
            ),
            ComputationError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ComputationError::Domain { x0 } => write!(
                f,
                "Initial condition is undefined: cos(x0) = 0 at x0 = {}",
                x0
            ),
            ComputationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ComputationError::TaskParse(msg) => write!(f, "Failed to parse task: {}", msg),
        }
    }
}

impl std::error::Error for ComputationError {}
