//! Error types for rrt_planner

use std::fmt;

/// Main error type for the planner
#[derive(Debug)]
pub enum PlannerError {
    /// A caller-supplied state violates a planner precondition
    /// (e.g. start or destination in collision)
    PreconditionViolated(String),
    /// Invalid parameter
    InvalidParameter(String),
    /// Occupancy map could not be built
    MapError(String),
    /// I/O error
    IoError(std::io::Error),
    /// Image decoding error
    ImageError(image::ImageError),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::PreconditionViolated(msg) => write!(f, "Precondition violated: {}", msg),
            PlannerError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlannerError::MapError(msg) => write!(f, "Map error: {}", msg),
            PlannerError::IoError(e) => write!(f, "I/O error: {}", e),
            PlannerError::ImageError(e) => write!(f, "Image error: {}", e),
            PlannerError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::IoError(e) => Some(e),
            PlannerError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(e: std::io::Error) -> Self {
        PlannerError::IoError(e)
    }
}

impl From<image::ImageError> for PlannerError {
    fn from(e: image::ImageError) -> Self {
        PlannerError::ImageError(e)
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::PreconditionViolated("start state (3, 4) is not free".to_string());
        assert_eq!(
            format!("{}", err),
            "Precondition violated: start state (3, 4) is not free"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::IoError(_)));
    }
}
