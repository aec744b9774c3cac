use std::fmt;

/// Setup failures. Nothing inside `step()` can fail; those cases are rule
/// branches where the cell stays put.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Malformed `B<digits>/S<digits>` rule string
    Format { rule: String, reason: String },
    /// Grid too small to hold an interior plus the wall border
    InvalidDimension { width: u32, height: u32 },
    /// Wall fill ratio is NaN or outside [0, 1]
    InvalidFillRatio(f64),
    /// Settings JSON did not parse or holds unusable values
    Settings(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Format { rule, reason } => {
                write!(f, "invalid rule {:?}: {}", rule, reason)
            }
            EngineError::InvalidDimension { width, height } => write!(
                f,
                "invalid grid size {}x{}: both sides must be at least 3",
                width, height
            ),
            EngineError::InvalidFillRatio(ratio) => {
                write!(f, "fill ratio must be within [0, 1], got {}", ratio)
            }
            EngineError::Settings(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
