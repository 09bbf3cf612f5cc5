use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Feeding plan parse error: {message}")]
    PlanParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid meal '{value}': {reason}")]
    InvalidMealError { value: String, reason: String },
}

impl FeedError {
    /// Short message for terminal output.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedError::IoError(e) => format!("Could not read the feeding plan: {}", e),
            FeedError::PlanParseError { message } => {
                format!("The feeding plan could not be read as a feeding plan: {}", message)
            }
            FeedError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for {}: {}", field, reason)
            }
            FeedError::InvalidMealError { value, .. } => {
                format!("Could not understand meal '{}'", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedError::IoError(_) => "Check that the plan path exists and is readable",
            FeedError::PlanParseError { .. } => {
                "Check the plan against the [walrus] / [[meals]] layout"
            }
            FeedError::InvalidConfigValueError { .. } => "Names must not be blank",
            FeedError::InvalidMealError { .. } => {
                "Use NAME for walrus food or NAME:inedible for anything else"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
