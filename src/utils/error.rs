use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Passenger limit of {capacity} reached for package '{package}'")]
    CapacityExceeded { package: String, capacity: usize },

    #[error("Insufficient funds: balance {balance} is below charge {charge}")]
    InsufficientFunds { balance: f64, charge: f64 },

    #[error("Activity '{activity}' has no remaining capacity")]
    ActivityFull { activity: String },

    #[error("No passenger matches {reference}")]
    UnknownPassenger { reference: String },

    #[error("Activity '{activity}' at '{destination}' is not part of this package")]
    UnknownActivity {
        destination: String,
        activity: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Report processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Booking,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CapacityExceeded { .. }
            | Self::InsufficientFunds { .. }
            | Self::ActivityFull { .. }
            | Self::UnknownPassenger { .. }
            | Self::UnknownActivity { .. } => ErrorCategory::Booking,
            Self::TomlError(_) | Self::ConfigError { .. } | Self::ValidationError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::ProcessingError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Refused bookings leave the package untouched.
            ErrorCategory::Booking => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => match self {
                Self::IoError(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CapacityExceeded { .. } => {
                "Passenger limit reached. Cannot add more passengers.".to_string()
            }
            Self::InsufficientFunds { .. } => {
                "The passenger's balance does not cover this activity.".to_string()
            }
            Self::ActivityFull { activity } => format!("'{}' is fully booked.", activity),
            Self::UnknownPassenger { reference } => {
                format!("Passenger {} is not enrolled in this package.", reference)
            }
            Self::UnknownActivity {
                destination,
                activity,
            } => format!("'{}' is not offered at '{}'.", activity, destination),
            Self::TomlError(_) => "The package file is not valid TOML.".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ValidationError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) | Self::ProcessingError { .. } => {
                "A report could not be rendered.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "Raise passenger_capacity or enroll fewer passengers",
            Self::InsufficientFunds { .. } => "Top up the passenger's balance before signing up",
            Self::ActivityFull { .. } => "Pick another activity with remaining capacity",
            Self::UnknownPassenger { .. } => "Check the passenger number against the roster",
            Self::UnknownActivity { .. } => {
                "Check destination and activity names against the itinerary"
            }
            Self::TomlError(_) | Self::ConfigError { .. } => {
                "Make sure the file exists and follows the package file layout"
            }
            Self::ValidationError { .. } => "Fix the highlighted field and run again",
            Self::IoError(_) => "Check that the output directory is writable",
            Self::SerializationError(_) | Self::CsvError(_) | Self::ProcessingError { .. } => {
                "Retry with --format text"
            }
        }
    }
}
