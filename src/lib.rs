pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::PackageFile};

pub use core::session::{BookingSession, SignUpRecord};
pub use domain::{
    Activity, ActivityRef, Destination, Enrollment, Passenger, PassengerId, SignUpOrder,
    SignUpOutcome, Tier, TravelPackage,
};
pub use report::{ReportFormat, Reporter};
pub use utils::error::{BookingError, Result};
