pub mod session;

pub use crate::domain::model::{ActivityRef, Enrollment, PassengerId, SignUpOrder, SignUpOutcome};
pub use crate::domain::ports::ReportStorage;
pub use crate::domain::{Activity, Destination, Passenger, Tier, TravelPackage};
pub use crate::utils::error::Result;
