// Domain layer: the booking aggregate and its ports. No I/O happens here.

pub mod activity;
pub mod destination;
pub mod model;
pub mod package;
pub mod passenger;
pub mod ports;

pub use activity::Activity;
pub use destination::Destination;
pub use model::{ActivityRef, Enrollment, PassengerId, SignUpOrder, SignUpOutcome};
pub use package::TravelPackage;
pub use passenger::{Passenger, Tier};
