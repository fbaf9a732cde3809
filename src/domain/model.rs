use serde::{Deserialize, Serialize};
use std::fmt;

/// Locates an activity inside a package: destination index, then the
/// activity's index within that destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRef {
    pub destination: usize,
    pub activity: usize,
}

impl ActivityRef {
    pub const fn new(destination: usize, activity: usize) -> Self {
        Self {
            destination,
            activity,
        }
    }
}

/// Enrollment slot of a passenger within one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerId(pub(crate) usize);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a passenger is charged before or after the activity seat is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignUpOrder {
    /// Charge and record first, then try the seat. A full activity still
    /// costs the passenger and shows up in their list.
    #[default]
    ChargeFirst,
    /// Take the seat first; charge and record only when it succeeds.
    CapacityFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignUpOutcome {
    Admitted,
    InsufficientFunds,
    ActivityFull,
    NotMemberOfPackage,
    UnknownPassenger,
}

impl SignUpOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Enrollment {
    Enrolled(PassengerId),
    PackageFull,
    /// The passenger already holds sign-ups brokered by another package.
    CarriesSignUps,
}

impl Enrollment {
    pub fn passenger_id(&self) -> Option<PassengerId> {
        match self {
            Self::Enrolled(id) => Some(*id),
            Self::PackageFull | Self::CarriesSignUps => None,
        }
    }
}
