use crate::domain::activity::Activity;
use crate::domain::destination::Destination;
use crate::domain::model::{ActivityRef, Enrollment, PassengerId, SignUpOrder, SignUpOutcome};
use crate::domain::passenger::Passenger;
use crate::utils::error::{BookingError, Result};
use serde::Serialize;

/// Aggregate root: owns the destinations (and through them every activity)
/// plus the enrolled passengers.
///
/// Nothing is ever removed. Sign-ups go through the package so a passenger
/// can only book activities the package actually offers.
#[derive(Debug, Clone, Serialize)]
pub struct TravelPackage {
    name: String,
    passenger_capacity: usize,
    sign_up_order: SignUpOrder,
    destinations: Vec<Destination>,
    passengers: Vec<Passenger>,
}

impl TravelPackage {
    pub fn new(name: impl Into<String>, passenger_capacity: usize) -> Self {
        Self {
            name: name.into(),
            passenger_capacity,
            sign_up_order: SignUpOrder::default(),
            destinations: Vec::new(),
            passengers: Vec::new(),
        }
    }

    pub fn with_sign_up_order(mut self, order: SignUpOrder) -> Self {
        self.sign_up_order = order;
        self
    }

    /// Appends without a uniqueness check. Returns the destination's index.
    pub fn add_destination(&mut self, destination: Destination) -> usize {
        self.destinations.push(destination);
        self.destinations.len() - 1
    }

    /// Enrolls `passenger` unless the package is full. A passenger that
    /// already carries sign-ups is refused: those refs belong to whichever
    /// package brokered them.
    pub fn add_passenger(&mut self, passenger: Passenger) -> Enrollment {
        if !passenger.signed_up_activities().is_empty() {
            tracing::warn!(
                package = %self.name,
                passenger = passenger.passenger_number(),
                "Passenger arrives with {} sign-ups from elsewhere, enrollment rejected",
                passenger.signed_up_activities().len()
            );
            return Enrollment::CarriesSignUps;
        }

        if self.passengers.len() >= self.passenger_capacity {
            tracing::warn!(
                package = %self.name,
                passenger = passenger.passenger_number(),
                "Passenger limit of {} reached, enrollment rejected",
                self.passenger_capacity
            );
            return Enrollment::PackageFull;
        }

        if self
            .passengers
            .iter()
            .any(|p| p.passenger_number() == passenger.passenger_number())
        {
            tracing::warn!(
                package = %self.name,
                "Passenger number {} is already enrolled, detail reports will list both",
                passenger.passenger_number()
            );
        }

        tracing::debug!(
            "Enrolled {} (*{}, {})",
            passenger.name(),
            passenger.passenger_number(),
            passenger.tier()
        );
        self.passengers.push(passenger);
        Enrollment::Enrolled(PassengerId(self.passengers.len() - 1))
    }

    pub fn try_add_passenger(&mut self, passenger: Passenger) -> Result<PassengerId> {
        let carried = passenger.signed_up_activities().len();
        match self.add_passenger(passenger) {
            Enrollment::Enrolled(id) => Ok(id),
            Enrollment::PackageFull => Err(BookingError::CapacityExceeded {
                package: self.name.clone(),
                capacity: self.passenger_capacity,
            }),
            Enrollment::CarriesSignUps => Err(BookingError::ValidationError {
                field: "passenger.signed_up_activities".to_string(),
                value: carried.to_string(),
                reason: "Passengers must be enrolled before signing up".to_string(),
            }),
        }
    }

    /// Signs `passenger` up for the activity at `at` under this package's
    /// [`SignUpOrder`]. Ids from another package are refused untouched.
    pub fn sign_up(&mut self, passenger: PassengerId, at: ActivityRef) -> SignUpOutcome {
        let Some(activity) = self
            .destinations
            .get_mut(at.destination)
            .and_then(|d| d.activity_mut(at.activity))
        else {
            return SignUpOutcome::NotMemberOfPackage;
        };
        let Some(passenger) = self.passengers.get_mut(passenger.0) else {
            return SignUpOutcome::UnknownPassenger;
        };

        let outcome = passenger.sign_up_for_activity(at, activity, self.sign_up_order);
        match outcome {
            SignUpOutcome::Admitted => tracing::debug!(
                "*{} signed up for {} (balance now {})",
                passenger.passenger_number(),
                activity.name(),
                passenger.balance()
            ),
            other => tracing::info!(
                "*{} not signed up for {}: {:?}",
                passenger.passenger_number(),
                activity.name(),
                other
            ),
        }
        outcome
    }

    /// Like [`TravelPackage::sign_up`] but turns every non-admitted outcome
    /// into an error.
    ///
    /// Under [`SignUpOrder::ChargeFirst`] an `Err(ActivityFull)` does not mean
    /// nothing happened: the passenger has already been charged and the
    /// activity recorded on their list, only the seat was not taken. Under
    /// [`SignUpOrder::CapacityFirst`] every `Err` leaves the package untouched.
    pub fn try_sign_up(&mut self, passenger: PassengerId, at: ActivityRef) -> Result<()> {
        let balance_before = self.passenger(passenger).map(Passenger::balance);
        match self.sign_up(passenger, at) {
            SignUpOutcome::Admitted => Ok(()),
            SignUpOutcome::InsufficientFunds => {
                let charge = match (self.passenger(passenger), self.activity(at)) {
                    (Some(p), Some(a)) => p.tier().effective_charge(a.cost()),
                    _ => 0.0,
                };
                Err(BookingError::InsufficientFunds {
                    balance: balance_before.unwrap_or_default(),
                    charge,
                })
            }
            SignUpOutcome::ActivityFull => Err(BookingError::ActivityFull {
                activity: self
                    .activity(at)
                    .map(|a| a.name().to_string())
                    .unwrap_or_default(),
            }),
            SignUpOutcome::NotMemberOfPackage => Err(BookingError::UnknownActivity {
                destination: at.destination.to_string(),
                activity: at.activity.to_string(),
            }),
            SignUpOutcome::UnknownPassenger => Err(BookingError::UnknownPassenger {
                reference: passenger.to_string(),
            }),
        }
    }

    pub fn top_up(&mut self, passenger: PassengerId, amount: f64) -> Result<f64> {
        let passenger = self
            .passengers
            .get_mut(passenger.0)
            .ok_or_else(|| BookingError::UnknownPassenger {
                reference: passenger.to_string(),
            })?;
        passenger.deposit(amount)
    }

    /// Skips every enrollment check. Lets report tests hold refs that no
    /// longer resolve.
    #[cfg(test)]
    pub(crate) fn push_passenger_unchecked(&mut self, passenger: Passenger) -> PassengerId {
        self.passengers.push(passenger);
        PassengerId(self.passengers.len() - 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passenger_capacity(&self) -> usize {
        self.passenger_capacity
    }

    pub fn sign_up_order(&self) -> SignUpOrder {
        self.sign_up_order
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn enrolled_passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.0)
    }

    /// Every enrolled passenger carrying `number`, in enrollment order.
    pub fn passengers_numbered(&self, number: u32) -> impl Iterator<Item = &Passenger> {
        self.passengers
            .iter()
            .filter(move |p| p.passenger_number() == number)
    }

    pub fn passenger_id_of(&self, number: u32) -> Option<PassengerId> {
        self.passengers
            .iter()
            .position(|p| p.passenger_number() == number)
            .map(PassengerId)
    }

    pub fn activity(&self, at: ActivityRef) -> Option<&Activity> {
        self.destinations
            .get(at.destination)
            .and_then(|d| d.activities().get(at.activity))
    }

    pub fn find_destination_of(&self, at: ActivityRef) -> Option<&Destination> {
        self.destinations
            .get(at.destination)
            .filter(|d| at.activity < d.activities().len())
    }

    pub fn activity_ref(&self, destination: &str, activity: &str) -> Option<ActivityRef> {
        self.destinations
            .iter()
            .enumerate()
            .filter(|(_, d)| d.name() == destination)
            .find_map(|(d_idx, d)| d.position_of(activity).map(|a| ActivityRef::new(d_idx, a)))
    }

    /// First activity named `name` in itinerary order.
    pub fn find_activity(&self, name: &str) -> Option<ActivityRef> {
        self.destinations
            .iter()
            .enumerate()
            .find_map(|(d_idx, d)| d.position_of(name).map(|a| ActivityRef::new(d_idx, a)))
    }

    /// Every activity with its location, in itinerary order.
    pub fn activities(&self) -> impl Iterator<Item = (ActivityRef, &Destination, &Activity)> {
        self.destinations.iter().enumerate().flat_map(|(d_idx, d)| {
            d.activities()
                .iter()
                .enumerate()
                .map(move |(a_idx, a)| (ActivityRef::new(d_idx, a_idx), d, a))
        })
    }
}
