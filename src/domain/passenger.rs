use crate::domain::activity::Activity;
use crate::domain::model::{ActivityRef, SignUpOrder, SignUpOutcome};
use crate::utils::error::Result;
use crate::utils::validation::validate_amount;
use serde::{Deserialize, Serialize};

pub const GOLD_PRICE_FACTOR: f64 = 0.9;

/// Pricing class of a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Standard,
    Gold,
    Premium,
}

impl Tier {
    /// What this tier actually pays for an activity posted at `cost`.
    pub fn effective_charge(&self, cost: f64) -> f64 {
        match self {
            Self::Standard => cost,
            Self::Gold => GOLD_PRICE_FACTOR * cost,
            Self::Premium => 0.0,
        }
    }

    pub fn requires_balance(&self) -> bool {
        !matches!(self, Self::Premium)
    }

    pub fn admits(&self, balance: f64, cost: f64) -> bool {
        !self.requires_balance() || balance >= self.effective_charge(cost)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Standard => "STANDARD",
            Self::Gold => "GOLD",
            Self::Premium => "PREMIUM",
        };
        f.write_str(label)
    }
}

/// A traveler with a pricing tier and a balance.
///
/// Signed-up activities are kept as references into the package the
/// passenger is enrolled in; the package owns the activities themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    name: String,
    passenger_number: u32,
    tier: Tier,
    balance: f64,
    signed_up_activities: Vec<ActivityRef>,
}

impl Passenger {
    pub fn new(name: impl Into<String>, passenger_number: u32, tier: Tier) -> Self {
        Self {
            name: name.into(),
            passenger_number,
            tier,
            balance: 0.0,
            signed_up_activities: Vec::new(),
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Result<Self> {
        validate_amount("passenger.balance", balance)?;
        self.balance = balance;
        Ok(self)
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        validate_amount("deposit.amount", amount)?;
        self.balance += amount;
        Ok(self.balance)
    }

    /// Runs the tier's admission rule against `activity`, which lives at `at`.
    ///
    /// A refused admission never mutates anything. What happens when the
    /// activity turns out to be full depends on `order`. Only the owning
    /// package calls this, so `at` always locates `activity`.
    pub(crate) fn sign_up_for_activity(
        &mut self,
        at: ActivityRef,
        activity: &mut Activity,
        order: SignUpOrder,
    ) -> SignUpOutcome {
        if !self.tier.admits(self.balance, activity.cost()) {
            return SignUpOutcome::InsufficientFunds;
        }
        let charge = self.tier.effective_charge(activity.cost());

        match order {
            SignUpOrder::ChargeFirst => {
                self.charge(charge, at);
                if activity.sign_up() {
                    SignUpOutcome::Admitted
                } else {
                    SignUpOutcome::ActivityFull
                }
            }
            SignUpOrder::CapacityFirst => {
                if !activity.sign_up() {
                    return SignUpOutcome::ActivityFull;
                }
                self.charge(charge, at);
                SignUpOutcome::Admitted
            }
        }
    }

    fn charge(&mut self, amount: f64, at: ActivityRef) {
        if amount > 0.0 {
            self.balance -= amount;
        }
        self.signed_up_activities.push(at);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passenger_number(&self) -> u32 {
        self.passenger_number
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn signed_up_activities(&self) -> &[ActivityRef] {
        &self.signed_up_activities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: ActivityRef = ActivityRef::new(0, 0);

    fn hiking() -> Activity {
        Activity::new("Hiking", "Discover scenic trails", 30.0, 25)
    }

    #[test]
    fn test_tier_pricing() {
        assert_eq!(Tier::Standard.effective_charge(50.0), 50.0);
        assert!((Tier::Gold.effective_charge(30.0) - 27.0).abs() < 1e-9);
        assert_eq!(Tier::Premium.effective_charge(60.0), 0.0);
        assert!(Tier::Standard.requires_balance());
        assert!(Tier::Gold.requires_balance());
        assert!(!Tier::Premium.requires_balance());
    }

    #[test]
    fn test_standard_without_balance_is_refused() {
        let mut passenger = Passenger::new("Sudheer", 501, Tier::Standard);
        let mut activity = hiking();

        let outcome = passenger.sign_up_for_activity(AT, &mut activity, SignUpOrder::ChargeFirst);

        assert_eq!(outcome, SignUpOutcome::InsufficientFunds);
        assert_eq!(passenger.balance(), 0.0);
        assert!(passenger.signed_up_activities().is_empty());
        assert_eq!(activity.remaining_capacity(), 25);
    }

    #[test]
    fn test_standard_pays_full_price_with_exact_balance() {
        let mut passenger = Passenger::new("Sudheer", 501, Tier::Standard)
            .with_balance(30.0)
            .unwrap();
        let mut activity = hiking();

        let outcome = passenger.sign_up_for_activity(AT, &mut activity, SignUpOrder::ChargeFirst);

        assert_eq!(outcome, SignUpOutcome::Admitted);
        assert_eq!(passenger.balance(), 0.0);
        assert_eq!(passenger.signed_up_activities(), &[AT]);
    }

    #[test]
    fn test_gold_pays_discounted_price() {
        let mut passenger = Passenger::new("Vijaya Laxmi", 502, Tier::Gold)
            .with_balance(50.0)
            .unwrap();
        let mut activity = hiking();

        let outcome = passenger.sign_up_for_activity(AT, &mut activity, SignUpOrder::ChargeFirst);

        assert_eq!(outcome, SignUpOutcome::Admitted);
        assert!((passenger.balance() - 23.0).abs() < 1e-9);
        assert_eq!(activity.remaining_capacity(), 24);
    }

    #[test]
    fn test_premium_rides_free_with_zero_balance() {
        let mut passenger = Passenger::new("Maggie", 503, Tier::Premium);
        let mut activity = hiking();

        let outcome = passenger.sign_up_for_activity(AT, &mut activity, SignUpOrder::ChargeFirst);

        assert_eq!(outcome, SignUpOutcome::Admitted);
        assert_eq!(passenger.balance(), 0.0);
        assert_eq!(passenger.signed_up_activities().len(), 1);
    }

    #[test]
    fn test_charge_first_bills_even_when_full() {
        let mut passenger = Passenger::new("Sudheer", 501, Tier::Standard)
            .with_balance(100.0)
            .unwrap();
        let mut activity = Activity::new("Beaches", "", 60.0, 0);

        let outcome = passenger.sign_up_for_activity(AT, &mut activity, SignUpOrder::ChargeFirst);

        assert_eq!(outcome, SignUpOutcome::ActivityFull);
        assert_eq!(passenger.balance(), 40.0);
        assert_eq!(passenger.signed_up_activities(), &[AT]);
        assert_eq!(activity.remaining_capacity(), 0);
    }

    #[test]
    fn test_capacity_first_leaves_passenger_untouched_when_full() {
        let mut passenger = Passenger::new("Sudheer", 501, Tier::Standard)
            .with_balance(100.0)
            .unwrap();
        let mut activity = Activity::new("Beaches", "", 60.0, 0);

        let outcome =
            passenger.sign_up_for_activity(AT, &mut activity, SignUpOrder::CapacityFirst);

        assert_eq!(outcome, SignUpOutcome::ActivityFull);
        assert_eq!(passenger.balance(), 100.0);
        assert!(passenger.signed_up_activities().is_empty());
    }

    #[test]
    fn test_deposit_raises_balance() {
        let mut passenger = Passenger::new("Sudheer", 501, Tier::Standard);
        assert_eq!(passenger.deposit(25.5).unwrap(), 25.5);
        assert_eq!(passenger.deposit(4.5).unwrap(), 30.0);
    }

    #[test]
    fn test_deposit_rejects_negative_and_non_finite_amounts() {
        let mut passenger = Passenger::new("Sudheer", 501, Tier::Standard)
            .with_balance(10.0)
            .unwrap();

        assert!(passenger.deposit(-100.0).is_err());
        assert!(passenger.deposit(f64::NAN).is_err());
        assert!(passenger.deposit(f64::INFINITY).is_err());
        assert_eq!(passenger.balance(), 10.0);
    }

    #[test]
    fn test_opening_balance_is_validated() {
        assert!(Passenger::new("A", 1, Tier::Gold).with_balance(-0.5).is_err());
        assert!(Passenger::new("A", 1, Tier::Gold).with_balance(f64::NAN).is_err());
        let passenger = Passenger::new("A", 1, Tier::Gold).with_balance(0.0).unwrap();
        assert_eq!(passenger.balance(), 0.0);
    }
}
