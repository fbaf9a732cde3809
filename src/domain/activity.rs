use serde::{Deserialize, Serialize};

/// A priced, capacity-limited unit of participation offered at a destination.
///
/// Everything except `remaining_capacity` is fixed at construction, and
/// `remaining_capacity` only ever goes down through [`Activity::sign_up`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    name: String,
    description: String,
    cost: f64,
    capacity: u32,
    remaining_capacity: u32,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
        capacity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cost,
            capacity,
            remaining_capacity: capacity,
        }
    }

    /// Takes one seat. Returns `false` without touching state when the
    /// activity is already full.
    pub fn sign_up(&mut self) -> bool {
        if self.remaining_capacity > 0 {
            self.remaining_capacity -= 1;
            true
        } else {
            false
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.remaining_capacity
    }

    pub fn is_available(&self) -> bool {
        self.remaining_capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activity_starts_at_full_capacity() {
        let activity = Activity::new("Boating", "Enjoy the waves", 50.0, 20);
        assert_eq!(activity.capacity(), 20);
        assert_eq!(activity.remaining_capacity(), 20);
        assert!(activity.is_available());
    }

    #[test]
    fn test_sign_up_consumes_one_seat_per_call() {
        let mut activity = Activity::new("Beaches", "Enjoy the vibe", 60.0, 2);
        assert!(activity.sign_up());
        assert!(activity.sign_up());
        assert_eq!(activity.remaining_capacity(), 0);
        assert_eq!(activity.capacity(), 2);
    }

    #[test]
    fn test_sign_up_on_full_activity_is_refused() {
        let mut activity = Activity::new("Beaches", "Enjoy the vibe", 60.0, 1);
        assert!(activity.sign_up());
        assert!(!activity.sign_up());
        assert_eq!(activity.remaining_capacity(), 0);
        assert!(!activity.is_available());
    }

    #[test]
    fn test_zero_capacity_activity_never_admits() {
        let mut activity = Activity::new("Closed", "", 10.0, 0);
        assert!(!activity.sign_up());
        assert_eq!(activity.remaining_capacity(), 0);
    }
}
