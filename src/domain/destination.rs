use crate::domain::activity::Activity;
use serde::{Deserialize, Serialize};

/// A named stop owning its activities in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    name: String,
    activities: Vec<Activity>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Appends without a duplicate check. Returns the activity's index.
    pub fn add_activity(&mut self, activity: Activity) -> usize {
        self.activities.push(activity);
        self.activities.len() - 1
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.add_activity(activity);
        self
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position_of(&self, activity_name: &str) -> Option<usize> {
        self.activities
            .iter()
            .position(|activity| activity.name() == activity_name)
    }

    pub(crate) fn activity_mut(&mut self, index: usize) -> Option<&mut Activity> {
        self.activities.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_keep_insertion_order() {
        let destination = Destination::new("Gokarna")
            .with_activity(Activity::new("Boating", "Enjoy the waves", 50.0, 20))
            .with_activity(Activity::new("Horse Ride", "Enjoy the ride", 40.0, 15));

        let names: Vec<&str> = destination.activities().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Boating", "Horse Ride"]);
    }

    #[test]
    fn test_duplicate_names_are_accepted() {
        let mut destination = Destination::new("Gokarna");
        assert_eq!(destination.add_activity(Activity::new("Boating", "", 50.0, 20)), 0);
        assert_eq!(destination.add_activity(Activity::new("Boating", "", 55.0, 5)), 1);
        assert_eq!(destination.activities().len(), 2);
        assert_eq!(destination.position_of("Boating"), Some(0));
        assert_eq!(destination.position_of("Surfing"), None);
    }
}
