use serde::Serialize;
use std::fmt;

pub(crate) const INDENT: &str = "   ";
pub(crate) const UNKNOWN: &str = "<unknown>";

/// Renders an amount the way the reports always have: integral values keep
/// a trailing `.0` (`Rs.50.0`).
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub package: String,
    pub destinations: Vec<ItineraryStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryStop {
    pub name: String,
    pub activities: Vec<ItineraryActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryActivity {
    pub name: String,
    pub cost: f64,
    pub capacity: u32,
    pub description: String,
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Travel Package: {}", self.package)?;
        for stop in &self.destinations {
            writeln!(f, "Destination: {}", stop.name)?;
            for activity in &stop.activities {
                writeln!(f, "{INDENT}Activity: {}", activity.name)?;
                writeln!(f, "{INDENT}{INDENT}Cost: Rs.{}", format_amount(activity.cost))?;
                writeln!(f, "{INDENT}{INDENT}Capacity: {}", activity.capacity)?;
                writeln!(f, "{INDENT}{INDENT}Description: {}", activity.description)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    pub package: String,
    pub capacity: usize,
    pub enrolled: usize,
    pub passengers: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub passenger_number: u32,
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Passenger List for Travel Package: {}", self.package)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Number of passengers enrolled: {}", self.enrolled)?;
        for entry in &self.passengers {
            writeln!(
                f,
                "{INDENT}Passenger: {} (*{})",
                entry.name, entry.passenger_number
            )?;
        }
        Ok(())
    }
}

/// Every passenger carrying the requested number. Empty when nobody matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerDetails {
    pub passenger_number: u32,
    pub matches: Vec<PassengerDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerDetail {
    pub name: String,
    pub passenger_number: u32,
    pub balance: f64,
    pub activities: Vec<SignedUpActivity>,
}

/// One entry per sign-up reference the passenger holds. Fields are `None`
/// when the reference does not resolve inside the package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedUpActivity {
    pub name: Option<String>,
    pub destination: Option<String>,
    /// Posted cost, not what the passenger's tier paid.
    pub price: Option<f64>,
}

impl fmt::Display for PassengerDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Details for Passenger *{}", self.passenger_number)?;
        for detail in &self.matches {
            writeln!(f, "{INDENT}Name: {}", detail.name)?;
            writeln!(f, "{INDENT}Passenger Number: {}", detail.passenger_number)?;
            writeln!(f, "{INDENT}Balance: Rs.{}", format_amount(detail.balance))?;
            writeln!(f, "{INDENT}Signed Up Activities:")?;
            for activity in &detail.activities {
                writeln!(
                    f,
                    "{INDENT}{INDENT}Activity: {}",
                    activity.name.as_deref().unwrap_or(UNKNOWN)
                )?;
                writeln!(
                    f,
                    "{INDENT}{INDENT}{INDENT}Destination: {}",
                    activity.destination.as_deref().unwrap_or(UNKNOWN)
                )?;
                match activity.price {
                    Some(price) => writeln!(
                        f,
                        "{INDENT}{INDENT}{INDENT}Price: Rs.{}",
                        format_amount(price)
                    )?,
                    None => writeln!(f, "{INDENT}{INDENT}{INDENT}Price: {UNKNOWN}")?,
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Availability {
    pub package: String,
    pub activities: Vec<AvailableActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableActivity {
    pub activity: String,
    pub destination: String,
    pub remaining_capacity: u32,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Activities for Travel Package: {}", self.package)?;
        for entry in &self.activities {
            writeln!(
                f,
                "{INDENT}Activity: {} at {}",
                entry.activity, entry.destination
            )?;
            writeln!(
                f,
                "{INDENT}{INDENT}Remaining Capacity: {}",
                entry.remaining_capacity
            )?;
        }
        Ok(())
    }
}
