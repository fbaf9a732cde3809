//! Read-only projections of a [`TravelPackage`].
//!
//! Every projection is a pure function of the package's current state and
//! lists things in insertion order. Views render as plain text through
//! `Display`, or as JSON / CSV through [`render`].

pub mod views;

use self::views::UNKNOWN;
use crate::domain::ports::ReportStorage;
use crate::domain::TravelPackage;
use crate::utils::error::{BookingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use views::{
    format_amount, Availability, AvailableActivity, Itinerary, ItineraryActivity, ItineraryStop,
    PassengerDetail, PassengerDetails, Roster, RosterEntry, SignedUpActivity,
};

pub const PASSENGER_LIMIT_ADVISORY: &str = "Passenger limit reached. Cannot add more passengers.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// A projection that can be rendered in every [`ReportFormat`].
pub trait Report: Serialize + fmt::Display {
    /// File name without extension used when the report is stored.
    fn file_stem(&self) -> String;

    fn to_csv(&self) -> Result<String>;
}

pub fn render<R: Report>(report: &R, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        ReportFormat::Csv => report.to_csv(),
    }
}

const ITINERARY_HEADER: [&str; 5] = ["destination", "activity", "cost", "capacity", "description"];
const ROSTER_HEADER: [&str; 3] = ["package", "name", "passenger_number"];
const DETAIL_HEADER: [&str; 6] = [
    "passenger_number",
    "name",
    "balance",
    "activity",
    "destination",
    "price",
];
const AVAILABILITY_HEADER: [&str; 3] = ["activity", "destination", "remaining_capacity"];

// The header is written up front so a report with no rows is still a valid
// one-line CSV file.
fn rows_to_csv<R: Serialize>(header: &[&str], rows: impl IntoIterator<Item = R>) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| BookingError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

#[derive(Serialize)]
struct ItineraryRow<'a> {
    destination: &'a str,
    activity: &'a str,
    cost: f64,
    capacity: u32,
    description: &'a str,
}

#[derive(Serialize)]
struct RosterRow<'a> {
    package: &'a str,
    name: &'a str,
    passenger_number: u32,
}

#[derive(Serialize)]
struct DetailRow<'a> {
    passenger_number: u32,
    name: &'a str,
    balance: f64,
    activity: Option<&'a str>,
    destination: Option<&'a str>,
    price: Option<f64>,
}

impl Report for Itinerary {
    fn file_stem(&self) -> String {
        "itinerary".to_string()
    }

    fn to_csv(&self) -> Result<String> {
        rows_to_csv(&ITINERARY_HEADER, self.destinations.iter().flat_map(|stop| {
            stop.activities.iter().map(move |a| ItineraryRow {
                destination: &stop.name,
                activity: &a.name,
                cost: a.cost,
                capacity: a.capacity,
                description: &a.description,
            })
        }))
    }
}

impl Report for Roster {
    fn file_stem(&self) -> String {
        "roster".to_string()
    }

    fn to_csv(&self) -> Result<String> {
        rows_to_csv(&ROSTER_HEADER, self.passengers.iter().map(|p| RosterRow {
            package: &self.package,
            name: &p.name,
            passenger_number: p.passenger_number,
        }))
    }
}

impl Report for PassengerDetails {
    fn file_stem(&self) -> String {
        format!("passenger-{}", self.passenger_number)
    }

    // One row per signed-up activity; a passenger with none still gets a row.
    fn to_csv(&self) -> Result<String> {
        let mut rows = Vec::new();
        for detail in &self.matches {
            let base = DetailRow {
                passenger_number: detail.passenger_number,
                name: &detail.name,
                balance: detail.balance,
                activity: None,
                destination: None,
                price: None,
            };
            if detail.activities.is_empty() {
                rows.push(base);
                continue;
            }
            for activity in &detail.activities {
                rows.push(DetailRow {
                    activity: Some(activity.name.as_deref().unwrap_or(UNKNOWN)),
                    destination: activity.destination.as_deref(),
                    price: activity.price,
                    ..base
                });
            }
        }
        rows_to_csv(&DETAIL_HEADER, rows)
    }
}

impl Report for Availability {
    fn file_stem(&self) -> String {
        "availability".to_string()
    }

    fn to_csv(&self) -> Result<String> {
        rows_to_csv(&AVAILABILITY_HEADER, &self.activities)
    }
}

/// One report rendered in a given format.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub file_name: String,
    pub body: String,
}

pub struct Reporter<'a> {
    package: &'a TravelPackage,
}

impl<'a> Reporter<'a> {
    pub fn new(package: &'a TravelPackage) -> Self {
        Self { package }
    }

    pub fn itinerary(&self) -> Itinerary {
        Itinerary {
            package: self.package.name().to_string(),
            destinations: self
                .package
                .destinations()
                .iter()
                .map(|d| ItineraryStop {
                    name: d.name().to_string(),
                    activities: d
                        .activities()
                        .iter()
                        .map(|a| ItineraryActivity {
                            name: a.name().to_string(),
                            cost: a.cost(),
                            capacity: a.capacity(),
                            description: a.description().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn roster(&self) -> Roster {
        let passengers = self.package.enrolled_passengers();
        Roster {
            package: self.package.name().to_string(),
            capacity: self.package.passenger_capacity(),
            enrolled: passengers.len(),
            passengers: passengers
                .iter()
                .map(|p| RosterEntry {
                    name: p.name().to_string(),
                    passenger_number: p.passenger_number(),
                })
                .collect(),
        }
    }

    pub fn passenger_details(&self, passenger_number: u32) -> PassengerDetails {
        let matches = self
            .package
            .passengers_numbered(passenger_number)
            .map(|p| PassengerDetail {
                name: p.name().to_string(),
                passenger_number: p.passenger_number(),
                balance: p.balance(),
                activities: p
                    .signed_up_activities()
                    .iter()
                    .map(|at| {
                        let activity = self.package.activity(*at);
                        if activity.is_none() {
                            tracing::warn!(
                                "*{} holds a sign-up ({}, {}) outside {}",
                                p.passenger_number(),
                                at.destination,
                                at.activity,
                                self.package.name()
                            );
                        }
                        SignedUpActivity {
                            name: activity.map(|a| a.name().to_string()),
                            destination: self
                                .package
                                .find_destination_of(*at)
                                .map(|d| d.name().to_string()),
                            price: activity.map(|a| a.cost()),
                        }
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        if matches.is_empty() {
            tracing::debug!("No passenger numbered *{} in {}", passenger_number, self.package.name());
        }

        PassengerDetails {
            passenger_number,
            matches,
        }
    }

    pub fn availability(&self) -> Availability {
        Availability {
            package: self.package.name().to_string(),
            activities: self
                .package
                .activities()
                .filter(|(_, _, a)| a.is_available())
                .map(|(_, d, a)| AvailableActivity {
                    activity: a.name().to_string(),
                    destination: d.name().to_string(),
                    remaining_capacity: a.remaining_capacity(),
                })
                .collect(),
        }
    }

    /// Itinerary, roster, passenger detail and availability, in that order.
    pub fn render_all(
        &self,
        passenger_number: u32,
        format: ReportFormat,
    ) -> Result<Vec<RenderedReport>> {
        Ok(vec![
            rendered(&self.itinerary(), format)?,
            rendered(&self.roster(), format)?,
            rendered(&self.passenger_details(passenger_number), format)?,
            rendered(&self.availability(), format)?,
        ])
    }
}

fn rendered<R: Report>(report: &R, format: ReportFormat) -> Result<RenderedReport> {
    Ok(RenderedReport {
        file_name: format!("{}.{}", report.file_stem(), format.extension()),
        body: render(report, format)?,
    })
}

/// Writes every report through `storage`, returning the file names written.
pub fn store_reports<S: ReportStorage>(
    storage: &S,
    reports: &[RenderedReport],
) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        tracing::debug!("Writing {} ({} bytes)", report.file_name, report.body.len());
        storage.write_report(&report.file_name, report.body.as_bytes())?;
        written.push(report.file_name.clone());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, ActivityRef, Destination, Passenger, SignUpOrder, Tier};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn get_file(&self, name: &str) -> Option<String> {
            self.files
                .borrow()
                .get(name)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        }
    }

    impl ReportStorage for MockStorage {
        fn write_report(&self, name: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(name.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn package() -> TravelPackage {
        let mut package = TravelPackage::new("Short Trip", 4);
        package.add_destination(
            Destination::new("Gokarna")
                .with_activity(Activity::new("Boating", "Enjoy the waves", 50.0, 1))
                .with_activity(Activity::new("Horse Ride", "Enjoy the ride", 40.0, 15)),
        );
        let _ = package.add_passenger(Passenger::new("Maggie", 503, Tier::Premium));
        package
    }

    #[test]
    fn test_availability_hides_full_activities() {
        let mut package = package();
        let id = package.passenger_id_of(503).unwrap();
        let boating = package.find_activity("Boating").unwrap();
        package.sign_up(id, boating);

        let availability = Reporter::new(&package).availability();
        assert_eq!(availability.activities.len(), 1);
        assert_eq!(availability.activities[0].activity, "Horse Ride");
    }

    #[test]
    fn test_detail_lists_posted_price() {
        let mut package = package();
        let id = package.passenger_id_of(503).unwrap();
        let boating = package.find_activity("Boating").unwrap();
        package.sign_up(id, boating);

        let details = Reporter::new(&package).passenger_details(503);
        assert_eq!(details.matches.len(), 1);
        let entry = &details.matches[0].activities[0];
        assert_eq!(entry.name.as_deref(), Some("Boating"));
        assert_eq!(entry.destination.as_deref(), Some("Gokarna"));
        assert_eq!(entry.price, Some(50.0));
    }

    #[test]
    fn test_json_render() {
        let package = package();
        let body = render(&Reporter::new(&package).roster(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["package"], "Short Trip");
        assert_eq!(value["enrolled"], 1);
        assert_eq!(value["passengers"][0]["passenger_number"], 503);
    }

    #[test]
    fn test_csv_render() {
        let package = package();
        let body = render(&Reporter::new(&package).itinerary(), ReportFormat::Csv).unwrap();
        let mut lines = body.lines();
        assert_eq!(
            lines.next(),
            Some("destination,activity,cost,capacity,description")
        );
        assert_eq!(lines.next(), Some("Gokarna,Boating,50.0,1,Enjoy the waves"));
        assert_eq!(lines.next(), Some("Gokarna,Horse Ride,40.0,15,Enjoy the ride"));
    }

    #[test]
    fn test_detail_csv_keeps_passengers_without_activities() {
        let package = package();
        let body = render(
            &Reporter::new(&package).passenger_details(503),
            ReportFormat::Csv,
        )
        .unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("503,Maggie,0.0,"));
    }

    #[test]
    fn test_detail_keeps_sign_ups_that_do_not_resolve() {
        let mut package = package();
        let mut stray = Passenger::new("Sudheer", 501, Tier::Premium);
        let mut loose = Activity::new("Ghost Tour", "", 15.0, 3);
        for at in [ActivityRef::new(0, 0), ActivityRef::new(0, 9), ActivityRef::new(4, 0)] {
            stray.sign_up_for_activity(at, &mut loose, SignUpOrder::ChargeFirst);
        }
        package.push_passenger_unchecked(stray);

        let details = Reporter::new(&package).passenger_details(501);
        let activities = &details.matches[0].activities;
        assert_eq!(activities.len(), 3);
        assert_eq!(activities[0].name.as_deref(), Some("Boating"));
        assert_eq!(activities[1].name, None);
        assert_eq!(activities[1].destination, None);
        assert_eq!(activities[2].price, None);

        let text = details.to_string();
        assert_eq!(text.matches("Activity: <unknown>\n").count(), 2);
        assert_eq!(text.matches("Destination: <unknown>\n").count(), 2);
        assert_eq!(text.matches("Price: <unknown>\n").count(), 2);
        assert!(text.contains("      Activity: Boating\n         Destination: Gokarna\n"));

        let csv = render(&details, ReportFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 4);
        assert!(csv.contains("501,Sudheer,0.0,<unknown>,,\n"));
    }

    #[test]
    fn test_empty_csv_reports_keep_their_header() {
        let package = TravelPackage::new("Empty", 2);
        let reporter = Reporter::new(&package);

        let detail = render(&reporter.passenger_details(1), ReportFormat::Csv).unwrap();
        assert_eq!(detail, "passenger_number,name,balance,activity,destination,price\n");
        let roster = render(&reporter.roster(), ReportFormat::Csv).unwrap();
        assert_eq!(roster, "package,name,passenger_number\n");
        let itinerary = render(&reporter.itinerary(), ReportFormat::Csv).unwrap();
        assert_eq!(itinerary, "destination,activity,cost,capacity,description\n");
        let availability = render(&reporter.availability(), ReportFormat::Csv).unwrap();
        assert_eq!(availability, "activity,destination,remaining_capacity\n");
    }

    #[test]
    fn test_store_reports_uses_format_extension() {
        let package = package();
        let reports = Reporter::new(&package)
            .render_all(503, ReportFormat::Text)
            .unwrap();
        let storage = MockStorage::default();

        let written = store_reports(&storage, &reports).unwrap();

        assert_eq!(
            written,
            vec![
                "itinerary.txt",
                "roster.txt",
                "passenger-503.txt",
                "availability.txt"
            ]
        );
        let roster = storage.get_file("roster.txt").unwrap();
        assert!(roster.starts_with("Passenger List for Travel Package: Short Trip\n"));
    }
}
