use crate::core::{Enrollment, Passenger, SignUpOutcome, TravelPackage};
use crate::report::{RenderedReport, ReportFormat, Reporter, PASSENGER_LIMIT_ADVISORY};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// One sign-up requested by name, with what came of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRecord {
    pub passenger_number: u32,
    pub destination: String,
    pub activity: String,
    pub outcome: SignUpOutcome,
}

/// A package plus the history of how it was populated: rejected
/// enrollments and every name-addressed sign-up.
#[derive(Debug, Clone)]
pub struct BookingSession {
    package: TravelPackage,
    rejected_enrollments: usize,
    sign_ups: Vec<SignUpRecord>,
}

impl BookingSession {
    pub fn new(package: TravelPackage) -> Self {
        Self {
            package,
            rejected_enrollments: 0,
            sign_ups: Vec::new(),
        }
    }

    pub fn enroll(&mut self, passenger: Passenger) -> Enrollment {
        let enrollment = self.package.add_passenger(passenger);
        if enrollment == Enrollment::PackageFull {
            self.rejected_enrollments += 1;
        }
        enrollment
    }

    /// Signs up the first passenger numbered `passenger_number` for
    /// `activity` at `destination`.
    pub fn sign_up_by_name(
        &mut self,
        passenger_number: u32,
        destination: &str,
        activity: &str,
    ) -> SignUpOutcome {
        let outcome = match (
            self.package.passenger_id_of(passenger_number),
            self.package.activity_ref(destination, activity),
        ) {
            (None, _) => SignUpOutcome::UnknownPassenger,
            (_, None) => SignUpOutcome::NotMemberOfPackage,
            (Some(id), Some(at)) => self.package.sign_up(id, at),
        };

        self.sign_ups.push(SignUpRecord {
            passenger_number,
            destination: destination.to_string(),
            activity: activity.to_string(),
            outcome,
        });
        outcome
    }

    pub fn package(&self) -> &TravelPackage {
        &self.package
    }

    pub fn package_mut(&mut self) -> &mut TravelPackage {
        &mut self.package
    }

    pub fn rejected_enrollments(&self) -> usize {
        self.rejected_enrollments
    }

    pub fn sign_ups(&self) -> &[SignUpRecord] {
        &self.sign_ups
    }

    /// One advisory line per rejected enrollment.
    pub fn advisories(&self) -> impl Iterator<Item = &'static str> {
        std::iter::repeat(PASSENGER_LIMIT_ADVISORY).take(self.rejected_enrollments)
    }

    pub fn render(
        &self,
        passenger_number: u32,
        format: ReportFormat,
    ) -> Result<Vec<RenderedReport>> {
        Reporter::new(&self.package).render_all(passenger_number, format)
    }

    /// Advisories first, then the four reports, the way the batch run prints them.
    pub fn write_reports<W: Write>(
        &self,
        out: &mut W,
        passenger_number: u32,
        format: ReportFormat,
    ) -> Result<()> {
        for advisory in self.advisories() {
            writeln!(out, "{}", advisory)?;
        }
        for report in self.render(passenger_number, format)? {
            out.write_all(report.body.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}
