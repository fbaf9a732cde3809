use crate::core::session::BookingSession;
use crate::core::{Activity, Destination, Passenger, SignUpOrder, Tier, TravelPackage};
use crate::report::ReportFormat;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{
    validate_amount, validate_non_empty_string, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageFile {
    pub package: PackageSection,
    #[serde(default)]
    pub destinations: Vec<DestinationSection>,
    #[serde(default)]
    pub passengers: Vec<PassengerSection>,
    #[serde(default)]
    pub sign_ups: Vec<SignUpSection>,
    pub report: Option<ReportSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    pub name: String,
    pub passenger_capacity: usize,
    pub sign_up_order: Option<SignUpOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSection {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<ActivitySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySection {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: f64,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerSection {
    pub name: String,
    pub number: u32,
    pub tier: Tier,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpSection {
    pub passenger: u32,
    pub destination: String,
    pub activity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub passenger_number: Option<u32>,
    pub format: Option<ReportFormat>,
}

impl PackageFile {
    /// 從 TOML 檔案載入套裝行程
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PACKAGE_NAME})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("package.name", &self.package.name)?;
        validate_positive_number("package.passenger_capacity", self.package.passenger_capacity, 1)?;

        for (d_idx, destination) in self.destinations.iter().enumerate() {
            validate_non_empty_string(&format!("destinations[{}].name", d_idx), &destination.name)?;
            for (a_idx, activity) in destination.activities.iter().enumerate() {
                let field = format!("destinations[{}].activities[{}]", d_idx, a_idx);
                validate_non_empty_string(&format!("{}.name", field), &activity.name)?;
                validate_amount(&format!("{}.cost", field), activity.cost)?;
            }
        }

        let mut numbers = HashSet::new();
        for (p_idx, passenger) in self.passengers.iter().enumerate() {
            validate_non_empty_string(&format!("passengers[{}].name", p_idx), &passenger.name)?;
            validate_amount(&format!("passengers[{}].balance", p_idx), passenger.balance)?;
            numbers.insert(passenger.number);
        }

        for (s_idx, sign_up) in self.sign_ups.iter().enumerate() {
            if !numbers.contains(&sign_up.passenger) {
                return Err(BookingError::ValidationError {
                    field: format!("sign_ups[{}].passenger", s_idx),
                    value: sign_up.passenger.to_string(),
                    reason: "No passenger with this number is declared".to_string(),
                });
            }
            let offered = self
                .destinations
                .iter()
                .filter(|d| d.name == sign_up.destination)
                .any(|d| d.activities.iter().any(|a| a.name == sign_up.activity));
            if !offered {
                return Err(BookingError::UnknownActivity {
                    destination: sign_up.destination.clone(),
                    activity: sign_up.activity.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn sign_up_order(&self) -> SignUpOrder {
        self.package.sign_up_order.unwrap_or_default()
    }

    pub fn passenger_number(&self) -> Option<u32> {
        self.report.as_ref().and_then(|r| r.passenger_number)
    }

    pub fn report_format(&self) -> Option<ReportFormat> {
        self.report.as_ref().and_then(|r| r.format)
    }

    /// Builds the package, enrolls passengers in file order, then applies
    /// sign-ups in file order. Refused sign-ups are kept in the session log.
    pub fn build(&self) -> Result<BookingSession> {
        let mut package = TravelPackage::new(&self.package.name, self.package.passenger_capacity)
            .with_sign_up_order(self.sign_up_order());

        for section in &self.destinations {
            let mut destination = Destination::new(&section.name);
            for activity in &section.activities {
                destination.add_activity(Activity::new(
                    &activity.name,
                    &activity.description,
                    activity.cost,
                    activity.capacity,
                ));
            }
            package.add_destination(destination);
        }

        let mut session = BookingSession::new(package);
        for section in &self.passengers {
            let _ = session.enroll(
                Passenger::new(&section.name, section.number, section.tier)
                    .with_balance(section.balance)?,
            );
        }

        for sign_up in &self.sign_ups {
            let outcome =
                session.sign_up_by_name(sign_up.passenger, &sign_up.destination, &sign_up.activity);
            if !outcome.is_admitted() {
                tracing::warn!(
                    "Sign-up of *{} for {} at {} was not admitted: {:?}",
                    sign_up.passenger,
                    sign_up.activity,
                    sign_up.destination,
                    outcome
                );
            }
        }

        tracing::info!(
            "Loaded package '{}' with {} destinations, {} passengers, {} sign-ups",
            self.package.name,
            self.destinations.len(),
            session.package().enrolled_passengers().len(),
            self.sign_ups.len()
        );
        Ok(session)
    }
}

impl Validate for PackageFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
