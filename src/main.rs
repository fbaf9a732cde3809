use clap::Parser;
use travel_booking::config::{check, demo, DEFAULT_PASSENGER_NUMBER};
use travel_booking::report::store_reports;
use travel_booking::utils::error::ErrorSeverity;
use travel_booking::utils::logger;
use travel_booking::{
    BookingError, BookingSession, CliConfig, LocalStorage, PackageFile, ReportFormat, SignUpOrder,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting travel-booking");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), BookingError> {
    check("Command line", config)?;

    let (session, passenger_number, format) = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading package from: {}", path);
            let mut file = PackageFile::from_file(path)?;
            if config.capacity_first {
                file.package.sign_up_order = Some(SignUpOrder::CapacityFirst);
                tracing::info!("🔧 Sign-up order overridden to capacity-first");
            }
            check("Package file", &file)?;

            let passenger_number = config
                .passenger
                .or(file.passenger_number())
                .unwrap_or(DEFAULT_PASSENGER_NUMBER);
            let format = config.format.or(file.report_format()).unwrap_or_default();
            (file.build()?, passenger_number, format)
        }
        None => {
            tracing::info!("No package file given, using the built-in demo package");
            let order = if config.capacity_first {
                SignUpOrder::CapacityFirst
            } else {
                SignUpOrder::ChargeFirst
            };
            (
                demo::its_vacation_time(order),
                config.passenger.unwrap_or(DEFAULT_PASSENGER_NUMBER),
                config.format.unwrap_or_default(),
            )
        }
    };

    emit(&session, passenger_number, format, config.output_path.as_deref())
}

fn emit(
    session: &BookingSession,
    passenger_number: u32,
    format: ReportFormat,
    output_path: Option<&str>,
) -> Result<(), BookingError> {
    match output_path {
        None => {
            let stdout = std::io::stdout();
            session.write_reports(&mut stdout.lock(), passenger_number, format)
        }
        Some(dir) => {
            for advisory in session.advisories() {
                println!("{}", advisory);
            }
            let storage = LocalStorage::new(dir);
            let reports = session.render(passenger_number, format)?;
            let written = store_reports(&storage, &reports)?;
            tracing::info!("✅ Wrote {} reports to {}", written.len(), dir);
            for name in written {
                println!("📁 {}", storage.base_path().join(name).display());
            }
            Ok(())
        }
    }
}
