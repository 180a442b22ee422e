//! Flood SOS CLI
//!
//! Sends SOS requests and help offers to the coordination backend and shows
//! relief camp and district hazard information.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flood_sos::{
    error::Result,
    models::{
        Config, EmergencyReport, EmergencyType, HazardFilter, HelpOffer, OfferField, ReportField,
        RequestStatus, WaterLevel, gps_location_from,
    },
    pipeline,
};

/// Flood SOS - emergency intake for flood and landslide relief
#[derive(Parser, Debug)]
#[command(
    name = "flood-sos",
    version,
    about = "Flood & landslide SOS intake client"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "flood-sos.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send an emergency (SOS) request
    Sos(SosArgs),

    /// Register an offer of help
    Offer(OfferArgs),

    /// List relief camps
    Camps {
        /// Only camps in this district
        #[arg(long)]
        district: Option<String>,

        /// Fetch the list from the backend instead of the reference data
        #[arg(long)]
        live: bool,
    },

    /// List district flood and landslide alerts
    Hazards {
        /// all, flood or landslide
        #[arg(long, default_value = "all")]
        filter: HazardFilter,
    },

    /// List SOS requests stored by the backend, newest first
    Requests {
        /// Only requests from this district
        #[arg(long)]
        district: Option<String>,

        /// new, verified, in_progress, resolved or dismissed
        #[arg(long)]
        status: Option<RequestStatus>,
    },

    /// List known districts
    Districts,

    /// Check that the backend is reachable
    Health,

    /// Validate configuration and reference data
    Validate,
}

#[derive(clap::Args, Debug)]
struct SosArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Phone number
    #[arg(long)]
    phone: String,

    #[arg(long)]
    alt_phone: Option<String>,

    /// Address or area name
    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    landmark: Option<String>,

    #[arg(long)]
    district: Option<String>,

    /// Latitude of the GPS fix
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the GPS fix
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// none, ankle, knee, waist, chest or roof
    #[arg(long)]
    water_level: Option<WaterLevel>,

    /// How many hours you can stay safely
    #[arg(long)]
    safe_hours: Option<String>,

    /// Ground=0, 1st=1
    #[arg(long)]
    floor_level: Option<String>,

    /// Any other important details
    #[arg(long)]
    info: Option<String>,

    #[arg(long)]
    food: bool,

    #[arg(long)]
    water: bool,

    #[arg(long)]
    power: bool,

    /// Phone battery percentage
    #[arg(long)]
    battery: Option<String>,

    /// trapped_by_flood, evacuation_needed, medical_emergency,
    /// landslide_risk, landslide_occurred or other
    #[arg(long)]
    emergency_type: Option<EmergencyType>,

    /// Number of people
    #[arg(long)]
    people: Option<String>,

    #[arg(long)]
    children: bool,

    #[arg(long)]
    elderly: bool,

    #[arg(long)]
    disabled: bool,

    #[arg(long)]
    medical: bool,

    /// Print the payload instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl SosArgs {
    fn into_fields(self) -> Vec<ReportField> {
        let mut fields = vec![
            ReportField::FullName(self.name),
            ReportField::PhoneNumber(self.phone),
            ReportField::WaterLevel(self.water_level),
            ReportField::EmergencyType(self.emergency_type),
            ReportField::NeedsFood(self.food),
            ReportField::NeedsWater(self.water),
            ReportField::NeedsPower(self.power),
            ReportField::HasChildren(self.children),
            ReportField::HasElderly(self.elderly),
            ReportField::HasDisabled(self.disabled),
            ReportField::HasMedical(self.medical),
        ];

        let text_fields: [(Option<String>, fn(String) -> ReportField); 9] = [
            (self.alt_phone, ReportField::AlternatePhone),
            (self.address, ReportField::Address),
            (self.landmark, ReportField::Landmark),
            (self.district, ReportField::District),
            (self.safe_hours, ReportField::SafeHours),
            (self.floor_level, ReportField::FloorLevel),
            (self.info, ReportField::AdditionalInfo),
            (self.battery, ReportField::PhoneBatteryPercent),
            (self.people, ReportField::NumberOfPeople),
        ];
        fields.extend(
            text_fields
                .into_iter()
                .filter_map(|(value, field)| value.map(field)),
        );

        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            fields.push(ReportField::GpsLocation(Some(gps_location_from(lat, lon))));
        }
        fields
    }
}

#[derive(clap::Args, Debug)]
struct OfferArgs {
    /// Your name or organisation
    #[arg(long)]
    name: String,

    /// Contact number
    #[arg(long)]
    phone: String,

    #[arg(long)]
    district: String,

    /// What you can provide
    #[arg(long)]
    details: String,

    /// Preferred districts, camps or GN divisions
    #[arg(long)]
    areas: Option<String>,

    /// Print the payload instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl OfferArgs {
    fn into_fields(self) -> Vec<OfferField> {
        vec![
            OfferField::HelperName(self.name),
            OfferField::HelperPhone(self.phone),
            OfferField::HelperDistrict(self.district),
            OfferField::SupportDetails(self.details),
            OfferField::PreferredAreas(self.areas.unwrap_or_default()),
        ]
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        log::debug!("No config at {}, using defaults", cli.config.display());
        Config::default()
    };
    config.apply_env();

    match cli.command {
        Command::Sos(args) => {
            if let Some(district) = &args.district {
                pipeline::check_district(district);
            }
            let dry_run = args.dry_run;
            pipeline::run_intake::<EmergencyReport>(&config, args.into_fields(), dry_run).await?;
        }

        Command::Offer(args) => {
            pipeline::check_district(&args.district);
            let dry_run = args.dry_run;
            pipeline::run_intake::<HelpOffer>(&config, args.into_fields(), dry_run).await?;
        }

        Command::Camps { district, live } => {
            pipeline::run_camps(&config, district.as_deref(), live).await?;
        }

        Command::Hazards { filter } => pipeline::run_hazards(&config, filter),

        Command::Requests { district, status } => {
            pipeline::run_requests(&config, district.as_deref(), status).await?;
        }

        Command::Districts => pipeline::run_districts(),

        Command::Health => pipeline::run_health(&config).await?,

        Command::Validate => {
            pipeline::run_validate(&config)?;
            log::info!("All validations passed!");
        }
    }

    Ok(())
}
