use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitals_core::report::{GAUGE_MAX_BMI, GAUGE_MIN_BMI};
use vitals_core::*;

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Personal BMI and body measurement tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show BMI, category and target for the profile or given measurements (default)
    Bmi {
        #[command(flatten)]
        measurements: MeasurementArgs,
    },

    /// Show or edit the saved profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Log the current profile's BMI to history
    Log,

    /// Show logged measurements, newest first, and the trend
    History {
        /// Number of records to list
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Track today's water intake
    Water {
        #[command(subcommand)]
        action: Option<WaterAction>,
    },

    /// Print a shareable summary of the current result
    Share,

    /// Show the nutrition guide
    Nutrition,

    /// Delete the saved profile and all history
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Args, Default)]
struct MeasurementArgs {
    /// Height in centimeters
    #[arg(long, conflicts_with_all = ["feet", "inches"])]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long, conflicts_with = "pounds")]
    weight: Option<f64>,

    /// Height, feet part
    #[arg(long)]
    feet: Option<f64>,

    /// Height, inches part
    #[arg(long)]
    inches: Option<f64>,

    /// Weight in pounds
    #[arg(long)]
    pounds: Option<f64>,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the saved profile (default)
    Show,

    /// Update profile fields and save
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<i32>,

        /// male, female or other
        #[arg(long)]
        gender: Option<Gender>,

        /// Display units: metric or imperial
        #[arg(long)]
        units: Option<UnitSystem>,

        #[command(flatten)]
        measurements: MeasurementArgs,
    },
}

#[derive(Subcommand)]
enum WaterAction {
    /// Show today's count (default)
    Show,

    /// Add glasses (negative to remove)
    Add {
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        glasses: i64,
    },

    /// Set today's count
    Set { glasses: u32 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    vitals_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let mut gateway = VitalsGateway::new(FileStore::new(&data_dir));
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Some(Commands::Bmi { measurements }) => cmd_bmi(&gateway, &measurements),
        Some(Commands::Profile { action }) => match action {
            Some(ProfileAction::Set {
                name,
                age,
                gender,
                units,
                measurements,
            }) => cmd_profile_set(&mut gateway, name, age, gender, units, &measurements),
            Some(ProfileAction::Show) | None => cmd_profile_show(&gateway),
        },
        Some(Commands::Log) => cmd_log(&mut gateway),
        Some(Commands::History { limit }) => cmd_history(&gateway, limit),
        Some(Commands::Water { action }) => cmd_water(&mut gateway, action, &config),
        Some(Commands::Share) => cmd_share(&gateway),
        Some(Commands::Nutrition) => cmd_nutrition(),
        Some(Commands::Reset { yes }) => cmd_reset(&mut gateway, yes),
        None => cmd_bmi(&gateway, &MeasurementArgs::default()),
    }
}

/// Overlay command-line measurements onto a profile.
///
/// Imperial arguments are converted as a set, with unspecified parts
/// taken from the profile's current imperial view. Metric arguments are
/// applied last.
fn apply_measurements(profile: &mut UserProfile, args: &MeasurementArgs) {
    if args.feet.is_some() || args.inches.is_some() || args.pounds.is_some() {
        let current = profile.imperial();
        profile.apply_imperial(
            args.feet.unwrap_or(current.feet),
            args.inches.unwrap_or(current.inches),
            args.pounds.unwrap_or(current.pounds),
        );
    }
    if let Some(height) = args.height {
        profile.height = height;
    }
    if let Some(weight) = args.weight {
        profile.weight = weight;
    }
}

fn cmd_bmi<S: KeyValueStore>(gateway: &VitalsGateway<S>, args: &MeasurementArgs) -> Result<()> {
    let mut profile = gateway.profile_or_default();
    apply_measurements(&mut profile, args);

    if let Err(errors) = profile.validate() {
        // Shown, but the result is still printed
        eprintln!("! {}", errors);
    }

    let bmi = profile.bmi();
    let category = category_of(bmi);
    let target = profile.weight_target();

    println!();
    println!("  BMI {:.1}  {}", bmi, category);
    println!("  {}", gauge_bar(bmi, 40));
    println!();
    println!("  Height: {}", format_height(&profile));
    println!("  Weight: {}", format_weight(&profile, profile.weight));
    println!(
        "  Target: {} ({} {})",
        format_weight(&profile, target.target_weight),
        target.action,
        format_weight(&profile, target.difference)
    );
    println!();
    for tip in tips_for(category) {
        println!("  • {}", tip);
    }
    println!();
    Ok(())
}

fn cmd_profile_show<S: KeyValueStore>(gateway: &VitalsGateway<S>) -> Result<()> {
    let (profile, saved) = match gateway.get_profile() {
        Some(profile) => (profile, true),
        None => (default_profile(), false),
    };

    if !saved {
        println!("(no saved profile, showing defaults)");
    }
    println!("Name:   {}", profile.name);
    println!("Age:    {}", profile.age);
    println!("Gender: {}", profile.gender);
    println!("Height: {}", format_height(&profile));
    println!("Weight: {}", format_weight(&profile, profile.weight));
    println!("Units:  {}", profile.unit_system);
    Ok(())
}

fn cmd_profile_set<S: KeyValueStore>(
    gateway: &mut VitalsGateway<S>,
    name: Option<String>,
    age: Option<i32>,
    gender: Option<Gender>,
    units: Option<UnitSystem>,
    measurements: &MeasurementArgs,
) -> Result<()> {
    let mut profile = gateway.profile_or_default();
    if let Some(name) = name {
        profile.name = name;
    }
    if let Some(age) = age {
        profile.age = age;
    }
    if let Some(gender) = gender {
        profile.gender = gender;
    }
    if let Some(units) = units {
        profile.unit_system = units;
    }
    apply_measurements(&mut profile, measurements);

    profile.validate()?;
    gateway.save_profile(&profile)?;

    println!("✓ Profile saved");
    Ok(())
}

fn cmd_log<S: KeyValueStore>(gateway: &mut VitalsGateway<S>) -> Result<()> {
    let profile = gateway.profile_or_default();
    profile.validate()?;

    let record = HistoryRecord::capture(&profile, Utc::now());
    gateway.save_history_record(&record)?;

    println!(
        "✓ Logged BMI {:.1} ({}) at {}",
        record.bmi,
        record.category,
        format_weight(&profile, record.weight)
    );
    Ok(())
}

fn cmd_history<S: KeyValueStore>(gateway: &VitalsGateway<S>, limit: usize) -> Result<()> {
    let history = gateway.get_history();
    if history.is_empty() {
        println!("No history logged yet.");
        return Ok(());
    }

    let profile = gateway.profile_or_default();
    for record in history.iter().take(limit) {
        println!(
            "{}  BMI {:>4.1}  {:<11}  {}",
            record.date.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            record.bmi,
            record.category.label(),
            format_weight(&profile, record.weight)
        );
    }

    println!();
    println!("Trend ({} records, oldest first):", history.len());
    for point in trend_points(&history) {
        println!("  {:<7} {:>4.1} {}", point.label, point.bmi, gauge_bar(point.bmi, 30));
    }
    Ok(())
}

fn cmd_water<S: KeyValueStore>(
    gateway: &mut VitalsGateway<S>,
    action: Option<WaterAction>,
    config: &Config,
) -> Result<()> {
    let today = Local::now().date_naive();
    let count = match action {
        Some(WaterAction::Add { glasses }) => gateway.add_water(today, glasses)?,
        Some(WaterAction::Set { glasses }) => gateway.set_water_count(today, glasses)?,
        Some(WaterAction::Show) | None => gateway.water_count(today),
    };

    let goal = config.water.daily_goal;
    let filled = count.min(goal) as usize;
    println!(
        "Water: {}/{} glasses  {}{}",
        count,
        goal,
        "●".repeat(filled),
        "○".repeat(goal as usize - filled)
    );
    if count >= goal {
        println!("✓ Daily goal reached");
    }
    Ok(())
}

fn cmd_share<S: KeyValueStore>(gateway: &VitalsGateway<S>) -> Result<()> {
    let profile = gateway.profile_or_default();
    println!("{}", ShareSummary::for_profile(&profile, Utc::now()));
    Ok(())
}

fn cmd_nutrition() -> Result<()> {
    for (title, foods) in NUTRITION_GUIDE.groups() {
        println!("{}: {}", title, foods.join(", "));
    }
    Ok(())
}

fn cmd_reset<S: KeyValueStore>(gateway: &mut VitalsGateway<S>, yes: bool) -> Result<()> {
    if !yes {
        println!("This deletes your profile and all history. Re-run with --yes to confirm.");
        return Ok(());
    }

    gateway.clear_all_data()?;
    println!("✓ All data cleared");
    Ok(())
}

fn gauge_bar(bmi: f64, width: usize) -> String {
    let position = ((gauge_percent(bmi) / 100.0) * (width - 1) as f64).round() as usize;
    let mut bar: Vec<char> = vec!['─'; width];
    bar[position.min(width - 1)] = '▲';
    let bar: String = bar.into_iter().collect();
    format!("{} {} {}", GAUGE_MIN_BMI, bar, GAUGE_MAX_BMI)
}

fn format_height(profile: &UserProfile) -> String {
    match profile.unit_system {
        UnitSystem::Metric => format!("{} cm", profile.height),
        UnitSystem::Imperial => {
            let imperial = profile.imperial();
            format!("{}' {}\"", imperial.feet, imperial.inches)
        }
    }
}

fn format_weight(profile: &UserProfile, kg: f64) -> String {
    match profile.unit_system {
        UnitSystem::Metric => format!("{:.1} kg", kg),
        UnitSystem::Imperial => format!("{} lb", metric_to_imperial(0.0, kg).pounds),
    }
}
