//! The command line interface for the estimator.
use crate::estimate::{CostedMaterial, EstimateReport};
use crate::house::HouseSpec;
use crate::log;
use crate::model::EstimatorModel;
use crate::output::{create_output_directory, get_output_dir, write_report};
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod example;
use example::ExampleSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for the estimator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the estimate command
#[derive(Args)]
pub struct EstimateOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
    /// Whether to write the derived feature vector to a CSV file
    #[arg(long)]
    pub debug_features: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Estimate loads and recommend materials for a house.
    Estimate {
        /// Path to the estimator model directory.
        model_dir: PathBuf,
        /// Path to the house spec file.
        house_path: PathBuf,
        /// Other estimate options
        #[command(flatten)]
        opts: EstimateOpts,
    },
    /// Validate an estimator model directory.
    Validate {
        /// The path to the estimator model directory.
        model_dir: PathBuf,
    },
    /// Manage example models.
    Example {
        /// The available subcommands for managing example models.
        #[command(subcommand)]
        subcommand: ExampleSubcommands,
    },
    /// Manage program settings.
    Settings {
        /// The available subcommands for managing settings.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Estimate {
                model_dir,
                house_path,
                opts,
            } => handle_estimate_command(&model_dir, &house_path, &opts, None),
            Self::Validate { model_dir } => handle_validate_command(&model_dir),
            Self::Example { subcommand } => subcommand.execute(),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start buildright
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ buildright --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Handle the `estimate` command.
pub fn handle_estimate_command(
    model_dir: &Path,
    house_path: &Path,
    opts: &EstimateOpts,
    settings: Option<Settings>,
) -> Result<()> {
    // Load program settings, if not provided
    let mut settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // These settings can be overridden by command-line arguments
    if opts.debug_features {
        settings.debug_features = true;
    }
    if opts.overwrite {
        settings.overwrite = true;
    }

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(house_path)?;
        &pathbuf
    };

    let overwrite = create_output_directory(output_path, settings.overwrite).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_path.display()
        )
    })?;

    // Initialise program logger
    log::init(Some(&settings.log_level), Some(output_path))
        .context("Failed to initialise logging.")?;

    // Load the model and house spec
    let model = EstimatorModel::from_path(model_dir).context("Failed to load estimator model.")?;
    info!("Loaded estimator model from {}", model_dir.display());
    info!("Output folder: {}", output_path.display());

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder will be overwritten");
    }

    let house = HouseSpec::from_path(house_path)?;
    info!("Loaded house spec from {}", house_path.display());

    // Run the pipeline
    let report = crate::estimate::run(&model, &house)?;
    write_report(output_path, &report, settings.debug_features)?;
    print_report(&report);
    info!("Estimate complete!");

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(model_dir: &Path) -> Result<()> {
    log::init(None, None).context("Failed to initialise logging.")?;
    let model = EstimatorModel::from_path(model_dir).context("Failed to load estimator model.")?;

    println!(
        "Model at {} is valid ({} materials, {} historical houses)",
        model_dir.display(),
        model.materials.len(),
        model.houses.len()
    );

    Ok(())
}

/// Print an estimate report to the console.
fn print_report(report: &EstimateReport) {
    println!("Cooling load: {:>10.2} kWh", report.cooling_load.value());
    println!("Heating load: {:>10.2} kWh", report.heating_load.value());
    println!("Total load:   {:>10.2} kWh", report.total_load.value());
    println!("Loss score:   {:>10.2} %", report.loss_score.0);

    match (&report.best_material, &report.best_cost_material) {
        (Some(best), Some(best_cost)) => {
            println!("\nRecommended materials:");
            print_costed_material("Best efficiency", best);
            print_costed_material("Best cost", best_cost);
        }
        _ => println!("\nNo suitable materials found for the given efficiency range."),
    }
}

/// Print one recommended material and its costs.
fn print_costed_material(role: &str, costed: &CostedMaterial) {
    let material = &costed.material;
    println!(
        "  {role}: {} ({:.0}% effective), installation ${:.2}, lifespan {} years",
        material.material,
        material.effectiveness_per.0,
        costed.installation_cost.value(),
        material.lifespan_years
    );
    println!("    Applications: {}", material.applications);
    println!("    Installation time: {}", material.installation_time);
    if let Some(point) = costed.maintenance.last() {
        println!(
            "    Maintenance over {} years: ${:.2}",
            point.year,
            point.cost.value()
        );
    }
}
