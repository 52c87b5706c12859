use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use lift_calculator::SizeClass;
use lift_calculator::advisor::{ImprovementReport, suggest_improvements};
use lift_calculator::assistant::{ChatCompletionClient, GridAnalysis, ThrusterAssistant};
use lift_calculator::blocks::{BlockEntry, BlockType, calculate_total_mass, entry_mass_kg};
use lift_calculator::config::{AssistantSettings, load_assistant_settings, load_preset_configs};
use lift_calculator::export::{comparison, csv_report, json, report, writer_for_path};
use lift_calculator::format::format_number;
use lift_calculator::presets::Preset;
use lift_calculator::propulsion::{GridSpecifications, PerformanceReport, PropulsionType};
use lift_calculator::session::Session;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[path = "liftcalc/grid_args.rs"]
mod grid_args;

use grid_args::GridArgs;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Lift, thrust, and efficiency calculator for Space Engineers grids"
)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print thrust, hover, lift capacity, and thrust-to-weight figures
    Analyze {
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Export the grid as CSV, a Markdown report, or a JSON preset record
    Export {
        #[command(flatten)]
        grid: GridArgs,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Preset name used by the JSON format
        #[arg(long, default_value = "grid")]
        name: String,

        /// Output file (use '-' for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
    /// Efficiency score, suggestions, and LLM commentary
    Advise {
        #[command(flatten)]
        grid: GridArgs,

        /// Advisory service settings (TOML or YAML); defaults target the OpenAI API
        #[arg(long)]
        assistant_config: Option<PathBuf>,

        /// Skip the LLM commentary and print only rule-based advice
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// Estimate grid mass from block counts
    Mass {
        /// Block inventory entry, e.g. `steel_plate=10,2` (small,large); repeatable
        #[arg(long = "block", required = true)]
        blocks: Vec<BlockEntry>,
    },
    /// Print the thruster force and block mass tables
    Tables,
    /// Compare saved presets side by side
    Compare {
        /// JSON array of preset records
        #[arg(long)]
        presets: Option<PathBuf>,

        /// Preset catalog (YAML list, TOML record, or directory of TOML records)
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = CompareView::Metrics)]
        view: CompareView,

        /// Output file (use '-' for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ExportFormat {
    Csv,
    Report,
    Json,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum CompareView {
    /// Normalized total thrust, lift capacity, and thrust-to-weight
    Metrics,
    /// Thrust per propulsion type
    Thrust,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Analyze { grid } => analyze(&grid),
        Command::Export {
            grid,
            format,
            name,
            output,
        } => export(&grid, format, &name, &output),
        Command::Advise {
            grid,
            assistant_config,
            offline,
        } => advise(&grid, assistant_config.as_deref(), offline),
        Command::Mass { blocks } => mass(&blocks),
        Command::Tables => tables(),
        Command::Compare {
            presets,
            catalog,
            view,
            output,
        } => compare(presets.as_deref(), catalog.as_deref(), view, &output),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn analyze(grid: &GridArgs) -> anyhow::Result<()> {
    let mut session = Session::start();
    let report = session.calculate(grid.to_specifications()?)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &PerformanceReport) {
    println!("=== Thrust Analysis ===");
    println!(
        "Total Thrust           : {} N",
        format_number(report.total_thrust_n)
    );
    for (kind, thrust) in report.thrust.iter() {
        let label = format!("{} Thrust", kind.label());
        println!("{label:<23}: {} N", format_number(thrust));
    }
    println!(
        "Required Hover Thrust  : {} N",
        format_number(report.hover_thrust_n)
    );
    println!(
        "Lift Capacity          : {} kg",
        format_number(report.lift_capacity_kg)
    );
    println!(
        "Thrust-to-Weight Ratio : {}",
        format_number(report.thrust_to_weight)
    );
}

fn export(grid: &GridArgs, format: ExportFormat, name: &str, output: &Path) -> anyhow::Result<()> {
    let spec = grid.to_specifications()?;
    let mut writer = writer_for_path(output)?;
    match format {
        ExportFormat::Csv => csv_report::write_grid_csv(&mut writer, &spec)?,
        ExportFormat::Report => {
            let doc = report::grid_report(&spec)?;
            writer.write_all(doc.to_markdown().as_bytes())?;
        }
        ExportFormat::Json => json::write_preset(&mut writer, &Preset::new(name, spec)?)?,
    }
    writer.flush()?;
    Ok(())
}

fn advise(grid: &GridArgs, settings_path: Option<&Path>, offline: bool) -> anyhow::Result<()> {
    let spec = grid.to_specifications()?;
    let improvements = suggest_improvements(&spec)?;

    if !offline {
        let settings = match settings_path {
            Some(path) => load_assistant_settings(path)
                .with_context(|| format!("loading assistant settings from {}", path.display()))?,
            None => AssistantSettings::default(),
        };
        print_analysis(&commentary(settings, &spec));
    }
    print_improvements(&improvements);
    Ok(())
}

fn commentary(settings: AssistantSettings, spec: &GridSpecifications) -> GridAnalysis {
    match ChatCompletionClient::from_env(settings) {
        Ok(client) => ThrusterAssistant::new(client).analyze_grid(spec),
        Err(err) => {
            tracing::warn!(error = %err, "advisory service not configured");
            GridAnalysis::unavailable(&err)
        }
    }
}

fn print_analysis(analysis: &GridAnalysis) {
    println!("#### Efficiency Assessment");
    println!("{}\n", analysis.efficiency);
    println!("#### Optimization Suggestions");
    println!("{}\n", analysis.optimization);
    println!("#### Recommended Use Cases");
    println!("{}\n", analysis.use_cases);
}

fn print_improvements(report: &ImprovementReport) {
    println!("Grid Efficiency Score: {:.1}/100", report.efficiency_score);
    println!("#### Suggested Improvements");
    for suggestion in &report.suggested_changes {
        println!("• {suggestion}");
    }
    println!("Balance: {}", report.thrust_balance);
}

fn mass(blocks: &[BlockEntry]) -> anyhow::Result<()> {
    for entry in blocks {
        println!(
            "{:<18} small {:>4}  large {:>4}  {} kg",
            entry.block.label(),
            entry.count.small,
            entry.count.large,
            format_number(entry_mass_kg(entry.block, entry.count))
        );
    }
    println!(
        "Calculated Mass: {} kg",
        format_number(calculate_total_mass(blocks))
    );
    Ok(())
}

fn tables() -> anyhow::Result<()> {
    println!("=== Thruster Forces (N) ===");
    for kind in PropulsionType::ALL {
        println!(
            "{:<12} small {:>12}  large {:>12}",
            kind.label(),
            format_number(kind.force_newtons(SizeClass::Small)),
            format_number(kind.force_newtons(SizeClass::Large))
        );
    }
    println!("\n=== Block Masses (kg) ===");
    for block in BlockType::ALL {
        println!(
            "{:<18} small {:>10}  large {:>10}  ({})",
            block.label(),
            format_number(block.mass_kg(SizeClass::Small)),
            format_number(block.mass_kg(SizeClass::Large)),
            block.category().label()
        );
    }
    Ok(())
}

fn compare(
    presets: Option<&Path>,
    catalog: Option<&Path>,
    view: CompareView,
    output: &Path,
) -> anyhow::Result<()> {
    if presets.is_none() && catalog.is_none() {
        return Err(anyhow!("pass --presets and/or --catalog"));
    }

    let mut session = Session::start();
    if let Some(path) = presets {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading presets from {}", path.display()))?;
        session.import_presets(&data)?;
    }
    if let Some(path) = catalog {
        for config in load_preset_configs(path)? {
            session.presets_mut().save(Preset::from_config(&config)?);
        }
    }
    if session.presets().len() < 2 {
        tracing::warn!(
            count = session.presets().len(),
            "comparison needs at least two presets to be useful"
        );
    }

    let mut writer = writer_for_path(output)?;
    match view {
        CompareView::Metrics => {
            let rows = comparison::normalized_metrics(session.presets().iter())?;
            comparison::write_metrics_csv(&mut writer, &rows)?;
        }
        CompareView::Thrust => {
            let rows = comparison::thrust_rows(session.presets().iter());
            comparison::write_thrust_csv(&mut writer, &rows)?;
        }
    }
    writer.flush()?;
    session.end();
    Ok(())
}
