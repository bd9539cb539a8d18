//! exopack command line interface

mod date;

use anyhow::{bail, Context};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use exopack_catalog::{
    radius_set, records, write_csv, BodyRecord, Catalog, CatalogParser, FrameSequence,
    LayoutDocument, RadiusClass, SelectionOptions, DEFAULT_GRAPHIC_BORDER, FIRST_FRAME_YEAR,
};
use exopack_circle::{verify_result, CirclePacker};
use exopack_core::{AnnulusSampling, Config, SolveSummary, Solver};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Tolerance used by `--verify`.
const VERIFY_TOLERANCE: f64 = 1e-9;

#[derive(Parser)]
#[command(name = "exopack")]
#[command(about = "Pack exoplanet radii into a disk and the annulus around it")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack confirmed planets into a disk and candidates into the annulus
    Pack {
        /// Catalog file (.json catalog, or a one-column table of planet radii)
        catalog: Option<PathBuf>,

        /// One-column table of confirmed planet radii
        #[arg(long, conflicts_with = "catalog")]
        planets: Option<PathBuf>,

        /// One-column table of candidate radii
        #[arg(long)]
        candidates: Option<PathBuf>,

        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        packing: PackingArgs,

        /// Output file for the layout (JSON); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the layout as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Check the layout against the packing rules before writing it
        #[arg(long)]
        verify: bool,

        /// View extent relative to the outermost radius
        #[arg(long, default_value_t = DEFAULT_GRAPHIC_BORDER)]
        border: f64,
    },

    /// Pack one disk per discovery year
    Frames {
        /// Catalog file (.json)
        catalog: PathBuf,

        /// First year (inclusive)
        #[arg(long, default_value_t = FIRST_FRAME_YEAR)]
        begin: i32,

        /// Last year (exclusive); defaults to the current year
        #[arg(long)]
        end: Option<i32>,

        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        packing: PackingArgs,

        /// Output directory for per-year JSON layouts
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,

        /// View extent relative to the outermost radius
        #[arg(long, default_value_t = DEFAULT_GRAPHIC_BORDER)]
        border: f64,
    },

    /// Print the radius classes and their colours
    Classes,
}

#[derive(Args)]
struct SelectionArgs {
    /// Skip planets that have a mass but no radius
    #[arg(long)]
    no_mass_estimates: bool,
}

impl SelectionArgs {
    fn options(&self) -> SelectionOptions {
        SelectionOptions::default().with_mass_estimates(!self.no_mass_estimates)
    }
}

#[derive(Args)]
struct PackingArgs {
    /// JSON file with a packing configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(long, conflicts_with = "date_seed")]
    seed: Option<u64>,

    /// Derive the seed from today's date
    #[arg(long)]
    date_seed: bool,

    /// Container area relative to the total circle area
    #[arg(long)]
    inflation: Option<f64>,

    /// Minimum centre distance relative to the sum of two radii
    #[arg(long)]
    spacing: Option<f64>,

    /// Safety factor for annuli too thin for the largest candidate
    #[arg(long)]
    margin: Option<f64>,

    /// Samples per circle before a pass is abandoned (0 = unlimited)
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Restarts per region after an abandoned pass
    #[arg(long)]
    max_restarts: Option<u32>,

    /// Time limit in milliseconds (0 = unlimited)
    #[arg(long)]
    time_limit: Option<u64>,

    /// Sample annulus distances from the inner edge instead of one radius out
    #[arg(long)]
    full_range: bool,
}

impl PackingArgs {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str::<Config>(&content)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => Config::default(),
        };

        if let Some(v) = self.inflation {
            config = config.with_area_inflation(v);
        }
        if let Some(v) = self.spacing {
            config = config.with_spacing_factor(v);
        }
        if let Some(v) = self.margin {
            config = config.with_annulus_margin(v);
        }
        if let Some(v) = self.max_attempts {
            config = config.with_max_attempts(v);
        }
        if let Some(v) = self.max_restarts {
            config = config.with_max_restarts(v);
        }
        if let Some(v) = self.time_limit {
            config = config.with_time_limit(v);
        }
        if self.full_range {
            config = config.with_annulus_sampling(AnnulusSampling::FullRange);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        } else if self.date_seed {
            let seed = date::seed_for(date::today());
            log::info!("Today's seed is {}", seed);
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Pack {
            catalog,
            planets,
            candidates,
            selection,
            packing,
            output,
            csv,
            verify,
            border,
        } => {
            let config = packing.config()?;
            let catalog =
                load_catalog(catalog.as_deref(), planets.as_deref(), candidates.as_deref())?;

            let confirmed = catalog.confirmed_bodies(&selection.options());
            let candidates = catalog.candidate_bodies();
            log::info!(
                "{} confirmed planets and {} candidates to pack",
                confirmed.len(),
                candidates.len()
            );

            let spacing = config.spacing_factor;
            let packer = CirclePacker::new(config);
            let result = packer.solve(&radius_set(&confirmed)?, &radius_set(&candidates)?)?;

            if verify {
                let violations = verify_result(&result, spacing, VERIFY_TOLERANCE);
                if !violations.is_empty() {
                    for violation in &violations {
                        log::error!("{}", violation);
                    }
                    bail!("Layout failed verification with {} violations", violations.len());
                }
                log::info!("Layout verified");
            }

            let summary = SolveSummary::from(&result);
            log::info!(
                "Placed {} + {} circles (disk radius {:.4}, utilization {:.1}%, \
                 {} restarts, seed {}) in {} ms",
                summary.confirmed_placed,
                summary.candidates_placed,
                summary.disk_radius,
                summary.utilization_percent,
                summary.restarts,
                summary.seed,
                summary.time_ms
            );

            let document = LayoutDocument::new(&result, &confirmed, &candidates, border);
            match output {
                Some(path) => {
                    write_json(&path, &document)?;
                    println!("Layout saved to: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&document)?),
            }

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_csv(BufWriter::new(file), &records(&result, &confirmed, &candidates))?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Frames {
            catalog,
            begin,
            end,
            selection,
            packing,
            output,
            border,
        } => {
            let config = packing.config()?;
            let catalog = CatalogParser::new().parse_file(&catalog)?;
            let end = end.unwrap_or_else(|| date::today().year());

            let frames = FrameSequence::new(config).frames(
                &catalog,
                exopack_catalog::year_range(begin, end),
                &selection.options(),
            )?;

            fs::create_dir_all(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            for frame in &frames {
                let document = LayoutDocument::new(&frame.result, &frame.bodies, &[], border);
                let path = output.join(format!("frame_{}.json", frame.year));
                write_json(&path, &document)?;
            }
            println!("{} frames saved to: {}", frames.len(), output.display());
        }

        Commands::Classes => {
            println!("Radius classes (Earth radii):");
            println!("=============================");
            for class in RadiusClass::ALL {
                let (lower, upper) = class.bounds();
                let range = if upper.is_finite() {
                    format!("[{}, {})", lower, upper)
                } else {
                    format!(">= {}", lower)
                };
                println!("  {:<12} {:<12} {}", class.label(), range, class.colour().hex());
            }
        }
    }

    Ok(())
}

/// Loads planets from a catalog file or a radius table, plus optional
/// candidate radii from a second table.
fn load_catalog(
    catalog: Option<&Path>,
    planets: Option<&Path>,
    candidates: Option<&Path>,
) -> anyhow::Result<Catalog> {
    let parser = CatalogParser::new();
    let mut loaded = match catalog.or(planets) {
        Some(path) => parser
            .parse_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None if candidates.is_some() => Catalog::new("candidates"),
        None => bail!("Nothing to pack: give a catalog file or --planets/--candidates"),
    };

    if let Some(path) = candidates {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let radii = parser.parse_ascii_column(&content)?;
        loaded
            .candidates
            .extend(radii.into_iter().map(BodyRecord::with_radius));
    }

    Ok(loaded)
}

fn write_json(path: &Path, document: &LayoutDocument) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), document)?;
    Ok(())
}
