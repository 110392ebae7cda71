//! Testbench configuration sweep CLI.
//!
//! This binary previews sweeps without a simulator. It performs:
//! 1. **List:** Every run name a plan would register, as `<testbench>.<test>.<config>`.
//! 2. **Count:** Sweep statistics for a plan.
//! 3. **Encode/Decode:** Ad-hoc encoding of dimensions and decoding of identifiers.
//! 4. **Presets:** Names of the built-in plans.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tbsweep_core::SweepPlan;
use tbsweep_core::config::presets;
use tbsweep_core::sweep::{Dimension, decode, encode, enumerate, lookup};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "tbsweep",
    author,
    version,
    about = "Testbench configuration sweep generator",
    long_about = "Expand testbench parameter dimensions into one run per combination and show the canonical run names.\n\nExamples:\n  tbsweep list --preset predictor\n  tbsweep count --plan sweeps.json\n  tbsweep encode -d SMPL_ORDER_PY=0,1,2 -d VAR2_PY=0\n  tbsweep decode FIDEL_TYPE_PY:2,ABS_ERR_TYPE_PY:0"
)]
struct Cli {
    /// Log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every run name the plan registers.
    List {
        #[command(flatten)]
        source: PlanSource,

        /// Print registrations as JSON instead of run names.
        #[arg(long)]
        json: bool,
    },

    /// Print sweep statistics for the plan.
    Count {
        #[command(flatten)]
        source: PlanSource,
    },

    /// Print the encoded identifier of every combination of the given dimensions.
    Encode {
        /// Dimension as NAME=v1,v2,... (repeatable, declaration order is kept).
        #[arg(short = 'd', long = "dim", required = true)]
        dims: Vec<String>,
    },

    /// Split an encoded identifier into its name/value pairs.
    Decode {
        /// Encoded identifier, e.g. `SMPL_ORDER_PY:1,VAR2_PY:0`.
        id: String,

        /// Print only the value of this name.
        #[arg(long)]
        key: Option<String>,
    },

    /// List built-in preset names.
    Presets,
}

/// Where the sweep plan comes from.
#[derive(Args, Debug)]
struct PlanSource {
    /// JSON sweep plan file.
    #[arg(long, conflicts_with_all = ["preset", "dims"])]
    plan: Option<PathBuf>,

    /// Built-in preset (see `tbsweep presets`).
    #[arg(long, conflicts_with = "dims")]
    preset: Option<String>,

    /// Ad-hoc dimension NAME=v1,v2,... applied to every test case (repeatable).
    #[arg(short = 'd', long = "dim")]
    dims: Vec<String>,

    /// Restrict a plan to one testbench; names the testbench for ad-hoc dimensions.
    #[arg(short, long)]
    testbench: Option<String>,

    /// Test case names for ad-hoc dimensions (default: the implicit `all` test).
    #[arg(long = "test")]
    tests: Vec<String>,
}

impl PlanSource {
    /// Builds the plan described by the flags.
    fn resolve(&self) -> CliResult<SweepPlan> {
        if !self.dims.is_empty() {
            let testbench = self.testbench.as_deref().unwrap_or("tb");
            let mut plan = presets::single(testbench, parse_dims(&self.dims)?);
            for tb in &mut plan.testbenches {
                tb.tests.clone_from(&self.tests);
            }
            plan.validate()?;
            return Ok(plan);
        }

        let mut plan = if let Some(path) = &self.plan {
            SweepPlan::load(path)?
        } else if let Some(name) = &self.preset {
            presets::by_name(name)?
        } else {
            return Err("specify --plan <FILE>, --preset <NAME>, or --dim <NAME=VALUES>".into());
        };

        if let Some(name) = &self.testbench {
            plan.testbenches.retain(|tb| &tb.name == name);
            if plan.testbenches.is_empty() {
                return Err(format!("no testbench named '{name}' in plan").into());
            }
        }
        info!(testbenches = plan.testbenches.len(), generic = %plan.generic, "resolved sweep plan");
        Ok(plan)
    }
}

fn parse_dims(specs: &[String]) -> CliResult<Vec<Dimension>> {
    specs
        .iter()
        .map(|s| Dimension::parse(s).map_err(Into::into))
        .collect()
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
    let _ = std::io::stdout().flush();
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::List { source, json } => cmd_list(&source.resolve()?, json),
        Commands::Count { source } => {
            cmd_count(&source.resolve()?);
            Ok(())
        }
        Commands::Encode { dims } => cmd_encode(&dims),
        Commands::Decode { id, key } => cmd_decode(&id, key.as_deref()),
        Commands::Presets => {
            for name in presets::names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Prints run names, or the registrations as JSON.
fn cmd_list(plan: &SweepPlan, json: bool) -> CliResult<()> {
    let (previews, _) = plan.preview();
    if json {
        println!("{}", serde_json::to_string_pretty(&previews)?);
        return Ok(());
    }
    for preview in &previews {
        for name in preview.run_names() {
            println!("{name}");
        }
    }
    Ok(())
}

/// Prints per-testbench run counts followed by the totals report.
fn cmd_count(plan: &SweepPlan) {
    let (previews, stats) = plan.preview();
    for preview in &previews {
        println!(
            "{:<32} tests: {:<4} runs: {}",
            preview.testbench, preview.stats.tests_seen, preview.stats.registrations
        );
    }
    stats.print();
}

fn cmd_encode(specs: &[String]) -> CliResult<()> {
    let dims = parse_dims(specs)?;
    for combination in enumerate(&dims) {
        println!("{}", encode(&combination));
    }
    Ok(())
}

fn cmd_decode(id: &str, key: Option<&str>) -> CliResult<()> {
    if let Some(key) = key {
        let value = lookup(id, key).ok_or_else(|| format!("'{key}' not found in '{id}'"))?;
        println!("{value}");
        return Ok(());
    }
    for (k, v) in decode(id)? {
        println!("{k} = {v}");
    }
    Ok(())
}
