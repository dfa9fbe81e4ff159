//! Command line interface.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use foliation::{Instance, ModulusPolicy, Value};
use itertools::Itertools;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "foliate",
    version,
    about = "Looks for subsets of VALUES whose sum equals a target.",
    long_about = None
)]
pub struct Args {
    /// Target sum
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub target: Value,

    /// Only consider subsets with exactly SIZE elements
    #[arg(short, long, value_name = "SIZE", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Track sums modulo M. If neither this nor `--covering` is given, a heuristic modulus
    /// is used which may report subsets that only match the target modulo M.
    #[arg(short, long, value_name = "M", allow_negative_numbers = true)]
    pub modulus: Option<Value>,

    /// Use the smallest modulus under which all answers are exact
    #[arg(short, long, conflicts_with = "modulus")]
    pub covering: bool,

    /// List the matching subsets instead of only reporting whether one exists
    #[arg(short, long)]
    pub enumerate: bool,

    /// Maximum number of subsets stored while enumerating
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Values of the input sequence
    #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
    pub values: Vec<Value>,
}

impl Args {
    pub fn modulus_policy(&self) -> ModulusPolicy {
        match self.modulus {
            Some(m) => ModulusPolicy::Fixed(m),
            None if self.covering => ModulusPolicy::Covering,
            None => ModulusPolicy::Heuristic,
        }
    }

    pub fn instance(&self) -> Instance {
        let mut instance =
            Instance::new(self.values.clone(), self.target).with_modulus_policy(self.modulus_policy());
        if let Some(size) = self.size {
            instance = instance.with_size(size);
        }
        if let Some(limit) = self.limit {
            instance = instance.with_witness_limit(limit);
        }
        instance
    }
}

/// Return command line args.
pub fn parse_args() -> Args {
    Args::parse()
}

/// Install a global logger writing to stderr.
pub fn init_logging(level: tracing::Level) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(std::time::Instant::now()))
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Run the search with the given args, printing results on the standard output.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    run_with_output(args, &mut stdout.lock())
}

pub fn run_with_output(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let instance = args.instance();
    let (modulus, precision) = instance.modulus().context("invalid modulus")?;

    if args.enumerate {
        let subsets = instance.enumerate().context("could not enumerate subsets")?;
        let mut count = 0usize;
        for subset in subsets {
            writeln!(out, "{{{}}}", subset.iter().join(", "))?;
            count += 1;
        }
        writeln!(out, "{count} subset(s) found (modulus {modulus}, {precision})")?;
    } else {
        let verdict = instance.solve().context("could not solve instance")?;
        if verdict.found {
            writeln!(out, "Subset with sum {} exists.", args.target)?;
        } else {
            writeln!(out, "No such subset exists.")?;
        }
        writeln!(out, "modulus {modulus} ({precision})")?;
    }
    Ok(())
}
