use anyhow::{Context, Result};
use clap::Parser;
use gapmine::cli::{Cli, Generator};
use gapmine::input;
use gapmine::mining::{Criterion, Miner};
use gapmine::report::MiningReport;
use gapmine::select;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the input file or run the requested generator
fn load_sequence(args: &Cli) -> Result<Vec<u32>> {
    match (&args.input, args.generate) {
        (Some(path), None) => input::read_sequence(path)
            .with_context(|| format!("Failed to load sequence from {}", path.display())),
        (None, Some(Generator::Cyclic)) => Ok(input::cyclic_sequence(args.length, args.alphabet)?),
        (None, Some(Generator::Random)) => Ok(input::random_sequence(
            args.length,
            args.alphabet,
            args.seed,
        )?),
        (Some(_), Some(_)) => {
            anyhow::bail!("Cannot specify both INPUT and --generate. Choose one.");
        }
        (None, None) => {
            anyhow::bail!("Must specify either INPUT or --generate. Usage: gapmine FILE or gapmine --generate cyclic");
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let base = match &args.config {
        Some(path) => Criterion::from_toml_file(path)?,
        None => Criterion::default(),
    };
    let criterion = args.apply_overrides(base);

    let sequence = load_sequence(&args)?;
    tracing::debug!(len = sequence.len(), ?criterion, "loaded sequence");

    let patterns = Miner::new(criterion)
        .with_bucket_bits(args.bucket_bits)
        .mine(&sequence)
        .context("Mining failed")?;

    let selected = if args.unfiltered {
        select::score_all(patterns, sequence.len())
    } else if args.first {
        select::first_qualifying(&patterns, sequence.len(), &criterion)
            .into_iter()
            .collect()
    } else {
        select::rank(patterns, sequence.len(), &criterion)
    };

    let report = MiningReport::new(sequence.len(), criterion, selected);
    print!("{}", report.render(args.format)?);

    Ok(())
}
