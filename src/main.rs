// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod assignment;
mod batch;
mod big_value;
mod cipher;
mod encoder;
mod evaluator;
#[cfg(test)]
mod oracle;

use std::{io::Read as _, path::PathBuf};
use anyhow::Context as _;


/// Reads a batch of ciphers and prints the minimal value of each.
#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Batch file; `-` or absent reads stdin
	#[arg()]
	input: Option<PathBuf>,

	/// Enforce the case count and length limits of this batch (0 is samples)
	#[arg(long, env = "MINBASE_BATCH")]
	batch: Option<usize>,

	/// Worker threads; 0 picks one per core
	#[arg(long, env = "MINBASE_THREADS", default_value_t = 0)]
	threads: usize,

	/// Raise log verbosity (repeatable)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
	use tracing_subscriber::filter::{EnvFilter, LevelFilter};
	let level = match verbose {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	};
	let filter = EnvFilter::builder()
		.with_default_directive(level.into())
		.from_env()
		.context("invalid RUST_LOG")?;
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
	Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
	match path {
		Some(path) if path.as_os_str() != "-" => std::fs::read(path)
			.with_context(|| format!("failed to read {}", path.display())),
		_ => {
			let mut input = vec![];
			std::io::stdin().read_to_end(&mut input).context("failed to read stdin")?;
			Ok(input)
		}
	}
}

fn main() -> anyhow::Result<()> {
	let args = <Args as clap::Parser>::parse();
	init_logging(args.verbose)?;

	let limits = match args.batch {
		Some(batch) => batch::Limits::for_batch(batch)
			.with_context(|| format!("unknown batch {batch}"))?,
		None => batch::Limits::default(),
	};
	if args.threads > 0 {
		rayon::ThreadPoolBuilder::new()
			.num_threads(args.threads)
			.build_global()
			.context("failed to start worker threads")?;
	}

	let input = read_input(args.input.as_ref())?;
	let report = batch::run(&input, limits, std::io::BufWriter::new(std::io::stdout().lock()))?;
	if report.rejected > 0 {
		anyhow::bail!("{} of {} cases rejected", report.rejected, report.cases)
	}
	Ok(())
}
