//! Emoji constant-table generator.
//!
//! Batch job: reads the two Unicode emoji registries (over HTTP or from
//! local files), derives the symbol and extended emoji sets, and writes the
//! contract-source constant tables plus the JSON assets consumed by the SDK
//! and indexer builds. Exits 0 on success; any failure logs one diagnostic
//! line and exits 1.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use emojigen_pipeline::{PipelineConfig, config};
use emojigen_registry::RegistrySource;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "emojigen")]
#[command(about = "Generate emoji constant tables from the Unicode registries")]
struct Args {
	/// Base registry source: URL or local file path
	#[arg(long, value_name = "URL_OR_PATH", default_value = config::BASE_EMOJIS_URL)]
	base_source: String,

	/// ZWJ sequence registry source: URL or local file path
	#[arg(long, value_name = "URL_OR_PATH", default_value = config::ZWJ_EMOJIS_URL)]
	sequence_source: String,

	/// Directory for the generated artifacts
	#[arg(long, value_name = "DIR", default_value = "data")]
	out_dir: PathBuf,

	/// Directory for the parsed-registry snapshot cache
	#[arg(long, value_name = "DIR", default_value = "data")]
	cache_dir: PathBuf,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_max_level(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = PipelineConfig {
		base_source: RegistrySource::from_spec(&args.base_source),
		sequence_source: RegistrySource::from_spec(&args.sequence_source),
		out_dir: args.out_dir,
		cache_dir: args.cache_dir,
		..PipelineConfig::default()
	};

	match emojigen_pipeline::run(&config) {
		Ok(summary) => {
			info!(
				symbol = summary.symbol_count,
				extended = summary.extended_count,
				artifacts = summary.artifacts_written,
				"generated constant tables"
			);
		}
		Err(err) => {
			error!("{err}");
			process::exit(1);
		}
	}
}
