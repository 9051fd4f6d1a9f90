use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_dotenv::dotenv::DotEnv;
use tracing_subscriber::EnvFilter;

mod catalog;
mod check;
mod config;
mod core;
mod encode;
mod images;
mod login;
mod report;
mod run;
mod scaffold;
mod submit;

use config::ApiCfg;
use run::SeedOpts;

#[derive(Parser, Debug)]
#[command(version, about = "Florakit CLI")]
pub struct Cli {
	/// Increase output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	Init,
	Check,
	Login {
		#[arg(long)]
		username: Option<String>,
		#[arg(long)]
		password: Option<String>,
	},
	Seed {
		#[arg(long)]
		dry_run: bool,
		#[arg(long)]
		fail_fast: bool,
		#[arg(long)]
		limit: Option<usize>,
		#[arg(long)]
		sample_seed: Option<u64>,
		#[arg(long)]
		report: Option<PathBuf>,
	},
}

fn load_env() -> DotEnv {
	// Load .env in CWD if present, ignore missing
	let env = DotEnv::new("");
	env
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "florakit=debug" } else { "florakit=info" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
		)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();
	init_tracing(args.verbose);
	let env = load_env();

	match args.command {
		Commands::Init => scaffold::scaffold()?,
		Commands::Check => check::check()?,
		Commands::Login { username, password } => {
			let cfg = ApiCfg::from_env(&env)?;
			login::login(&cfg, username, password).await?;
		}
		Commands::Seed {
			dry_run,
			fail_fast,
			limit,
			sample_seed,
			report,
		} => {
			let cfg = ApiCfg::from_env(&env)?;
			run::run_seed(
				&cfg,
				SeedOpts {
					dry_run,
					fail_fast,
					limit,
					sample_seed,
					report,
				},
			)
			.await?;
		}
	}

	Ok(())
}
