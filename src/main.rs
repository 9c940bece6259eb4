use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgGroup, Args, Parser, Subcommand};
use midiff::{DecoderCommand, DumpSource, Harness, OutputFormat};
use midiff_core::config::Config;

#[derive(Parser)]
#[command(name = "midiff", about = "midiff — diff a MIDI decoder's dump against a trusted one")]
struct Cli {
    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file layered over ~/.config/midiff/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a candidate dump and diff it against a reference dump.
    Check(CheckArgs),
    /// Print a candidate dump rewritten into the reference vocabulary.
    Normalize {
        /// Candidate dump file, or `-` for stdin.
        dump: String,
    },
    /// Print per-track event counts for a dump.
    Summary {
        /// Dump file, or `-` for stdin.
        dump: String,
        /// The dump is in the candidate vocabulary; normalize it first.
        #[arg(long)]
        candidate: bool,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("reference_source").required(true).args(["reference", "midi"])))]
struct CheckArgs {
    /// Candidate dump file, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    candidate: String,

    /// Reference dump file, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    reference: Option<String>,

    /// MIDI file to run through the configured trusted decoder instead.
    #[arg(long, value_name = "FILE")]
    midi: Option<PathBuf>,

    /// Report format.
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip reference lines starting with this prefix (overrides config).
    #[arg(long, value_name = "PREFIX")]
    metadata_prefix: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("midiff debug log started");
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("midiff: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Check(args) => {
            if let Some(prefix) = args.metadata_prefix {
                config.compare.metadata_prefix = prefix;
            }
            if args.candidate == "-" && args.reference.as_deref() == Some("-") {
                bail!("only one of --candidate and --reference can read stdin");
            }

            let reference: Box<dyn DumpSource> = match (args.reference, args.midi) {
                (Some(path), _) => midiff_sources::from_arg(&path),
                (None, Some(midi)) => Box::new(DecoderCommand::from_config(&config.decoder, midi)),
                (None, None) => bail!("either --reference or --midi is required"),
            };
            let candidate = midiff_sources::from_arg(&args.candidate);

            let harness = Harness::new(&config);
            let comparison = harness.check(reference.as_ref(), candidate.as_ref())?;
            print!("{}", midiff_core::report::render(&comparison, args.format)?);

            Ok(if comparison.is_equivalent() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Normalize { dump } => {
            let text = midiff_sources::from_arg(&dump).read()?;
            print!("{}", Harness::new(&config).normalizer().normalize(&text));
            Ok(ExitCode::SUCCESS)
        }
        Command::Summary { dump, candidate } => {
            let text = midiff_sources::from_arg(&dump).read()?;
            print!("{}", Harness::new(&config).summarize(&text, candidate));
            Ok(ExitCode::SUCCESS)
        }
    }
}
