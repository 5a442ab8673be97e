//! GraphPoet CLI
//!
//! Builds a word-affinity graph from a corpus and inserts bridge words into
//! input phrases.
//!
//! # Commands
//!
//! - `poem`: compose poems from arguments or stdin lines
//! - `build`: write an affinity graph snapshot
//! - `show`: render the affinity graph
//! - `stats`: summarize the affinity graph
//!
//! Logs go to stderr; stdout carries only command output.

use clap::{Parser, Subcommand};
use graphpoet::cli::{CliError, cmd_build, cmd_poem, cmd_show, cmd_stats};
use graphpoet::config::{PoetConfig, RepresentationArg, SourceArgs};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

/// GraphPoet - bridge words from a word-affinity graph
#[derive(Parser)]
#[command(name = "graphpoet")]
#[command(version)]
#[command(about = "Insert bridge words between adjacent words using a corpus affinity graph")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Graph representation to build
    #[arg(long, value_enum, default_value_t, global = true)]
    representation: RepresentationArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a poem
    ///
    /// With no words given, every stdin line is treated as one input.
    Poem {
        #[command(flatten)]
        source: SourceArgs,

        /// Input words
        words: Vec<String>,
    },
    /// Build an affinity graph snapshot from a corpus
    Build {
        /// Plain-text corpus
        #[arg(long)]
        corpus: PathBuf,

        /// Snapshot file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },
    /// Render the affinity graph
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit JSON instead of arrow lines
        #[arg(long)]
        json: bool,
    },
    /// Summarize the affinity graph
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        error!(error = %err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Poem { source, words } => {
            let config = PoetConfig::from_args(source, cli.representation)?;
            let inputs = if words.is_empty() {
                read_stdin_lines()?
            } else {
                vec![words.join(" ")]
            };
            for poem in cmd_poem(&config, &inputs)? {
                println!("{poem}");
            }
        }
        Commands::Build {
            corpus,
            output,
            force,
        } => {
            let stats = cmd_build(&corpus, &output, cli.representation.into(), force)?;
            println!(
                "Wrote {} ({} vertices, {} edges)",
                output.display(),
                stats.vertices,
                stats.edges
            );
        }
        Commands::Show { source, json } => {
            let config = PoetConfig::from_args(source, cli.representation)?;
            println!("{}", cmd_show(&config, json)?);
        }
        Commands::Stats { source, json } => {
            let config = PoetConfig::from_args(source, cli.representation)?;
            print!("{}", cmd_stats(&config, json)?);
        }
    }
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>, CliError> {
    std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .map_err(|source| CliError::File {
            path: PathBuf::from("<stdin>"),
            source,
        })
}
