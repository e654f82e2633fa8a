use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use instant_sql_vars::synth::{DeclareSuppression, LineEndings};
use instant_sql_vars::{
    apply_to_file, generate, ApplyOptions, ApplyTarget, GenerateOptions, SynthOptions,
};

#[derive(Parser)]
#[command(name = "instant-sql-vars")]
#[command(
    author,
    version,
    about = "Generate DECLARE statements for the @variables in a SQL script"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the DECLARE block for a SQL script
    Generate {
        /// SQL file to scan (reads stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        synth: SynthArgs,
    },
    /// Insert the DECLARE block above a SQL script or a range of its lines
    Apply {
        /// SQL file to edit
        file: PathBuf,

        /// Only declare variables in lines FIRST:LAST (1-based, inclusive)
        #[arg(short, long, value_parser = parse_line_range)]
        lines: Option<(usize, usize)>,

        /// Write the result to this file instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input file
        #[arg(short, long)]
        in_place: bool,

        #[command(flatten)]
        synth: SynthArgs,
    },
}

#[derive(Args)]
struct SynthArgs {
    /// Line terminators that split the script (crlf, any)
    #[arg(long, default_value = "crlf")]
    line_endings: LineEndings,

    /// How DECLARE statements are skipped (line, token, keyword)
    #[arg(long, default_value = "line")]
    declare_mode: DeclareSuppression,

    /// Declare each variable once, in order of first use
    #[arg(long)]
    dedupe: bool,

    /// Date for DATETIME placeholders, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl SynthArgs {
    fn options(&self) -> SynthOptions {
        SynthOptions {
            line_endings: self.line_endings,
            declare_suppression: self.declare_mode,
            deduplicate: self.dedupe,
        }
    }
}

fn parse_line_range(value: &str) -> Result<(usize, usize), String> {
    let (first, last) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FIRST:LAST, got '{value}'"))?;
    let first = first
        .trim()
        .parse()
        .map_err(|e| format!("invalid first line '{first}': {e}"))?;
    let last = last
        .trim()
        .parse()
        .map_err(|e| format!("invalid last line '{last}': {e}"))?;
    Ok((first, last))
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "instant_sql_vars=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { file, synth } => {
            let options = GenerateOptions {
                input: file,
                synth: synth.options(),
                date: synth.date,
            };

            print!("{}", generate(&options)?);
        }
        Commands::Apply {
            file,
            lines,
            output,
            in_place,
            synth,
        } => {
            let target = match (output, in_place) {
                (Some(path), _) => ApplyTarget::File(path),
                (None, true) => ApplyTarget::InPlace,
                (None, false) => ApplyTarget::Stdout,
            };
            let options = ApplyOptions {
                input: file,
                lines,
                target,
                synth: synth.options(),
                date: synth.date,
            };

            let result = apply_to_file(&options)?;
            if result.written_to.is_none() {
                print!("{}", result.text);
            }
        }
    }

    Ok(())
}
