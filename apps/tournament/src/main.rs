//! tichu-scorer CLI: scores a tournament from submitted hands and prints
//! movement schedules.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tournament::config::{OutputFormat, RuntimeConfig};
use tournament::movements::{MovementCache, MovementKey, MovementVersion};
use tournament::report::{self, MovementReport, ResultsReport, TextReport};
use tournament::{group_into_boards, max_rounds, telemetry};
use tracing::info;

#[derive(Parser)]
#[command(name = "tichu-scorer")]
#[command(about = "Scores duplicate-pairs Tichu tournaments and prints movements")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a JSON array of submitted hands
    Score {
        /// Input file with the submitted hands
        #[arg(short, long)]
        input: PathBuf,

        /// Rounds each pair is scheduled to play (defaults to the most boards any pair played)
        #[arg(short, long)]
        rounds: Option<usize>,

        /// Output format (overrides TOURNAMENT_OUTPUT_FORMAT)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the movement for a tournament size as JSON
    Movement {
        /// Number of pairs
        #[arg(long)]
        pairs: u32,

        /// Total boards in the tournament
        #[arg(long)]
        boards: u32,

        /// Stored legacy schedule id
        #[arg(long)]
        legacy_version: Option<u32>,

        /// Only show this pair
        #[arg(long)]
        pair: Option<u32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = RuntimeConfig::from_env();
    telemetry::init_tracing(&config);

    match args.command {
        Command::Score {
            input,
            rounds,
            format,
            output,
        } => {
            let hands = report::read_hands(&input)?;
            let boards = group_into_boards(hands)?;
            let num_rounds = rounds.unwrap_or_else(|| max_rounds(&boards));
            info!(
                boards = boards.len(),
                num_rounds,
                input = %input.display(),
                "scoring tournament"
            );
            let results = ResultsReport::build(&boards, num_rounds)?;

            let mut out: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout().lock()),
            };
            match format.unwrap_or(config.output_format) {
                OutputFormat::Json => writeln!(out, "{}", results.to_json_pretty()?)?,
                OutputFormat::Csv => report::write_csv(&results, &mut out)?,
                OutputFormat::Text => write!(out, "{}", TextReport(&results))?,
            }
            out.flush()?;
        }
        Command::Movement {
            pairs,
            boards,
            legacy_version,
            pair,
        } => {
            let version = MovementVersion::from_legacy_id(legacy_version)?;
            let key = MovementKey::for_tournament(pairs, boards, version)?;
            let cache = MovementCache::new();
            let movement = cache.get_or_create(key)?;
            let view = MovementReport::new(&movement, pair)?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
