use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use fracpow::io_utils::{io_cli_error, pow_table_cli_error, simple_cli_error};
use fracpow::{write_tables, TableConfig, TableFormat, DEFAULT_DIVISORS, DEFAULT_MAX_N};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Print fractional_pow() lookup tables: floor(n^(1/d) * 10^5) per entry.
#[derive(Parser)]
#[command(name = "fracpow", version)]
struct Args {
    /// Upper bound of n (inclusive for hex, exclusive for decimal)
    #[arg(long, default_value_t = DEFAULT_MAX_N)]
    max_n: u32,

    /// Root degree to generate a table for; repeat for several
    #[arg(long = "divisor", value_name = "D", allow_negative_numbers = true)]
    divisors: Vec<f64>,

    /// Output representation
    #[arg(long, value_enum, default_value_t = TableFormat::Hex)]
    format: TableFormat,

    /// Fail on entries wider than 4 bytes instead of truncating them
    #[arg(long)]
    strict: bool,

    /// Write tables to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| simple_cli_error("failed to install log subscriber"))?;

    let config = TableConfig {
        max_n: args.max_n,
        divisors: if args.divisors.is_empty() {
            DEFAULT_DIVISORS.to_vec()
        } else {
            args.divisors
        },
        format: args.format,
        strict: args.strict,
    };
    config
        .validate()
        .map_err(|e| pow_table_cli_error("invalid arguments", e))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| io_cli_error("creating output file", path, e))?;
            let mut writer = BufWriter::new(file);
            write_tables(&mut writer, &config)
                .map_err(|e| pow_table_cli_error("writing tables", e))?;
            info!(path = %path.display(), "tables written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_tables(&mut lock, &config)
                .map_err(|e| pow_table_cli_error("writing tables", e))?;
        }
    }
    Ok(())
}
