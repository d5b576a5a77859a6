//! RIVET Legacy Input Converter - Main Entry Point
//!
//! The conversion itself lives in the `rivet_convert` library.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, ValueEnum};
use rivet_convert::logging::{LogConfig, LogFormat, init_logging};
use rivet_convert::{ConvertConfig, ConvertError, Storage, convert_all, exit_code};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Convert legacy RIVET input files to the current input format
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Legacy input files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for converted files (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Prefix for converted file names (default: "(N)")
    #[arg(long)]
    prefix: Option<String>,

    /// TOML file with conversion settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the converted text instead of writing a file (single input only)
    #[arg(long)]
    stdout: bool,

    /// Fail instead of replacing existing converted files
    #[arg(long)]
    no_overwrite: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let format = match args.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging(
        &LogConfig::from_verbosity(args.verbose, args.quiet)
            .with_format(format)
            .with_ansi(io::stderr().is_terminal()),
    );

    let config = load_config(&args)?;

    if args.stdout {
        std::process::exit(print_converted(&args, &config)?);
    }

    let outcomes = convert_all(args.inputs, config.clone()).await;
    for outcome in &outcomes {
        if let Some(report) = outcome.report() {
            println!("{}", report);
        }
    }
    std::process::exit(exit_code(&outcomes, &config));
}

/// Config file first, then command-line overrides
fn load_config(args: &Args) -> Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    if let Some(dir) = &args.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if let Some(prefix) = &args.prefix {
        config.output_prefix = prefix.clone();
    }
    if args.no_overwrite {
        config.overwrite = false;
    }
    Ok(config)
}

fn print_converted(args: &Args, config: &ConvertConfig) -> Result<i32> {
    let [input] = args.inputs.as_slice() else {
        bail!("--stdout takes exactly one input file");
    };
    let storage = Storage::new(input, config)?;
    match storage.load() {
        Ok(converted) => {
            converted
                .write_to(io::stdout().lock())
                .context("Failed to write to stdout")?;
            Ok(0)
        }
        Err(e)
            if e.downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_unrecognized) =>
        {
            eprintln!("{}: Unrecognized file.", input.display());
            Ok(config.unrecognized_exit_code)
        }
        Err(e) => Err(e),
    }
}
