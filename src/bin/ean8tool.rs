//! ean8tool - encode, decode and check EAN-8 barcodes stored as PBM images.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_ean8::decoder::{DecodeOptions, Sampling};
use rust_ean8::symbology::{check_digit, validate};
use rust_ean8::tools::{self, config};
use rust_ean8::{BarcodeGeometry, IdentifierError};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "ean8tool", version, about = "EAN-8 barcode tools for PBM (P1) images")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render an identifier into a PBM file
    Encode {
        /// 8-digit EAN-8 identifier, check digit included
        identifier: String,
        /// Output file, must end in .pbm
        output: PathBuf,
        /// Quiet zone in pixels [env: EAN8_SPACING, default 4]
        #[arg(long, allow_negative_numbers = true)]
        spacing: Option<i64>,
        /// Pixel width of one module [env: EAN8_BAR_WIDTH, default 3]
        #[arg(long, allow_negative_numbers = true)]
        bar_width: Option<i64>,
        /// Bar height in pixels [env: EAN8_HEIGHT, default 50]
        #[arg(long, allow_negative_numbers = true)]
        height: Option<i64>,
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Decode one or more PBM files
    Decode {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Infer module width as image width / 67 [env: EAN8_LEGACY_SAMPLING]
        #[arg(long)]
        legacy_sampling: bool,
        /// Accept digits whose check digit does not validate
        #[arg(long)]
        no_verify: bool,
    },
    /// Validate an identifier and print its expected check digit
    Check {
        /// 8-digit identifier
        identifier: String,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    // a second install only happens in tests; keep the first
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Encode {
            identifier,
            output,
            spacing,
            bar_width,
            height,
            force,
        } => encode_cmd(&identifier, &output, spacing, bar_width, height, force),
        Command::Decode {
            files,
            legacy_sampling,
            no_verify,
        } => decode_cmd(&files, legacy_sampling, no_verify),
        Command::Check { identifier } => check_cmd(&identifier),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error! {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(
    identifier: &str,
    output: &Path,
    spacing: Option<i64>,
    bar_width: Option<i64>,
    height: Option<i64>,
    force: bool,
) -> Result<()> {
    let geometry = BarcodeGeometry::new(
        spacing.unwrap_or(config::default_spacing() as i64),
        bar_width.unwrap_or(config::default_bar_width() as i64),
        height.unwrap_or(config::default_height() as i64),
    )?;
    validate(identifier)?;
    if !tools::has_pbm_extension(output) {
        bail!("{}: the output file must have a .pbm extension", output.display());
    }

    if output.exists() && !force {
        let stdin = io::stdin();
        if !confirm_overwrite(output, &mut stdin.lock(), &mut io::stdout())? {
            bail!("{} was not overwritten", output.display());
        }
    }

    tools::encode_to_file(identifier, &geometry, output)
        .with_context(|| format!("failed to encode {identifier}"))?;
    println!("Barcode generated successfully: {}", output.display());
    Ok(())
}

fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, input: &mut R, out: &mut W) -> Result<bool> {
    write!(
        out,
        "The file {} already exists. Do you want to overwrite it? (Y/N) ",
        path.display()
    )?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).context("failed to read answer")?;
    Ok(matches!(answer.trim(), "Y" | "y"))
}

fn decode_cmd(files: &[PathBuf], legacy_sampling: bool, no_verify: bool) -> Result<()> {
    let sampling = if legacy_sampling {
        Sampling::HeaderWidth
    } else {
        config::default_sampling()
    };
    let options = DecodeOptions::default()
        .with_sampling(sampling)
        .with_checksum_verification(!no_verify);
    debug!(?options, count = files.len(), "decoding");

    let reports = tools::decode_files(files, &options);
    let mut failures = 0usize;
    for report in &reports {
        if files.len() > 1 {
            println!("{}:", report.path.display());
        }
        if let Some(bits) = &report.bitstring {
            println!("Binary sequence: {bits}");
        }
        match &report.result {
            Ok(decoded) => println!("Decoded identifier: {}", decoded.text()),
            Err(err) => {
                eprintln!("Error! {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} file(s) could not be decoded", reports.len());
    }
    Ok(())
}

fn check_cmd(identifier: &str) -> Result<()> {
    match validate(identifier) {
        Ok(id) => {
            println!("{id} is a valid EAN-8 identifier");
            Ok(())
        }
        Err(IdentifierError::ChecksumMismatch { expected, found }) => {
            bail!("{identifier} is invalid: check digit should be {expected}, found {found}")
        }
        Err(err) => {
            let digits: Vec<u8> = identifier.bytes().take(7).map(|b| b.wrapping_sub(b'0')).collect();
            if let Ok(payload) = <[u8; 7]>::try_from(digits.as_slice()) {
                if payload.iter().all(|&d| d <= 9) {
                    println!("Check digit for payload {}: {}", &identifier[..7], check_digit(&payload));
                }
            }
            Err(err.into())
        }
    }
}
