//! Command-line front end: convert an image into a pixel-art spreadsheet.
//!
//! ```sh
//! pixsheet sprite.png -o sprite.xlsx --size 64
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use pixsheet::{ConvertOptions, ResampleFilter, convert_with_progress};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert an image into an XLSX spreadsheet whose cells form a pixel-art mosaic
#[derive(Parser, Debug)]
#[command(name = "pixsheet", version)]
struct Args {
    /// Input image (PNG, JPEG, GIF, BMP, ...)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output spreadsheet path
    #[arg(short, long, value_name = "OUTPUT", default_value = "output.xlsx")]
    output: PathBuf,

    /// Maximum number of cells along the longer side
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..=16_384)
    )]
    size: u32,

    /// Column width in character units
    #[arg(long, default_value_t = 2.0)]
    cell_width: f64,

    /// Row height in points
    #[arg(long, default_value_t = 14.0)]
    row_height: f64,

    /// Resampling filter
    #[arg(long, value_enum, default_value = "lanczos3")]
    filter: FilterArg,

    /// Worksheet name
    #[arg(long, default_value = "Sheet1")]
    sheet_name: String,

    /// Do not print per-row progress
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Resampling filter options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Linear (tent) filter
    Triangle,
    /// Cubic Catmull-Rom filter
    CatmullRom,
    /// Gaussian filter
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<FilterArg> for ResampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Triangle => ResampleFilter::Triangle,
            FilterArg::CatmullRom => ResampleFilter::CatmullRom,
            FilterArg::Gaussian => ResampleFilter::Gaussian,
            FilterArg::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let options = ConvertOptions::default()
        .with_max_size(args.size)
        .with_cell_width(args.cell_width)
        .with_row_height(args.row_height)
        .with_filter(args.filter.into())
        .with_sheet_name(args.sheet_name);

    let quiet = args.quiet;
    let result = convert_with_progress(&args.input, &args.output, &options, |p| {
        if !quiet {
            println!("Processed row {}/{}", p.completed, p.total);
        }
    });

    match result {
        Ok(summary) => {
            println!("Saved to: {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
