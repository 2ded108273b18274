//! csv-taster CLI - column type inference for delimited files

use clap::Parser;
use csv_taster::Taster;
use std::path::PathBuf;
use std::process::ExitCode;

/// Infer column types from a sample of a delimited file.
///
/// Streams the file once, keeps a uniform random sample of its rows, and
/// reports the narrowest type every column consistently satisfies.
#[derive(Parser, Debug)]
#[command(name = "csv-taster")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file to taste
    file: Option<PathBuf>,

    /// Number of lines to sample (unless the file is smaller)
    #[arg(long, default_value = "1000")]
    lines: usize,

    /// Column delimiter
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Treat the first record as data instead of a header
    #[arg(long)]
    noheader: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(file) = args.file.as_ref() else {
        println!("Please provide the path to the file to be parsed.");
        return ExitCode::SUCCESS;
    };

    match taste_file(file, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error processing {}: {}", file.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn taste_file(path: &PathBuf, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.delimiter.is_ascii() {
        return Err(format!("delimiter {:?} is not a single byte", args.delimiter).into());
    }

    let mut taster = Taster::new();
    taster
        .sample_size(args.lines)
        .delimiter(args.delimiter as u8)
        .has_header(!args.noheader);

    let report = taster.taste_path(path)?;
    print!("{}", report);

    Ok(())
}
