use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ifc_filter::export::{export_csv, export_json};
use ifc_filter::filter::IfcEntityFilter;

#[derive(Parser, Debug)]
#[command(name = "ifc-filter")]
#[command(about = "IFC Filter - split property lines from geometry lines in IFC files")]
#[command(version)]
struct Args {
    /// Path to IFC file
    #[arg(required = true)]
    file: String,

    /// Export run statistics to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export run statistics to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Fail with a non-zero exit code when filtering does not complete
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let filter = match IfcEntityFilter::new(&args.file) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            return Err(err.into());
        }
    };

    if !args.strict && args.csv.is_none() && args.json.is_none() {
        println!("{}", filter.filter());
        return Ok(());
    }

    let report = match filter.try_filter() {
        Ok(report) => report,
        Err(err) if args.strict => return Err(err.into()),
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            tracing::warn!(error = %err, "filtering incomplete");
            println!("{}", filter.filtered_path().display());
            return Ok(());
        }
    };

    if let Some(csv_path) = &args.csv {
        export_csv(&report, csv_path)?;
        eprintln!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&report, json_path)?;
        eprintln!("Exported to JSON: {}", json_path.display());
    }

    println!("{}", filter.filtered_path().display());
    Ok(())
}
