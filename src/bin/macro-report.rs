use clap::Parser;
use clap::builder::PossibleValuesParser;
use macro_report::{Error, Registry, loader};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "macro-report",
    version,
    about = "Analyze macro-economic data from CSV files"
)]
struct Cli {
    /// Paths to one or more CSV files with economic data
    #[arg(long, num_args = 1.., required = true, value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Type of report to generate
    #[arg(long, value_name = "NAME", value_parser = report_names())]
    report: String,
}

// Bad report names are rejected by argument parsing itself (exit code 2,
// valid names shown), before any file I/O.
fn report_names() -> PossibleValuesParser {
    PossibleValuesParser::new(Registry::built_in().names())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.downcast_ref::<Error>().is_some() {
                eprintln!("Error: {e}");
            } else {
                eprintln!("Unexpected error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Progress goes to stderr; stdout carries only the final table.
    eprintln!("Reading {} file(s)...", cli.files.len());
    let dataset = loader::load_all(&cli.files)?;
    eprintln!("Loaded {} records", dataset.len());

    let reporter = Registry::built_in().create(&cli.report)?;
    let data = reporter.generate(&dataset)?;
    println!("\n{}", reporter.format(&data));
    Ok(())
}
