use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use pt_app::{evaluate, parse_inputs, summarize_source, AppResult, EvaluationReport};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "proptab CLI - tabulated property correlation evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the three property indices for x, y, z
    Eval {
        /// Input values `x y z`; read from one stdin line when omitted
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
        /// Directory containing the data sources
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which data source a value of x selects and its key range
    Inspect {
        /// Primary input value
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Directory containing the data sources
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            values,
            data_dir,
            json,
        } => cmd_eval(&values, &data_dir, json),
        Commands::Inspect { x, data_dir } => cmd_inspect(x, &data_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_eval(values: &[String], data_dir: &Path, json: bool) -> AppResult<()> {
    let line = if values.is_empty() {
        prompt_line()?
    } else {
        values.join(" ")
    };
    let (x, y, z) = parse_inputs(&line)?;
    debug!(x, y, z, "inputs parsed");

    let report = evaluate(x, y, z, data_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn cmd_inspect(x: f64, data_dir: &Path) -> AppResult<()> {
    let summary = summarize_source(x, data_dir)?;
    println!("Source: {}.dat", summary.source);
    println!("  Records: {}", summary.entries);
    println!("  Key range: {} .. {}", summary.min_key, summary.max_key);
    Ok(())
}

fn prompt_line() -> AppResult<String> {
    print!("Enter x, y, z: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_report(report: &EvaluationReport) {
    println!("Using data from {}.dat", report.source);
    println!("fun1(x, y, z) = {}", report.fun1);
    println!("fun2(x, y, z) = {}", report.fun2);
    println!("fun3(x, y, z) = {}", report.fun3);
}
