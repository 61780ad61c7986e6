use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use sharecheck::cli::{Cli, Commands, DEFAULT_TEST_CASES, Format};
use sharecheck::commands::{analyze_files, decode_digits, render_json, render_text};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sharecheck=warn".into()),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let options = cli.command.analysis_options();

    match cli.command {
        Commands::Analyze { files, format, .. } => {
            let files = if files.is_empty() {
                DEFAULT_TEST_CASES.iter().map(PathBuf::from).collect()
            } else {
                files
            };

            let reports = analyze_files(&files, &options.unwrap_or_default());
            let failed = reports.iter().filter(|r| r.result.is_err()).count();

            match format {
                Format::Text => {
                    for report in &reports {
                        let label = report.path.display().to_string();
                        match &report.result {
                            Ok(r) => println!("{}", render_text(&label, r)),
                            Err(e) => eprintln!("Error in file {label}: {e:#}\n"),
                        }
                    }
                }
                Format::Json => println!("{}", render_json(&reports)?),
            }

            if failed > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Decode { base, digits } => {
            println!("{}", decode_digits(&base, &digits)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
