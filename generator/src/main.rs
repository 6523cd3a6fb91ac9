mod cli;

use std::process::ExitCode;

use clap::Parser;
use nxdl_docgen::{
    generate_file, FigureLocator, GenerateOptions, ManualLayout, NoFigures, SphinxFigures,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    setup_logging(cli.verbose);

    let figures: Box<dyn FigureLocator> = match &cli.source_root {
        Some(root) => Box::new(SphinxFigures::new(root)),
        None => Box::new(NoFigures),
    };
    let options = GenerateOptions {
        allow_dtd: cli.allow_dtd,
    };
    let rst = match generate_file(&cli.input, &ManualLayout::nexus(), figures.as_ref(), options) {
        Ok(document) => document.render(),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cli.output {
        Some(output) => {
            if let Err(e) = std::fs::write(output, rst) {
                eprintln!("Error: failed to write {}: {e}", output.display());
                return ExitCode::FAILURE;
            }
        }
        None => print!("{rst}"),
    }
    ExitCode::SUCCESS
}
