use std::{
    fs,
    io::{self, Read, Write},
    process::ExitCode
};

use clap::Parser;
use lichess2chess::{
    args::Args,
    model::store::{self, RegressionStore},
    pipeline
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    let store = match &args.dataset {
        Some(path) => match RegressionStore::from_file(path) {
            Ok(store) => store,
            Err(e) => {
                // No partial or fallback model: a bad dataset aborts the run
                error!("failed to load regression dataset: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => store::bundled().clone()
    };

    let doc = match read_document(&args) {
        Ok(doc) => doc,
        Err(e) => {
            error!("failed to read input document: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = pipeline::annotate_document(&doc, &store);
    info!(
        kind = ?result.context.kind,
        time_control = %result.context.time_control,
        inserted = result.inserted,
        "annotated document"
    );

    if let Err(e) = write_document(&args, &result.html) {
        error!("failed to write annotated document: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn read_document(args: &Args) -> io::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut doc = String::new();
            io::stdin().read_to_string(&mut doc)?;
            Ok(doc)
        }
    }
}

fn write_document(args: &Args, html: &str) -> io::Result<()> {
    match &args.output {
        Some(path) => fs::write(path, html),
        None => io::stdout().write_all(html.as_bytes())
    }
}
