use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "lichess2chess",
    about = "Annotates Lichess HTML documents with estimated Chess.com equivalent ratings"
)]
pub struct Args {
    /// HTML document to annotate. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Write the annotated document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Regression dataset (JSON) overriding the bundled one.
    /// Maps category names to either a coefficient array or a
    /// {"type": ..., "params": [...]} object.
    #[arg(short, long, env = "L2C_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
