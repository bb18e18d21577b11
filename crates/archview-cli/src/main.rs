use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use archview::{ArchviewOptions, run_main};
use archview_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "archview",
    about = "archview: render an architecture world as a Graphviz DOT graph",
    version
)]
pub struct Cli {
    /// World JSON file to render ('-' reads stdin)
    #[arg(value_name = "WORLD")]
    world: String,

    /// TOML file with render options (flags override it)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<String>,

    /// Disable per-component colors
    #[arg(long = "nocolor", default_value_t = false)]
    no_color: bool,

    /// Node clustering: 'none' or 'class'
    #[arg(long = "cluster", value_name = "MODE")]
    cluster: Option<String>,

    /// Prefix to strip from node labels
    #[arg(long = "trim-prefix", value_name = "PREFIX")]
    trim_prefix: Option<String>,

    /// Documentation base URL for node links
    #[arg(long = "doc-url", value_name = "URL")]
    doc_url: Option<String>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ArchviewOptions {
        world: args.world,
        config: args.config,
        output: args.output,
        no_color: args.no_color,
        cluster: args.cluster,
        trim_prefix: args.trim_prefix,
        doc_url: args.doc_url,
    };

    let written = run_main(&opts)?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, written, "complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}
