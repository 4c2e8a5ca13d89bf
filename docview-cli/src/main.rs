//! docview command-line tool.
//!
//! Usage:
//!   docview get config.json properties modbus unit --as integer
//!   docview merge defaults.json overrides.json
//!   docview status components.json

use anyhow::Result;
use clap::Parser;
use docview_cli::{Args, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args.command, &mut out)
}
