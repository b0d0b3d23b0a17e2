//! Project board console runner.
//!
//! # Responsibility
//! - Feed a command script (file or stdin) through `projboard_core::Console`.
//! - Optionally start file logging and dump the final snapshot as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use projboard_core::{core_version, default_log_level, init_logging, Console};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "projboard", version, about = "Drive a project board from a command script")]
struct Args {
    /// Script file to run; stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print the final project snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        init_logging(&args.log_level, log_dir).context("failed to initialize logging")?;
    }
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script `{}`", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read script from stdin")?;
            buffer
        }
    };

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock());
    console.run_script(&script)?;

    if args.json {
        let snapshot = console.board().store().snapshot();
        let mut out = console.into_output();
        serde_json::to_writer_pretty(&mut out, &snapshot).context("failed to write snapshot")?;
        writeln!(out)?;
    }
    Ok(())
}
