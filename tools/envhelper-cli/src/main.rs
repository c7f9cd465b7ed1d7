//! envhelper: read typed environment variables from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Required lookup: exits 1 when PORT is unset or not an integer
//! envhelper get PORT --type int
//!
//! # Defaulted lookup, JSON output (log lines move to stderr)
//! envhelper get PATH2 --type int --default 123 --format json
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use envhelper_cli::app;
use envhelper_cli::config::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    app::init_logging(&cli);
    app::execute(&cli, &mut std::io::stdout().lock())
}
