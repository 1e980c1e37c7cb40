//! Command-line interface for paramlimit.

use clap::Parser;
use std::io::Write;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::{no_limit_is_set, parse_excludes, Limits, Options};
use crate::report::{self, OutputFormat};
use crate::runner::Runner;
use crate::walk::Target;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Flag Go functions that take too many parameters.
///
/// Limits can be set separately for exported (public) and unexported
/// (private) functions. A path ending in `/...` is checked recursively.
#[derive(Parser, Debug)]
#[command(name = "paramlimit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// Comma separated list of file patterns to exclude
    #[arg(long, default_value = "")]
    pub excludes: String,

    /// Maximum number of parameters
    #[arg(long)]
    pub max: Option<usize>,

    /// Maximum number of parameters for private functions
    #[arg(long = "private-max")]
    pub private_max: Option<usize>,

    /// Maximum number of parameters for public functions
    #[arg(long = "public-max")]
    pub public_max: Option<usize>,

    /// Set exit status to 1 if any issues are found
    #[arg(long = "set_exit_status")]
    pub set_exit_status: bool,

    /// Include test files in analysis
    #[arg(long)]
    pub tests: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Resolve flags into run options.
    pub fn options(&self) -> crate::Result<Options> {
        Ok(
            Options::new(Limits::resolve(self.max, self.private_max, self.public_max))
                .exclude_patterns(parse_excludes(&self.excludes)?)
                .include_tests(self.tests),
        )
    }

    pub fn targets(&self) -> Vec<Target> {
        self.paths.iter().map(|p| Target::parse(p)).collect()
    }
}

/// Install the stderr log subscriber. `RUST_LOG` applies unless `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the check and print the report to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let color = colored::control::SHOULD_COLORIZE.should_colorize();
    execute(cli, &mut out, color)
}

/// Run the check, writing an uncolored report to `out`, and return the exit code.
pub fn run_to<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<i32> {
    execute(cli, out, false)
}

fn execute<W: Write>(cli: &Cli, out: &mut W, color: bool) -> anyhow::Result<i32> {
    if no_limit_is_set(&[cli.max, cli.private_max, cli.public_max]) {
        warn!("no parameter limit set; use --max, --private-max or --public-max");
    }

    let runner = Runner::new(cli.options()?);
    let summary = runner.run(&cli.targets())?;

    report::write_report(out, &summary, cli.format, color)?;

    if summary.has_issues() && cli.set_exit_status {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
