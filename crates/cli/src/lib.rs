mod render;
pub mod util;

use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tree_filter::{TreeFilter, Value};

use crate::util::{CliResult, map_filter_error, map_plain_data_error, read_input};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Project a JSON document onto an attribute selector.
#[derive(Parser, Debug, Clone)]
#[command(name = "tree-filter", version, about)]
pub struct Cli {
    /// Selector, e.g. `name,environments[id,last_deploy]`
    #[arg(value_name = "SELECTOR")]
    pub selector: String,
    /// JSON document to read; stdin when omitted or `-`
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,
    /// Print the parsed selector before the result
    #[arg(long)]
    pub show_selector: bool,
    /// Disable coloured text output
    #[arg(long)]
    pub no_color: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        owo_colors::set_override(false);
    }
    let input = read_input(cli.input.as_deref())?;
    let output = execute(&cli, &input)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

/// Parse `input` as JSON, filter it and render the result.
pub fn execute(cli: &Cli, input: &str) -> CliResult<String> {
    let document: serde_json::Value =
        serde_json::from_str(input).map_err(|err| format!("invalid JSON input: {err}"))?;

    let filter = TreeFilter::new(cli.selector.as_str());
    debug!(?filter, "applying selector");
    let filtered = filter
        .filter(&Value::from(document))
        .map_err(|err| map_filter_error(filter.source(), err))?;
    let projected = serde_json::Value::try_from(&filtered).map_err(map_plain_data_error)?;

    let mut output = String::new();
    if cli.show_selector {
        writeln!(output, "{filter:?}")?;
    }
    match cli.format {
        OutputFormat::Json => output.push_str(&render::render_json(&projected, cli.compact)?),
        OutputFormat::Text => output.push_str(&render::render_text(&projected)),
    }
    Ok(output)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}
