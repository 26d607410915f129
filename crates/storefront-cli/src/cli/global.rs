//! Flags shared by every `storefront` subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: warn by default, then info, debug, trace.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only errors and violations are printed; JSON reports still are.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors, violations and JSON reports"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Plain, uncoloured terminal output (also set by NO_COLOR)"
    )]
    pub no_color: bool,

    /// TOML file with section prefixes, catalog products and output settings.
    ///
    /// Must exist when given. Without it the per-user config file is read
    /// if present.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Storefront config file (TOML)"
    )]
    pub config: Option<PathBuf>,

    /// Report format on stdout.
    ///
    /// `json` also switches the stderr logs to JSON lines. `auto` defers
    /// to `output.format` from the config, then to whether stdout is a
    /// terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Report format: auto, human, plain or json"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of validation reports and statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Config value, else human on a terminal and plain when piped.
    #[default]
    Auto,
    /// Coloured lines with status symbols.
    Human,
    Plain,
    /// A single JSON document per command, with JSON logs on stderr.
    Json,
}
