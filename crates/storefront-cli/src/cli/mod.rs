//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use storefront_core::domain::ApiContext;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "storefront",
    bin_name = "storefront",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Catalog promotion scope checks and dashboard statistics",
    long_about = "Storefront validates catalog promotion scope configurations \
                  the way the shop and admin APIs do, and summarises dashboard \
                  sales figures.",
    after_help = "EXAMPLES:\n\
        \x20 storefront scope validate scope.json --section admin\n\
        \x20 storefront scope validate scope.toml --uri /api/v2/shop/catalog-promotions\n\
        \x20 storefront stats --total-sales 12500 --orders 4 --customers 2\n\
        \x20 storefront completions bash > /usr/share/bash-completion/completions/storefront",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Catalog promotion scope operations.
    #[command(about = "Catalog promotion scope operations", subcommand)]
    Scope(ScopeCommands),

    /// Summarise dashboard statistics.
    #[command(
        about = "Summarise dashboard statistics",
        after_help = "EXAMPLES:\n\
            \x20 storefront stats --total-sales 100 --orders 3 --customers 1\n\
            \x20 storefront stats --total-sales 12500 --orders 4 --customers 2 --channel WEB_US"
    )]
    Stats(StatsArgs),

    /// Initialise a Storefront configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 storefront init\n\
            \x20 storefront init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 storefront completions bash > ~/.local/share/bash-completion/completions/storefront\n\
            \x20 storefront completions zsh  > ~/.zfunc/_storefront"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Storefront configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 storefront config get sections.shop_prefix\n\
            \x20 storefront config list"
    )]
    Config(ConfigCommands),
}

// ── scope ─────────────────────────────────────────────────────────────────────

/// Subcommands for `storefront scope`.
#[derive(Debug, Subcommand)]
pub enum ScopeCommands {
    /// Validate a "for products" scope configuration file.
    #[command(
        visible_alias = "check",
        after_help = "EXAMPLES:\n\
            \x20 storefront scope validate scope.json\n\
            \x20 storefront scope validate scope.json --section shop --product MUG"
    )]
    Validate(ValidateArgs),
}

/// Arguments for `storefront scope validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Scope configuration file (.json or .toml).
    #[arg(value_name = "FILE", help = "Scope configuration file (.json or .toml)")]
    pub file: PathBuf,

    /// API section to validate for.
    #[arg(
        short = 's',
        long = "section",
        value_enum,
        conflicts_with = "uri",
        help = "API section the request comes from [default: admin]"
    )]
    pub section: Option<Section>,

    /// Request path to resolve the section from.
    #[arg(
        short = 'u',
        long = "uri",
        value_name = "PATH",
        help = "Resolve the section from a request path"
    )]
    pub uri: Option<String>,

    /// Extra product codes known to the catalog.
    #[arg(
        short = 'p',
        long = "product",
        value_name = "CODE",
        help = "Product code known to the catalog (repeatable)"
    )]
    pub products: Vec<String>,
}

/// API sections selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Section {
    Shop,
    #[value(alias = "management")]
    Admin,
    Other,
}

impl From<Section> for ApiContext {
    fn from(section: Section) -> Self {
        match section {
            Section::Shop => ApiContext::ShopFacing,
            Section::Admin => ApiContext::ManagementFacing,
            Section::Other => ApiContext::Other,
        }
    }
}

// ── stats ─────────────────────────────────────────────────────────────────────

/// Arguments for `storefront stats`.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Total sales in minor units (cents).
    #[arg(
        long = "total-sales",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Total sales in minor units"
    )]
    pub total_sales: i64,

    /// Number of new orders.
    #[arg(
        long = "orders",
        value_name = "COUNT",
        allow_negative_numbers = true,
        help = "Number of new orders"
    )]
    pub orders: i64,

    /// Number of new customers.
    #[arg(
        long = "customers",
        value_name = "COUNT",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Number of new customers"
    )]
    pub customers: i64,

    /// Sales channel the figures belong to.
    #[arg(long = "channel", value_name = "CODE", help = "Sales channel code")]
    pub channel: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `storefront init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `storefront completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `storefront config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `sections.shop_prefix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
