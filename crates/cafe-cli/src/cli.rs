//! CLI argument definitions for the café ordering tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cafe_cli::item_spec::ItemSpec;

#[derive(Parser)]
#[command(
    name = "cafe",
    version,
    about = "Browse the café menu and place build-your-own orders",
    long_about = "Browse the café menu and place build-your-own orders.\n\n\
                  The menu is fetched from the order service (or read from a records\n\
                  file), items are built from option selections, and the cart is\n\
                  submitted as a single order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Order service base URL (overrides the config file).
    #[arg(long = "api-url", env = "CAFE_API_BASE_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Config file (default: the platform config folder's cafe/config.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include customer phone numbers in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the menu, grouped and bucketed for display.
    Menu(MenuArgs),

    /// Build items and submit them as one order.
    Order(OrderArgs),

    /// List category kinds and their group order.
    Categories,
}

#[derive(Parser)]
pub struct MenuArgs {
    /// Read menu records from a JSON file instead of the order service.
    #[arg(long = "records", value_name = "FILE")]
    pub records: Option<PathBuf>,
}

#[derive(Parser)]
pub struct OrderArgs {
    /// Item to add, as `category:Group=opt1,opt2;Group2=opt`. Repeatable.
    #[arg(long = "item", value_name = "ITEM", required = true)]
    pub items: Vec<ItemSpec>,

    /// Customer name.
    #[arg(long = "name")]
    pub name: String,

    /// Customer phone number.
    #[arg(long = "phone")]
    pub phone: String,

    /// Read menu records from a JSON file instead of the order service.
    #[arg(long = "records", value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Print the order payload without sending it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
