//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::order::OrderStatus;
use crate::query::StatusFilter;

/// Dashboard command arguments.
#[derive(Debug, Default, Args)]
pub struct DashCommand {
    /// Path to a JSON data file overriding the built-in demonstration set
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

/// Orders command arguments.
#[derive(Debug, Args)]
pub struct OrdersCommand {
    /// Search text matched against order id, customer, and destination
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Keep only orders with this status
    #[arg(short = 't', long, value_enum)]
    pub status: Option<StatusArg>,

    /// Path to a JSON data file overriding the built-in demonstration set
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl OrdersCommand {
    /// The status selector implied by the flags.
    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.status.map_or(StatusFilter::All, StatusFilter::from)
    }
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Path to a JSON data file overriding the built-in demonstration set
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Status argument for filtering order lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Orders awaiting pickup
    Pending,
    /// Orders on the way
    InTransit,
    /// Completed orders
    Delivered,
    /// Withdrawn orders
    Cancelled,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => Self::Only(OrderStatus::Pending),
            StatusArg::InTransit => Self::Only(OrderStatus::InTransit),
            StatusArg::Delivered => Self::Only(OrderStatus::Delivered),
            StatusArg::Cancelled => Self::Only(OrderStatus::Cancelled),
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}
