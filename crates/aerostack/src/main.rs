//! `aerodeck` - CLI for aerostack
//!
//! This binary runs the interactive operations dashboard and exposes the
//! same order data through plain command-line output.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use aerostack::cli::{
    Cli, Command, ConfigCommand, DashCommand, OrdersCommand, OutputFormat, StatsCommand,
};
use aerostack::logging::Verbosity;
use aerostack::{init_logging, source, ui, Config, DataSet, OrderQuery, OrderStats};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut verbosity = cli.verbosity();
    let config_path = cli.config.clone();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Dash(DashCommand::default()));

    // The dashboard owns the screen; keep logs out of it unless asked.
    if matches!(command, Command::Dash(_)) && verbosity == Verbosity::Normal {
        verbosity = Verbosity::Quiet;
    }
    init_logging(verbosity);

    let config = Config::load_from(config_path).context("could not load configuration")?;

    match command {
        Command::Dash(cmd) => handle_dash(&config, &cmd),
        Command::Orders(cmd) => handle_orders(&config, &cmd),
        Command::Stats(cmd) => handle_stats(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Load the record set, honoring a per-command data file override.
fn load_data(config: &Config, override_path: Option<&Path>) -> anyhow::Result<DataSet> {
    let path = override_path.or(config.data.data_path.as_deref());
    let data = source::select(path).load()?;
    Ok(data)
}

fn handle_dash(config: &Config, cmd: &DashCommand) -> anyhow::Result<()> {
    let data = load_data(config, cmd.data.as_deref())?;
    ui::run(config, data)?;
    Ok(())
}

fn handle_orders(config: &Config, cmd: &OrdersCommand) -> anyhow::Result<()> {
    let data = load_data(config, cmd.data.as_deref())?;
    let query = OrderQuery::new(cmd.search.clone(), cmd.status_filter());
    let filtered = query.filter(&data.orders);

    match cmd.format {
        OutputFormat::Plain => {
            for order in &filtered {
                println!(
                    "{}\t{}\t{}\t{}",
                    order.id, order.customer, order.destination, order.status
                );
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<9} {:<15} {:<22} {:<7} {:<11} {:<9} {:<8} {:<8}",
                "Order ID", "Customer", "Destination", "Drone", "Status", "ETA", "Distance",
                "Priority"
            );
            println!("{}", "-".repeat(96));
            if filtered.is_empty() {
                println!("No orders found");
            }
            for order in &filtered {
                println!(
                    "{:<9} {:<15} {:<22} {:<7} {:<11} {:<9} {:<8} {:<8}",
                    order.id,
                    order.customer,
                    order.destination,
                    order.drone_id,
                    order.status.label(),
                    order.estimated_time,
                    order.distance,
                    order.priority
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
    }
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let data = load_data(config, cmd.data.as_deref())?;
    let stats = OrderStats::collect(&data.orders);

    if cmd.json {
        let report = serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Order statistics");
        println!("----------------");
        println!("Total orders:  {}", stats.total);
        println!("In transit:    {}", stats.in_transit);
        println!("Pending:       {}", stats.pending);
        println!("Delivered:     {}", stats.delivered);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[UI]");
                println!("  Tick rate (ms):   {}", config.ui.tick_rate_ms);
                println!();
                println!("[Map]");
                println!("  Center:           ({}, {})", config.map.center_lon, config.map.center_lat);
                println!("  Zoom:             {}", config.map.zoom);
                println!();
                println!("[Data]");
                match &config.data.data_path {
                    Some(path) => println!("  Data file:        {}", path.display()),
                    None => println!("  Data file:        (built-in demonstration set)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(PathBuf::from(&path))) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
