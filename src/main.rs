mod collectors;
mod colors;
mod config;
mod entries;
mod host;
mod logos;
mod models;
mod output;
mod severity;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use collectors::processes::Processes;
use config::Config;
use entries::Context;
use host::SystemHost;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rfetch", about = "System information beside an ASCII logo", version)]
struct Cli {
    /// Print entries as JSON (no colors, no logo) and exit
    #[arg(long)]
    json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    print_config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "rfetch", &mut io::stdout());
        return Ok(());
    }

    let cfg = Config::load(cli.config.as_deref());
    if cli.print_config {
        return run_print_config(&cfg, cli.config);
    }

    let processes = Processes::new();
    let ctx = Context { config: &cfg, host: &SystemHost, processes: &processes };
    let list = entries::collect(&ctx);
    tracing::info!(entries = list.len(), "probes complete");

    if cli.json {
        println!("{}", output::to_json(&list)?);
    } else {
        print!("{}", output::render(&logos::arch_linux::ARCH_LINUX, &list));
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run_print_config(cfg: &Config, explicit: Option<PathBuf>) -> Result<()> {
    let path = explicit
        .or_else(Config::config_path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("# Config: {}", path);
    println!();
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
