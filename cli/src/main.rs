use clap::Parser;
use glance_lib::{Distro, GlanceConfig, Output, probes};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

mod output;

/// Display system information beside your distribution's logo
#[derive(Parser)]
#[command(name = "glance", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Output entries as JSON instead of the logo block
    #[arg(long)]
    json: bool,

    /// Use an alternate configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render as a specific distribution instead of detecting one
    #[arg(long, value_name = "ID")]
    distro: Option<String>,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
DISTRIBUTION IDS:
  --distro accepts the catalogue ids, e.g. arch, debian, fedora, ubuntu,
  linux_mint, mac_os, nix_os, free_bsd, windows. Detection is automatic
  when the flag is omitted.

CONFIGURATION:
  Read from ~/.config/glance/config.toml when present. Recognized keys:
  honor_ansi_color, use_unicode, not_detected, and an [entries] table of
  per-entry booleans (user, hostname, distro, kernel, uptime, ...).
";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match GlanceConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("glance: {err}");
            return ExitCode::FAILURE;
        }
    };

    let forced = match cli.distro.as_deref().map(Distro::from_str).transpose() {
        Ok(forced) => forced,
        Err(_) => {
            eprintln!(
                "glance: unknown distribution id {:?}; see --help for the catalogue",
                cli.distro.unwrap_or_default()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut display = match forced {
        Some(distro) => Output::with_distro(&config, distro),
        None => Output::new(&config),
    };
    let entries = probes::collect(&config, display.signals());

    if cli.json {
        return output::print_json(display.distro(), &entries);
    }

    for entry in &entries {
        display.append_entry(entry);
    }
    display.print();
    ExitCode::SUCCESS
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
