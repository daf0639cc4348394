use glance_lib::{Distro, Entry};
use serde::Serialize;
use std::process::ExitCode;

/// JSON report shape: the resolved identity plus the probed entries, in
/// display order.
#[derive(Serialize)]
struct Report<'a> {
    distro: Distro,
    entries: &'a [Entry],
}

pub fn print_json(distro: Distro, entries: &[Entry]) -> ExitCode {
    let report = Report { distro, entries };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("glance: failed to serialize entries: {err}");
            ExitCode::FAILURE
        }
    }
}
