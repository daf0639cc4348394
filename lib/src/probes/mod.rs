//! The probes behind every display entry.
//!
//! Each probe is a self-contained routine producing one labeled fact.
//! Probes never fail: a fact that cannot be determined yields `None`
//! and the orchestrator substitutes the configured placeholder. They
//! also never interact with each other; the collection order here is
//! exactly the display order.

use serde::Serialize;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, ProcessRefreshKind, RefreshKind, System};

use crate::config::GlanceConfig;
use crate::distro::HostSignals;

mod hardware;
mod platform;
mod session;

/// One probed fact, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Display label (e.g. `"CPU"`).
    pub label: &'static str,
    /// The formatted value, or `None` when not detected.
    pub value: Option<String>,
}

impl Entry {
    pub(crate) fn new(label: &'static str, value: Option<String>) -> Self {
        Entry { label, value }
    }
}

/// Runs every entry probe enabled by `config`, in display order.
///
/// All probes share one [`System`] snapshot refreshed up front, so the
/// cost of a run does not grow with the number of enabled entries.
pub fn collect(config: &GlanceConfig, signals: &HostSignals) -> Vec<Entry> {
    let sys = System::new_with_specifics(
        RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything())
            .with_processes(ProcessRefreshKind::nothing()),
    );

    let mut entries = Vec::new();
    let mut run = |name: &str, entry: fn(&System, &HostSignals) -> Entry| {
        if config.entry_enabled(name) {
            entries.push(entry(&sys, signals));
        }
    };

    run("user", |_, _| session::user());
    run("hostname", |_, _| session::hostname());
    run("distro", |_, s| platform::distro(s));
    run("kernel", |_, _| platform::kernel());
    run("uptime", |_, _| platform::uptime());
    run("load_average", |_, _| platform::load_average());
    run("processes", |sys, _| platform::processes(sys));
    run("shell", |_, _| session::shell());
    run("terminal", |_, _| session::terminal());
    run("desktop_environment", |_, _| session::desktop_environment());
    run("window_manager", |_, _| session::window_manager());
    run("cpu", |sys, _| hardware::cpu(sys));
    run("memory", |sys, _| hardware::memory(sys));
    run("disk", |_, _| hardware::disk());

    tracing::debug!(entries = entries.len(), "collected probe entries");
    entries
}

/// Format bytes into human-readable units (KiB, MiB, GiB, TiB).
pub(crate) fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;
    const TIB: u64 = GIB * 1024;

    if bytes >= TIB {
        format!("{:.1} TiB", bytes as f64 / TIB as f64)
    } else if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} bytes")
    }
}

/// Format uptime in seconds to a human-readable string.
pub(crate) fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day{}", days, if days == 1 { "" } else { "s" }));
    }
    if hours > 0 {
        parts.push(format!(
            "{} hour{}",
            hours,
            if hours == 1 { "" } else { "s" }
        ));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }

    if parts.is_empty() {
        "< 1 minute".to_string()
    } else {
        parts.join(", ")
    }
}
