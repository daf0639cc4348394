//! The output orchestrator.
//!
//! Owns the accumulated display lines for one run: resolves the host
//! identity exactly once at construction, colorizes each appended
//! `label: value` pair, and hands everything to the compositor exactly
//! once at the end. Terminal width is sampled once per print; a resize
//! mid-print is not reacted to.

use std::io::{self, IsTerminal, Write};

use crate::config::GlanceConfig;
use crate::distro::{Distro, HostSignals, detect};
use crate::logo::CLEAR;
use crate::probes::Entry;
use crate::{layout, logo};

pub struct Output<'a> {
    config: &'a GlanceConfig,
    signals: HostSignals,
    distro: Distro,
    lines: Vec<String>,
}

impl<'a> Output<'a> {
    /// Resolves the host identity and prepares an empty line list.
    pub fn new(config: &'a GlanceConfig) -> Self {
        Self::from_signals(config, HostSignals::gather())
    }

    /// Like [`Output::new`], but detection runs against the supplied
    /// signals. This is the testable core of construction.
    pub fn from_signals(config: &'a GlanceConfig, signals: HostSignals) -> Self {
        let distro = detect(&signals);
        Self::assemble(config, signals, distro)
    }

    /// Skips detection entirely and renders as the given identity.
    pub fn with_distro(config: &'a GlanceConfig, distro: Distro) -> Self {
        Self::assemble(config, HostSignals::gather(), distro)
    }

    fn assemble(config: &'a GlanceConfig, signals: HostSignals, distro: Distro) -> Self {
        tracing::info!(%distro, "rendering as");
        Output {
            config,
            signals,
            distro,
            lines: Vec::new(),
        }
    }

    /// The resolved registry entry.
    pub fn distro(&self) -> Distro {
        self.distro
    }

    /// The signals gathered at construction.
    pub fn signals(&self) -> &HostSignals {
        &self.signals
    }

    /// The accent color to use instead of the built-in palette, when
    /// the host advertises one and configuration honors it.
    fn accent(&self) -> Option<&str> {
        if self.config.honor_ansi_color {
            self.signals.ansi_color.as_deref()
        } else {
            None
        }
    }

    fn active_logo(&self) -> &'static logo::Logo {
        self.distro.logo(self.config.use_unicode)
    }

    /// Appends one display line, colorizing the label with the primary
    /// palette slot.
    pub fn append(&mut self, label: &str, value: &str) {
        let palette = self.active_logo().resolve_palette(self.accent());
        let color = palette.first().map(String::as_str).unwrap_or_default();
        self.lines.push(format!("{color}{label}:{CLEAR} {value}"));
    }

    /// Appends a probe entry, substituting the configured placeholder
    /// for values the probe could not determine.
    pub fn append_entry(&mut self, entry: &Entry) {
        let value = entry
            .value
            .as_deref()
            .unwrap_or(&self.config.not_detected);
        self.append(entry.label, value);
    }

    /// Composes the final block against the given terminal width.
    pub fn render(&self, terminal_width: Option<usize>) -> String {
        layout::compose(
            self.active_logo(),
            &self.lines,
            terminal_width,
            self.accent(),
        )
    }

    /// Renders and writes the block to standard output.
    ///
    /// A write failure here is cosmetic, not fatal: some terminals
    /// cannot encode the logo glyphs. The block is replaced by a plain
    /// diagnostic on standard error and the process goes on to exit 0.
    pub fn print(&self) {
        let block = self.render(terminal_width());
        let mut stdout = io::stdout().lock();
        let outcome = stdout
            .write_all(block.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .and_then(|()| stdout.flush());
        if let Err(err) = outcome {
            tracing::warn!(%err, "display block rejected by stdout");
            eprintln!("glance: your terminal rejected the display block ({err})");
            eprintln!("glance: re-run with --json for a plain report");
        }
    }
}

/// Samples the terminal column count, once.
///
/// `None` when standard output is not a terminal or the size cannot be
/// queried; the compositor then skips truncation entirely.
pub fn terminal_width() -> Option<usize> {
    if !io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns as usize)
}
