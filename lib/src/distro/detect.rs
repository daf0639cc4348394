//! Host identity resolution.
//!
//! Signals about the running host are unreliable and partially
//! overlapping: the kernel release can reveal a compatibility layer, the
//! platform name covers the BSD family, `/etc/os-release` carries the
//! primary id plus an `ID_LIKE` fallback chain, and a couple of
//! identities are only distinguishable by marker paths. [`detect`]
//! evaluates them in one strict order so identical signals always
//! resolve to the identical registry entry.

use std::fs;
use std::path::Path;
use sysinfo::System;

use super::Distro;

/// Marker substring in the kernel release of a Linux compatibility
/// layer running atop Windows. Matched case-sensitively.
const WSL_KERNEL_MARKER: &str = "Microsoft";

const OS_RELEASE_PATH: &str = "/etc/os-release";
const CRUNCHBANG_MARKER_PATH: &str = "/etc/lsb-release-crunchbang";
const ANDROID_APP_DIR: &str = "/system/app";
const ANDROID_PRIV_APP_DIR: &str = "/system/priv-app";

// ============================================================================
// os-release parsing
// ============================================================================

/// Fields of `/etc/os-release` glance cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    /// `ID=` value, lowercased.
    pub id: String,
    /// `ID_LIKE=` value, verbatim (space-separated id list).
    pub id_like: String,
    /// `PRETTY_NAME=` value.
    pub pretty_name: Option<String>,
    /// `NAME=` value.
    pub name: Option<String>,
    /// `VERSION_ID=` value.
    pub version_id: Option<String>,
    /// `ANSI_COLOR=` value, an SGR parameter string.
    pub ansi_color: Option<String>,
}

/// Parses os-release content from a string.
///
/// The file uses a shell-compatible variable assignment format:
/// ```text
/// ID=ubuntu
/// ID_LIKE=debian
/// PRETTY_NAME="Ubuntu 22.04.3 LTS"
/// ANSI_COLOR="0;35"
/// ```
///
/// Exposed for testing purposes.
pub fn parse_os_release_content(content: &str) -> OsRelease {
    let mut parsed = OsRelease::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim_matches('"').trim_matches('\'');

            match key {
                "ID" => parsed.id = value.to_lowercase(),
                "ID_LIKE" => parsed.id_like = value.to_string(),
                "PRETTY_NAME" => set_non_empty(&mut parsed.pretty_name, value),
                "NAME" => set_non_empty(&mut parsed.name, value),
                "VERSION_ID" => set_non_empty(&mut parsed.version_id, value),
                "ANSI_COLOR" => set_non_empty(&mut parsed.ansi_color, value),
                _ => {}
            }
        }
    }

    parsed
}

fn set_non_empty(slot: &mut Option<String>, value: &str) {
    if !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

// ============================================================================
// Host signals
// ============================================================================

/// Everything the detection chain consumes, gathered up front so the
/// resolution itself is pure and repeatable.
#[derive(Debug, Clone, Default)]
pub struct HostSignals {
    /// Kernel release string (e.g. `6.8.0-45-generic`).
    pub kernel_release: String,
    /// Platform name as reported at the OS level
    /// (`std::env::consts::OS`: `linux`, `macos`, `freebsd`, ...).
    pub platform: String,
    /// Host-reported distribution id, lowercased; empty when absent.
    pub distro_id: String,
    /// `ID_LIKE` fallback chain, space-separated; empty when absent.
    pub id_like: String,
    /// Host-advertised accent color (`ANSI_COLOR` from os-release).
    pub ansi_color: Option<String>,
    /// Parsed os-release fields, kept for the distro display entry.
    pub os_release: OsRelease,
    /// Whether the CrunchBang marker file exists.
    pub crunchbang_marker: bool,
    /// Whether the Android marker directories exist.
    pub android_markers: bool,
}

impl HostSignals {
    /// Gathers signals from the running host.
    pub fn gather() -> Self {
        Self::gather_from_paths(
            Path::new(OS_RELEASE_PATH),
            Path::new(CRUNCHBANG_MARKER_PATH),
            Path::new(ANDROID_APP_DIR),
            Path::new(ANDROID_PRIV_APP_DIR),
        )
    }

    /// Internal variant that allows testing with custom file paths.
    pub(crate) fn gather_from_paths(
        os_release_path: &Path,
        crunchbang_marker: &Path,
        android_app: &Path,
        android_priv_app: &Path,
    ) -> Self {
        let os_release = fs::read_to_string(os_release_path)
            .map(|content| parse_os_release_content(&content))
            .unwrap_or_default();

        HostSignals {
            kernel_release: System::kernel_version().unwrap_or_default(),
            platform: std::env::consts::OS.to_string(),
            distro_id: os_release.id.clone(),
            id_like: os_release.id_like.clone(),
            ansi_color: os_release.ansi_color.clone(),
            os_release,
            crunchbang_marker: crunchbang_marker.is_file(),
            android_markers: android_app.is_dir() && android_priv_app.is_dir(),
        }
    }
}

// ============================================================================
// Detection chain
// ============================================================================

/// Resolves host signals to exactly one registry entry.
///
/// The decision chain, first match wins:
/// 1. kernel release contains `"Microsoft"` (a Linux compatibility
///    layer atop Windows) resolves to Windows outright
/// 2. a Darwin/BSD-family platform resolves by platform identifier
/// 3. exact distribution id match
/// 4. `ID_LIKE` candidates, in the host-given order
/// 5. the CrunchBang marker file replaces whatever 3-4 resolved
/// 6. Android marker directories, when nothing has matched yet
/// 7. the generic Linux fallback
///
/// Never fails: an empty id or fallback chain means "no candidates",
/// not an error.
pub fn detect(signals: &HostSignals) -> Distro {
    if signals.kernel_release.contains(WSL_KERNEL_MARKER) {
        tracing::debug!(kernel = %signals.kernel_release, "kernel release names a Windows subsystem");
        return Distro::Windows;
    }

    match signals.platform.as_str() {
        "macos" | "ios" => return Distro::MacOs,
        "freebsd" | "dragonfly" | "openbsd" | "netbsd" => return Distro::FreeBsd,
        "windows" => return Distro::Windows,
        _ => {}
    }

    let mut resolved = if signals.distro_id.is_empty() {
        None
    } else {
        Distro::lookup(&signals.distro_id)
    };

    if resolved.is_none() {
        // Candidates are tried in the order the host gives them, not in
        // registry order.
        resolved = signals
            .id_like
            .split_whitespace()
            .find_map(Distro::lookup);
    }

    if signals.crunchbang_marker {
        resolved = Some(Distro::CrunchBang);
    }

    if resolved.is_none() && signals.android_markers {
        resolved = Some(Distro::Android);
    }

    let distro = resolved.unwrap_or(Distro::Linux);
    tracing::debug!(
        id = %signals.distro_id,
        id_like = %signals.id_like,
        %distro,
        "resolved host identity"
    );
    distro
}
