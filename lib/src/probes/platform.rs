//! Probes describing the operating system and its runtime state.

use sysinfo::System;

use super::{Entry, format_uptime};
use crate::distro::HostSignals;

/// The distribution display name, assembled from the strongest
/// available signal: os-release `PRETTY_NAME`, then `NAME` +
/// `VERSION_ID`, then whatever the system reports.
pub(crate) fn distro(signals: &HostSignals) -> Entry {
    let release = &signals.os_release;
    let value = release
        .pretty_name
        .clone()
        .or_else(|| {
            release.name.as_ref().map(|name| match &release.version_id {
                Some(version) => format!("{name} {version}"),
                None => name.clone(),
            })
        })
        .or_else(System::long_os_version);
    Entry::new("Distro", value)
}

pub(crate) fn kernel() -> Entry {
    Entry::new("Kernel", System::kernel_version())
}

pub(crate) fn uptime() -> Entry {
    Entry::new("Uptime", Some(format_uptime(System::uptime())))
}

pub(crate) fn load_average() -> Entry {
    let load = System::load_average();
    // All-zero load is what platforms without the concept report.
    let value = (load.one != 0.0 || load.five != 0.0 || load.fifteen != 0.0).then(|| {
        format!("{:.2} {:.2} {:.2}", load.one, load.five, load.fifteen)
    });
    Entry::new("Load Average", value)
}

pub(crate) fn processes(sys: &System) -> Entry {
    let count = sys.processes().len();
    Entry::new("Processes", (count > 0).then(|| count.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distro::OsRelease;

    fn signals_with(release: OsRelease) -> HostSignals {
        HostSignals {
            os_release: release,
            ..HostSignals::default()
        }
    }

    #[test]
    fn test_distro_prefers_pretty_name() {
        let s = signals_with(OsRelease {
            pretty_name: Some("Ubuntu 22.04.3 LTS".to_string()),
            name: Some("Ubuntu".to_string()),
            version_id: Some("22.04".to_string()),
            ..OsRelease::default()
        });
        assert_eq!(distro(&s).value.as_deref(), Some("Ubuntu 22.04.3 LTS"));
    }

    #[test]
    fn test_distro_assembles_name_and_version() {
        let s = signals_with(OsRelease {
            name: Some("Fedora Linux".to_string()),
            version_id: Some("39".to_string()),
            ..OsRelease::default()
        });
        assert_eq!(distro(&s).value.as_deref(), Some("Fedora Linux 39"));
    }

    #[test]
    fn test_distro_name_without_version() {
        let s = signals_with(OsRelease {
            name: Some("Arch Linux".to_string()),
            ..OsRelease::default()
        });
        assert_eq!(distro(&s).value.as_deref(), Some("Arch Linux"));
    }

    #[test]
    fn test_uptime_always_has_a_value() {
        assert!(uptime().value.is_some());
    }
}
