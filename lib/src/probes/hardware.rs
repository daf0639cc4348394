//! Probes describing the hardware: processor, memory, storage.

use sysinfo::{Disks, System};

use super::{Entry, format_bytes};

pub(crate) fn cpu(sys: &System) -> Entry {
    let value = sys.cpus().first().and_then(|cpu| {
        let brand = cpu.brand().trim();
        if brand.is_empty() {
            return None;
        }
        Some(format!("{brand} ({} cores)", sys.cpus().len()))
    });
    Entry::new("CPU", value)
}

pub(crate) fn memory(sys: &System) -> Entry {
    let total = sys.total_memory();
    let value = (total > 0).then(|| {
        format!(
            "{} / {}",
            format_bytes(sys.used_memory()),
            format_bytes(total)
        )
    });
    Entry::new("Memory", value)
}

/// Aggregate usage across all mounted disks.
pub(crate) fn disk() -> Entry {
    let disks = Disks::new_with_refreshed_list();
    let mut total = 0u64;
    let mut available = 0u64;
    for disk in disks.iter() {
        total += disk.total_space();
        available += disk.available_space();
    }

    let value = (total > 0).then(|| {
        format!(
            "{} / {}",
            format_bytes(total.saturating_sub(available)),
            format_bytes(total)
        )
    });
    Entry::new("Disk", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind};

    fn refreshed_system() -> System {
        System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        )
    }

    #[test]
    fn test_memory_probe_reports_usage() {
        let sys = refreshed_system();
        let entry = memory(&sys);
        assert_eq!(entry.label, "Memory");
        let value = entry.value.expect("memory should be detectable");
        assert!(value.contains(" / "));
    }

    #[test]
    fn test_cpu_probe_reports_core_count() {
        let sys = refreshed_system();
        if let Some(value) = cpu(&sys).value {
            assert!(value.contains("cores"));
        }
    }
}
