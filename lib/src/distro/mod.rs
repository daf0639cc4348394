//! The distribution registry: every OS/distribution identity glance can
//! render, with its matching ids, logo, and color palette.
//!
//! Variant declaration order is the registry's fixed iteration order and
//! doubles as the tie-break rule when a host id matches more than one
//! entry, so it is part of the public contract, not a layout detail.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::logo::Logo;

mod detect;
mod logos;

pub use detect::{HostSignals, OsRelease, detect, parse_os_release_content};

// ============================================================================
// Distro Enum
// ============================================================================

/// Catalogued operating-system and distribution identities.
///
/// `Linux` is the terminal fallback: detection never fails, it resolves
/// to this entry when no signal matches anything.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Distro {
    Alpine,
    Android,
    Arch,
    CentOs,
    CrunchBang,
    Debian,
    Fedora,
    FreeBsd,
    Gentoo,
    Kali,
    Linux,
    LinuxMint,
    MacOs,
    Manjaro,
    NixOs,
    OpenSuse,
    PopOs,
    Raspbian,
    Slackware,
    Ubuntu,
    Void,
    Windows,
}

/// The immutable record behind one registry entry.
#[derive(Debug, Clone, Copy)]
pub struct DistroInfo {
    /// Human-readable name, used as the default title.
    pub name: &'static str,
    /// Host-reported ids this entry matches, all lowercase.
    pub match_ids: &'static [&'static str],
    /// Primary logo.
    pub logo: Logo,
    /// Plain-ASCII alternative for terminals without Unicode glyphs;
    /// `None` when the primary logo is already pure ASCII.
    pub logo_ascii: Option<Logo>,
}

/// Registry data, indexed by `Distro as usize`.
static DISTRO_INFO: &[DistroInfo] = &[
    DistroInfo {
        name: "Alpine Linux",
        match_ids: &["alpine"],
        logo: logos::ALPINE,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Android",
        match_ids: &["android"],
        logo: logos::ANDROID,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Arch Linux",
        match_ids: &["arch", "archlinux", "arch32"],
        logo: logos::ARCH,
        logo_ascii: None,
    },
    DistroInfo {
        name: "CentOS",
        match_ids: &["centos"],
        logo: logos::CENTOS,
        logo_ascii: None,
    },
    DistroInfo {
        name: "CrunchBang",
        match_ids: &["crunchbang"],
        logo: logos::CRUNCHBANG,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Debian",
        match_ids: &["debian"],
        logo: logos::DEBIAN,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Fedora",
        match_ids: &["fedora"],
        logo: logos::FEDORA,
        logo_ascii: None,
    },
    DistroInfo {
        name: "FreeBSD",
        match_ids: &["freebsd", "dragonfly", "openbsd", "netbsd"],
        logo: logos::FREEBSD,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Gentoo",
        match_ids: &["gentoo", "funtoo"],
        logo: logos::GENTOO,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Kali Linux",
        match_ids: &["kali"],
        logo: logos::KALI,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Linux",
        match_ids: &["linux"],
        logo: logos::LINUX,
        logo_ascii: Some(logos::LINUX_ASCII),
    },
    DistroInfo {
        name: "Linux Mint",
        match_ids: &["linuxmint", "lmde"],
        logo: logos::LINUX_MINT,
        logo_ascii: None,
    },
    DistroInfo {
        name: "macOS",
        match_ids: &["darwin", "macos"],
        logo: logos::MACOS,
        logo_ascii: Some(logos::MACOS_ASCII),
    },
    DistroInfo {
        name: "Manjaro",
        match_ids: &["manjaro", "manjaro-arm"],
        logo: logos::MANJARO,
        logo_ascii: None,
    },
    DistroInfo {
        name: "NixOS",
        match_ids: &["nixos"],
        logo: logos::NIXOS,
        logo_ascii: None,
    },
    DistroInfo {
        name: "openSUSE",
        match_ids: &["opensuse", "opensuse-leap", "opensuse-tumbleweed", "suse", "sles"],
        logo: logos::OPENSUSE,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Pop!_OS",
        match_ids: &["pop"],
        logo: logos::POPOS,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Raspbian",
        match_ids: &["raspbian"],
        logo: logos::RASPBIAN,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Slackware",
        match_ids: &["slackware"],
        logo: logos::SLACKWARE,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Ubuntu",
        match_ids: &["ubuntu"],
        logo: logos::UBUNTU,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Void Linux",
        match_ids: &["void"],
        logo: logos::VOID,
        logo_ascii: None,
    },
    DistroInfo {
        name: "Windows",
        match_ids: &["windows"],
        logo: logos::WINDOWS,
        logo_ascii: None,
    },
];

impl Distro {
    /// Returns the registry record for this entry.
    pub fn info(&self) -> &'static DistroInfo {
        &DISTRO_INFO[*self as usize]
    }

    /// Returns the logo to render, honoring the Unicode capability of
    /// the output.
    pub fn logo(&self, use_unicode: bool) -> &'static Logo {
        let info = self.info();
        if use_unicode {
            &info.logo
        } else {
            info.logo_ascii.as_ref().unwrap_or(&info.logo)
        }
    }

    /// Looks up a host-reported id, case-insensitively, in registry
    /// order. The first entry whose `match_ids` contains the id wins.
    pub fn lookup(id: &str) -> Option<Distro> {
        let id = id.to_lowercase();
        Distro::iter().find(|d| d.info().match_ids.contains(&id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::template_width;
    use std::collections::HashSet;
    use strum::EnumCount;

    #[test]
    fn test_registry_covers_every_variant() {
        assert_eq!(DISTRO_INFO.len(), Distro::COUNT);
    }

    #[test]
    fn test_registry_logos_are_rectangular() {
        for distro in Distro::iter() {
            let info = distro.info();
            for logo in std::iter::once(&info.logo).chain(info.logo_ascii.as_ref()) {
                assert!(logo.height() > 0, "{distro}: empty logo");
                let width = logo.width();
                for line in logo.lines {
                    assert_eq!(
                        template_width(line),
                        width,
                        "{distro}: ragged template line {line:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_registry_palette_slots_resolve() {
        use crate::logo::{LogoToken, tokenize_line};
        for distro in Distro::iter() {
            let info = distro.info();
            for logo in std::iter::once(&info.logo).chain(info.logo_ascii.as_ref()) {
                for line in logo.lines {
                    for token in tokenize_line(line) {
                        if let LogoToken::Palette(idx) = token {
                            assert!(
                                idx < logo.palette.len(),
                                "{distro}: palette slot {idx} out of range"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_match_ids_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for distro in Distro::iter() {
            for id in distro.info().match_ids {
                assert_eq!(*id, id.to_lowercase(), "{distro}: id not lowercase");
                assert!(seen.insert(*id), "{distro}: duplicate match id {id}");
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Distro::lookup("Ubuntu"), Some(Distro::Ubuntu));
        assert_eq!(Distro::lookup("ARCH"), Some(Distro::Arch));
        assert_eq!(Distro::lookup("no-such-distro"), None);
        assert_eq!(Distro::lookup(""), None);
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let order: Vec<Distro> = Distro::iter().collect();
        assert_eq!(order.first(), Some(&Distro::Alpine));
        assert_eq!(order.last(), Some(&Distro::Windows));
        let linux = order.iter().position(|d| *d == Distro::Linux).unwrap();
        let mint = order.iter().position(|d| *d == Distro::LinuxMint).unwrap();
        assert!(linux < mint);
    }

    #[test]
    fn test_ascii_alternatives_exist_where_primary_is_unicode() {
        for distro in [Distro::Linux, Distro::MacOs] {
            assert!(distro.info().logo_ascii.is_some());
            let ascii = distro.logo(false);
            assert!(ascii.lines.iter().all(|l| l.is_ascii()));
        }
    }

    #[test]
    fn test_strum_roundtrip() {
        use std::str::FromStr;
        assert_eq!(Distro::from_str("linux_mint").unwrap(), Distro::LinuxMint);
        assert_eq!(Distro::LinuxMint.to_string(), "linux_mint");
    }
}
