//! Probes describing the interactive session: who is logged in, where,
//! and inside which shell/terminal/desktop stack.

use std::env;
use std::path::Path;

use super::Entry;

pub(crate) fn user() -> Entry {
    let name = whoami::username();
    Entry::new("User", (!name.is_empty()).then_some(name))
}

pub(crate) fn hostname() -> Entry {
    Entry::new("Hostname", whoami::fallible::hostname().ok())
}

pub(crate) fn shell() -> Entry {
    Entry::new("Shell", shell_from_env(env::var("SHELL").ok()))
}

/// Detect the login shell from the `SHELL` environment value.
/// This is the testable core of [`shell`].
pub(crate) fn shell_from_env(shell: Option<String>) -> Option<String> {
    let shell = shell?;
    if shell.is_empty() {
        return None;
    }
    Path::new(&shell)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
}

pub(crate) fn terminal() -> Entry {
    Entry::new(
        "Terminal",
        terminal_from_env(env::var("TERM_PROGRAM").ok(), env::var("TERM").ok()),
    )
}

/// Detect the terminal from environment values, preferring the more
/// specific `TERM_PROGRAM` over `TERM`.
pub(crate) fn terminal_from_env(
    term_program: Option<String>,
    term: Option<String>,
) -> Option<String> {
    term_program
        .filter(|v| !v.is_empty())
        .or(term.filter(|v| !v.is_empty()))
}

pub(crate) fn desktop_environment() -> Entry {
    Entry::new(
        "Desktop Environment",
        env::var("XDG_CURRENT_DESKTOP")
            .ok()
            .filter(|v| !v.is_empty())
            .or(env::var("DESKTOP_SESSION").ok().filter(|v| !v.is_empty())),
    )
}

pub(crate) fn window_manager() -> Entry {
    Entry::new(
        "Window Manager",
        env::var("WINDOW_MANAGER")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|path| {
                Path::new(&path)
                    .file_name()
                    .map_or(path.clone(), |name| name.to_string_lossy().to_string())
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_env_takes_basename() {
        assert_eq!(
            shell_from_env(Some("/usr/bin/zsh".to_string())),
            Some("zsh".to_string())
        );
        assert_eq!(
            shell_from_env(Some("fish".to_string())),
            Some("fish".to_string())
        );
    }

    #[test]
    fn test_shell_from_env_absent_or_empty() {
        assert_eq!(shell_from_env(None), None);
        assert_eq!(shell_from_env(Some(String::new())), None);
    }

    #[test]
    fn test_terminal_prefers_term_program() {
        assert_eq!(
            terminal_from_env(Some("WezTerm".to_string()), Some("xterm-256color".to_string())),
            Some("WezTerm".to_string())
        );
        assert_eq!(
            terminal_from_env(None, Some("xterm-256color".to_string())),
            Some("xterm-256color".to_string())
        );
        assert_eq!(terminal_from_env(Some(String::new()), None), None);
    }

    #[test]
    fn test_user_probe_labels() {
        assert_eq!(user().label, "User");
        assert_eq!(hostname().label, "Hostname");
    }
}
