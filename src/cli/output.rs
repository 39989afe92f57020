use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Detail,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub quiet_mode: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            quiet_mode: false,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if !prefs.color_enabled {
        colored::control::set_override(false);
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Info | MessageKind::Detail)
}

fn build_label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[✓]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section | MessageKind::Detail => "",
    }
}

pub(crate) fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Detail => format!("  {text}"),
        _ => format!("{} {}", build_label(kind), text),
    };

    if !prefs.color_enabled {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info | MessageKind::Detail => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    let formatted = format_message(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        MessageKind::Error | MessageKind::Warning => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn detail(line: impl fmt::Display) {
    print(MessageKind::Detail, line);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        color_enabled: false,
        quiet_mode: false,
    };

    #[test]
    fn plain_messages_carry_label() {
        assert_eq!(
            format_message(MessageKind::Success, "Saved", &PLAIN),
            "[✓] Saved"
        );
        assert_eq!(
            format_message(MessageKind::Section, " Review ", &PLAIN),
            "=== Review ==="
        );
        assert_eq!(format_message(MessageKind::Detail, "Title: x", &PLAIN), "  Title: x");
    }

    #[test]
    fn quiet_mode_keeps_outcomes() {
        let quiet = OutputPreferences {
            color_enabled: false,
            quiet_mode: true,
        };
        assert!(should_skip(MessageKind::Info, &quiet));
        assert!(!should_skip(MessageKind::Error, &quiet));
        assert!(!should_skip(MessageKind::Success, &quiet));
    }
}
