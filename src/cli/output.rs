use std::fmt;
use std::sync::{OnceLock, RwLock};

use colored::Colorize;
use gift_config::{Config, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    /// ASCII labels instead of icons, no colour.
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            plain_mode: false,
            high_contrast_mode: false,
            color_enabled: true,
        }
    }
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            plain_mode: config.theme == Theme::Plain || config.accessibility.plain_output,
            high_contrast_mode: config.accessibility.high_contrast,
            color_enabled: config.ui_color_enabled,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Applies the display-related parts of `config` to every later message.
pub fn apply_config(config: &Config) {
    set_preferences(OutputPreferences::from_config(config));
    if !config.ui_color_enabled || config.accessibility.plain_output {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

fn label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO:", "ℹ"),
        MessageKind::Success => ("OK:", "✔"),
        MessageKind::Warning => ("WARNING:", "⚠"),
        MessageKind::Error => ("ERROR:", "✖"),
        MessageKind::Hint => ("HINT:", "›"),
    }
}

pub fn styled(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let (plain, icon) = label(kind);
    let base = if prefs.plain_mode {
        format!("{plain} {message}")
    } else {
        format!("{icon} {message}")
    };

    if prefs.plain_mode || !prefs.color_enabled {
        return base;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info | MessageKind::Hint => base,
            _ => base.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Hint => base.dimmed().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    println!("{}", styled(kind, message, &current_preferences()));
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

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}
