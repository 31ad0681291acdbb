use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Detail,
    Accent,
    Muted,
}

/// Line-level styling for page views and tables.
pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::with_preferences(current_preferences())
    }

    pub fn with_preferences(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn is_plain(&self) -> bool {
        self.prefs.plain_mode
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, format!("=== {} ===", title))
    }

    pub fn print_detail(&self, message: impl fmt::Display) {
        println!("{}", self.detail_text(message));
    }

    pub fn detail_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Detail, message)
    }

    /// Emphasised text such as gift names and totals.
    pub fn accent_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Accent, message)
    }

    pub fn muted_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Muted, message)
    }

    /// Prefixes `text` with `icon` unless plain output is on.
    pub fn with_icon(&self, icon: &str, text: impl fmt::Display) -> String {
        if self.prefs.plain_mode {
            text.to_string()
        } else {
            format!("{icon} {text}")
        }
    }

    pub fn with_icon_after(&self, text: impl fmt::Display, icon: &str) -> String {
        if self.prefs.plain_mode {
            text.to_string()
        } else {
            format!("{text} {icon}")
        }
    }

    pub fn print_two_column(&self, entries: &[(&str, &str)]) {
        for line in self.two_column_lines(entries) {
            println!("{line}");
        }
    }

    pub fn two_column_lines(&self, entries: &[(&str, &str)]) -> Vec<String> {
        let label_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        entries
            .iter()
            .map(|(label, value)| format!("  {:<width$}  {}", label, value, width = label_width + 2))
            .collect()
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        let text = message.to_string();
        if self.prefs.plain_mode || !self.prefs.color_enabled {
            return text;
        }
        if self.prefs.high_contrast_mode {
            return match style {
                Style::Header | Style::Accent => text.bold().to_string(),
                Style::Detail | Style::Muted => text,
            };
        }
        match style {
            Style::Header => text.bold().bright_magenta().to_string(),
            Style::Accent => text.bold().to_string(),
            Style::Muted => text.dimmed().to_string(),
            Style::Detail => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Formatter {
        Formatter::with_preferences(OutputPreferences {
            plain_mode: true,
            ..OutputPreferences::default()
        })
    }

    #[test]
    fn two_column_pads_to_widest_label() {
        let lines = plain().two_column_lines(&[("Username", "asha"), ("Name", "Asha")]);
        assert_eq!(lines[0], "  Username    asha");
        assert_eq!(lines[1], "  Name        Asha");
    }

    #[test]
    fn plain_mode_drops_icons() {
        assert_eq!(plain().with_icon("🛒", "Your Cart"), "Your Cart");
        let iconic = Formatter::with_preferences(OutputPreferences {
            color_enabled: false,
            ..OutputPreferences::default()
        });
        assert_eq!(iconic.with_icon("🛒", "Your Cart"), "🛒 Your Cart");
    }
}
