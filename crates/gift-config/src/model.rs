use gift_domain::SortOrder;
use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

use crate::ConfigError;

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub default_sort: SortOrder,
    #[serde(default = "Config::default_max_price_value")]
    pub default_max_price: u32,

    /// Lower bound of the maximum-price slider.
    #[serde(default = "Config::default_price_floor")]
    pub price_floor: u32,
    /// Upper bound of the maximum-price slider.
    #[serde(default = "Config::default_max_price_value")]
    pub price_ceiling: u32,
    #[serde(default = "Config::default_price_step")]
    pub price_step: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency_symbol: Self::default_currency_symbol(),
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_sort: SortOrder::default(),
            default_max_price: Self::default_max_price_value(),
            price_floor: Self::default_price_floor(),
            price_ceiling: Self::default_max_price_value(),
            price_step: Self::default_price_step(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 11] = [
        "locale",
        "currency_symbol",
        "theme",
        "plain_output",
        "high_contrast",
        "ui_color_enabled",
        "default_sort",
        "default_max_price",
        "price_floor",
        "price_ceiling",
        "price_step",
    ];

    pub fn default_locale() -> String {
        "en-IN".into()
    }

    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_max_price_value() -> u32 {
        3000
    }

    pub fn default_price_floor() -> u32 {
        500
    }

    pub fn default_price_step() -> u32 {
        100
    }

    /// Whether `value` sits on the maximum-price slider.
    pub fn price_in_range(&self, value: u32) -> bool {
        (self.price_floor..=self.price_ceiling).contains(&value)
    }

    /// Whether the slider can land on `value`. Steps count up from the floor
    /// and the ceiling is always reachable.
    pub fn price_on_slider(&self, value: u32) -> bool {
        if !self.price_in_range(value) {
            return false;
        }
        value == self.price_ceiling
            || self.price_step == 0
            || (value - self.price_floor) % self.price_step == 0
    }

    pub fn format_price(&self, amount: impl fmt::Display) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }

    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key.to_ascii_lowercase().as_str() {
            "locale" => self.locale = value.to_string(),
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "theme" => {
                self.theme = Theme::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: "expected plain or iconic".into(),
                })?;
            }
            "plain_output" => self.accessibility.plain_output = parse_flag(key, value)?,
            "high_contrast" => self.accessibility.high_contrast = parse_flag(key, value)?,
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(key, value)?,
            "default_sort" => {
                self.default_sort =
                    SortOrder::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "expected name, price-asc or price-desc".into(),
                    })?;
            }
            "default_max_price" => {
                let amount = parse_amount(key, value)?;
                if !self.price_in_range(amount) {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: format!(
                            "must be between {} and {}",
                            self.price_floor, self.price_ceiling
                        ),
                    });
                }
                self.default_max_price = amount;
            }
            "price_floor" => {
                let amount = parse_amount(key, value)?;
                if amount > self.price_ceiling {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "must not exceed price_ceiling".into(),
                    });
                }
                self.price_floor = amount;
            }
            "price_ceiling" => {
                let amount = parse_amount(key, value)?;
                if amount < self.price_floor {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "must not be below price_floor".into(),
                    });
                }
                self.price_ceiling = amount;
                self.default_max_price = self.default_max_price.min(amount);
            }
            "price_step" => {
                let amount = parse_amount(key, value)?;
                if amount == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "must be at least 1".into(),
                    });
                }
                self.price_step = amount;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "expected on or off".into(),
        }),
    }
}

fn parse_amount(key: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .trim_start_matches('₹')
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "expected a whole number of rupees".into(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Theme::Plain),
            "iconic" => Some(Theme::Iconic),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
