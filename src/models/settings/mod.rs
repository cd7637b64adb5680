// Settings module
// Host configuration for the picker, stored as TOML

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const MAX_DECIMAL_PLACES: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("consignment id cannot be empty")]
    EmptyConsignmentId,
    #[error("currency symbol cannot be empty")]
    EmptyCurrencySymbol,
    #[error("currency decimal places must be at most 6, got {0}")]
    TooManyDecimalPlaces(u8),
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub week_starts_on: WeekStart,
    /// Always render six weeks so the widget height never jumps
    pub fixed_weeks: bool,
    pub show_outside_days: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::Sunday,
            fixed_weeks: true,
            show_outside_days: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub symbol: String,
    pub decimal_places: u8,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_places: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub consignment_id: String,
    /// JSON feed of shipping options; relative paths resolve against the settings file
    pub options_path: Option<PathBuf>,
    /// Selection the host already confirmed before the picker opened
    pub selected_shipping_option_id: Option<String>,
    pub additional_description_open_by_default: bool,
    pub currency: CurrencySettings,
    pub calendar: CalendarSettings,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            consignment_id: "default-consignment".to_string(),
            options_path: None,
            selected_shipping_option_id: None,
            additional_description_open_by_default: true,
            currency: CurrencySettings::default(),
            calendar: CalendarSettings::default(),
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.consignment_id.trim().is_empty() {
            return Err(SettingsError::EmptyConsignmentId);
        }

        if self.currency.symbol.is_empty() {
            return Err(SettingsError::EmptyCurrencySymbol);
        }

        if self.currency.decimal_places > MAX_DECIMAL_PLACES {
            return Err(SettingsError::TooManyDecimalPlaces(
                self.currency.decimal_places,
            ));
        }

        Ok(())
    }
}
