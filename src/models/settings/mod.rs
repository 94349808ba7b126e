// Countdown settings model
// Loaded from TOML by `services::settings::load_settings`

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::word_forms::UnitWordForms;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("refresh interval must be at least one second")]
    InvalidInterval,
    #[error("word form '{form}' for {unit} is empty")]
    EmptyWordForm { unit: &'static str, form: &'static str },
    #[error("{target} does not exist in timezone {timezone}")]
    NonexistentLocalTime {
        target: NaiveDateTime,
        timezone: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    pub title: String,
    /// Wall-clock time of the event in `timezone`.
    pub target: NaiveDateTime,
    pub timezone: String,
    pub refresh_interval_secs: u64,
    pub forms: UnitWordForms,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            title: "Свадьба".to_string(),
            target: DEFAULT_TARGET,
            timezone: "Europe/Moscow".to_string(),
            refresh_interval_secs: 60,
            forms: UnitWordForms::default(),
        }
    }
}

/// 2026-04-25T00:00:00, checked at compile time.
const DEFAULT_TARGET: NaiveDateTime = match NaiveDate::from_ymd_opt(2026, 4, 25) {
    Some(date) => NaiveDateTime::new(date, NaiveTime::MIN),
    None => panic!("default target date is invalid"),
};

impl CountdownSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tz()?;

        if self.refresh_interval_secs == 0 {
            return Err(SettingsError::InvalidInterval);
        }

        for (unit, forms) in self.forms.iter() {
            if let Some(form) = forms.first_blank() {
                return Err(SettingsError::EmptyWordForm { unit, form });
            }
        }

        Ok(())
    }

    pub fn tz(&self) -> Result<Tz, SettingsError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| SettingsError::UnknownTimezone(self.timezone.clone()))
    }

    /// Resolves the configured wall-clock target to an instant.
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    pub fn target_instant(&self) -> Result<DateTime<Tz>, SettingsError> {
        let tz = self.tz()?;
        tz.from_local_datetime(&self.target)
            .earliest()
            .ok_or_else(|| SettingsError::NonexistentLocalTime {
                target: self.target,
                timezone: self.timezone.clone(),
            })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
