//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calendar
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;

use crate::calendar::{DateTimeNormalizer, EventProjector};
use crate::error::{RosterError, RosterResult};

use super::types::CalendarSettings;

/// Loads and provides access to calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/roster/
/// └── calendar.yaml   # Event title, time zone, reminders
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
/// println!("Events are booked in {}", loader.time_zone());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: CalendarSettings,
    time_zone: Tz,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `calendar.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML or lacks a required field (`ConfigParseError`)
    /// - the configured zone is unknown (`InvalidTimeZone`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let calendar_path = path.as_ref().join("calendar.yaml");
        let settings = Self::load_yaml::<CalendarSettings>(&calendar_path)?;
        Self::from_settings(settings)
    }

    /// Builds a loader from settings that are already in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::config::{CalendarSettings, ConfigLoader};
    ///
    /// let loader = ConfigLoader::from_settings(CalendarSettings::default())?;
    /// assert_eq!(loader.settings().summary, "Work");
    /// # Ok::<(), shift_roster::error::RosterError>(())
    /// ```
    pub fn from_settings(settings: CalendarSettings) -> RosterResult<Self> {
        let time_zone = settings
            .time_zone
            .parse::<Tz>()
            .map_err(|_| RosterError::InvalidTimeZone {
                name: settings.time_zone.clone(),
            })?;

        Ok(Self {
            settings,
            time_zone,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Returns the zone roster times are interpreted in.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Returns a projector using the configured summary and zone.
    pub fn projector(&self) -> EventProjector {
        EventProjector::new(
            self.settings.summary.clone(),
            DateTimeNormalizer::new(self.time_zone),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            settings: CalendarSettings::default(),
            time_zone: chrono_tz::Australia::Melbourne,
        }
    }
}
