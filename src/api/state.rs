//! Application state for the shift roster API.

use std::sync::Arc;

use crate::calendar::EventProjector;
use crate::config::{CalendarSettings, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded calendar configuration and the projector built from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    projector: EventProjector,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let projector = config.projector();
        Self {
            config: Arc::new(config),
            projector,
        }
    }

    /// Returns the calendar settings.
    pub fn settings(&self) -> &CalendarSettings {
        self.config.settings()
    }

    /// Returns the configured event projector.
    pub fn projector(&self) -> &EventProjector {
        &self.projector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_projector_follows_config() {
        let settings = CalendarSettings {
            summary: "Roster".to_string(),
            ..CalendarSettings::default()
        };
        let state = AppState::new(ConfigLoader::from_settings(settings).unwrap());

        assert_eq!(state.projector().summary(), "Roster");
        assert_eq!(state.settings().summary, "Roster");
    }
}
