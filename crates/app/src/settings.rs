use repline_domain::REST_TIME;
use serde::{Deserialize, Serialize};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

pub const MAX_BEEP_VOLUME: u8 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub beep_volume: u8,
    pub theme: Theme,
    /// Seconds of rest between sets.
    pub rest_time: u32,
    pub notifications: bool,
}

impl Settings {
    #[must_use]
    pub fn current_theme(&self, system_prefers_dark: bool) -> Theme {
        match self.theme {
            Theme::System => {
                if system_prefers_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }

    /// Switches to the opposite of the currently displayed theme.
    pub fn toggle_theme(&mut self, system_prefers_dark: bool) {
        self.theme = match self.current_theme(system_prefers_dark) {
            Theme::Dark => Theme::Light,
            Theme::System | Theme::Light => Theme::Dark,
        };
    }

    pub fn set_beep_volume(&mut self, volume: u8) {
        self.beep_volume = volume.min(MAX_BEEP_VOLUME);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            beep_volume: 80,
            theme: Theme::System,
            rest_time: REST_TIME,
            notifications: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}
