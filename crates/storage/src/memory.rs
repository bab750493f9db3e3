use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use repline_app::{
    OngoingWorkoutSession, OngoingWorkoutSessionRepository, Settings, SettingsRepository, log,
};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

/// Key-value store holding JSON documents, mirroring the layout of browser local storage.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

#[derive(AsRefStr, Clone, Copy)]
enum Key {
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "ongoing workout session")]
    OngoingWorkoutSession,
    #[strum(serialize = "log")]
    Log,
}

impl MemoryStorage {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, String> {
        let values = self.values.lock().map_err(|err| err.to_string())?;
        match values.get(key.as_ref()) {
            Some(value) => serde_json::from_str(value).map_err(|err| err.to_string()),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), String> {
        let value = serde_json::to_string(value).map_err(|err| err.to_string())?;
        self.values
            .lock()
            .map_err(|err| err.to_string())?
            .insert(key.as_ref().to_string(), value);
        Ok(())
    }
}

impl SettingsRepository for MemoryStorage {
    fn read_settings(&self) -> Result<Settings, String> {
        Ok(self.get(Key::Settings)?.unwrap_or_default())
    }

    fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.set(Key::Settings, &settings)
    }
}

impl OngoingWorkoutSessionRepository for MemoryStorage {
    fn read_ongoing_workout_session(&self) -> Result<Option<OngoingWorkoutSession>, String> {
        Ok(self
            .get::<Option<OngoingWorkoutSession>>(Key::OngoingWorkoutSession)?
            .flatten())
    }

    fn write_ongoing_workout_session(
        &self,
        ongoing_workout_session: Option<OngoingWorkoutSession>,
    ) -> Result<(), String> {
        self.set(Key::OngoingWorkoutSession, &ongoing_workout_session)
    }
}

impl log::Repository for MemoryStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        Ok(self
            .get(Key::Log)
            .map_err(log::Error::Unknown)?
            .unwrap_or_default())
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = log::Repository::read_entries(self)?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.set(Key::Log, &entries).map_err(log::Error::Unknown)
    }
}
