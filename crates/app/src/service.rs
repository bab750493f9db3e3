use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use log::{error, warn};
use repline_domain::{Catalog, NotFoundError, Step, WorkoutID, WorkoutPlayer};

use crate::{
    OngoingWorkoutSession, OngoingWorkoutSessionRepository, OngoingWorkoutSessionService,
    Settings, SettingsRepository, SettingsService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: crate::log::Repository> crate::log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<crate::log::Entry>, crate::log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: crate::log::Entry) -> Result<(), crate::log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings()
    }

    fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings)
    }
}

impl<R: OngoingWorkoutSessionRepository> OngoingWorkoutSessionService for Service<R> {
    fn get_ongoing_workout_session(&self) -> Result<Option<OngoingWorkoutSession>, String> {
        self.repository.read_ongoing_workout_session()
    }

    fn set_ongoing_workout_session(
        &self,
        ongoing_workout_session: Option<OngoingWorkoutSession>,
    ) -> Result<(), String> {
        self.repository
            .write_ongoing_workout_session(ongoing_workout_session)
    }
}

impl<R: SettingsRepository + OngoingWorkoutSessionRepository> Service<R> {
    /// Falls back to the default if the settings are unreadable.
    #[must_use]
    pub fn rest_time(&self) -> u32 {
        match self.get_settings() {
            Ok(settings) => settings.rest_time,
            Err(err) => {
                error!("failed to get settings: {err}");
                Settings::default().rest_time
            }
        }
    }

    /// Creates a player for the given level and stores it as the ongoing session.
    pub fn start_workout<'a>(
        &self,
        catalog: &'a Catalog,
        workout_id: &WorkoutID,
        level: usize,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlayer<'a>, NotFoundError> {
        let player =
            WorkoutPlayer::at_level(catalog, workout_id, level)?.with_rest_time(self.rest_time());
        if let Err(err) =
            self.set_ongoing_workout_session(Some(OngoingWorkoutSession::new(&player, now)))
        {
            error!("failed to store ongoing workout session: {err}");
        }
        Ok(player)
    }

    /// Keeps the start time if the stored session belongs to the same workout. A finished
    /// player clears the stored session.
    pub fn save_workout(
        &self,
        player: &WorkoutPlayer<'_>,
        now: DateTime<Utc>,
    ) -> Result<(), String> {
        if player.is_finished() {
            return self.clear_workout();
        }
        let session = match self
            .get_ongoing_workout_session()
            .inspect_err(|err| error!("failed to get ongoing workout session: {err}"))?
        {
            Some(mut session) if session.workout_id == player.workout().id.as_str() => {
                session.update(player, now);
                session
            }
            _ => OngoingWorkoutSession::new(player, now),
        };
        self.set_ongoing_workout_session(Some(session))
            .inspect_err(|err| error!("failed to store ongoing workout session: {err}"))
    }

    /// Restores the stored session. A finished session or one that no longer matches the
    /// catalog is discarded.
    pub fn resume_workout<'a>(
        &self,
        catalog: &'a Catalog,
        now: DateTime<Utc>,
    ) -> Option<WorkoutPlayer<'a>> {
        let session = match self.get_ongoing_workout_session() {
            Ok(session) => session?,
            Err(err) => {
                error!("failed to get ongoing workout session: {err}");
                return None;
            }
        };
        if session.snapshot.step == Step::Finished {
            warn!("discarded finished workout session \"{}\"", session.workout_id);
            let _ = self.clear_workout();
            return None;
        }
        match session.resume(catalog, now) {
            Ok(player) => Some(player.with_rest_time(self.rest_time())),
            Err(err) => {
                warn!("discarded ongoing workout session: {err}");
                let _ = self.clear_workout();
                None
            }
        }
    }

    pub fn clear_workout(&self) -> Result<(), String> {
        self.set_ongoing_workout_session(None)
            .inspect_err(|err| error!("failed to clear ongoing workout session: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use repline_domain::Outcome;

    use super::*;
    use crate::{TimerState, tests::data::CATALOG};

    #[derive(Default)]
    struct Repository {
        settings: Mutex<Option<Settings>>,
        session: Mutex<Option<OngoingWorkoutSession>>,
        fail: bool,
    }

    impl SettingsRepository for Repository {
        fn read_settings(&self) -> Result<Settings, String> {
            if self.fail {
                return Err(String::from("unavailable"));
            }
            Ok(self.settings.lock().unwrap().unwrap_or_default())
        }

        fn write_settings(&self, settings: Settings) -> Result<(), String> {
            *self.settings.lock().unwrap() = Some(settings);
            Ok(())
        }
    }

    impl OngoingWorkoutSessionRepository for Repository {
        fn read_ongoing_workout_session(&self) -> Result<Option<OngoingWorkoutSession>, String> {
            if self.fail {
                return Err(String::from("unavailable"));
            }
            Ok(self.session.lock().unwrap().clone())
        }

        fn write_ongoing_workout_session(
            &self,
            ongoing_workout_session: Option<OngoingWorkoutSession>,
        ) -> Result<(), String> {
            if self.fail {
                return Err(String::from("unavailable"));
            }
            *self.session.lock().unwrap() = ongoing_workout_session;
            Ok(())
        }
    }

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_rest_time() {
        let service = Service::new(Repository::default());
        assert_eq!(service.rest_time(), 90);

        service
            .set_settings(Settings {
                rest_time: 45,
                ..Settings::default()
            })
            .unwrap();
        assert_eq!(service.rest_time(), 45);

        let service = Service::new(Repository {
            fail: true,
            ..Repository::default()
        });
        assert_eq!(service.rest_time(), 90);
    }

    #[test]
    fn test_start_workout() {
        let service = Service::new(Repository::default());
        service
            .set_settings(Settings {
                rest_time: 30,
                ..Settings::default()
            })
            .unwrap();

        let mut player = service
            .start_workout(&CATALOG, &WorkoutID::from("core"), 0, t0())
            .unwrap();
        assert_eq!(player.step(), Step::Intro);

        let session = service.get_ongoing_workout_session().unwrap().unwrap();
        assert_eq!(session.workout_id, "core");
        assert_eq!(session.start_time, t0());

        assert_eq!(player.skip(), Outcome::Continue(Step::Exercise));
        assert_eq!(player.complete(), Outcome::Continue(Step::Rest));
        assert_eq!(player.rest_remaining(), Some(30));
    }

    #[test]
    fn test_start_workout_unknown() {
        let service = Service::new(Repository::default());
        assert_eq!(
            service
                .start_workout(&CATALOG, &WorkoutID::from("core"), 3, t0())
                .err(),
            Some(NotFoundError::Level {
                workout: WorkoutID::from("core"),
                index: 3
            })
        );
        assert_eq!(service.get_ongoing_workout_session().unwrap(), None);
    }

    #[test]
    fn test_save_and_resume_workout() {
        let service = Service::new(Repository::default());
        let mut player = service
            .start_workout(&CATALOG, &WorkoutID::from("core"), 0, t0())
            .unwrap();
        assert_eq!(player.skip(), Outcome::Continue(Step::Exercise));
        assert_eq!(player.complete(), Outcome::Continue(Step::Rest));

        let saved = t0() + Duration::seconds(120);
        service.save_workout(&player, saved).unwrap();

        let session = service.get_ongoing_workout_session().unwrap().unwrap();
        assert_eq!(session.start_time, t0());
        assert_eq!(
            session.timer_state,
            TimerState::Active {
                since: saved,
                seconds: 90
            }
        );

        let resumed = service
            .resume_workout(&CATALOG, saved + Duration::seconds(15))
            .unwrap();
        assert_eq!(resumed.step(), Step::Rest);
        assert_eq!(resumed.rest_remaining(), Some(75));
        assert_eq!(resumed.position(), player.position());
    }

    #[test]
    fn test_resume_workout_without_session() {
        let service = Service::new(Repository::default());
        assert!(service.resume_workout(&CATALOG, t0()).is_none());
    }

    #[test]
    fn test_resume_workout_discards_stale_session() {
        let service = Service::new(Repository::default());
        let player = service
            .start_workout(&CATALOG, &WorkoutID::from("core"), 0, t0())
            .unwrap();
        let mut session = OngoingWorkoutSession::new(&player, t0());
        session.workout_id = String::from("removed");
        service.set_ongoing_workout_session(Some(session)).unwrap();

        assert!(service.resume_workout(&CATALOG, t0()).is_none());
        assert_eq!(service.get_ongoing_workout_session().unwrap(), None);
    }

    #[test]
    fn test_save_finished_workout() {
        let service = Service::new(Repository::default());
        let mut player = service
            .start_workout(&CATALOG, &WorkoutID::from("core"), 0, t0())
            .unwrap();
        assert_eq!(player.close(), Outcome::Exit);

        service.save_workout(&player, t0()).unwrap();
        assert_eq!(service.get_ongoing_workout_session().unwrap(), None);
        assert!(service.resume_workout(&CATALOG, t0()).is_none());
    }

    #[test]
    fn test_resume_workout_discards_finished_session() {
        let service = Service::new(Repository::default());
        let mut player = service
            .start_workout(&CATALOG, &WorkoutID::from("core"), 0, t0())
            .unwrap();
        assert_eq!(player.close(), Outcome::Exit);
        service
            .set_ongoing_workout_session(Some(OngoingWorkoutSession::new(&player, t0())))
            .unwrap();

        assert!(service.resume_workout(&CATALOG, t0()).is_none());
        assert_eq!(service.get_ongoing_workout_session().unwrap(), None);
    }

    #[test]
    fn test_save_workout_unreadable_session() {
        let player = WorkoutPlayer::new(&CATALOG, &WorkoutID::from("core")).unwrap();
        let service = Service::new(Repository {
            fail: true,
            ..Repository::default()
        });
        assert_eq!(
            service.save_workout(&player, t0()),
            Err(String::from("unavailable"))
        );
    }

    #[test]
    fn test_clear_workout() {
        let service = Service::new(Repository::default());
        let _ = service
            .start_workout(&CATALOG, &WorkoutID::from("core"), 0, t0())
            .unwrap();
        service.clear_workout().unwrap();
        assert_eq!(service.get_ongoing_workout_session().unwrap(), None);

        let service = Service::new(Repository {
            fail: true,
            ..Repository::default()
        });
        assert!(service.clear_workout().is_err());
    }
}
