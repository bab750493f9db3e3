use chrono::{DateTime, Utc};
use repline_domain::{Catalog, NotFoundError, Position, Snapshot, Step, WorkoutID, WorkoutPlayer};
use serde::{Deserialize, Serialize};

pub trait OngoingWorkoutSessionService {
    fn get_ongoing_workout_session(&self) -> Result<Option<OngoingWorkoutSession>, String>;
    fn set_ongoing_workout_session(
        &self,
        ongoing_workout_session: Option<OngoingWorkoutSession>,
    ) -> Result<(), String>;
}

pub trait OngoingWorkoutSessionRepository {
    fn read_ongoing_workout_session(&self) -> Result<Option<OngoingWorkoutSession>, String>;
    fn write_ongoing_workout_session(
        &self,
        ongoing_workout_session: Option<OngoingWorkoutSession>,
    ) -> Result<(), String>;
}

/// Persistent form of a running workout player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OngoingWorkoutSession {
    pub workout_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(with = "SnapshotDef")]
    pub snapshot: Snapshot,
    pub timer_state: TimerState,
}

impl OngoingWorkoutSession {
    #[must_use]
    pub fn new(player: &WorkoutPlayer<'_>, now: DateTime<Utc>) -> Self {
        Self {
            workout_id: player.workout().id.to_string(),
            start_time: now,
            snapshot: player.snapshot(),
            timer_state: TimerState::of(player, now),
        }
    }

    pub fn update(&mut self, player: &WorkoutPlayer<'_>, now: DateTime<Utc>) {
        self.snapshot = player.snapshot();
        self.timer_state = TimerState::of(player, now);
    }

    /// Restores the player as it would be at `now` had it kept running.
    pub fn resume<'a>(
        &self,
        catalog: &'a Catalog,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlayer<'a>, NotFoundError> {
        let mut snapshot = self.snapshot;
        match self.timer_state {
            TimerState::Unset => {}
            TimerState::Paused { seconds } => {
                snapshot.timer_seconds = seconds;
                snapshot.timer_active = false;
            }
            TimerState::Active { since, seconds } => {
                let lag = seconds_between(since, now);
                snapshot.timer_active = true;
                snapshot.timer_seconds = if snapshot.step == Step::Rest {
                    seconds.saturating_sub(lag)
                } else {
                    seconds.saturating_add(lag)
                };
            }
        }

        let mut player = WorkoutPlayer::restore(
            catalog,
            &WorkoutID::from(self.workout_id.as_str()),
            snapshot,
        )?;
        if player.rest_remaining() == Some(0) {
            let _ = player.tick();
        }
        Ok(player)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Unset,
    /// A stopwatch counting up or a rest counting down since `since`.
    Active { since: DateTime<Utc>, seconds: u32 },
    Paused { seconds: u32 },
}

impl TimerState {
    fn of(player: &WorkoutPlayer<'_>, now: DateTime<Utc>) -> Self {
        match (player.elapsed(), player.rest_remaining()) {
            (Some(seconds), _) if player.is_timer_active() => TimerState::Active {
                since: now,
                seconds,
            },
            (Some(seconds), _) => TimerState::Paused { seconds },
            (None, Some(seconds)) => TimerState::Active {
                since: now,
                seconds,
            },
            (None, None) => TimerState::Unset,
        }
    }
}

fn seconds_between(since: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    u32::try_from((now - since).num_seconds().max(0)).unwrap_or(u32::MAX)
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Step")]
enum StepDef {
    Intro,
    Warmup,
    Exercise,
    Rest,
    Finished,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Position")]
struct PositionDef {
    exercise: usize,
    set: u32,
    warmup: usize,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Snapshot")]
struct SnapshotDef {
    level: usize,
    #[serde(with = "StepDef")]
    step: Step,
    #[serde(with = "PositionDef")]
    position: Position,
    timer_seconds: u32,
    timer_active: bool,
    reported: u32,
}
