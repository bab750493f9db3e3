use log::{debug, warn};

use crate::{
    Catalog, Countdown, Exercise, NotFoundError, REST_TIME, Stopwatch, Workout, WorkoutExercise,
    WorkoutID, WorkoutLevel,
};

pub const MAX_REPORTED: u32 = 300;
const DEFAULT_REPORTED: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Warmup,
    Exercise,
    Rest,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Skip,
    /// Completes the current warmup item or set, or ends the rest early.
    Complete,
    SkipRest,
    /// One elapsed second.
    Tick,
    Close,
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue(Step),
    Ignored,
    /// The session is over and the host should return to the previous view.
    Exit,
}

/// Timers live inside the phase that owns them, so leaving a phase drops its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Intro,
    Warmup,
    Exercise(Stopwatch),
    Rest(Countdown),
    Finished,
}

impl From<Phase> for Step {
    fn from(value: Phase) -> Self {
        match value {
            Phase::Intro => Step::Intro,
            Phase::Warmup => Step::Warmup,
            Phase::Exercise(_) => Step::Exercise,
            Phase::Rest(_) => Step::Rest,
            Phase::Finished => Step::Finished,
        }
    }
}

/// During a rest the position already points at the upcoming set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub exercise: usize,
    /// 1-based
    pub set: u32,
    pub warmup: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            exercise: 0,
            set: 1,
            warmup: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpNext {
    Set,
    Exercise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub level: usize,
    pub step: Step,
    pub position: Position,
    pub timer_seconds: u32,
    pub timer_active: bool,
    pub reported: u32,
}

#[derive(Debug)]
pub struct WorkoutPlayer<'a> {
    catalog: &'a Catalog,
    workout: &'a Workout,
    level: usize,
    position: Position,
    phase: Phase,
    rest_time: u32,
    reported: u32,
}

impl<'a> WorkoutPlayer<'a> {
    pub fn new(catalog: &'a Catalog, workout_id: &WorkoutID) -> Result<Self, NotFoundError> {
        let workout = catalog
            .workout(workout_id)
            .ok_or_else(|| NotFoundError::Workout(workout_id.clone()))?;

        for level in &workout.levels {
            for workout_exercise in &level.exercises {
                if catalog.exercise(&workout_exercise.exercise_id).is_none() {
                    return Err(NotFoundError::Exercise(
                        workout_exercise.exercise_id.clone(),
                    ));
                }
            }
        }

        check_level(workout, 0)?;

        Ok(Self {
            catalog,
            workout,
            level: 0,
            position: Position::default(),
            phase: Phase::Intro,
            rest_time: REST_TIME,
            reported: DEFAULT_REPORTED,
        })
    }

    /// Creates a player for the level at `index`. Failures are logged, as the session is aborted.
    pub fn at_level(
        catalog: &'a Catalog,
        workout_id: &WorkoutID,
        index: usize,
    ) -> Result<Self, NotFoundError> {
        Self::new(catalog, workout_id)
            .and_then(|mut player| {
                player.select_level(index)?;
                Ok(player)
            })
            .inspect_err(|err| warn!("aborted workout session: {err}"))
    }

    pub fn restore(
        catalog: &'a Catalog,
        workout_id: &WorkoutID,
        snapshot: Snapshot,
    ) -> Result<Self, NotFoundError> {
        let mut player = Self::new(catalog, workout_id)?;
        player.select_level(snapshot.level)?;

        let Snapshot {
            step,
            position,
            timer_seconds,
            timer_active,
            ..
        } = snapshot;
        let level = player.level();
        let invalid_set = NotFoundError::Set {
            exercise: position.exercise,
            set: position.set,
        };

        let Some(workout_exercise) = level.exercises.get(position.exercise) else {
            return Err(invalid_set);
        };
        if position.set == 0 || u32::from(workout_exercise.sets) < position.set {
            return Err(invalid_set);
        }
        if step == Step::Rest && position.exercise == 0 && position.set == 1 {
            return Err(invalid_set);
        }
        if step == Step::Warmup && position.warmup >= level.warmup.len() {
            return Err(NotFoundError::Warmup(position.warmup));
        }

        player.position = position;
        player.phase = match step {
            Step::Intro => Phase::Intro,
            Step::Warmup => Phase::Warmup,
            Step::Exercise => Phase::Exercise(Stopwatch::new(timer_seconds, timer_active)),
            Step::Rest => Phase::Rest(Countdown::new(timer_seconds)),
            Step::Finished => Phase::Finished,
        };
        player.set_reported(snapshot.reported);

        Ok(player)
    }

    #[must_use]
    pub fn with_rest_time(mut self, seconds: u32) -> Self {
        self.rest_time = seconds;
        self
    }

    /// Only possible before the workout has been started. Returns `false` and keeps the
    /// current level if the workout is already past the intro.
    pub fn select_level(&mut self, index: usize) -> Result<bool, NotFoundError> {
        if self.phase != Phase::Intro {
            debug!(
                "ignored level selection for workout \"{}\" in {:?}",
                self.workout.id,
                self.step()
            );
            return Ok(false);
        }
        check_level(self.workout, index)?;
        self.level = index;
        self.position = Position::default();
        Ok(true)
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        let previous = self.step();
        let outcome = match (self.phase, event) {
            (Phase::Finished, _) => Outcome::Ignored,
            (_, Event::Close) => self.finish(),
            (Phase::Intro, Event::Start) => {
                if self.level().warmup.is_empty() {
                    self.enter_exercise()
                } else {
                    self.position.warmup = 0;
                    self.phase = Phase::Warmup;
                    Outcome::Continue(Step::Warmup)
                }
            }
            (Phase::Intro, Event::Skip) => self.enter_exercise(),
            (Phase::Warmup, Event::Complete) => {
                if self.is_last_warmup() {
                    self.enter_exercise()
                } else {
                    self.position.warmup += 1;
                    Outcome::Continue(Step::Warmup)
                }
            }
            (Phase::Exercise(_), Event::Complete) => self.complete_set(),
            (Phase::Exercise(mut stopwatch), Event::Tick) => {
                stopwatch.tick();
                self.phase = Phase::Exercise(stopwatch);
                Outcome::Continue(Step::Exercise)
            }
            (Phase::Rest(_), Event::Complete | Event::SkipRest) => self.enter_exercise(),
            (Phase::Rest(mut countdown), Event::Tick) => {
                if countdown.tick() {
                    self.enter_exercise()
                } else {
                    self.phase = Phase::Rest(countdown);
                    Outcome::Continue(Step::Rest)
                }
            }
            _ => Outcome::Ignored,
        };

        match outcome {
            Outcome::Ignored => {
                debug!("ignored {event:?} in {previous:?}");
            }
            Outcome::Continue(step) if step != previous => {
                debug!(
                    "workout \"{}\": {previous:?} -> {step:?} (exercise {}, set {})",
                    self.workout.id, self.position.exercise, self.position.set
                );
            }
            Outcome::Exit => {
                debug!("workout \"{}\": {previous:?} -> exit", self.workout.id);
            }
            Outcome::Continue(_) => {}
        }

        outcome
    }

    pub fn start(&mut self) -> Outcome {
        self.handle(Event::Start)
    }

    pub fn skip(&mut self) -> Outcome {
        self.handle(Event::Skip)
    }

    pub fn complete(&mut self) -> Outcome {
        self.handle(Event::Complete)
    }

    pub fn skip_rest(&mut self) -> Outcome {
        self.handle(Event::SkipRest)
    }

    pub fn tick(&mut self) -> Outcome {
        self.handle(Event::Tick)
    }

    pub fn close(&mut self) -> Outcome {
        self.handle(Event::Close)
    }

    pub fn start_timer(&mut self) -> bool {
        self.with_stopwatch(Stopwatch::start)
    }

    pub fn pause_timer(&mut self) -> bool {
        self.with_stopwatch(Stopwatch::pause)
    }

    pub fn toggle_timer(&mut self) -> bool {
        self.with_stopwatch(Stopwatch::start_pause)
    }

    pub fn reset_timer(&mut self) -> bool {
        self.with_stopwatch(Stopwatch::reset)
    }

    fn with_stopwatch(&mut self, f: impl FnOnce(&mut Stopwatch)) -> bool {
        if !self.is_time_based() {
            return false;
        }
        if let Phase::Exercise(stopwatch) = &mut self.phase {
            f(stopwatch);
            true
        } else {
            false
        }
    }

    fn enter_exercise(&mut self) -> Outcome {
        self.phase = Phase::Exercise(Stopwatch::default());
        Outcome::Continue(Step::Exercise)
    }

    fn complete_set(&mut self) -> Outcome {
        if self.is_last_set() {
            if self.is_last_exercise() {
                return self.finish();
            }
            self.position.exercise += 1;
            self.position.set = 1;
        } else {
            self.position.set += 1;
        }
        if self.rest_time == 0 {
            return self.enter_exercise();
        }
        self.phase = Phase::Rest(Countdown::new(self.rest_time));
        Outcome::Continue(Step::Rest)
    }

    fn finish(&mut self) -> Outcome {
        self.phase = Phase::Finished;
        Outcome::Exit
    }

    #[must_use]
    pub fn workout(&self) -> &'a Workout {
        self.workout
    }

    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn level(&self) -> &'a WorkoutLevel {
        &self.workout.levels[self.level]
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.phase.into()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn workout_exercise(&self) -> &'a WorkoutExercise {
        &self.level().exercises[self.position.exercise]
    }

    #[must_use]
    pub fn exercise(&self) -> Option<&'a Exercise> {
        self.catalog.exercise(&self.workout_exercise().exercise_id)
    }

    #[must_use]
    pub fn warmup(&self) -> Option<&'a str> {
        if self.phase == Phase::Warmup {
            self.level()
                .warmup
                .get(self.position.warmup)
                .map(String::as_str)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_last_exercise(&self) -> bool {
        self.position.exercise + 1 >= self.level().exercises.len()
    }

    #[must_use]
    pub fn is_last_set(&self) -> bool {
        self.position.set >= u32::from(self.workout_exercise().sets)
    }

    #[must_use]
    pub fn is_last_warmup(&self) -> bool {
        self.position.warmup + 1 >= self.level().warmup.len()
    }

    #[must_use]
    pub fn is_time_based(&self) -> bool {
        self.workout_exercise().is_time_based()
    }

    /// Elapsed seconds of the current set, if it is being performed.
    #[must_use]
    pub fn elapsed(&self) -> Option<u32> {
        match self.phase {
            Phase::Exercise(stopwatch) => Some(stopwatch.seconds()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_timer_active(&self) -> bool {
        matches!(self.phase, Phase::Exercise(stopwatch) if stopwatch.is_active())
    }

    #[must_use]
    pub fn rest_remaining(&self) -> Option<u32> {
        match self.phase {
            Phase::Rest(countdown) => Some(countdown.seconds()),
            _ => None,
        }
    }

    #[must_use]
    pub fn up_next(&self) -> Option<UpNext> {
        match self.phase {
            Phase::Rest(_) if self.position.set == 1 => Some(UpNext::Exercise),
            Phase::Rest(_) => Some(UpNext::Set),
            _ => None,
        }
    }

    /// The exercise performed right before the current rest.
    #[must_use]
    pub fn completed_exercise(&self) -> Option<&'a Exercise> {
        let index = match self.up_next()? {
            UpNext::Set => self.position.exercise,
            UpNext::Exercise => self.position.exercise.checked_sub(1)?,
        };
        self.catalog
            .exercise(&self.level().exercises.get(index)?.exercise_id)
    }

    /// Share of completed sets in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        let level = self.level();
        let total = level.num_sets();
        if total == 0 {
            return 0.0;
        }
        let completed = if self.is_finished() {
            total
        } else {
            level.sets_before(self.position.exercise) + self.position.set - 1
        };
        completed as f32 / total as f32 * 100.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn warmup_progress(&self) -> f32 {
        let count = self.level().warmup.len();
        if count == 0 {
            return 0.0;
        }
        (self.position.warmup + 1) as f32 / count as f32 * 100.0
    }

    /// Value of the "how many could you do" selector.
    #[must_use]
    pub fn reported(&self) -> u32 {
        self.reported
    }

    pub fn set_reported(&mut self, value: u32) {
        self.reported = value.min(MAX_REPORTED);
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let (timer_seconds, timer_active) = match self.phase {
            Phase::Exercise(stopwatch) => (stopwatch.seconds(), stopwatch.is_active()),
            Phase::Rest(countdown) => (countdown.seconds(), true),
            Phase::Intro | Phase::Warmup | Phase::Finished => (0, false),
        };
        Snapshot {
            level: self.level,
            step: self.step(),
            position: self.position,
            timer_seconds,
            timer_active,
            reported: self.reported,
        }
    }
}

fn check_level(workout: &Workout, index: usize) -> Result<(), NotFoundError> {
    match workout.levels.get(index) {
        None => Err(NotFoundError::Level {
            workout: workout.id.clone(),
            index,
        }),
        Some(level) if level.exercises.is_empty() => Err(NotFoundError::EmptyLevel {
            workout: workout.id.clone(),
            index,
        }),
        Some(_) => Ok(()),
    }
}
