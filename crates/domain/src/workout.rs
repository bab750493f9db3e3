use derive_more::{Deref, Display, Into};

use crate::{Difficulty, ExerciseID, MuscleGroup, Property, ReadError};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub title: String,
    pub muscle_group: MuscleGroup,
    pub image_url: String,
    pub description: String,
    pub levels: Vec<WorkoutLevel>,
}

impl Workout {
    #[must_use]
    pub fn has_difficulty(&self, difficulty: Difficulty) -> bool {
        self.levels.iter().any(|l| l.difficulty == difficulty)
    }

    pub(crate) fn mentions(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self.muscle_group.id().contains(term)
    }
}

#[derive(Deref, Debug, Default, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(String);

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutLevel {
    pub id: String,
    pub level: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub warmup: Vec<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub stretching: Vec<String>,
}

impl WorkoutLevel {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| u32::from(e.sets)).sum()
    }

    /// Number of sets prescribed before the exercise at `index`.
    #[must_use]
    pub fn sets_before(&self, index: usize) -> u32 {
        self.exercises
            .iter()
            .take(index)
            .map(|e| u32::from(e.sets))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: Sets,
    pub reps: Option<String>,
    pub duration: Option<String>,
    pub rest: String,
}

impl WorkoutExercise {
    #[must_use]
    pub fn is_time_based(&self) -> bool {
        self.duration.is_some()
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..100).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl PartialEq<u32> for Sets {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
}
