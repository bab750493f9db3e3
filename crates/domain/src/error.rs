use crate::{ExerciseID, WorkoutID};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("workout \"{0}\" not found")]
    Workout(WorkoutID),
    #[error("exercise \"{0}\" not found")]
    Exercise(ExerciseID),
    #[error("level {index} of workout \"{workout}\" not found")]
    Level { workout: WorkoutID, index: usize },
    #[error("set {set} of exercise {exercise} not found")]
    Set { exercise: usize, set: u32 },
    #[error("warmup step {0} not found")]
    Warmup(usize),
    #[error("level {index} of workout \"{workout}\" has no exercises")]
    EmptyLevel { workout: WorkoutID, index: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("duplicate exercise \"{0}\"")]
    DuplicateExercise(ExerciseID),
    #[error("duplicate workout \"{0}\"")]
    DuplicateWorkout(WorkoutID),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<CatalogError> for ReadError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::NotFound(err) => ReadError::NotFound(err),
            err => ReadError::Storage(StorageError::InvalidData(err.to_string())),
        }
    }
}
