use repline_domain::{
    self as domain, ExerciseRepository, ReadError, StorageError, WorkoutRepository,
};

const EXERCISES: &str = include_str!("../data/exercises.json");
const WORKOUTS: &str = include_str!("../data/workouts.json");

/// Read-only catalog shipped with the application.
pub struct BundledCatalog {
    exercises: &'static str,
    workouts: &'static str,
}

impl BundledCatalog {
    #[must_use]
    pub fn from_json(exercises: &'static str, workouts: &'static str) -> Self {
        Self {
            exercises,
            workouts,
        }
    }
}

impl Default for BundledCatalog {
    fn default() -> Self {
        Self::from_json(EXERCISES, WORKOUTS)
    }
}

impl ExerciseRepository for BundledCatalog {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, ReadError> {
        let exercises = serde_json::from_str::<Vec<Exercise>>(self.exercises)
            .map_err(|err| StorageError::Other(err.into()))?;
        Ok(exercises
            .into_iter()
            .map(|e| {
                let id = e.id.clone();
                domain::Exercise::try_from(e).map_err(|err| {
                    StorageError::InvalidData(format!("exercise \"{id}\": {err}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?)
    }
}

impl WorkoutRepository for BundledCatalog {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, ReadError> {
        let Workouts { workouts } = serde_json::from_str::<Workouts>(self.workouts)
            .map_err(|err| StorageError::Other(err.into()))?;
        Ok(workouts
            .into_iter()
            .map(|w| {
                let id = w.id.clone();
                domain::Workout::try_from(w).map_err(|err| {
                    StorageError::InvalidData(format!("workout \"{id}\": {err}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?)
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct Exercise {
    id: String,
    title: String,
    level: String,
    image_url: String,
    description: String,
    muscle_groups: Vec<String>,
    #[serde(default)]
    steps: Vec<String>,
    difficulty: String,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            title: value.title,
            level: value.level,
            image_url: value.image_url,
            description: value.description,
            muscle_groups: value
                .muscle_groups
                .iter()
                .map(|m| domain::MuscleGroup::try_from(m.as_str()))
                .collect::<Result<Vec<_>, _>>()?,
            steps: value.steps,
            difficulty: domain::Difficulty::try_from(value.difficulty.as_str())?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidMuscleGroup(#[from] domain::MuscleGroupError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::DifficultyError),
}

#[derive(serde::Deserialize, Debug)]
struct Workouts {
    workouts: Vec<Workout>,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct Workout {
    id: String,
    title: String,
    muscle_group: String,
    image_url: String,
    description: String,
    levels: Vec<WorkoutLevel>,
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WorkoutError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            title: value.title,
            muscle_group: domain::MuscleGroup::try_from(value.muscle_group.as_str())?,
            image_url: value.image_url,
            description: value.description,
            levels: value
                .levels
                .into_iter()
                .map(domain::WorkoutLevel::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct WorkoutLevel {
    id: String,
    level: String,
    difficulty: String,
    duration: String,
    #[serde(default)]
    warmup: Vec<String>,
    exercises: Vec<WorkoutExercise>,
    #[serde(default)]
    stretching: Vec<String>,
}

impl TryFrom<WorkoutLevel> for domain::WorkoutLevel {
    type Error = WorkoutError;

    fn try_from(value: WorkoutLevel) -> Result<Self, Self::Error> {
        if value.exercises.is_empty() {
            return Err(WorkoutError::NoExercises(value.id));
        }
        Ok(Self {
            id: value.id,
            level: value.level,
            difficulty: domain::Difficulty::try_from(value.difficulty.as_str())?,
            duration: value.duration,
            warmup: value.warmup,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            stretching: value.stretching,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct WorkoutExercise {
    exercise_id: String,
    sets: u32,
    reps: Option<String>,
    duration: Option<String>,
    rest: String,
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = WorkoutError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        if value.reps.is_none() && value.duration.is_none() {
            return Err(WorkoutError::MissingAmount(value.exercise_id));
        }
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            sets: domain::Sets::new(value.sets)?,
            reps: value.reps,
            duration: value.duration,
            rest: value.rest,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    InvalidMuscleGroup(#[from] domain::MuscleGroupError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::DifficultyError),
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error("level \"{0}\" has no exercises")]
    NoExercises(String),
    #[error("neither reps nor duration given for \"{0}\"")]
    MissingAmount(String),
}
