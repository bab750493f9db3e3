use std::collections::{BTreeMap, BTreeSet};

use crate::{
    CatalogError, Exercise, ExerciseID, MuscleGroup, NotFoundError, Property, Workout, WorkoutID,
};

/// The bundled, read-only collection of exercises and workouts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    exercises: BTreeMap<ExerciseID, Exercise>,
    workouts: Vec<Workout>,
}

impl Catalog {
    /// Fails on duplicate ids and if a workout references an exercise that is not part of
    /// `exercises`.
    pub fn new(exercises: Vec<Exercise>, workouts: Vec<Workout>) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for exercise in exercises {
            if by_id.contains_key(&exercise.id) {
                return Err(CatalogError::DuplicateExercise(exercise.id));
            }
            by_id.insert(exercise.id.clone(), exercise);
        }

        let mut workout_ids = BTreeSet::new();
        for workout in &workouts {
            if !workout_ids.insert(&workout.id) {
                return Err(CatalogError::DuplicateWorkout(workout.id.clone()));
            }
            for level in &workout.levels {
                for workout_exercise in &level.exercises {
                    if !by_id.contains_key(&workout_exercise.exercise_id) {
                        return Err(NotFoundError::Exercise(
                            workout_exercise.exercise_id.clone(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(Self {
            exercises: by_id,
            workouts,
        })
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    #[must_use]
    pub fn workout(&self, id: &WorkoutID) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == *id)
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    #[must_use]
    pub fn search_exercises(&self, term: &str) -> Vec<&Exercise> {
        let term = term.to_lowercase();
        self.exercises
            .values()
            .filter(|e| term.is_empty() || e.mentions(&term))
            .collect()
    }

    #[must_use]
    pub fn search_workouts(&self, term: &str) -> Vec<&Workout> {
        let term = term.to_lowercase();
        self.workouts
            .iter()
            .filter(|w| term.is_empty() || w.mentions(&term))
            .collect()
    }

    /// `None` stands for the "all" category.
    #[must_use]
    pub fn workouts_by_muscle_group(&self, muscle_group: Option<MuscleGroup>) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|w| muscle_group.is_none_or(|m| w.muscle_group == m))
            .collect()
    }

    #[must_use]
    pub fn featured_workouts(&self, count: usize) -> Vec<&Workout> {
        self.workouts.iter().take(count).collect()
    }

    #[must_use]
    pub fn categories() -> Vec<MuscleGroup> {
        MuscleGroup::iter().copied().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty() && self.workouts.is_empty()
    }
}
