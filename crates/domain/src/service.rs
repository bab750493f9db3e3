use log::{error, warn};

use crate::{Catalog, Exercise, ExerciseRepository, ReadError, Workout, WorkoutRepository};

pub trait CatalogService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn get_catalog(&self) -> Result<Catalog, ReadError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: ExerciseRepository + WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::NotFound(_) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository + WorkoutRepository> CatalogService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(self.repository.read_exercises(), "get", "exercises")
    }

    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), "get", "workouts")
    }

    fn get_catalog(&self) -> Result<Catalog, ReadError> {
        log_on_error!(
            self.repository.read_exercises().and_then(|exercises| {
                Ok(Catalog::new(exercises, self.repository.read_workouts()?)?)
            }),
            "get",
            "catalog"
        )
    }
}
