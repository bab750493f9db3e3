use repline_domain::{
    Catalog, Difficulty, Exercise, ExerciseID, MuscleGroup, Sets, Workout, WorkoutExercise,
    WorkoutID, WorkoutLevel,
};

pub static CATALOG: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    Catalog::new(
        vec![
            exercise("plank", "Plank", MuscleGroup::Core),
            exercise("push-up", "Push-up", MuscleGroup::Chest),
        ],
        vec![Workout {
            id: WorkoutID::from("core"),
            title: String::from("Core Crusher"),
            muscle_group: MuscleGroup::Core,
            image_url: String::from("https://example.org/core.jpg"),
            description: String::from("Hold it."),
            levels: vec![WorkoutLevel {
                id: String::from("core-1"),
                level: String::from("Level 1"),
                difficulty: Difficulty::Beginner,
                duration: String::from("10 min"),
                warmup: vec![String::from("Cat cow")],
                exercises: vec![
                    WorkoutExercise {
                        exercise_id: ExerciseID::from("plank"),
                        sets: Sets::new(2).unwrap(),
                        reps: None,
                        duration: Some(String::from("45 sec")),
                        rest: String::from("60 sec"),
                    },
                    WorkoutExercise {
                        exercise_id: ExerciseID::from("push-up"),
                        sets: Sets::new(1).unwrap(),
                        reps: Some(String::from("10")),
                        duration: None,
                        rest: String::from("60 sec"),
                    },
                ],
                stretching: vec![],
            }],
        }],
    )
    .unwrap()
});

fn exercise(id: &str, title: &str, muscle_group: MuscleGroup) -> Exercise {
    Exercise {
        id: ExerciseID::from(id),
        title: title.to_string(),
        level: String::from("Level 1"),
        image_url: format!("https://example.org/{id}.jpg"),
        description: String::new(),
        muscle_groups: vec![muscle_group],
        steps: vec![],
        difficulty: Difficulty::Beginner,
    }
}
