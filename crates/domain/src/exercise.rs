use std::{fmt, slice::Iter};

use derive_more::{Deref, Display};

use crate::ReadError;

pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub title: String,
    pub level: String,
    pub image_url: String,
    pub description: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub steps: Vec<String>,
    pub difficulty: Difficulty,
}

impl Exercise {
    #[must_use]
    pub fn targets(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle_group)
    }

    /// Broad match used by the catalog browser. `term` must already be lowercase.
    pub(crate) fn mentions(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self.muscle_groups.iter().any(|m| m.id().contains(term))
            || self.level.to_lowercase().contains(term)
    }
}

#[derive(Deref, Debug, Default, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTIES: [Difficulty; 4] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Expert,
        ];
        DIFFICULTIES.iter()
    }

    fn id(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Difficulty::iter()
            .find(|d| d.id() == value)
            .copied()
            .ok_or_else(|| DifficultyError::Unknown(value.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("unknown difficulty \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Core,
    Chest,
    Back,
    Arms,
    Shoulders,
    Legs,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Core,
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Arms,
            MuscleGroup::Shoulders,
            MuscleGroup::Legs,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn id(self) -> &'static str {
        match self {
            MuscleGroup::Core => "core",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Legs => "legs",
            MuscleGroup::FullBody => "full-body",
        }
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Core => "Core",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.id() == value)
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(value.to_string()))
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("unknown muscle group \"{0}\"")]
    Unknown(String),
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn id(self) -> &'static str;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("beginner", Ok(Difficulty::Beginner))]
    #[case("expert", Ok(Difficulty::Expert))]
    #[case("Expert", Err(DifficultyError::Unknown("Expert".to_string())))]
    #[case("", Err(DifficultyError::Unknown(String::new())))]
    fn test_difficulty_try_from(
        #[case] value: &str,
        #[case] expected: Result<Difficulty, DifficultyError>,
    ) {
        assert_eq!(Difficulty::try_from(value), expected);
    }

    #[rstest]
    #[case("full-body", Ok(MuscleGroup::FullBody))]
    #[case("chest", Ok(MuscleGroup::Chest))]
    #[case("all", Err(MuscleGroupError::Unknown("all".to_string())))]
    fn test_muscle_group_try_from(
        #[case] value: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::try_from(value), expected);
    }

    #[test]
    fn test_property_ids_round_trip() {
        for difficulty in Difficulty::iter() {
            assert_eq!(Difficulty::try_from(difficulty.id()), Ok(*difficulty));
        }
        for muscle_group in MuscleGroup::iter() {
            assert_eq!(MuscleGroup::try_from(muscle_group.id()), Ok(*muscle_group));
        }
    }

    #[rstest]
    #[case(MuscleGroup::FullBody, "Full Body")]
    #[case(MuscleGroup::Core, "Core")]
    fn test_muscle_group_display(#[case] muscle_group: MuscleGroup, #[case] expected: &str) {
        assert_eq!(muscle_group.to_string(), expected);
    }

    #[rstest]
    #[case("push", true)]
    #[case("chest", true)]
    #[case("elbows", true)]
    #[case("level 2", true)]
    #[case("legs", false)]
    fn test_exercise_mentions(#[case] term: &str, #[case] expected: bool) {
        let exercise = Exercise {
            id: ExerciseID::from("e1"),
            title: String::from("Push-up"),
            level: String::from("Level 2"),
            image_url: String::new(),
            description: String::from("Keep your Elbows close."),
            muscle_groups: vec![MuscleGroup::Chest, MuscleGroup::Arms],
            steps: vec![],
            difficulty: Difficulty::Beginner,
        };
        assert_eq!(exercise.mentions(term), expected);
    }
}
