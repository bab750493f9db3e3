use std::cmp::Ordering;

use crate::{Catalog, Difficulty, Exercise, MuscleGroup, Property, Workout};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    #[default]
    All,
    Exercises,
    Workouts,
}

impl ResultKind {
    fn includes_exercises(self) -> bool {
        matches!(self, ResultKind::All | ResultKind::Exercises)
    }

    fn includes_workouts(self) -> bool {
        matches!(self, ResultKind::All | ResultKind::Workouts)
    }
}

/// Search screen state. `None` for `category` or `difficulty` means "all".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchFilter {
    pub query: String,
    pub category: Option<MuscleGroup>,
    pub difficulty: Option<Difficulty>,
    pub kind: ResultKind,
}

impl SearchFilter {
    /// Workouts precede exercises before sorting; the sort is stable, so the
    /// order survives for equal titles.
    #[must_use]
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<SearchResult<'a>> {
        let query = self.query.trim().to_lowercase();

        let workouts = catalog
            .workouts()
            .filter(|_| self.kind.includes_workouts())
            .filter(|w| {
                matches_text(&query, &w.title, &w.description)
                    && self.category.is_none_or(|c| w.muscle_group == c)
                    && self.difficulty.is_none_or(|d| w.has_difficulty(d))
            })
            .map(SearchResult::Workout);

        let exercises = catalog
            .exercises()
            .filter(|_| self.kind.includes_exercises())
            .filter(|e| {
                matches_text(&query, &e.title, &e.description)
                    && self.category.is_none_or(|c| e.targets(c))
                    && self.difficulty.is_none_or(|d| e.difficulty == d)
            })
            .map(SearchResult::Exercise);

        let mut results = workouts.chain(exercises).collect::<Vec<_>>();
        results.sort_by(|a, b| compare(&query, a.title(), b.title()));
        results
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.kind == ResultKind::All
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Selecting the already selected category reverts to "all".
    pub fn select_category(&mut self, category: Option<MuscleGroup>) {
        if category.is_some() && self.category == category {
            self.category = None;
        } else {
            self.category = category;
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    pub fn select_kind(&mut self, kind: ResultKind) {
        self.kind = kind;
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Option<MuscleGroup>, bool)> {
        std::iter::once(None)
            .chain(MuscleGroup::iter().map(|m| Some(*m)))
            .map(|c| (c, self.category == c))
            .collect()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Option<Difficulty>, bool)> {
        std::iter::once(None)
            .chain(Difficulty::iter().map(|d| Some(*d)))
            .map(|d| (d, self.difficulty == d))
            .collect()
    }
}

fn matches_text(query: &str, title: &str, description: &str) -> bool {
    query.is_empty()
        || title.to_lowercase().contains(query)
        || description.to_lowercase().contains(query)
}

fn rank(query: &str, title: &str) -> u8 {
    if title == query {
        0
    } else if title.starts_with(query) {
        1
    } else {
        2
    }
}

fn compare(query: &str, a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if query.is_empty() {
        a.cmp(&b)
    } else {
        rank(query, &a).cmp(&rank(query, &b)).then_with(|| a.cmp(&b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchResult<'a> {
    Workout(&'a Workout),
    Exercise(&'a Exercise),
}

impl<'a> SearchResult<'a> {
    #[must_use]
    pub fn id(&self) -> &'a str {
        match *self {
            SearchResult::Workout(w) => &w.id,
            SearchResult::Exercise(e) => &e.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        match *self {
            SearchResult::Workout(w) => &w.title,
            SearchResult::Exercise(e) => &e.title,
        }
    }

    #[must_use]
    pub fn image_url(&self) -> &'a str {
        match *self {
            SearchResult::Workout(w) => &w.image_url,
            SearchResult::Exercise(e) => &e.image_url,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Workout(_) => ResultKind::Workouts,
            SearchResult::Exercise(_) => ResultKind::Exercises,
        }
    }

    /// Navigation target of the result card.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            SearchResult::Workout(w) => format!("/workouts/{}", w.id),
            SearchResult::Exercise(e) => format!("/exercises/{}", e.id),
        }
    }
}
