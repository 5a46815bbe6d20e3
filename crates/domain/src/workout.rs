use crate::{ExerciseDefinition, NormalizedExercise, ParsedSet};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExercise<'a> {
    pub name: String,
    pub name_en: String,
    pub name_ru: String,
    pub was_normalized: bool,
    pub sets: Vec<ParsedSet>,
    pub superset_group: Option<u32>,
    pub is_bodyweight: bool,
    pub definition: Option<&'a ExerciseDefinition>,
}

impl<'a> ParsedExercise<'a> {
    #[must_use]
    pub fn new(normalized: NormalizedExercise<'a>, superset_group: Option<u32>) -> Self {
        let is_bodyweight = normalized
            .definition
            .is_some_and(|definition| definition.is_bodyweight);

        Self {
            name: normalized.name,
            name_en: normalized.name_en,
            name_ru: normalized.name_ru,
            was_normalized: normalized.matched,
            sets: Vec::new(),
            superset_group,
            is_bodyweight,
            definition: normalized.definition,
        }
    }

    pub(crate) fn placeholder(superset_group: Option<u32>) -> Self {
        Self::new(NormalizedExercise::unmatched("Workout"), superset_group)
    }

    pub(crate) fn finalize(&mut self) {
        self.sets = expand_sets(std::mem::take(&mut self.sets));
        inherit_weights(&mut self.sets);
    }

    #[must_use]
    pub fn total_volume(&self) -> f32 {
        self.sets.iter().map(ParsedSet::volume).sum()
    }

    #[must_use]
    pub fn format_sets(&self) -> String {
        self.sets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedWorkout<'a> {
    pub exercises: Vec<ParsedExercise<'a>>,
}

impl ParsedWorkout<'_> {
    #[must_use]
    pub fn total_volume(&self) -> f32 {
        self.exercises.iter().map(ParsedExercise::total_volume).sum()
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|exercise| exercise.sets.len()).sum()
    }
}

/// Turns repeat-count shorthand into individual sets. Expanded sets never
/// carry a count.
#[must_use]
pub fn expand_sets(sets: Vec<ParsedSet>) -> Vec<ParsedSet> {
    let mut expanded = Vec::with_capacity(sets.len());

    for set in sets {
        let count = set.set_count.unwrap_or(1).max(1);
        let each = ParsedSet {
            set_count: None,
            ..set
        };

        for _ in 0..count {
            expanded.push(each);
        }
    }

    expanded
}

/// Propagates the last explicit weight forward onto later weight-less sets of
/// the same exercise. Bodyweight sets are never assigned a weight.
pub fn inherit_weights(sets: &mut [ParsedSet]) {
    let mut last_weight = None;

    for set in sets {
        if set.weight.is_some() {
            last_weight = set.weight;
        } else if !set.is_bodyweight && set.reps.is_some() {
            set.weight = last_weight;
        }
    }
}
