use log::debug;

use crate::{AliasIndex, ParsedExercise, ParsedWorkout, locale, name, token};

pub struct WorkoutParser<'a> {
    index: &'a AliasIndex<'a>,
}

impl<'a> WorkoutParser<'a> {
    #[must_use]
    pub fn new(index: &'a AliasIndex<'a>) -> Self {
        Self { index }
    }

    /// Walks the input line by line, distinguishing exercise names, set data
    /// and superset markers. Unrecognized fragments are dropped, never an
    /// error, as the input is arbitrary user-typed text.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedWorkout<'a> {
        let mut exercises: Vec<ParsedExercise<'a>> = Vec::new();
        let mut current: Option<ParsedExercise<'a>> = None;
        let mut superset_group = None;
        let mut superset_count = 0;

        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if locale::is_superset_marker(line) {
                superset_count += 1;
                superset_group = Some(superset_count);
                // The exercise preceding the marker belongs to the group,
                // unless it is already part of an earlier one.
                if let Some(exercise) = current.as_mut() {
                    if exercise.superset_group.is_none() {
                        exercise.superset_group = superset_group;
                    }
                }
                continue;
            }

            if locale::is_separator(line) {
                superset_group = None;
                continue;
            }

            let bodyweight_context = current
                .as_ref()
                .is_some_and(|exercise| exercise.is_bodyweight);
            let whole_line = token::parse_token(line, bodyweight_context);
            let has_letters = line.chars().any(char::is_alphabetic);

            if has_letters && whole_line.is_none() {
                finalize(&mut exercises, current.take());
                current = Some(ParsedExercise::new(
                    name::normalize(self.index, line),
                    superset_group,
                ));
                continue;
            }

            let exercise = current.get_or_insert_with(|| {
                debug!("attaching sets without an exercise name to a placeholder");
                ParsedExercise::placeholder(superset_group)
            });

            if let Some(set) = whole_line {
                exercise.sets.push(set);
            } else {
                for fragment in line.split_whitespace() {
                    match token::parse_token(fragment, exercise.is_bodyweight) {
                        Some(set) => exercise.sets.push(set),
                        None => debug!("ignoring unrecognized fragment {fragment:?}"),
                    }
                }
            }
        }

        finalize(&mut exercises, current.take());

        ParsedWorkout { exercises }
    }
}

fn finalize<'a>(exercises: &mut Vec<ParsedExercise<'a>>, current: Option<ParsedExercise<'a>>) {
    if let Some(mut exercise) = current {
        exercise.finalize();
        exercises.push(exercise);
    }
}
