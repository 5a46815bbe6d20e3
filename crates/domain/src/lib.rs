#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod locale;
pub mod name;
pub mod parser;
pub mod quantity;
pub mod set;
pub mod token;
pub mod workout;

pub use catalog::{
    AliasIndex, CatalogError, Category, Equipment, ExerciseDefinition, MuscleGroup, Property,
    alias_index,
};
pub use name::{NormalizedExercise, normalize};
pub use parser::WorkoutParser;
pub use quantity::{Duration, DurationError, Reps, RepsError, Weight, WeightError};
pub use set::{ParsedSet, Side};
pub use token::parse_token;
pub use workout::{ParsedExercise, ParsedWorkout, expand_sets, inherit_weights};

#[must_use]
pub fn normalize_exercise_name(text: &str) -> NormalizedExercise<'static> {
    name::normalize(catalog::alias_index(), text)
}

#[must_use]
pub fn parse_workout_text(text: &str) -> ParsedWorkout<'static> {
    WorkoutParser::new(catalog::alias_index()).parse(text)
}

#[must_use]
pub fn format_set(set: &ParsedSet) -> String {
    set.to_string()
}

#[must_use]
pub fn format_exercise_sets(exercise: &ParsedExercise) -> String {
    exercise.format_sets()
}
