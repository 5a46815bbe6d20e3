use std::collections::HashSet;

use crate::{AliasIndex, ExerciseDefinition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedExercise<'a> {
    pub name: String,
    pub name_en: String,
    pub name_ru: String,
    pub matched: bool,
    pub definition: Option<&'a ExerciseDefinition>,
}

impl<'a> NormalizedExercise<'a> {
    fn from_definition(definition: &'a ExerciseDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            name_en: definition.name_en.to_string(),
            name_ru: definition.name_ru.to_string(),
            matched: true,
            definition: Some(definition),
        }
    }

    pub(crate) fn unmatched(text: &str) -> Self {
        Self {
            name: text.to_string(),
            name_en: text.to_string(),
            name_ru: text.to_string(),
            matched: false,
            definition: None,
        }
    }
}

/// Resolves arbitrary input text to a catalog exercise. Strategies are tried
/// in priority order, the first hit wins, and the trimmed input itself is the
/// fallback, so this is total over all inputs.
#[must_use]
pub fn normalize<'a>(index: &AliasIndex<'a>, input: &str) -> NormalizedExercise<'a> {
    let trimmed = input.trim();
    let folded = trimmed.to_lowercase();

    if let Some(definition) = index.lookup_folded(&folded) {
        return NormalizedExercise::from_definition(definition);
    }

    // Substring containment in either direction. The contained string must
    // have at least 4 characters to keep short words from matching inside
    // unrelated longer ones.
    for (key, definition) in index.entries() {
        if (key.chars().count() >= 4 && folded.contains(key))
            || (folded.chars().count() >= 4 && key.contains(&folded))
        {
            return NormalizedExercise::from_definition(definition);
        }
    }

    let input_tokens = folded.split_whitespace().collect::<HashSet<_>>();

    if input_tokens.len() > 1 {
        for (key, definition) in index.entries() {
            let alias_tokens = key.split_whitespace().collect::<HashSet<_>>();
            let shared = input_tokens.intersection(&alias_tokens).count();

            if shared >= 2.min(alias_tokens.len()) {
                return NormalizedExercise::from_definition(definition);
            }
        }
    }

    NormalizedExercise::unmatched(trimmed)
}
