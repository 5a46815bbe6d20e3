use crate::Side;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Locale {
    En,
    Ru,
}

pub struct LocaleTable {
    pub locale: Locale,
    pub counting_words: &'static [&'static str],
    pub sets_words: &'static [&'static str],
    pub each_side_phrases: &'static [&'static str],
    pub left_words: &'static [&'static str],
    pub right_words: &'static [&'static str],
    pub second_units: &'static [&'static str],
    pub minute_units: &'static [&'static str],
    pub weight_units: &'static [&'static str],
    pub superset_markers: &'static [&'static str],
}

pub static LOCALES: [LocaleTable; 2] = [
    LocaleTable {
        locale: Locale::En,
        counting_words: &["reps", "rep", "times"],
        sets_words: &["sets", "set"],
        each_side_phrases: &["each side", "per side", "each leg", "each arm"],
        left_words: &["left"],
        right_words: &["right"],
        second_units: &["seconds", "secs", "sec", "s"],
        minute_units: &["minutes", "mins", "min", "m"],
        weight_units: &["kgs", "kg"],
        superset_markers: &["superset", "super set"],
    },
    LocaleTable {
        locale: Locale::Ru,
        counting_words: &["раза", "раз"],
        sets_words: &["подходов", "подхода", "подход"],
        each_side_phrases: &[
            "на каждую сторону",
            "на каждую ногу",
            "на каждую руку",
            "каждой стороной",
        ],
        left_words: &["левая", "левой", "слева", "лево"],
        right_words: &["правая", "правой", "справа", "право"],
        second_units: &["секунды", "секунд", "сек", "с"],
        minute_units: &["минуты", "минут", "мин", "м"],
        weight_units: &["кг"],
        superset_markers: &["суперсет", "суперсерия"],
    },
];

#[must_use]
pub fn table(locale: Locale) -> &'static LocaleTable {
    match locale {
        Locale::En => &LOCALES[0],
        Locale::Ru => &LOCALES[1],
    }
}

fn alternation(select: fn(&'static LocaleTable) -> &'static [&'static str]) -> String {
    LOCALES
        .iter()
        .flat_map(|table| select(table).iter())
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

pub(crate) fn counting_words() -> String {
    alternation(|table| table.counting_words)
}

pub(crate) fn sets_words() -> String {
    alternation(|table| table.sets_words)
}

pub(crate) fn each_side_phrases() -> String {
    alternation(|table| table.each_side_phrases)
}

pub(crate) fn second_units() -> String {
    alternation(|table| table.second_units)
}

pub(crate) fn minute_units() -> String {
    alternation(|table| table.minute_units)
}

pub(crate) fn weight_units() -> String {
    alternation(|table| table.weight_units)
}

/// Case-folds a token and rewrites notation glyphs into their canonical
/// forms: multiplication signs become `x` and decimal commas become `.`.
/// The Cyrillic letter `х` is only treated as a multiplication sign next to
/// a digit, as it is an ordinary letter inside words like `подход`.
pub(crate) fn normalize_token(text: &str) -> String {
    let lowered = text.trim().trim_matches([',', ';']).trim().to_lowercase();
    let chars = lowered.chars().collect::<Vec<_>>();
    let mut normalized = String::with_capacity(lowered.len());

    for (i, &c) in chars.iter().enumerate() {
        normalized.push(match c {
            '×' | '*' => 'x',
            'х' if next_to_digit(&chars, i) => 'x',
            ',' if between_digits(&chars, i) => '.',
            _ => c,
        });
    }

    normalized
}

fn next_to_digit(chars: &[char], i: usize) -> bool {
    let prev = chars[..i].iter().rev().find(|c| !c.is_whitespace());
    let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
    prev.is_some_and(char::is_ascii_digit) || next.is_some_and(char::is_ascii_digit)
}

fn between_digits(chars: &[char], i: usize) -> bool {
    i > 0
        && chars[i - 1].is_ascii_digit()
        && chars.get(i + 1).is_some_and(char::is_ascii_digit)
}

/// Strips a trailing side word (optionally parenthesized) from an already
/// normalized token and reports which side it named.
pub(crate) fn strip_side(text: &str) -> (&str, Option<Side>) {
    let trimmed = text.trim_end_matches(')').trim_end();

    for table in &LOCALES {
        for (words, side) in [
            (table.left_words, Side::Left),
            (table.right_words, Side::Right),
        ] {
            for word in words {
                if let Some(rest) = trimmed.strip_suffix(word) {
                    if rest.is_empty() || rest.ends_with([' ', '(']) {
                        return (rest.trim_end_matches([' ', '(']).trim_end(), Some(side));
                    }
                }
            }
        }
    }

    (text, None)
}

pub(crate) fn is_superset_marker(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    LOCALES
        .iter()
        .flat_map(|table| table.superset_markers.iter())
        .any(|marker| lowered.starts_with(marker))
}

pub(crate) fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| "-=_*–—".contains(c))
}
