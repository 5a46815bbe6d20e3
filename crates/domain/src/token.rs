use std::sync::LazyLock;

use regex::Regex;

use crate::{Duration, ParsedSet, Reps, Weight, locale};

const NUMBER: &str = r"\d+(?:\.\d+)?";

type Rule = fn(&str, bool) -> Option<ParsedSet>;

// Grammars are tried strictly in this order, first match wins. Each rule is a
// closed pattern over the normalized token and can be exercised on its own.
static RULES: [Rule; 14] = [
    sets_times_duration,
    counting_reps,
    counting_with_multiplier,
    counting_each_side,
    duration_with_multiplier,
    reps_times_duration,
    minutes,
    triple,
    reps_trailing_multiplier,
    pair_explicit_unit,
    pair_ambiguous,
    weight_first_pair,
    bare_reps,
    reps_with_trailing_word,
];

/// Parses one text fragment into a candidate set. Returns `None` for text
/// that is not set data, which is not an error.
#[must_use]
pub fn parse_token(text: &str, is_bodyweight_context: bool) -> Option<ParsedSet> {
    let normalized = locale::normalize_token(text);
    let (body, side) = locale::strip_side(&normalized);
    let body = body.trim();

    if body.is_empty() {
        return None;
    }

    for rule in RULES {
        if let Some(set) = rule(body, is_bodyweight_context) {
            return Some(ParsedSet { side, ..set });
        }
    }

    None
}

fn pattern(raw: &str) -> Option<Regex> {
    Regex::new(raw).ok()
}

static SETS_TIMES_DURATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*(?:{sets})\s*(\d+)\s*(?:({sec})|({min}))$",
        sets = locale::sets_words(),
        sec = locale::second_units(),
        min = locale::minute_units(),
    ))
});

fn sets_times_duration(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = SETS_TIMES_DURATION.as_ref()?.captures(text)?;
    let count = parse_count(&caps[1])?;
    let amount = caps[2].parse::<u32>().ok()?;
    let duration = if caps.get(4).is_some() {
        Duration::from_minutes(amount).ok()?
    } else {
        Duration::new(amount).ok()?
    };

    Some(ParsedSet {
        duration: Some(duration),
        is_bodyweight: true,
        set_count: Some(count),
        ..ParsedSet::default()
    })
}

static COUNTING_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*(?:{count})$",
        count = locale::counting_words()
    ))
});

fn counting_reps(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = COUNTING_REPS.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        is_bodyweight: true,
        ..ParsedSet::default()
    })
}

static COUNTING_WITH_MULTIPLIER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*(?:{count})\s*x\s*(\d+)$",
        count = locale::counting_words()
    ))
});

fn counting_with_multiplier(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = COUNTING_WITH_MULTIPLIER.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        is_bodyweight: true,
        set_count: Some(parse_count(&caps[2])?),
        ..ParsedSet::default()
    })
}

static COUNTING_EACH_SIDE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*(?:(?:{count})\s*)?(?:{each})$",
        count = locale::counting_words(),
        each = locale::each_side_phrases(),
    ))
});

fn counting_each_side(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = COUNTING_EACH_SIDE.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        is_bodyweight: true,
        set_count: Some(2),
        ..ParsedSet::default()
    })
}

static DURATION_WITH_MULTIPLIER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*(?:{sec})\s*x\s*(\d+)$",
        sec = locale::second_units()
    ))
});

fn duration_with_multiplier(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = DURATION_WITH_MULTIPLIER.as_ref()?.captures(text)?;

    Some(ParsedSet {
        duration: Some(Duration::try_from(&caps[1]).ok()?),
        is_bodyweight: true,
        set_count: Some(parse_count(&caps[2])?),
        ..ParsedSet::default()
    })
}

static REPS_TIMES_DURATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*x\s*(\d+)\s*(?:{sec})$",
        sec = locale::second_units()
    ))
});

fn reps_times_duration(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = REPS_TIMES_DURATION.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        duration: Some(Duration::try_from(&caps[2]).ok()?),
        is_bodyweight: true,
        ..ParsedSet::default()
    })
}

static MINUTES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^(\d+)\s*(?:{min})$",
        min = locale::minute_units()
    ))
});

fn minutes(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = MINUTES.as_ref()?.captures(text)?;
    let minutes = caps[1].parse::<u32>().ok()?;

    Some(ParsedSet {
        duration: Some(Duration::from_minutes(minutes).ok()?),
        is_bodyweight: true,
        ..ParsedSet::default()
    })
}

static TRIPLE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^({NUMBER})\s*x\s*({NUMBER})\s*x\s*(\d+)\s*(?:{kg})?$",
        kg = locale::weight_units()
    ))
});

// Three explicit numbers signal added external load even for bodyweight
// exercises, so this form is always weight, reps and set count.
fn triple(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = TRIPLE.as_ref()?.captures(text)?;
    let a = caps[1].parse::<f32>().ok()?;
    let b = caps[2].parse::<f32>().ok()?;
    let count = parse_count(&caps[3])?;
    let (weight, reps) = if a > b { (a, b) } else { (b, a) };

    Some(ParsedSet {
        reps: Some(round_reps(reps)?),
        weight: Some(Weight::new(weight).ok()?),
        set_count: Some(count),
        ..ParsedSet::default()
    })
}

static REPS_TRAILING_MULTIPLIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern(r"^(\d+)\s*x$"));

// The weight is deliberately left unset so that a preceding explicit weight
// can be inherited later.
fn reps_trailing_multiplier(text: &str, is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = REPS_TRAILING_MULTIPLIER.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        is_bodyweight: is_bodyweight_context,
        ..ParsedSet::default()
    })
}

static PAIR_EXPLICIT_UNIT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^({NUMBER})\s*x\s*({NUMBER})\s*(?:{kg})$",
        kg = locale::weight_units()
    ))
});

fn pair_explicit_unit(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = PAIR_EXPLICIT_UNIT.as_ref()?.captures(text)?;
    let a = caps[1].parse::<f32>().ok()?;
    let b = caps[2].parse::<f32>().ok()?;
    let (reps, weight) = if is_fractional(a) { (b, a) } else { (a, b) };

    Some(ParsedSet {
        reps: Some(round_reps(reps)?),
        weight: Some(Weight::new(weight).ok()?),
        ..ParsedSet::default()
    })
}

static PAIR_AMBIGUOUS: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern(&format!(r"^({NUMBER})\s*x\s*({NUMBER})$")));

fn pair_ambiguous(text: &str, is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = PAIR_AMBIGUOUS.as_ref()?.captures(text)?;
    let a = caps[1].parse::<f32>().ok()?;
    let b = caps[2].parse::<f32>().ok()?;

    if is_bodyweight_context && b <= 10.0 {
        return Some(ParsedSet {
            reps: Some(round_reps(a)?),
            is_bodyweight: true,
            set_count: Some(round_count(b)?),
            ..ParsedSet::default()
        });
    }

    let (reps, weight) = if is_fractional(a) {
        (b, a)
    } else if a > 1.5 * b {
        (b, a)
    } else if b > 1.5 * a {
        (a, b)
    } else if b <= 5.0 {
        // Comparable magnitude and a small second number reads as reps
        // times sets without load.
        return Some(ParsedSet {
            reps: Some(round_reps(a)?),
            is_bodyweight: true,
            set_count: Some(round_count(b)?),
            ..ParsedSet::default()
        });
    } else {
        (a, b)
    };

    Some(ParsedSet {
        reps: Some(round_reps(reps)?),
        weight: Some(Weight::new(weight).ok()?),
        ..ParsedSet::default()
    })
}

static WEIGHT_FIRST_PAIR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    pattern(&format!(
        r"^({NUMBER})\s*(?:{kg})\s*x\s*(\d+)$",
        kg = locale::weight_units()
    ))
});

fn weight_first_pair(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = WEIGHT_FIRST_PAIR.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[2]).ok()?),
        weight: Some(Weight::try_from(&caps[1]).ok()?),
        ..ParsedSet::default()
    })
}

static BARE_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| pattern(r"^(\d+)$"));

fn bare_reps(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = BARE_REPS.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        is_bodyweight: true,
        ..ParsedSet::default()
    })
}

static REPS_WITH_TRAILING_WORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern(r"^(\d+)\s+\p{L}+$"));

fn reps_with_trailing_word(text: &str, _is_bodyweight_context: bool) -> Option<ParsedSet> {
    let caps = REPS_WITH_TRAILING_WORD.as_ref()?.captures(text)?;

    Some(ParsedSet {
        reps: Some(Reps::try_from(&caps[1]).ok()?),
        is_bodyweight: true,
        ..ParsedSet::default()
    })
}

fn parse_count(text: &str) -> Option<u32> {
    let count = text.parse::<u32>().ok()?;
    (1..1000).contains(&count).then_some(count)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_count(value: f32) -> Option<u32> {
    let count = value.round() as u32;
    (1..1000).contains(&count).then_some(count)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_reps(value: f32) -> Option<Reps> {
    Reps::new(value.round() as u32).ok()
}

fn is_fractional(value: f32) -> bool {
    value.fract().abs() > f32::EPSILON
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Side;

    use super::*;

    fn set(
        reps: Option<u32>,
        weight: Option<f32>,
        duration: Option<u32>,
        is_bodyweight: bool,
        set_count: Option<u32>,
    ) -> ParsedSet {
        ParsedSet {
            reps: reps.map(|r| Reps::new(r).unwrap()),
            weight: weight.map(|w| Weight::new(w).unwrap()),
            duration: duration.map(|d| Duration::new(d).unwrap()),
            is_bodyweight,
            side: None,
            set_count,
        }
    }

    #[rstest]
    // sets word with duration
    #[case::sets_word_seconds("3 подхода 45 сек", false, set(None, None, Some(45), true, Some(3)))]
    #[case::sets_word_seconds_en("3 sets 45 sec", false, set(None, None, Some(45), true, Some(3)))]
    #[case::sets_word_minutes("2 подхода 5 мин", false, set(None, None, Some(300), true, Some(2)))]
    // counting words
    #[case::counting_ru("15 раз", false, set(Some(15), None, None, true, None))]
    #[case::counting_en("12 reps", false, set(Some(12), None, None, true, None))]
    #[case::counting_with_multiplier("15 раз х3", false, set(Some(15), None, None, true, Some(3)))]
    #[case::counting_each_side("12 each side", false, set(Some(12), None, None, true, Some(2)))]
    #[case::counting_each_side_ru(
        "15 раз на каждую сторону",
        false,
        set(Some(15), None, None, true, Some(2))
    )]
    // durations
    #[case::duration_with_multiplier("45 сек х 3", false, set(None, None, Some(45), true, Some(3)))]
    #[case::duration_with_multiplier_en("45sec x 3", false, set(None, None, Some(45), true, Some(3)))]
    #[case::reps_times_duration("3x45sec", false, set(Some(3), None, Some(45), true, None))]
    #[case::minutes("5min", false, set(None, None, Some(300), true, None))]
    #[case::minutes_ru("5 мин", false, set(None, None, Some(300), true, None))]
    // triple numeric form
    #[case::triple_weight_first("60x10x3", false, set(Some(10), Some(60.0), None, false, Some(3)))]
    #[case::triple_reps_first("10x60x3", false, set(Some(10), Some(60.0), None, false, Some(3)))]
    #[case::triple_fractional("62.5x8x3", false, set(Some(8), Some(62.5), None, false, Some(3)))]
    #[case::triple_with_unit("60x10x3 кг", false, set(Some(10), Some(60.0), None, false, Some(3)))]
    #[case::triple_in_bodyweight_context(
        "60x10x3",
        true,
        set(Some(10), Some(60.0), None, false, Some(3))
    )]
    // trailing multiplier without weight
    #[case::reps_trailing_x("7x", false, set(Some(7), None, None, false, None))]
    #[case::reps_trailing_x_bodyweight("7x", true, set(Some(7), None, None, true, None))]
    // two numbers with explicit unit
    #[case::pair_unit("10x20kg", false, set(Some(10), Some(20.0), None, false, None))]
    #[case::pair_unit_fractional("22.5x8kg", false, set(Some(8), Some(22.5), None, false, None))]
    #[case::pair_unit_ru("10х20кг", false, set(Some(10), Some(20.0), None, false, None))]
    // two numbers without unit
    #[case::pair_bodyweight_small_second("12x3", true, set(Some(12), None, None, true, Some(3)))]
    #[case::pair_fractional_first("22.5x8", false, set(Some(8), Some(22.5), None, false, None))]
    #[case::pair_first_larger("100x5", false, set(Some(5), Some(100.0), None, false, None))]
    #[case::pair_second_larger("10x20", false, set(Some(10), Some(20.0), None, false, None))]
    #[case::pair_comparable_small_second("3x3", false, set(Some(3), None, None, true, Some(3)))]
    #[case::pair_comparable("15x12", false, set(Some(15), Some(12.0), None, false, None))]
    #[case::pair_first_larger_no_context("12x3", false, set(Some(3), Some(12.0), None, false, None))]
    // weight first with unit
    #[case::weight_first("20кг х 10", false, set(Some(10), Some(20.0), None, false, None))]
    #[case::weight_first_decimal_comma("22,5кг х 8", false, set(Some(8), Some(22.5), None, false, None))]
    // bare forms
    #[case::bare_integer("10", false, set(Some(10), None, None, true, None))]
    #[case::integer_with_trailing_word("10 пролетов", false, set(Some(10), None, None, true, None))]
    fn test_parse_token(
        #[case] text: &str,
        #[case] is_bodyweight_context: bool,
        #[case] expected: ParsedSet,
    ) {
        assert_eq!(parse_token(text, is_bodyweight_context), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("warmup")]
    #[case("Bench press")]
    #[case("left")]
    #[case("x10x")]
    fn test_parse_token_no_match(#[case] text: &str) {
        assert_eq!(parse_token(text, false), None);
    }

    #[rstest]
    #[case("10x20kg left", Some(Side::Left))]
    #[case("10x20kg (right)", Some(Side::Right))]
    #[case("12 левой", Some(Side::Left))]
    #[case("10x20kg", None)]
    fn test_parse_token_side(#[case] text: &str, #[case] expected: Option<Side>) {
        assert_eq!(parse_token(text, false).unwrap().side, expected);
    }

    #[test]
    fn test_multiplication_glyphs_normalized() {
        let expected = parse_token("10x20", false);
        assert_eq!(parse_token("10×20", false), expected);
        assert_eq!(parse_token("10*20", false), expected);
        assert_eq!(parse_token("10х20", false), expected);
    }

    #[test]
    fn test_rule_order_triple_before_pairs() {
        // A triple must not be consumed by the two-number grammars.
        assert_eq!(
            parse_token("60x10x3", false),
            Some(set(Some(10), Some(60.0), None, false, Some(3)))
        );
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert_eq!(parse_token("5000x10", false), None);
        assert_eq!(parse_token("10000", false), None);
    }
}
