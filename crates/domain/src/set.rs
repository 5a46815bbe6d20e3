use std::fmt::{self, Display};

use crate::{Duration, Reps, Weight};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ParsedSet {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Duration>,
    pub is_bodyweight: bool,
    pub side: Option<Side>,
    pub set_count: Option<u32>,
}

impl ParsedSet {
    #[must_use]
    pub fn volume(&self) -> f32 {
        match (self.reps, self.weight) {
            (Some(reps), Some(weight)) => reps * weight,
            _ => 0.0,
        }
    }
}

impl Display for ParsedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.reps, self.weight, self.duration) {
            (Some(reps), Some(weight), _) => write!(f, "{reps}x{weight}kg")?,
            (Some(reps), None, Some(duration)) => {
                write!(f, "{reps}x")?;
                write_duration(f, duration)?;
            }
            (None, _, Some(duration)) => write_duration(f, duration)?,
            (Some(reps), None, None) => write!(f, "{reps}")?,
            (None, Some(weight), None) => write!(f, "{weight}kg")?,
            (None, None, None) => write!(f, "-")?,
        }

        if let Some(count) = self.set_count {
            if count > 1 {
                write!(f, " x{count}")?;
            }
        }

        if let Some(side) = self.side {
            write!(f, " ({})", side.name())?;
        }

        Ok(())
    }
}

fn write_duration(f: &mut fmt::Formatter<'_>, duration: Duration) -> fmt::Result {
    if let Some(minutes) = duration.whole_minutes() {
        write!(f, "{minutes} min")
    } else {
        write!(f, "{} sec", u32::from(duration))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn set(
        reps: Option<u32>,
        weight: Option<f32>,
        duration: Option<u32>,
        set_count: Option<u32>,
    ) -> ParsedSet {
        ParsedSet {
            reps: reps.map(|r| Reps::new(r).unwrap()),
            weight: weight.map(|w| Weight::new(w).unwrap()),
            duration: duration.map(|d| Duration::new(d).unwrap()),
            is_bodyweight: false,
            side: None,
            set_count,
        }
    }

    #[test]
    fn test_volume() {
        assert_approx_eq!(set(Some(10), Some(20.0), None, None).volume(), 200.0);
        assert_approx_eq!(set(Some(10), None, None, None).volume(), 0.0);
        assert_approx_eq!(set(None, Some(20.0), None, None).volume(), 0.0);
    }

    #[rstest]
    #[case(set(Some(10), Some(20.0), None, None), "10x20kg")]
    #[case(set(Some(8), Some(22.5), None, None), "8x22.5kg")]
    #[case(set(Some(3), None, Some(45), None), "3x45 sec")]
    #[case(set(None, None, Some(45), None), "45 sec")]
    #[case(set(None, None, Some(120), None), "2 min")]
    #[case(set(Some(12), None, None, None), "12")]
    #[case(set(None, Some(60.0), None, None), "60kg")]
    #[case(set(Some(10), Some(20.0), None, Some(3)), "10x20kg x3")]
    #[case(set(None, None, None, None), "-")]
    fn test_display(#[case] set: ParsedSet, #[case] expected: &str) {
        assert_eq!(set.to_string(), expected);
    }

    #[test]
    fn test_display_side() {
        let mut parsed = set(Some(10), Some(20.0), None, None);
        parsed.side = Some(Side::Left);
        assert_eq!(parsed.to_string(), "10x20kg (left)");
    }
}
