use std::ops::Mul;

use derive_more::{Display, Into};
use thiserror::Error;

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

impl Mul<Weight> for Reps {
    type Output = f32;

    fn mul(self, rhs: Weight) -> Self::Output {
        #[allow(clippy::cast_precision_loss)]
        let reps = self.0 as f32;
        reps * rhs.0
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(u32);

impl Duration {
    pub fn new(seconds: u32) -> Result<Self, DurationError> {
        if !(0..86400).contains(&seconds) {
            return Err(DurationError::OutOfRange);
        }

        Ok(Self(seconds))
    }

    pub fn from_minutes(minutes: u32) -> Result<Self, DurationError> {
        let seconds = minutes.checked_mul(60).ok_or(DurationError::OutOfRange)?;
        Self::new(seconds)
    }

    #[must_use]
    pub fn whole_minutes(self) -> Option<u32> {
        if self.0 >= 60 && self.0 % 60 == 0 {
            Some(self.0 / 60)
        } else {
            None
        }
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Duration::new(parsed_value),
            Err(_) => Err(DurationError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("Duration must be in the range 0 to 86399 s")]
    OutOfRange,
    #[error("Duration must be an integer number of seconds")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(12, Ok(Reps(12)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }

    #[rstest]
    #[case("10", Ok(Reps(10)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("ten", Err(RepsError::ParseError))]
    #[case("1.5", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(22.5, Ok(Weight(22.5)))]
    #[case(999.9, Ok(Weight(999.9)))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    #[case(-1.0, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case("20", Ok(Weight(20.0)))]
    #[case("22.5", Ok(Weight(22.5)))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[test]
    fn test_reps_mul_weight() {
        assert_approx_eq!(Reps::new(10).unwrap() * Weight::new(22.5).unwrap(), 225.0);
    }

    #[rstest]
    #[case(0, Ok(Duration(0)))]
    #[case(45, Ok(Duration(45)))]
    #[case(86400, Err(DurationError::OutOfRange))]
    fn test_duration_new(#[case] seconds: u32, #[case] expected: Result<Duration, DurationError>) {
        assert_eq!(Duration::new(seconds), expected);
    }

    #[rstest]
    #[case(5, Ok(Duration(300)))]
    #[case(1440, Err(DurationError::OutOfRange))]
    fn test_duration_from_minutes(
        #[case] minutes: u32,
        #[case] expected: Result<Duration, DurationError>,
    ) {
        assert_eq!(Duration::from_minutes(minutes), expected);
    }

    #[rstest]
    #[case(45, None)]
    #[case(60, Some(1))]
    #[case(90, None)]
    #[case(300, Some(5))]
    fn test_duration_whole_minutes(#[case] seconds: u32, #[case] expected: Option<u32>) {
        assert_eq!(Duration::new(seconds).unwrap().whole_minutes(), expected);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::new(20.0).unwrap().to_string(), "20");
        assert_eq!(Weight::new(22.5).unwrap().to_string(), "22.5");
    }
}
