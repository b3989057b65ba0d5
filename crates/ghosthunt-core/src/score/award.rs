use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::scoring::{FULL_POINTS, HALF_POINTS};

/// Points granted when a question is resolved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, IntoStaticStr,
)]
pub enum Award {
    /// Exhausted without a correct answer
    #[strum(serialize = "NO POINTS")]
    None,
    #[strum(serialize = "HALF")]
    Half,
    #[strum(serialize = "FULL")]
    Full,
}

impl Award {
    /// Award for a correct answer given the number of failed attempts before it.
    pub fn for_correct_answer(prior_attempts: u8) -> Self {
        if prior_attempts == 0 {
            Self::Full
        } else {
            Self::Half
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Half => HALF_POINTS,
            Self::Full => FULL_POINTS,
        }
    }

    fn halves(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Half => 1,
            Self::Full => 2,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Award {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Running point total kept as a count of half points so sums stay exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u32);

impl Points {
    pub const ZERO: Self = Self(0);

    pub fn add(&mut self, award: Award) {
        self.0 += award.halves();
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) * HALF_POINTS
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_for_correct_answer() {
        assert_eq!(Award::for_correct_answer(0), Award::Full);
        assert_eq!(Award::for_correct_answer(1), Award::Half);
    }

    #[test]
    fn test_award_values() {
        assert_eq!(Award::Full.value(), 1.0);
        assert_eq!(Award::Half.value(), 0.5);
        assert_eq!(Award::None.value(), 0.0);
    }

    #[test]
    fn test_points_accumulate_exactly() {
        let mut points = Points::ZERO;
        for _ in 0..7 {
            points.add(Award::Half);
        }
        points.add(Award::Full);
        points.add(Award::None);
        assert_eq!(points.value(), 4.5);
        assert_eq!(points.to_string(), "4.5");
    }
}
