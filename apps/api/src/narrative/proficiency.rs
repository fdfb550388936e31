//! Proficiency guessing for technical skills mentioned in a narrative.
//!
//! The narrative rarely states a level outright, so the guess is made from
//! adjectives near the first mention. When none is found a `TieBreaker`
//! decides. Production uses a random pick; tests use a fixed one.

use std::str::FromStr;

use rand::Rng;

use crate::models::career::Proficiency;
use crate::narrative::scan::window;
use crate::narrative::vocab::{
    ADVANCED_TERMS, BEGINNER_TERMS, INTERMEDIATE_TERMS, PROFICIENCY_WINDOW,
};

/// Decides the proficiency of a skill whose context carries no level adjective.
pub trait TieBreaker: Send + Sync {
    fn pick(&self) -> Proficiency;
}

/// Coin flip between Advanced and Intermediate.
pub struct RandomTieBreaker;

impl TieBreaker for RandomTieBreaker {
    fn pick(&self) -> Proficiency {
        if rand::thread_rng().gen_bool(0.5) {
            Proficiency::Advanced
        } else {
            Proficiency::Intermediate
        }
    }
}

/// Always the same answer. Keeps parser output reproducible.
pub struct FixedTieBreaker(pub Proficiency);

impl TieBreaker for FixedTieBreaker {
    fn pick(&self) -> Proficiency {
        self.0
    }
}

/// Configured tie-break policy, parsed from `PROFICIENCY_FALLBACK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreakPolicy {
    Random,
    Fixed(Proficiency),
}

impl TieBreakPolicy {
    pub fn into_tie_breaker(self) -> Box<dyn TieBreaker> {
        match self {
            TieBreakPolicy::Random => Box::new(RandomTieBreaker),
            TieBreakPolicy::Fixed(p) => Box::new(FixedTieBreaker(p)),
        }
    }
}

impl FromStr for TieBreakPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(TieBreakPolicy::Random),
            "advanced" => Ok(TieBreakPolicy::Fixed(Proficiency::Advanced)),
            "intermediate" => Ok(TieBreakPolicy::Fixed(Proficiency::Intermediate)),
            "beginner" => Ok(TieBreakPolicy::Fixed(Proficiency::Beginner)),
            other => Err(format!(
                "unknown proficiency fallback '{other}' (expected random, advanced, intermediate or beginner)"
            )),
        }
    }
}

/// Guesses the proficiency of `skill` from adjectives within
/// `PROFICIENCY_WINDOW` bytes of its first occurrence in `text`.
///
/// Families are checked strongest first, so "advanced" wins over "basic" when
/// both appear in the window.
pub fn guess_proficiency(text: &str, skill: &str, tie_breaker: &dyn TieBreaker) -> Proficiency {
    let Some(at) = text.find(skill) else {
        return tie_breaker.pick();
    };
    let context = window(text, at, PROFICIENCY_WINDOW, PROFICIENCY_WINDOW).to_ascii_lowercase();

    let families = [
        (ADVANCED_TERMS, Proficiency::Advanced),
        (INTERMEDIATE_TERMS, Proficiency::Intermediate),
        (BEGINNER_TERMS, Proficiency::Beginner),
    ];
    for (terms, level) in families {
        if terms.iter().any(|t| context.contains(t)) {
            return level;
        }
    }

    tie_breaker.pick()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: FixedTieBreaker = FixedTieBreaker(Proficiency::Intermediate);

    #[test]
    fn test_advanced_adjective_near_skill() {
        let text = "You have extensive experience with Python and data pipelines.";
        assert_eq!(guess_proficiency(text, "Python", &FIXED), Proficiency::Advanced);
    }

    #[test]
    fn test_beginner_adjective_near_skill() {
        let text = "A basic grasp of Docker would help.";
        assert_eq!(guess_proficiency(text, "Docker", &FIXED), Proficiency::Beginner);
    }

    #[test]
    fn test_advanced_family_checked_before_beginner() {
        let text = "Basic SQL today, advanced SQL later.";
        assert_eq!(guess_proficiency(text, "SQL", &FIXED), Proficiency::Advanced);
    }

    #[test]
    fn test_adjective_outside_window_is_ignored() {
        let padding = "x".repeat(80);
        let text = format!("expert {padding} Rust");
        assert_eq!(
            guess_proficiency(&text, "Rust", &FixedTieBreaker(Proficiency::Beginner)),
            Proficiency::Beginner
        );
    }

    #[test]
    fn test_no_adjective_uses_tie_breaker() {
        let text = "Kubernetes clusters everywhere.";
        assert_eq!(
            guess_proficiency(text, "Kubernetes", &FixedTieBreaker(Proficiency::Advanced)),
            Proficiency::Advanced
        );
    }

    #[test]
    fn test_random_tie_breaker_only_yields_advanced_or_intermediate() {
        for _ in 0..64 {
            let p = RandomTieBreaker.pick();
            assert!(matches!(p, Proficiency::Advanced | Proficiency::Intermediate));
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("random".parse::<TieBreakPolicy>(), Ok(TieBreakPolicy::Random));
        assert_eq!(
            " Advanced ".parse::<TieBreakPolicy>(),
            Ok(TieBreakPolicy::Fixed(Proficiency::Advanced))
        );
        assert!("sometimes".parse::<TieBreakPolicy>().is_err());
    }
}
