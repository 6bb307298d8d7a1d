//! Deadline selection.
//!
//! Thesis and diploma themes get 4 to 6 months; everything else gets 2 to 4
//! weeks or months with equal probability.

use std::fmt;

use rand::prelude::*;

/// Stems that mark a thesis or diploma theme.
pub const THESIS_STEMS: [&str; 2] = ["диплом", "выпускн"];

/// Time unit of a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineUnit {
    Weeks,
    Months,
}

impl DeadlineUnit {
    /// Returns the unit word as used after the numbers 2 to 4.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineUnit::Weeks => "недели",
            DeadlineUnit::Months => "месяца",
        }
    }
}

/// A task deadline, rendered as `"<amount> <unit>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub amount: u32,
    pub unit: DeadlineUnit,
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.as_str())
    }
}

/// Returns true if the prompt names a thesis or diploma.
pub fn is_thesis(prompt: &str) -> bool {
    let lowered = prompt.to_lowercase();
    THESIS_STEMS.iter().any(|stem| lowered.contains(stem))
}

/// Picks a deadline for the prompt.
pub fn pick_deadline<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> Deadline {
    if is_thesis(prompt) {
        return Deadline {
            amount: rng.random_range(4..=6),
            unit: DeadlineUnit::Months,
        };
    }

    let amount = rng.random_range(2..=4);
    let unit = if rng.random_bool(0.5) {
        DeadlineUnit::Weeks
    } else {
        DeadlineUnit::Months
    };

    Deadline { amount, unit }
}
