//! Evaluation criteria generation.
//!
//! A pool of five criteria is built from fixed verb phrases, each followed by
//! a term drawn from the domain's term bank. Three pool entries are then
//! sampled without replacement by position.

use rand::prelude::*;

use crate::template::{TermBank, TermCategory};

/// Number of criteria in a generated task.
pub const CRITERIA_COUNT: usize = 3;

/// Verb phrase and term category of every criteria pool slot.
///
/// `Aspect` appears twice; the two slots draw independently and may end up
/// with the same term.
pub const CRITERIA_PHRASES: [(&str, TermCategory); 5] = [
    ("Анализ", TermCategory::Aspect),
    ("Исследование", TermCategory::Process),
    ("Разработка", TermCategory::Solution),
    ("Оценка", TermCategory::Aspect),
    ("Сравнение", TermCategory::Item),
];

/// Builds the five-entry criteria pool.
pub fn criteria_pool<R: Rng + ?Sized>(terms: &TermBank, rng: &mut R) -> Vec<String> {
    CRITERIA_PHRASES
        .iter()
        .map(|(phrase, category)| format!("{} {}", phrase, terms.pick(*category, rng)))
        .collect()
}

/// Samples `amount` pool entries without replacement by position.
///
/// Entries are distinct by position only; text duplicates in the pool are
/// not filtered out. Returns the whole pool shuffled if it is smaller than
/// `amount`.
pub fn sample_criteria<R: Rng + ?Sized>(pool: &[String], amount: usize, rng: &mut R) -> Vec<String> {
    let amount = amount.min(pool.len());
    rand::seq::index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

/// Generates the criteria of a task.
pub fn generate_criteria<R: Rng + ?Sized>(terms: &TermBank, rng: &mut R) -> Vec<String> {
    let pool = criteria_pool(terms, rng);
    sample_criteria(&pool, CRITERIA_COUNT, rng)
}
