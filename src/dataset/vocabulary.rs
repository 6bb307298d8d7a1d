//! Vocabulary mined from the reference dataset.
//!
//! Every example is assigned a domain from its prompt and topic. Topic words
//! feed the domain's `domains` category; criteria words feed `processes`,
//! `aspects` and `problems` at once. The remaining categories are never
//! mined and rely on curated vocabulary only.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::Dataset;
use crate::domains::{classify, Domain};

/// Categories of mined vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyCategory {
    Processes,
    Domains,
    Aspects,
    Solutions,
    Problems,
    Subjects,
    Conditions,
    Items,
}

impl VocabularyCategory {
    /// Returns all vocabulary categories.
    pub fn all() -> [VocabularyCategory; 8] {
        [
            VocabularyCategory::Processes,
            VocabularyCategory::Domains,
            VocabularyCategory::Aspects,
            VocabularyCategory::Solutions,
            VocabularyCategory::Problems,
            VocabularyCategory::Subjects,
            VocabularyCategory::Conditions,
            VocabularyCategory::Items,
        ]
    }

    /// Returns the lowercase category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            VocabularyCategory::Processes => "processes",
            VocabularyCategory::Domains => "domains",
            VocabularyCategory::Aspects => "aspects",
            VocabularyCategory::Solutions => "solutions",
            VocabularyCategory::Problems => "problems",
            VocabularyCategory::Subjects => "subjects",
            VocabularyCategory::Conditions => "conditions",
            VocabularyCategory::Items => "items",
        }
    }
}

/// Categories that receive every word of every criterion.
const CRITERIA_CATEGORIES: [VocabularyCategory; 3] = [
    VocabularyCategory::Processes,
    VocabularyCategory::Aspects,
    VocabularyCategory::Problems,
];

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b[\w-]+\b").expect("word pattern is valid"))
}

/// Splits text into word-like tokens (runs of letters, digits, underscores
/// and hyphens bounded by word boundaries).
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    word_regex().find_iter(text).map(|m| m.as_str())
}

/// Mined terms of a single domain, one set per category.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainVocabulary {
    sets: HashMap<VocabularyCategory, BTreeSet<String>>,
}

impl Default for DomainVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainVocabulary {
    /// Creates a vocabulary with an empty set for every category.
    pub fn new() -> Self {
        Self {
            sets: VocabularyCategory::all()
                .into_iter()
                .map(|category| (category, BTreeSet::new()))
                .collect(),
        }
    }

    /// Returns the mined terms of a category.
    pub fn terms(&self, category: VocabularyCategory) -> Option<&BTreeSet<String>> {
        self.sets.get(&category)
    }

    /// Returns the number of mined terms in a category.
    pub fn count(&self, category: VocabularyCategory) -> usize {
        self.terms(category).map(BTreeSet::len).unwrap_or(0)
    }

    fn extend<'a>(&mut self, category: VocabularyCategory, words: impl IntoIterator<Item = &'a str>) {
        self.sets
            .entry(category)
            .or_default()
            .extend(words.into_iter().map(str::to_string));
    }
}

/// Per-domain mined vocabulary, built once from the reference dataset.
///
/// Immutable after [`VocabularyIndex::build`]; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    domains: HashMap<Domain, DomainVocabulary>,
    example_counts: HashMap<Domain, usize>,
}

impl VocabularyIndex {
    /// Creates an index with no mined vocabulary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index from every example in the dataset.
    pub fn build(dataset: &Dataset) -> Self {
        let mut index = Self::default();

        for example in &dataset.examples {
            let text = format!("{} {}", example.prompt, example.output.topic);
            let domain = classify(&text);

            *index.example_counts.entry(domain).or_insert(0) += 1;
            let vocabulary = index.domains.entry(domain).or_default();

            vocabulary.extend(VocabularyCategory::Domains, tokenize(&example.output.topic));

            if example.output.criteria.is_empty() {
                warn!(prompt = %example.prompt, "Reference example has no criteria");
            }

            for criterion in &example.output.criteria {
                let lowered = criterion.to_lowercase();
                for category in CRITERIA_CATEGORIES {
                    vocabulary.extend(category, tokenize(&lowered));
                }
            }

            debug!(domain = %domain, prompt = %example.prompt, "Indexed reference example");
        }

        info!(
            examples = dataset.len(),
            domains = index.domains.len(),
            "Built vocabulary index"
        );

        index
    }

    /// Returns the mined vocabulary of a domain, if any example mapped to it.
    pub fn get(&self, domain: Domain) -> Option<&DomainVocabulary> {
        self.domains.get(&domain)
    }

    /// Returns how many reference examples were assigned to a domain.
    pub fn example_count(&self, domain: Domain) -> usize {
        self.example_counts.get(&domain).copied().unwrap_or(0)
    }
}
