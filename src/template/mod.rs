//! Topic templates and the engine that fills them.
//!
//! Templates are sentences with named placeholders such as `{process}` or
//! `{domain}`. Rendering picks one template uniformly at random, draws a
//! term for each distinct placeholder from the domain's [`TermBank`] and
//! substitutes all of them in a single pass.
//!
//! # Example
//!
//! ```ignore
//! use taskforge::template::{TemplateEngine, TermBank};
//! use taskforge::Domain;
//!
//! let engine = TemplateEngine::new();
//! let bank = TermBank::curated(Domain::Ai);
//! let topic = engine.render(Domain::Ai, &bank, &mut rand::rng());
//! println!("{}", topic);
//! ```

pub mod terms;

pub use terms::{choose_or_default, TermBank, TermCategory, DEFAULT_TERM};

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::prelude::*;
use rand::seq::IndexedRandom;
use regex::{Captures, Regex};
use tracing::debug;

use crate::domains::Domain;

/// The built-in topic templates.
pub const TOPIC_TEMPLATES: [&str; 5] = [
    "Оптимизация {process} в {domain}",
    "Анализ {aspect} в {domain}",
    "Разработка {solution} для {problem}",
    "Исследование {subject} в условиях {conditions}",
    "Сравнение {item1} и {item2} в {domain}",
];

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Returns the distinct placeholder names of a template, in order of first
/// appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in placeholder_regex().captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fills topic templates with terms from a [`TermBank`].
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    templates: Vec<&'static str>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    /// Creates an engine over the built-in templates.
    pub fn new() -> Self {
        Self {
            templates: TOPIC_TEMPLATES.to_vec(),
        }
    }

    /// Returns the templates this engine chooses from.
    pub fn templates(&self) -> &[&'static str] {
        &self.templates
    }

    /// Renders a topic for a domain.
    pub fn render<R: Rng + ?Sized>(&self, domain: Domain, terms: &TermBank, rng: &mut R) -> String {
        let template = self.templates.choose(rng).copied().unwrap_or_default();
        let topic = fill(template, terms, rng);

        debug!(domain = %domain, template, topic = %topic, "Rendered topic");
        topic
    }
}

/// Fills every placeholder of `template` and capitalizes the result.
///
/// Each distinct placeholder name gets one draw; repeated occurrences of the
/// same name share it. Substituted terms are never re-scanned.
pub fn fill<R: Rng + ?Sized>(template: &str, terms: &TermBank, rng: &mut R) -> String {
    let replacements: HashMap<&str, &str> = placeholders(template)
        .into_iter()
        .map(|name| {
            let value = match TermCategory::from_placeholder(name) {
                Some(category) => terms.pick(category, rng),
                None => DEFAULT_TERM,
            };
            (name, value)
        })
        .collect();

    let filled = placeholder_regex().replace_all(template, |caps: &Captures| {
        replacements
            .get(&caps[1])
            .copied()
            .unwrap_or(DEFAULT_TERM)
            .to_string()
    });

    capitalize_first(&filled)
}
