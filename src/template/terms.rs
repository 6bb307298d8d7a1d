//! Term banks: the candidate vocabulary for template placeholders.
//!
//! A term bank starts from a curated table of three terms per category and
//! appends whatever the vocabulary index mined for the same domain.

use std::collections::HashMap;

use rand::prelude::*;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::dataset::{VocabularyCategory, VocabularyIndex};
use crate::domains::Domain;

/// Literal used when a placeholder has no candidate terms.
pub const DEFAULT_TERM: &str = "исследуемого объекта";

/// Placeholder categories a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Process,
    Domain,
    Aspect,
    Solution,
    Problem,
    Subject,
    Conditions,
    Item,
}

impl TermCategory {
    /// Returns all term categories.
    pub fn all() -> [TermCategory; 8] {
        [
            TermCategory::Process,
            TermCategory::Domain,
            TermCategory::Aspect,
            TermCategory::Solution,
            TermCategory::Problem,
            TermCategory::Subject,
            TermCategory::Conditions,
            TermCategory::Item,
        ]
    }

    /// Returns the placeholder name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TermCategory::Process => "process",
            TermCategory::Domain => "domain",
            TermCategory::Aspect => "aspect",
            TermCategory::Solution => "solution",
            TermCategory::Problem => "problem",
            TermCategory::Subject => "subject",
            TermCategory::Conditions => "conditions",
            TermCategory::Item => "item",
        }
    }

    /// Resolves a placeholder name to its category.
    ///
    /// Trailing digits are ignored, so `item1` and `item2` both resolve to
    /// [`TermCategory::Item`]. Unknown names resolve to `None`.
    pub fn from_placeholder(name: &str) -> Option<TermCategory> {
        // Numbered placeholders draw from their base category, not the default term
        match name.trim_end_matches(|c: char| c.is_ascii_digit()) {
            "process" => Some(TermCategory::Process),
            "domain" => Some(TermCategory::Domain),
            "aspect" => Some(TermCategory::Aspect),
            "solution" => Some(TermCategory::Solution),
            "problem" => Some(TermCategory::Problem),
            "subject" => Some(TermCategory::Subject),
            "conditions" => Some(TermCategory::Conditions),
            "item" => Some(TermCategory::Item),
            _ => None,
        }
    }

    /// Returns the mined vocabulary category that feeds this category.
    pub fn vocabulary_category(&self) -> VocabularyCategory {
        match self {
            TermCategory::Process => VocabularyCategory::Processes,
            TermCategory::Domain => VocabularyCategory::Domains,
            TermCategory::Aspect => VocabularyCategory::Aspects,
            TermCategory::Solution => VocabularyCategory::Solutions,
            TermCategory::Problem => VocabularyCategory::Problems,
            TermCategory::Subject => VocabularyCategory::Subjects,
            TermCategory::Conditions => VocabularyCategory::Conditions,
            TermCategory::Item => VocabularyCategory::Items,
        }
    }
}

/// Curated terms for a domain and category.
fn base_terms(domain: Domain, category: TermCategory) -> [&'static str; 3] {
    use TermCategory as C;

    match (domain, category) {
        (Domain::Ai, C::Process) => ["обучение моделей", "обработка данных", "распознавание образов"],
        (Domain::Ai, C::Domain) => ["искусственный интеллект", "машинное обучение", "компьютерное зрение"],
        (Domain::Ai, C::Aspect) => ["эффективность алгоритмов", "точность предсказаний", "скорость обучения"],
        (Domain::Ai, C::Solution) => ["новый алгоритм", "оптимизированная модель", "улучшенная архитектура"],
        (Domain::Ai, C::Problem) => ["переобучение моделей", "нехватка данных", "интерпретируемость результатов"],
        (Domain::Ai, C::Subject) => ["глубокие нейронные сети", "методы обучения", "архитектуры моделей"],
        (Domain::Ai, C::Conditions) => ["больших данных", "ограниченных ресурсов", "реального времени"],
        (Domain::Ai, C::Item) => ["сверточные сети", "рекуррентные сети", "трансформеры"],

        (Domain::Economics, C::Process) => ["финансовое планирование", "управление ресурсами", "оптимизация затрат"],
        (Domain::Economics, C::Domain) => ["корпоративные финансы", "экономика предприятия", "рыночная экономика"],
        (Domain::Economics, C::Aspect) => ["финансовая устойчивость", "рентабельность", "конкурентные преимущества"],
        (Domain::Economics, C::Solution) => ["финансовая стратегия", "модель оптимизации", "методика оценки"],
        (Domain::Economics, C::Problem) => ["управление рисками", "повышение эффективности", "снижение издержек"],
        (Domain::Economics, C::Subject) => ["инвестиционные стратегии", "финансовые показатели", "рыночные тенденции"],
        (Domain::Economics, C::Conditions) => ["экономического кризиса", "глобализации", "цифровизации"],
        (Domain::Economics, C::Item) => ["традиционные методы", "инновационные подходы", "зарубежный опыт"],

        (Domain::Ecology, C::Process) => ["очистка сточных вод", "управление отходами", "мониторинг загрязнений"],
        (Domain::Ecology, C::Domain) => ["экологический менеджмент", "охрана окружающей среды", "устойчивое развитие"],
        (Domain::Ecology, C::Aspect) => ["эффективность очистки", "уровень загрязнения", "биоразнообразие"],
        (Domain::Ecology, C::Solution) => ["программа мониторинга", "система переработки", "методика восстановления"],
        (Domain::Ecology, C::Problem) => ["загрязнение атмосферы", "деградация почв", "сокращение биоразнообразия"],
        (Domain::Ecology, C::Subject) => ["экосистемы городов", "климатические изменения", "природные ресурсы"],
        (Domain::Ecology, C::Conditions) => ["антропогенного воздействия", "изменения климата", "урбанизации"],
        (Domain::Ecology, C::Item) => ["традиционные методы", "инновационные технологии", "зарубежный опыт"],

        (Domain::Other, C::Process) => ["управленческие процессы", "производственные циклы", "технологические операции"],
        (Domain::Other, C::Domain) => ["предметная область", "актуальная сфера", "исследуемое направление"],
        (Domain::Other, C::Aspect) => ["основные характеристики", "ключевые параметры", "важные факторы"],
        (Domain::Other, C::Solution) => ["концептуальное решение", "практическая методика", "эффективный алгоритм"],
        (Domain::Other, C::Problem) => ["актуальная проблема", "типовые затруднения", "практические вопросы"],
        (Domain::Other, C::Subject) => ["основной объект", "ключевой элемент", "центральный вопрос"],
        (Domain::Other, C::Conditions) => ["современных реалий", "изменяющейся среды", "конкретных обстоятельств"],
        (Domain::Other, C::Item) => ["разные подходы", "альтернативные методы", "сравнимые объекты"],
    }
}

/// Picks one candidate uniformly at random, or [`DEFAULT_TERM`] when there
/// are none.
pub fn choose_or_default<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> &'a str {
    match candidates.choose(rng) {
        Some(term) => term.as_str(),
        None => DEFAULT_TERM,
    }
}

/// Resolved candidate terms for one domain.
///
/// Each category lists the curated terms first, then the mined terms. The
/// two groups are not deduplicated against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct TermBank {
    domain: Domain,
    terms: HashMap<TermCategory, Vec<String>>,
}

impl TermBank {
    /// Builds the term bank for a domain from the curated tables and the
    /// mined vocabulary.
    pub fn for_domain(domain: Domain, index: &VocabularyIndex) -> Self {
        let mined = index.get(domain);

        let terms = TermCategory::all()
            .into_iter()
            .map(|category| {
                let mut list: Vec<String> = base_terms(domain, category)
                    .iter()
                    .map(|term| term.to_string())
                    .collect();

                if let Some(set) = mined.and_then(|v| v.terms(category.vocabulary_category())) {
                    list.extend(set.iter().cloned());
                }

                (category, list)
            })
            .collect();

        Self { domain, terms }
    }

    /// Builds a term bank from the curated tables only.
    pub fn curated(domain: Domain) -> Self {
        Self::for_domain(domain, &VocabularyIndex::empty())
    }

    /// Returns the domain this bank was built for.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the candidates for a category.
    pub fn get(&self, category: TermCategory) -> &[String] {
        self.terms
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Draws one term from a category, falling back to [`DEFAULT_TERM`].
    pub fn pick<R: Rng + ?Sized>(&self, category: TermCategory, rng: &mut R) -> &str {
        choose_or_default(self.get(category), rng)
    }
}
