//! Keyword-based domain classification.

use tracing::debug;

use super::Domain;

/// Keyword stems per domain, in precedence order.
///
/// The first domain with any stem occurring as a substring of the lower-cased
/// text wins. `Domain::Other` has no keywords and is the fallback.
///
/// "рынок" loses its vowel when declined ("рынка", "рынке"), hence the
/// extra "рынк" stem.
pub const DOMAIN_KEYWORDS: [(Domain, &[&str]); 3] = [
    (
        Domain::Ai,
        &["искусственн", "нейросет", "машинн", "алгоритм"],
    ),
    (
        Domain::Economics,
        &["экономик", "финанс", "предприят", "рынок", "рынк"],
    ),
    (
        Domain::Ecology,
        &["экологи", "природ", "эколог", "окружающ"],
    ),
];

/// Classifies free text into a domain.
///
/// Total and deterministic: every input maps to exactly one domain.
pub fn classify(text: &str) -> Domain {
    let lowered = text.to_lowercase();
    let domain = DOMAIN_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(domain, _)| *domain)
        .unwrap_or(Domain::Other);

    debug!(domain = %domain, "Classified text");
    domain
}
