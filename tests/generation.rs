//! End-to-end tests for task generation against the bundled reference dataset.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use tempfile::NamedTempFile;

use taskforge::dataset::VocabularyCategory;
use taskforge::template::TOPIC_TEMPLATES;
use taskforge::{
    classify, generate_task, Dataset, DatasetError, Domain, GeneratorConfig, GeneratorError,
    TaskGenerator, TermCategory,
};

fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("dataset.json")
}

fn generator() -> TaskGenerator {
    TaskGenerator::from_config(&GeneratorConfig::new(dataset_path())).expect("bundled dataset loads")
}

fn thesis_deadline() -> Regex {
    Regex::new(r"^[4-6] месяца$").expect("valid regex")
}

fn regular_deadline() -> Regex {
    Regex::new(r"^[2-4] (недели|месяца)$").expect("valid regex")
}

/// Returns true if `topic` could have been produced by one of the templates.
fn matches_some_template(topic: &str) -> bool {
    let placeholder = Regex::new(r"\\\{\w+\\\}").expect("valid regex");
    TOPIC_TEMPLATES.iter().any(|template| {
        let escaped = regex::escape(template);
        let pattern = format!("^{}$", placeholder.replace_all(&escaped, ".+"));
        Regex::new(&pattern).expect("valid template regex").is_match(topic)
    })
}

#[test]
fn test_bundled_dataset_is_indexed() {
    let dataset = Dataset::load(dataset_path()).expect("dataset loads");
    assert_eq!(dataset.len(), 8);

    let generator = TaskGenerator::new(&dataset);
    let index = generator.index();

    assert_eq!(index.example_count(Domain::Ai), 2);
    assert_eq!(index.example_count(Domain::Economics), 2);
    assert_eq!(index.example_count(Domain::Ecology), 2);
    assert_eq!(index.example_count(Domain::Other), 2);

    let ai = index.get(Domain::Ai).expect("ai vocabulary");
    assert!(ai.count(VocabularyCategory::Processes) > 0);
    assert_eq!(ai.count(VocabularyCategory::Items), 0);
}

#[test]
fn test_diploma_ai_scenario() {
    let generator = generator();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let prompt = "Диплом по искусственному интеллекту";

    assert_eq!(classify(prompt), Domain::Ai);

    for _ in 0..50 {
        let task = generator.generate_with_rng(prompt, &mut rng);
        assert!(thesis_deadline().is_match(&task.deadline), "bad deadline '{}'", task.deadline);
        assert_eq!(task.criteria.len(), 3);
        assert!(matches_some_template(&task.topic), "unexpected topic shape '{}'", task.topic);
    }
}

#[test]
fn test_market_analysis_scenario() {
    let generator = generator();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let prompt = "Анализ рынка";

    assert_eq!(classify(prompt), Domain::Economics);

    for _ in 0..50 {
        let task = generator.generate_with_rng(prompt, &mut rng);
        assert!(regular_deadline().is_match(&task.deadline), "bad deadline '{}'", task.deadline);
    }
}

#[test]
fn test_unrecognized_theme_scenario() {
    let generator = generator();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let prompt = "Исследование космоса";

    assert_eq!(classify(prompt), Domain::Other);

    let bank = generator.term_bank(Domain::Other);
    for _ in 0..50 {
        let task = generator.generate_with_rng(prompt, &mut rng);
        assert!(!task.topic.is_empty());
        assert!(task.topic.chars().next().is_some_and(char::is_uppercase));
        assert_eq!(task.criteria.len(), 3);
        assert!(regular_deadline().is_match(&task.deadline));

        for criterion in &task.criteria {
            let (_, term) = criterion.split_once(' ').expect("phrase and term");
            let known = [
                TermCategory::Aspect,
                TermCategory::Process,
                TermCategory::Solution,
                TermCategory::Item,
            ]
            .iter()
            .any(|c| bank.get(*c).iter().any(|t| t == term));
            assert!(known, "criterion '{}' uses an unknown term", criterion);
        }
    }
}

#[test]
fn test_thesis_stems_are_case_insensitive() {
    let generator = generator();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    for prompt in ["ДИПЛОМНЫЙ проект", "Выпускная квалификационная работа про рынок"] {
        for _ in 0..20 {
            let task = generator.generate_with_rng(prompt, &mut rng);
            assert!(thesis_deadline().is_match(&task.deadline));
        }
    }
}

#[test]
fn test_every_domain_generates_well_formed_tasks() {
    let generator = generator();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let prompts = [
        ("Нейросети в медицине", Domain::Ai),
        ("Финансы стартапа", Domain::Economics),
        ("Природные заповедники", Domain::Ecology),
        ("Теория музыки", Domain::Other),
    ];

    for (prompt, domain) in prompts {
        assert_eq!(classify(prompt), domain);
        for _ in 0..20 {
            let task = generator.generate_with_rng(prompt, &mut rng);
            assert!(!task.topic.is_empty());
            assert!(!task.topic.contains('{'));
            assert_eq!(task.criteria.len(), 3);
            assert!(!task.deadline.is_empty());
        }
    }
}

#[test]
fn test_generate_task_convenience() {
    let task = generate_task("Экология рек", dataset_path()).expect("task generated");
    assert_eq!(task.criteria.len(), 3);
}

#[test]
fn test_generate_task_missing_dataset() {
    let result = generate_task("Анализ рынка", "/nonexistent/dataset.json");
    assert!(matches!(
        result,
        Err(GeneratorError::Dataset(DatasetError::Io { .. }))
    ));
}

#[test]
fn test_generate_task_malformed_dataset() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"{\"examples\": [{\"prompt\": 1}]}").expect("write");

    let result = generate_task("Анализ рынка", file.path());
    assert!(matches!(
        result,
        Err(GeneratorError::Dataset(DatasetError::Parse { .. }))
    ));
}

#[test]
fn test_empty_dataset_still_generates() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"{\"examples\": []}").expect("write");

    let task = generate_task("Искусственный интеллект", file.path()).expect("task generated");
    assert_eq!(task.criteria.len(), 3);
}

#[test]
fn test_concurrent_generation_shares_index() {
    let generator = Arc::new(generator());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                (0..25)
                    .map(|_| generator.generate(&format!("Анализ рынка {}", i)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let tasks = handle.join().expect("thread finished");
        assert_eq!(tasks.len(), 25);
        assert!(tasks.iter().all(|t| t.criteria.len() == 3));
    }
}

#[test]
fn test_seeded_config_reproduces_records() {
    let config = GeneratorConfig::new(dataset_path()).with_seed(5);
    let first = TaskGenerator::from_config(&config).expect("bundled dataset loads");
    let second = TaskGenerator::from_config(&config).expect("bundled dataset loads");

    assert_eq!(first.seed(), Some(5));
    for prompt in ["Диплом по искусственному интеллекту", "Анализ рынка", "Исследование космоса"] {
        assert_eq!(first.generate(prompt), second.generate(prompt));
    }
}
