//! Task generation pipeline for taskforge.
//!
//! This module assembles a complete task description from a theme prompt:
//!
//! 1. **Classification** - The prompt is mapped to a [`Domain`]
//! 2. **Term resolution** - The domain's [`TermBank`] is built from curated and mined vocabulary
//! 3. **Topic** - A template is filled with terms from the bank
//! 4. **Criteria** - Three criteria are sampled from a pool of five
//! 5. **Deadline** - Chosen from the prompt's thesis markers
//!
//! # Example
//!
//! ```ignore
//! use taskforge::generator::TaskGenerator;
//! use taskforge::dataset::Dataset;
//!
//! let dataset = Dataset::load("dataset.json")?;
//! let generator = TaskGenerator::new(&dataset);
//!
//! let task = generator.generate("Диплом по искусственному интеллекту");
//! println!("{}", task.topic);
//! ```

pub mod criteria;
pub mod deadline;

pub use criteria::{generate_criteria, CRITERIA_COUNT, CRITERIA_PHRASES};
pub use deadline::{is_thesis, pick_deadline, Deadline, DeadlineUnit};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::{Dataset, VocabularyIndex};
use crate::domains::{classify, Domain};
use crate::error::GeneratorError;
use crate::template::{TemplateEngine, TermBank};

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Default location of the reference dataset.
pub const DEFAULT_DATASET_PATH: &str = "dataset.json";

/// A generated task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task topic, capitalized.
    pub topic: String,
    /// Exactly three evaluation criteria.
    pub criteria: Vec<String>,
    /// Deadline such as `"3 недели"`.
    pub deadline: String,
}

impl TaskRecord {
    /// Serializes the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the record as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Response payload carrying a record as pretty JSON text in `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEnvelope {
    pub answer: String,
}

impl AnswerEnvelope {
    /// Wraps a record.
    pub fn from_record(record: &TaskRecord) -> Result<Self> {
        Ok(Self {
            answer: record.to_json_pretty()?,
        })
    }
}

/// Configuration for building a [`TaskGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path to the reference dataset JSON file.
    pub dataset_path: PathBuf,
    /// Seed for reproducible output. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl GeneratorConfig {
    /// Creates a configuration for the given dataset path.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            seed: None,
        }
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Assembles task records from theme prompts.
///
/// The vocabulary index is built once and shared read-only, so a single
/// generator can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    index: Arc<VocabularyIndex>,
    engine: TemplateEngine,
    /// Random seed for reproducibility (None = non-deterministic).
    seed: Option<u64>,
}

impl TaskGenerator {
    /// Creates a generator, mining vocabulary from the dataset.
    pub fn new(dataset: &Dataset) -> Self {
        Self::from_index(Arc::new(VocabularyIndex::build(dataset)))
    }

    /// Creates a generator over an already built index.
    pub fn from_index(index: Arc<VocabularyIndex>) -> Self {
        Self {
            index,
            engine: TemplateEngine::new(),
            seed: None,
        }
    }

    /// Sets the random seed used by [`TaskGenerator::generate`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Loads the dataset named in the configuration and builds a generator.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Dataset`] if the dataset cannot be read or
    /// parsed.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let dataset = Dataset::load(&config.dataset_path)?;
        let generator = Self::new(&dataset);

        Ok(match config.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        })
    }

    /// Returns the shared vocabulary index.
    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }

    /// Resolves the term bank for a domain.
    pub fn term_bank(&self, domain: Domain) -> TermBank {
        TermBank::for_domain(domain, &self.index)
    }

    /// Generates a task.
    ///
    /// A seeded generator draws from a fresh `ChaCha8Rng` on every call, so
    /// the same prompt always yields the same record. Without a seed the
    /// thread-local RNG is used.
    pub fn generate(&self, prompt: &str) -> TaskRecord {
        match self.seed {
            Some(seed) => self.generate_with_rng(prompt, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.generate_with_rng(prompt, &mut rand::rng()),
        }
    }

    /// Generates a task drawing all randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, prompt: &str, rng: &mut R) -> TaskRecord {
        let domain = classify(prompt);
        let terms = self.term_bank(domain);

        let topic = self.engine.render(domain, &terms, rng);
        let criteria = generate_criteria(&terms, rng);
        let deadline = pick_deadline(prompt, rng);

        debug!(
            domain = %domain,
            topic = %topic,
            deadline = %deadline,
            "Generated task"
        );

        TaskRecord {
            topic,
            criteria,
            deadline: deadline.to_string(),
        }
    }
}

/// Loads the dataset at `dataset_path` and generates one task for `prompt`.
///
/// Rebuilds the vocabulary index on every call; long-running callers should
/// keep a [`TaskGenerator`] instead.
pub fn generate_task<P: AsRef<Path>>(prompt: &str, dataset_path: P) -> Result<TaskRecord> {
    let config = GeneratorConfig::new(dataset_path.as_ref());
    let generator = TaskGenerator::from_config(&config)?;

    info!(prompt, "Generating task");
    Ok(generator.generate(prompt))
}
