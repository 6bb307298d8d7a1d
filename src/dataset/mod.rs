//! Reference dataset model and loading.
//!
//! The reference dataset is a JSON document of the form:
//!
//! ```json
//! {
//!   "examples": [
//!     {
//!       "prompt": "Диплом по машинному обучению",
//!       "output": {
//!         "topic": "Оптимизация обучения моделей",
//!         "criteria": ["Анализ точности", "Оценка скорости"]
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! It is read once at startup and never mutated afterwards.

pub mod vocabulary;

pub use vocabulary::{tokenize, DomainVocabulary, VocabularyCategory, VocabularyIndex};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DatasetError;

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// The generated part of a reference example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleOutput {
    /// Topic sentence written for the prompt.
    pub topic: String,
    /// Evaluation criteria, in order.
    pub criteria: Vec<String>,
}

/// One reference record: a prompt and the task written for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub prompt: String,
    pub output: ExampleOutput,
}

impl Example {
    /// Creates a new example.
    pub fn new(
        prompt: impl Into<String>,
        topic: impl Into<String>,
        criteria: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            output: ExampleOutput {
                topic: topic.into(),
                criteria: criteria.into_iter().map(Into::into).collect(),
            },
        }
    }
}

/// The full reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub examples: Vec<Example>,
}

impl Dataset {
    /// Creates a dataset from already parsed examples.
    pub fn new(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    /// Loads the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read and
    /// [`DatasetError::Parse`] if it is not a valid dataset document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            examples = dataset.examples.len(),
            "Loaded reference dataset"
        );

        Ok(dataset)
    }

    /// Parses the dataset from an in-memory JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if the dataset has no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "examples": [
            {
                "prompt": "Курсовая по нейросетям",
                "output": {
                    "topic": "Анализ сверточных нейросетей",
                    "criteria": ["Точность классификации", "Скорость обучения"]
                }
            }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let dataset = Dataset::from_json_str(SAMPLE).expect("should parse");
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());

        let example = &dataset.examples[0];
        assert_eq!(example.prompt, "Курсовая по нейросетям");
        assert_eq!(example.output.topic, "Анализ сверточных нейросетей");
        assert_eq!(example.output.criteria.len(), 2);
    }

    #[test]
    fn test_from_json_str_missing_field() {
        let result = Dataset::from_json_str(r#"{"examples": [{"prompt": "x"}]}"#);
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write");

        let dataset = Dataset::load(file.path()).expect("should load");
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load("/nonexistent/path/dataset.json");
        match result {
            Err(DatasetError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/path/dataset.json"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"{\"examples\": 42}").expect("write");

        let result = Dataset::load(file.path());
        assert!(matches!(result, Err(DatasetError::Parse { .. })));
    }

    #[test]
    fn test_example_new() {
        let example = Example::new("p", "t", ["a", "b"]);
        assert_eq!(example.output.criteria, vec!["a".to_string(), "b".to_string()]);
    }
}
