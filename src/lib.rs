//! taskforge: synthetic research task generator.
//!
//! Given a free-text theme, the generator classifies it into a subject domain
//! and assembles a task description (topic, evaluation criteria, deadline)
//! from templates filled with curated vocabulary and vocabulary mined from a
//! reference dataset.

pub mod cli;
pub mod dataset;
pub mod domains;
pub mod error;
pub mod generator;
pub mod template;

pub use dataset::{Dataset, Example, ExampleOutput, VocabularyIndex};
pub use domains::{classify, Domain};
pub use error::{DatasetError, GeneratorError};
pub use generator::{generate_task, AnswerEnvelope, GeneratorConfig, TaskGenerator, TaskRecord};
pub use template::{TemplateEngine, TermBank, TermCategory};
