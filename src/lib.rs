//! Flashcards and multiple-choice quizzes over a CSV dataset of Norwegian flowers.
//!
//! The crate holds everything below the user interface: loading and
//! normalizing the dataset, picking random flowers, generating and running
//! quizzes, composing error reports and remembering the user's preferences.
//! Rendering is left to a [`QuizOutput`] implementation.

pub mod dataset;
pub mod output;
pub mod preferences;
pub mod quiz;
pub mod report;
pub mod sampler;
pub mod settings;

pub use crate::dataset::{Dataset, DatasetLoader, Flower, ImageStatus, LoadError};
pub use crate::output::{Message, QuizOutput};
pub use crate::quiz::definition::{InsufficientDataError, QuizAnswer, QuizQuestion};
pub use crate::quiz::grade::QuizResult;
pub use crate::quiz::{Quiz, QuizState};
pub use crate::settings::Settings;
