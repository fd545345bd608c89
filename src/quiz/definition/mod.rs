use rand::seq::{index, SliceRandom};
use rand::Rng;
use thiserror::Error;

use crate::dataset::Flower;

pub mod question;

pub use question::{QuizAnswer, QuizQuestion};


pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("not enough flowers with images for a quiz ({requested} requested, {available} available)")]
pub struct InsufficientDataError {
    pub requested: usize,
    pub available: usize,
}

pub fn generate(
    flowers: &[Flower],
    question_count: usize,
) -> Result<Vec<QuizQuestion>, InsufficientDataError> {
    generate_with(flowers, question_count, &mut rand::thread_rng())
}

pub fn generate_with<R: Rng + ?Sized>(
    flowers: &[Flower],
    question_count: usize,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, InsufficientDataError> {
    let eligible: Vec<&Flower> = flowers.iter().filter(|f| f.is_eligible()).collect();
    if eligible.len() < question_count {
        return Err(InsufficientDataError {
            requested: question_count,
            available: eligible.len(),
        });
    }

    let targets = index::sample(rng, eligible.len(), question_count);
    let mut questions = Vec::with_capacity(question_count);
    for target in targets.into_iter() {
        questions.push(build_question(&eligible, target, rng));
    }
    Ok(questions)
}

// Flowers are identified by their position in `eligible`, so a flower sharing
// the target's name is never mistaken for the target itself. Distractors whose
// name is already among the options are skipped.
fn build_question<R: Rng + ?Sized>(
    eligible: &[&Flower],
    target: usize,
    rng: &mut R,
) -> QuizQuestion {
    let flower = eligible[target];

    let mut others: Vec<usize> = (0..eligible.len()).filter(|i| *i != target).collect();
    others.shuffle(rng);

    let mut options = vec![flower.common_name.clone()];
    for other in others {
        if options.len() == OPTION_COUNT {
            break;
        }
        let name = &eligible[other].common_name;
        if !options.contains(name) {
            options.push(name.clone());
        }
    }
    options.shuffle(rng);

    QuizQuestion {
        flower: flower.clone(),
        options,
        correct_answer: flower.common_name.clone(),
    }
}
