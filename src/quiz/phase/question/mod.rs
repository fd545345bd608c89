use anyhow::{anyhow, Result};
use std::time::Duration;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::{QuizAnswer, QuizQuestion};
use crate::quiz::State;

#[cfg(test)]
mod tests;

pub struct QuestionState<O> {
    index: usize,
    total: usize,
    question: QuizQuestion,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(index: usize, total: usize, question: QuizQuestion, output: O) -> Self {
        QuestionState {
            index,
            total,
            question,
            output,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answer(&mut self, choice: &str) -> Result<QuizAnswer> {
        if !self.question.is_option(choice) {
            return Err(anyhow!("{:?} is not one of the options", choice));
        }

        let answer = QuizAnswer::new(self.index, &self.question, choice);
        if answer.is_correct {
            self.output.say(&Message::AnswerCorrect(answer.clone()));
        } else {
            self.output.say(&Message::AnswerIncorrect(answer.clone()));
        }
        Ok(answer)
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins {
            index: self.index,
            total: self.total,
            question: self.question.clone(),
        });
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    // Waits for an answer, however long it takes.
    fn is_over(&self) -> bool {
        false
    }
}
