use anyhow::{anyhow, Result};
use std::time::Duration;
use tracing::debug;

use self::definition::*;
use self::grade::QuizResult;
use self::phase::*;
use crate::dataset::Flower;
use crate::output::QuizOutput;
use crate::settings::Settings;

pub mod definition;
pub mod grade;
mod phase;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O> {
    InProgress(QuestionState<O>),
    Answered(AnsweredState),
    Completed(ResultsState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::InProgress(s) => s,
            Phase::Answered(s) => s,
            Phase::Completed(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::InProgress(_) => "in progress",
            Phase::Answered(_) => "answered",
            Phase::Completed(_) => "completed",
        }
    }
}

/// Where a quiz session currently stands.
#[derive(Debug, Eq, PartialEq)]
pub enum QuizState<'a> {
    InProgress { question_index: usize },
    Answered { question_index: usize, chosen: &'a str },
    Completed(&'a QuizResult),
}

/// One run of a fixed-length quiz, from the first question to the result.
///
/// Only the first answer to a question counts. After answering, the quiz
/// waits for `answer_reveal_delay` worth of ticks before moving on.
pub struct Quiz<O: QuizOutput> {
    questions: Vec<QuizQuestion>,
    answers: Vec<QuizAnswer>,
    answer_reveal_delay: Duration,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput + Clone> Quiz<O> {
    pub fn new(questions: Vec<QuizQuestion>, answer_reveal_delay: Duration, output: O) -> Self {
        let current_phase = match questions.first() {
            Some(question) => Phase::InProgress(QuestionState::new(
                0,
                questions.len(),
                question.clone(),
                output.clone(),
            )),
            None => Phase::Completed(ResultsState::new(
                QuizResult::new(Vec::new(), 0),
                output.clone(),
            )),
        };
        let mut quiz = Quiz {
            questions,
            answers: Vec::new(),
            answer_reveal_delay,
            current_phase,
            output,
        };
        quiz.current_phase.get_state().on_begin();
        quiz
    }

    pub fn generate(
        flowers: &[Flower],
        settings: &Settings,
        output: O,
    ) -> std::result::Result<Self, InsufficientDataError> {
        let questions = definition::generate(flowers, settings.question_count)?;
        Ok(Quiz::new(questions, settings.answer_reveal_delay, output))
    }

    pub fn state(&self) -> QuizState<'_> {
        match &self.current_phase {
            Phase::InProgress(s) => QuizState::InProgress {
                question_index: s.index(),
            },
            Phase::Answered(s) => QuizState::Answered {
                question_index: s.answer().question_index,
                chosen: &s.answer().chosen,
            },
            Phase::Completed(s) => QuizState::Completed(s.result()),
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state() {
            QuizState::InProgress { question_index }
            | QuizState::Answered { question_index, .. } => self.questions.get(question_index),
            QuizState::Completed(_) => None,
        }
    }

    pub fn correct_so_far(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.current_phase {
            Phase::Completed(s) => Some(s.result()),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Completed(_) => true,
            _ => false,
        }
    }

    pub fn answer(&mut self, choice: &str) -> Result<QuizAnswer> {
        let answer = match &mut self.current_phase {
            Phase::InProgress(question_state) => question_state.answer(choice)?,
            Phase::Answered(_) => return Err(anyhow!("This question was already answered")),
            Phase::Completed(_) => return Err(anyhow!("The quiz is over")),
        };
        self.answers.push(answer.clone());
        let state = AnsweredState::new(answer.clone(), self.answer_reveal_delay);
        self.set_current_phase(Phase::Answered(state));
        Ok(answer)
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    /// Moves past an answered question without waiting for the reveal delay.
    pub fn skip(&mut self) {
        self.advance();
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        debug!("Entering quiz phase: {}", phase.name());
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    fn advance(&mut self) {
        let next_index = match &self.current_phase {
            Phase::Answered(s) => s.answer().question_index + 1,
            Phase::InProgress(_) | Phase::Completed(_) => return,
        };
        match self.questions.get(next_index) {
            Some(question) => {
                let state = QuestionState::new(
                    next_index,
                    self.questions.len(),
                    question.clone(),
                    self.output.clone(),
                );
                self.set_current_phase(Phase::InProgress(state));
            }
            None => {
                let result = QuizResult::new(self.answers.clone(), self.questions.len());
                let state = ResultsState::new(result, self.output.clone());
                self.set_current_phase(Phase::Completed(state));
            }
        }
    }
}
