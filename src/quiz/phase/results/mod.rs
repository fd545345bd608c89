use std::time::Duration;
use tracing::info;

use crate::output::{Message, QuizOutput};
use crate::quiz::grade::QuizResult;
use crate::quiz::State;


#[derive(Debug)]
pub struct ResultsState<O> {
    result: QuizResult,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(result: QuizResult, output: O) -> Self {
        ResultsState { result, output }
    }

    pub fn result(&self) -> &QuizResult {
        &self.result
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_tick(&mut self, _dt: Duration) {}

    fn on_begin(&mut self) {
        info!(
            correct = self.result.correct_count,
            total = self.result.total_questions,
            percent = self.result.score_percent,
            "Quiz completed"
        );
        self.output.say(&Message::QuizResults(self.result.clone()));
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
