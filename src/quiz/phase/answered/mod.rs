use std::time::Duration;

use crate::quiz::definition::QuizAnswer;
use crate::quiz::State;


#[derive(Clone, Debug)]
pub struct AnsweredState {
    answer: QuizAnswer,
    time_elapsed: Duration,
    time_to_wait: Duration,
}

impl AnsweredState {
    pub fn new(answer: QuizAnswer, duration: Duration) -> Self {
        AnsweredState {
            answer,
            time_elapsed: Duration::default(),
            time_to_wait: duration,
        }
    }

    pub fn answer(&self) -> &QuizAnswer {
        &self.answer
    }
}

impl State for AnsweredState {
    fn on_begin(&mut self) {}

    fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_wait
    }
}
