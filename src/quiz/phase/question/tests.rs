use super::*;
use crate::dataset::fixtures::flowers;
use crate::output::mock::MockQuizOutput;
use crate::quiz::definition;

struct Context {
    state: QuestionState<MockQuizOutput>,
    output: MockQuizOutput,
}

impl Context {
    fn new() -> Self {
        let question = definition::generate(&flowers(8), 1).unwrap().remove(0);
        let output = MockQuizOutput::new();
        let state = QuestionState::new(2, 10, question, output.clone());
        Context { state, output }
    }

    fn wrong_option(&self) -> String {
        self.state
            .question
            .options
            .iter()
            .find(|o| **o != self.state.question.correct_answer)
            .unwrap()
            .clone()
    }
}

#[test]
fn announces_question() {
    let mut ctx = Context::new();
    ctx.state.on_begin();
    assert_eq!(
        ctx.output.flush(),
        [Message::QuestionBegins {
            index: 2,
            total: 10,
            question: ctx.state.question.clone(),
        }]
    );
}

#[test]
fn correct_answer_is_announced() {
    let mut ctx = Context::new();
    let correct = ctx.state.question.correct_answer.clone();
    let answer = ctx.state.answer(&correct).unwrap();
    assert!(answer.is_correct);
    assert_eq!(answer.question_index, 2);
    assert!(ctx.output.contains_message(&Message::AnswerCorrect(answer)));
}

#[test]
fn incorrect_answer_is_announced() {
    let mut ctx = Context::new();
    let wrong = ctx.wrong_option();
    let answer = ctx.state.answer(&wrong).unwrap();
    assert!(!answer.is_correct);
    assert_eq!(answer.correct, ctx.state.question.correct_answer);
    assert!(ctx.output.contains_message(&Message::AnswerIncorrect(answer)));
}

#[test]
fn rejects_choices_outside_options() {
    let mut ctx = Context::new();
    assert!(ctx.state.answer("Løvetann").is_err());
    assert_eq!(ctx.output.message_count(), 0);
}

#[test]
fn waits_for_an_answer() {
    let mut ctx = Context::new();
    ctx.state.on_tick(Duration::from_secs(3600));
    assert!(!ctx.state.is_over());
}
