use crate::quiz::definition::{QuizAnswer, QuizQuestion};
use crate::quiz::grade::QuizResult;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuestionBegins {
        index: usize,
        total: usize,
        question: QuizQuestion,
    },
    AnswerCorrect(QuizAnswer),
    AnswerIncorrect(QuizAnswer),
    QuizResults(QuizResult),
}

impl Message {
    pub fn text(&self) -> String {
        use Message::*;
        match self {
            QuestionBegins { index, total, .. } => format!(
                "Spørsmål {} av {}\nHvilken blomst er dette?",
                index + 1,
                total
            ),
            AnswerCorrect(answer) => format!("✅ Riktig! Det er {}.", answer.correct),
            AnswerIncorrect(answer) => {
                format!("❌ Feil. Riktig svar er {}.", answer.correct)
            }
            QuizResults(result) => format!(
                "🎉 Quiz fullført!\n{} av {} riktige ({}%)\n{}",
                result.correct_count,
                result.total_questions,
                result.score_percent,
                result.description
            ),
        }
    }
}

/// Receives quiz events. Implemented by whatever renders the quiz.
pub trait QuizOutput {
    fn say(&self, message: &Message);
}
