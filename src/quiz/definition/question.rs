use serde::Serialize;

use crate::dataset::Flower;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub flower: Flower,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn is_option(&self, choice: &str) -> bool {
        self.options.iter().any(|option| option == choice)
    }

    pub fn is_choice_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QuizAnswer {
    pub question_index: usize,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
}

impl QuizAnswer {
    pub fn new(question_index: usize, question: &QuizQuestion, chosen: &str) -> Self {
        QuizAnswer {
            question_index,
            chosen: chosen.to_owned(),
            correct: question.correct_answer.clone(),
            is_correct: question.is_choice_correct(chosen),
        }
    }
}
