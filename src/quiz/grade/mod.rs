use serde::Serialize;

use crate::quiz::definition::QuizAnswer;


#[derive(Debug, Eq, PartialEq, Serialize)]
pub struct GradeBand {
    pub min_percent: usize,
    /// Short grade label. Every band currently leaves it blank.
    pub label: &'static str,
    pub description: &'static str,
}

/// Ordered from best to worst. Lower bounds are inclusive.
pub const GRADE_BANDS: &[GradeBand] = &[
    GradeBand {
        min_percent: 90,
        label: "",
        description: "🌟 Eksepsjonelt! Du er en blomsterekspert!",
    },
    GradeBand {
        min_percent: 80,
        label: "",
        description: "🌸 Meget bra! Du kjenner blomstene godt!",
    },
    GradeBand {
        min_percent: 70,
        label: "",
        description: "🌱 Bra jobbet! Du er på god vei!",
    },
    GradeBand {
        min_percent: 60,
        label: "",
        description: "🌿 Greit! Litt mer trening så blir du ekspert!",
    },
    GradeBand {
        min_percent: 50,
        label: "",
        description: "🍃 Bra forsøk! Øv litt mer så kommer du dit!",
    },
    GradeBand {
        min_percent: 30,
        label: "",
        description: "🌺 Nesten der! Lykke til neste gang!",
    },
    GradeBand {
        min_percent: 0,
        label: "",
        description: "🌷 Godt forsøk! Det blir bare bedre fremover!",
    },
];

pub fn grade(correct_count: usize, total_questions: usize) -> &'static GradeBand {
    let lowest = &GRADE_BANDS[GRADE_BANDS.len() - 1];
    if total_questions == 0 {
        return lowest;
    }
    GRADE_BANDS
        .iter()
        .find(|band| correct_count * 100 >= band.min_percent * total_questions)
        .unwrap_or(lowest)
}

pub fn score(answers: &[QuizAnswer], total_questions: usize) -> &'static GradeBand {
    grade(count_correct(answers), total_questions)
}

fn count_correct(answers: &[QuizAnswer]) -> usize {
    answers.iter().filter(|a| a.is_correct).count()
}

// Rounds half up.
fn score_percent(correct_count: usize, total_questions: usize) -> usize {
    if total_questions == 0 {
        return 0;
    }
    (correct_count * 200 + total_questions) / (2 * total_questions)
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_count: usize,
    pub score_percent: usize,
    pub answers: Vec<QuizAnswer>,
    pub description: String,
}

impl QuizResult {
    pub fn new(answers: Vec<QuizAnswer>, total_questions: usize) -> Self {
        let correct_count = count_correct(&answers);
        QuizResult {
            total_questions,
            correct_count,
            score_percent: score_percent(correct_count, total_questions),
            description: score(&answers, total_questions).description.to_owned(),
            answers,
        }
    }
}
