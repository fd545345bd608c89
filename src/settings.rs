use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub dataset_path: PathBuf,
    pub question_count: usize,
    pub answer_reveal_delay: Duration,
    pub report_recipient: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dataset_path: PathBuf::from("data/blomster.csv"),
            question_count: 10,
            answer_reveal_delay: Duration::from_millis(1500),
            report_recipient: "feilrapport@example.com".to_owned(),
        }
    }
}
