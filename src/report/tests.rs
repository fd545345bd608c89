use super::*;
use chrono::TimeZone;
use std::cell::RefCell;

use crate::dataset::RawFlower;

#[derive(Default)]
struct RecordingMailHandler {
    drafts: RefCell<Vec<Url>>,
}

impl MailHandler for RecordingMailHandler {
    fn open(&self, draft: &Url) -> Result<()> {
        self.drafts.borrow_mut().push(draft.clone());
        Ok(())
    }
}

struct FailingMailHandler;

impl MailHandler for FailingMailHandler {
    fn open(&self, _draft: &Url) -> Result<()> {
        Err(anyhow!("no mail client installed"))
    }
}

fn flower() -> Flower {
    RawFlower {
        common_name: "Blåklokke".to_owned(),
        scientific_name: "Campanula rotundifolia".to_owned(),
        family_name: "Klokkefamilien".to_owned(),
        status: "FUNNET".to_owned(),
        wikipedia_url: "https://no.wikipedia.org/wiki/Blåklokke".to_owned(),
        image_candidates: vec!["http://x/img.jpg".to_owned()],
        ..Default::default()
    }
    .into()
}

fn reported_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap()
}

#[test]
fn issue_list_is_fixed() {
    assert_eq!(IssueKind::ALL.len(), 7);
    assert_eq!(IssueKind::WrongImage.label(), "Feil blomst på bildet");
    assert_eq!(IssueKind::BrokenImage.id(), "ødelagt_link");
}

#[test]
fn toggling_selects_and_deselects() {
    let mut report = ErrorReport::new(flower());
    assert!(!report.can_submit());

    report.toggle_issue(IssueKind::WrongFamily);
    report.toggle_issue(IssueKind::Other);
    assert_eq!(report.issues(), [IssueKind::WrongFamily, IssueKind::Other]);
    assert!(report.can_submit());

    report.toggle_issue(IssueKind::WrongFamily);
    assert_eq!(report.issues(), [IssueKind::Other]);
}

#[test]
fn body_describes_flower_and_issues() {
    let mut report = ErrorReport::new(flower());
    report.toggle_issue(IssueKind::WrongImage);
    report.toggle_issue(IssueKind::PoorImageQuality);
    report.set_comment("Bildet viser en hvitveis.");

    let body = report.body(&reported_at());
    assert!(body.starts_with("FEILRAPPORT\n\nBlomst: Blåklokke\n"));
    assert!(body.contains("Latinsk: Campanula rotundifolia\n"));
    assert!(body.contains("Familie: Klokkefamilien\n"));
    assert!(body.contains("Bilde: http://x/img.jpg\n"));
    assert!(body.contains("Wikipedia: https://no.wikipedia.org/wiki/Blåklokke\n"));
    assert!(body.contains("FEIL FUNNET:\nFeil blomst på bildet, Dårlig bildekvalitet\n"));
    assert!(body.contains("KOMMENTAR:\nBildet viser en hvitveis.\n"));
    assert!(body.ends_with("Rapportert: 17.05.2024, 12:30:00"));
}

#[test]
fn mailto_round_trips_subject_and_body() {
    let mut report = ErrorReport::new(flower());
    report.toggle_issue(IssueKind::WrongCommonName);
    report.set_comment("Heter egentlig 1+1 & mer");

    let draft = report
        .to_mailto("feilrapport@example.com", &reported_at())
        .unwrap();
    assert_eq!(draft.scheme(), "mailto");
    assert_eq!(draft.path(), "feilrapport@example.com");
    assert!(!draft.as_str().contains('+'));

    let pairs: Vec<(String, String)> = draft.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("subject".to_owned(), "Feilrapport: Blåklokke".to_owned()),
            ("body".to_owned(), report.body(&reported_at())),
        ]
    );
}

#[test]
fn submit_opens_draft() {
    let mut report = ErrorReport::new(flower());
    report.toggle_issue(IssueKind::BrokenImage);

    let handler = RecordingMailHandler::default();
    submit(&report, "feilrapport@example.com", &handler).unwrap();

    let drafts = handler.drafts.borrow();
    assert_eq!(drafts.len(), 1);
    assert!(drafts[0]
        .as_str()
        .starts_with("mailto:feilrapport@example.com?subject=Feilrapport%3A%20Bl%C3%A5klokke"));
}

#[test]
fn submit_requires_an_issue() {
    let report = ErrorReport::new(flower());
    let handler = RecordingMailHandler::default();
    assert!(submit(&report, "feilrapport@example.com", &handler).is_err());
    assert!(handler.drafts.borrow().is_empty());
}

#[test]
fn submit_ignores_handler_failures() {
    let mut report = ErrorReport::new(flower());
    report.toggle_issue(IssueKind::Other);
    assert!(submit(&report, "feilrapport@example.com", &FailingMailHandler).is_ok());
}
