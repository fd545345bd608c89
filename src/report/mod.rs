use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local};
use itertools::Itertools;
use std::process::Command;
use tracing::{info, warn};
use url::{form_urlencoded, Url};

use crate::dataset::{Flower, ReferenceSource};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IssueKind {
    WrongImage,
    WrongCommonName,
    WrongScientificName,
    WrongFamily,
    PoorImageQuality,
    BrokenImage,
    Other,
}

impl IssueKind {
    pub const ALL: [IssueKind; 7] = [
        IssueKind::WrongImage,
        IssueKind::WrongCommonName,
        IssueKind::WrongScientificName,
        IssueKind::WrongFamily,
        IssueKind::PoorImageQuality,
        IssueKind::BrokenImage,
        IssueKind::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            IssueKind::WrongImage => "feil_bilde",
            IssueKind::WrongCommonName => "feil_navn",
            IssueKind::WrongScientificName => "feil_latin",
            IssueKind::WrongFamily => "feil_familie",
            IssueKind::PoorImageQuality => "dårlig_bilde",
            IssueKind::BrokenImage => "ødelagt_link",
            IssueKind::Other => "annet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::WrongImage => "Feil blomst på bildet",
            IssueKind::WrongCommonName => "Feil norsk navn",
            IssueKind::WrongScientificName => "Feil latinsk navn",
            IssueKind::WrongFamily => "Feil familie/slekt",
            IssueKind::PoorImageQuality => "Dårlig bildekvalitet",
            IssueKind::BrokenImage => "Bildet laster ikke",
            IssueKind::Other => "Annet",
        }
    }
}

/// A user's complaint about one flower card.
#[derive(Clone, Debug)]
pub struct ErrorReport {
    flower: Flower,
    issues: Vec<IssueKind>,
    comment: String,
}

impl ErrorReport {
    pub fn new(flower: Flower) -> Self {
        ErrorReport {
            flower,
            issues: Vec::new(),
            comment: String::new(),
        }
    }

    pub fn flower(&self) -> &Flower {
        &self.flower
    }

    pub fn issues(&self) -> &[IssueKind] {
        &self.issues
    }

    /// Selects the issue, or deselects it if already selected.
    pub fn toggle_issue(&mut self, issue: IssueKind) {
        if self.issues.contains(&issue) {
            self.issues.retain(|i| *i != issue);
        } else {
            self.issues.push(issue);
        }
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.to_owned();
    }

    pub fn can_submit(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn subject(&self) -> String {
        format!("Feilrapport: {}", self.flower.common_name)
    }

    pub fn body(&self, reported_at: &DateTime<Local>) -> String {
        let issues = self.issues.iter().map(|i| i.label()).join(", ");
        format!(
            "FEILRAPPORT\n\n\
             Blomst: {}\n\
             Latinsk: {}\n\
             Familie: {}\n\
             Bilde: {}\n\
             Wikipedia: {}\n\n\
             FEIL FUNNET:\n{}\n\n\
             KOMMENTAR:\n{}\n\n\
             Rapportert: {}",
            self.flower.common_name,
            self.flower.scientific_name,
            self.flower.family_name,
            self.flower.primary_image_url(),
            self.flower
                .reference_url(ReferenceSource::Wikipedia)
                .unwrap_or(""),
            issues,
            self.comment,
            reported_at.format("%d.%m.%Y, %H:%M:%S"),
        )
    }

    pub fn to_mailto(&self, recipient: &str, reported_at: &DateTime<Local>) -> Result<Url> {
        let draft = format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject()),
            encode_component(&self.body(reported_at)),
        );
        Url::parse(&draft).with_context(|| format!("Could not build mail draft for {}", recipient))
    }
}

// Form encoding turns spaces into '+', which mail clients show literally.
fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Hands a composed draft to something that can show it to the user.
pub trait MailHandler {
    fn open(&self, draft: &Url) -> Result<()>;
}

/// Opens drafts with the platform's default mail client.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemMailHandler;

impl MailHandler for SystemMailHandler {
    fn open(&self, draft: &Url) -> Result<()> {
        let mut command = if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(&["/C", "start", ""]);
            command
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        };
        command
            .arg(draft.as_str())
            .spawn()
            .context("Could not spawn mail handler")?;
        Ok(())
    }
}

/// Sends the report through `handler`. Only fails if no issue was selected;
/// problems opening the draft are logged and otherwise ignored.
pub fn submit<H: MailHandler>(report: &ErrorReport, recipient: &str, handler: &H) -> Result<()> {
    if !report.can_submit() {
        return Err(anyhow!("Select at least one issue before sending the report"));
    }

    let reported_at = Local::now();
    info!(
        flower = report.flower.common_name.as_str(),
        issues = report.issues.iter().map(|i| i.id()).join(",").as_str(),
        "Submitting error report"
    );

    let result = report
        .to_mailto(recipient, &reported_at)
        .and_then(|draft| handler.open(&draft));
    if let Err(e) = result {
        warn!("Could not open error report draft: {:#}", e);
    }
    Ok(())
}
