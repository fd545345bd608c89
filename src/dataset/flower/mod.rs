use csv::StringRecord;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

use crate::dataset::columns::{ColumnMap, Field};


lazy_static! {
    static ref IMAGE_EXTENSION_REGEX: Regex =
        Regex::new(r"(?i)\.(jpe?g|png|gif|webp|svg|tiff?|bmp)$").unwrap();
}

const IMAGE_HOSTS: &[&str] = &[
    "norskflora.no",
    "bilder.norskflora.no",
    "upload.wikimedia.org",
    "commons.wikimedia.org",
];

const SUCCESS_INDICATORS: &[&str] = &["SUCCESS", "FUNNET"];

fn is_known_image_host(host: &str) -> bool {
    IMAGE_HOSTS
        .iter()
        .any(|known| host == *known || host.ends_with(&format!(".{}", known)))
}

fn is_image_url(candidate: &str) -> bool {
    let url = match Url::parse(candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }
    url.host_str().map(is_known_image_host).unwrap_or(false)
        || IMAGE_EXTENSION_REGEX.is_match(url.path())
}

fn collect_image_urls(candidates: &[String]) -> Vec<String> {
    let recognized: Vec<&str> = candidates
        .iter()
        .map(|candidate| candidate.trim())
        .filter(|candidate| !candidate.is_empty() && is_image_url(candidate))
        .collect();
    let image_urls: Vec<String> = recognized.iter().unique().map(|u| u.to_string()).collect();
    if image_urls.len() < recognized.len() {
        debug!(
            duplicates = recognized.len() - image_urls.len(),
            "Removed duplicate image URLs"
        );
    }
    image_urls
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ImageStatus {
    Found,
    NotFound,
    MissingName,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ReferenceSource {
    NorskFlora,
    Wikipedia,
}

/// One row of the dataset, with every column already resolved through the alias table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawFlower {
    pub common_name: String,
    pub scientific_name: String,
    pub family_name: String,
    pub category: String,
    pub status: String,
    pub norskflora_url: String,
    pub wikipedia_url: String,
    pub image_candidates: Vec<String>,
}

impl RawFlower {
    pub fn from_record(columns: &ColumnMap, record: &StringRecord) -> RawFlower {
        RawFlower {
            common_name: columns.get(record, Field::CommonName).to_owned(),
            scientific_name: columns.get(record, Field::ScientificName).to_owned(),
            family_name: columns.get(record, Field::FamilyName).to_owned(),
            category: columns.get(record, Field::Category).to_owned(),
            status: columns.get(record, Field::Status).to_owned(),
            norskflora_url: columns.get(record, Field::NorskFloraUrl).to_owned(),
            wikipedia_url: columns.get(record, Field::WikipediaUrl).to_owned(),
            image_candidates: columns
                .images(record)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Flower {
    pub common_name: String,
    pub scientific_name: String,
    pub family_name: String,
    pub category: String,
    pub image_urls: Vec<String>,
    pub reference_urls: BTreeMap<ReferenceSource, String>,
    pub image_status: ImageStatus,
}

impl Flower {
    pub fn primary_image_url(&self) -> &str {
        self.image_urls.first().map(String::as_str).unwrap_or("")
    }

    pub fn reference_url(&self, source: ReferenceSource) -> Option<&str> {
        self.reference_urls.get(&source).map(String::as_str)
    }

    /// Only eligible flowers take part in sampling and quizzes.
    pub fn is_eligible(&self) -> bool {
        self.image_status == ImageStatus::Found && !self.image_urls.is_empty()
    }

    pub fn matches(&self, lowercase_term: &str) -> bool {
        [
            &self.common_name,
            &self.scientific_name,
            &self.family_name,
            &self.category,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_term))
    }
}

impl From<RawFlower> for Flower {
    fn from(raw_flower: RawFlower) -> Self {
        let common_name = raw_flower.common_name.trim().to_owned();
        let image_urls = collect_image_urls(&raw_flower.image_candidates);

        let reported_success = SUCCESS_INDICATORS.contains(&raw_flower.status.trim());
        let image_status = if common_name.is_empty() {
            ImageStatus::MissingName
        } else if reported_success && !image_urls.is_empty() {
            ImageStatus::Found
        } else {
            ImageStatus::NotFound
        };

        let mut reference_urls = BTreeMap::new();
        for (source, url) in vec![
            (ReferenceSource::NorskFlora, raw_flower.norskflora_url),
            (ReferenceSource::Wikipedia, raw_flower.wikipedia_url),
        ] {
            let url = url.trim();
            if !url.is_empty() {
                reference_urls.insert(source, url.to_owned());
            }
        }

        Flower {
            common_name,
            scientific_name: raw_flower.scientific_name.trim().to_owned(),
            family_name: raw_flower.family_name.trim().to_owned(),
            category: raw_flower.category.trim().to_owned(),
            image_urls,
            reference_urls,
            image_status,
        }
    }
}
