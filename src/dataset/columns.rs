use csv::StringRecord;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    CommonName,
    ScientificName,
    FamilyName,
    Category,
    Status,
    NorskFloraUrl,
    WikipediaUrl,
}

// Columns are listed newest schema first. The first one present in the header wins.
const FIELD_ALIASES: &[(Field, &[&str])] = &[
    (Field::CommonName, &["norsk_navn", "Norsk navn", "Art - Norsk"]),
    (
        Field::ScientificName,
        &["latinsk_navn", "Latinsk navn", "Vitenskapelig navn"],
    ),
    (Field::FamilyName, &["familie", "Familie", "Familienavn"]),
    (Field::Category, &["type", "Type", "Slekt - Norsk", "Sjikt"]),
    (Field::Status, &["wikipedia_status", "bilde_status"]),
    (Field::NorskFloraUrl, &["norskflora_url"]),
    (Field::WikipediaUrl, &["wikipedia_url"]),
];

// Discovery order of image candidates, primary image first.
const IMAGE_COLUMNS: &[&str] = &[
    "bilde_url",
    "wikipedia_image_url",
    "wikipedia_image_file",
    "norskflora_url",
];

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    fields: HashMap<Field, usize>,
    images: Vec<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &StringRecord) -> ColumnMap {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header) == name)
        };

        let fields = FIELD_ALIASES
            .iter()
            .filter_map(|(field, aliases)| {
                aliases
                    .iter()
                    .find_map(|alias| position(*alias))
                    .map(|index| (*field, index))
            })
            .collect();

        let images = IMAGE_COLUMNS
            .iter()
            .filter_map(|column| position(*column))
            .collect();

        ColumnMap { fields, images }
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn get<'r>(&self, record: &'r StringRecord, field: Field) -> &'r str {
        self.fields
            .get(&field)
            .and_then(|index| record.get(*index))
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn images<'r>(&self, record: &'r StringRecord) -> Vec<&'r str> {
        self.images
            .iter()
            .filter_map(|index| record.get(*index))
            .map(str::trim)
            .collect()
    }
}
