use csv::StringRecord;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub mod columns;
#[cfg(test)]
pub mod fixtures;
pub mod flower;

pub use self::flower::{Flower, ImageStatus, RawFlower, ReferenceSource};
use self::columns::{ColumnMap, Field};
use crate::settings::Settings;


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not fetch flower data from {location}")]
    Fetch {
        location: String,
        #[source]
        source: io::Error,
    },
    #[error("could not parse flower data")]
    Parse(#[from] csv::Error),
    #[error("flower data has no {0} column")]
    MissingColumn(&'static str),
}

#[derive(Clone, Debug, Serialize)]
pub struct Dataset {
    pub flowers: Vec<Flower>,
    pub total: usize,
    pub with_images: usize,
    pub without_images: usize,
    pub dropped_rows: usize,
}

impl Dataset {
    pub fn parse<R: io::Read>(reader: R) -> Result<Dataset, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = StringRecord::from_byte_record_lossy(csv_reader.byte_headers()?.clone());
        let columns = ColumnMap::resolve(&headers);
        if !columns.has(Field::CommonName) {
            return Err(LoadError::MissingColumn("Norwegian name"));
        }

        let mut flowers = Vec::new();
        let mut dropped_rows = 0;
        for (index, record) in csv_reader.byte_records().enumerate() {
            // Invalid UTF-8 is replaced, not rejected
            let record = StringRecord::from_byte_record_lossy(record?);
            let flower: Flower = RawFlower::from_record(&columns, &record).into();
            if flower.common_name.is_empty() {
                // Header is line 1
                debug!(line = index + 2, "Dropping flower row without a name");
                dropped_rows += 1;
                continue;
            }
            flowers.push(flower);
        }

        Ok(Dataset::from_flowers(flowers, dropped_rows))
    }

    fn from_flowers(flowers: Vec<Flower>, dropped_rows: usize) -> Dataset {
        let with_images = flowers
            .iter()
            .filter(|f| f.image_status == ImageStatus::Found)
            .count();
        Dataset {
            total: flowers.len(),
            without_images: flowers.len() - with_images,
            with_images,
            dropped_rows,
            flowers,
        }
    }

    pub fn eligible(&self) -> impl Iterator<Item = &Flower> {
        self.flowers.iter().filter(|f| f.is_eligible())
    }
}

/// Where the raw CSV bytes come from.
pub trait DatasetSource {
    fn location(&self) -> String;
    fn fetch(&self) -> io::Result<Vec<u8>>;
}

#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// Dataset bytes already in memory, e.g. from `include_bytes!`.
#[derive(Clone, Debug)]
pub struct MemorySource {
    name: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new<B: Into<Vec<u8>>>(name: &str, bytes: B) -> Self {
        MemorySource {
            name: name.to_owned(),
            bytes: bytes.into(),
        }
    }
}

impl DatasetSource for MemorySource {
    fn location(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Write-once slot for the parsed dataset.
///
/// The lock is held while the dataset is being built, so callers arriving
/// during a load wait for it instead of starting a second one.
#[derive(Debug, Default)]
pub struct DatasetCache {
    slot: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.slot.lock().clone()
    }

    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<Dataset>, LoadError>
    where
        F: FnOnce() -> Result<Dataset, LoadError>,
    {
        let mut slot = self.slot.lock();
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(init()?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn reset(&self) {
        *self.slot.lock() = None;
    }
}

pub struct DatasetLoader<S> {
    source: S,
    cache: Arc<DatasetCache>,
}

impl DatasetLoader<FileSource> {
    pub fn from_settings(settings: &Settings) -> Self {
        DatasetLoader::new(FileSource::new(&settings.dataset_path))
    }
}

impl<S: DatasetSource> DatasetLoader<S> {
    pub fn new(source: S) -> Self {
        DatasetLoader::with_cache(source, Arc::new(DatasetCache::new()))
    }

    pub fn with_cache(source: S, cache: Arc<DatasetCache>) -> Self {
        DatasetLoader { source, cache }
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    pub fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cache.get_or_try_init(|| {
            let location = self.source.location();
            let bytes = self
                .source
                .fetch()
                .map_err(|source| LoadError::Fetch {
                    location: location.clone(),
                    source,
                })?;
            let dataset = Dataset::parse(bytes.as_slice())?;
            info!(
                location = location.as_str(),
                total = dataset.total,
                with_images = dataset.with_images,
                without_images = dataset.without_images,
                with_several_images = dataset
                    .flowers
                    .iter()
                    .filter(|f| f.image_urls.len() > 1)
                    .count(),
                dropped_rows = dataset.dropped_rows,
                "Loaded flower data"
            );
            Ok(dataset)
        })
    }
}
