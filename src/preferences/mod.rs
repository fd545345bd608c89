use anyhow::{Context, Result};
use directories_next::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

#[cfg(test)]
mod tests;

const FILE_NAME: &str = "preferences.json";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Preferences {
    #[serde(default)]
    pub has_swiped: bool,
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("blomster-quiz");
    Ok(dir)
}

#[derive(Clone, Debug)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        PreferencesStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn open_default() -> Result<Self> {
        let mut path = get_data_dir()?;
        path.push(FILE_NAME);
        Ok(PreferencesStore::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable preferences fall back to the defaults.
    pub fn load(&self) -> Preferences {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Preferences::default(),
            Err(e) => {
                warn!("Could not read preferences from {:?}: {}", self.path, e);
                return Preferences::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed preferences in {:?}: {}", self.path, e);
            Preferences::default()
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Could not write preferences to {:?}", self.path))?;
        Ok(())
    }

    pub fn mark_swiped(&self) -> Result<Preferences> {
        let mut preferences = self.load();
        if !preferences.has_swiped {
            preferences.has_swiped = true;
            self.save(&preferences)?;
        }
        Ok(preferences)
    }
}
