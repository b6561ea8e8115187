use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{CharacterSet, EngineError, Result};

/// JSON file holding one character set.
///
/// A zero-length file is a valid, empty character set. Saving always rewrites
/// the whole file; concurrent writers are not coordinated, the last save wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetStore {
    path: PathBuf,
}

impl CharsetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the character set from disk.
    ///
    /// # Errors
    ///
    /// `NotFound` if the file is missing, `Parse` if it is neither empty nor a
    /// valid character set document.
    pub fn load(&self) -> Result<CharacterSet> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(EngineError::NotFound { path: self.path.clone() });
            }
            Err(err) => return Err(err.into()),
        };
        if metadata.len() == 0 {
            log::info!("{} is empty, starting with an empty character set", self.path.display());
            return Ok(CharacterSet::new());
        }

        let bytes = fs::read(&self.path)?;
        let content = String::from_utf8(bytes).map_err(|err| EngineError::parse(&self.path, err))?;
        let charset = CharacterSet::from_json(&content).map_err(|err| EngineError::parse(&self.path, err))?;
        log::info!("Loaded {} characters from {}", charset.len(), self.path.display());
        Ok(charset)
    }

    /// Writes the whole character set, keys sorted, replacing the file.
    ///
    /// The content goes to a sibling `.new` file first which is then renamed
    /// over the target.
    pub fn save(&self, charset: &CharacterSet) -> Result<()> {
        let json = charset.to_json()?;
        let write_name = self.temp_path();
        fs::write(&write_name, json.as_bytes())?;
        if let Err(err) = fs::rename(&write_name, &self.path) {
            let _ = fs::remove_file(&write_name);
            return Err(err.into());
        }
        log::info!("Saved {} characters to {}", charset.len(), self.path.display());
        Ok(())
    }

    /// Scratch file used while saving.
    pub fn temp_path(&self) -> PathBuf {
        let mut write_name = self.path.clone().into_os_string();
        write_name.push(".new");
        PathBuf::from(write_name)
    }
}
