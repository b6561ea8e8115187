use std::{
    fs,
    path::{Path, PathBuf},
};

use dotmatrix_engine::RenderOptions;
use serde::{Deserialize, Serialize};

use crate::DesignerResult;

/// Character set file used when neither the command line nor the options name one.
pub const DEFAULT_CHARSET_FILE: &str = "dotmxfonts5x12.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default = "default_rows")]
    pub rows: usize,

    #[serde(default = "default_columns")]
    pub columns: usize,

    #[serde(default)]
    pub last_charset: Option<PathBuf>,

    #[serde(default)]
    pub render: RenderOptions,
}

fn default_rows() -> usize {
    12
}

fn default_columns() -> usize {
    5
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            last_charset: None,
            render: RenderOptions::default(),
        }
    }
}

impl Options {
    fn options_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "dotmatrix_designer").map(|dirs| dirs.config_dir().join("options.toml"))
    }

    /// Loads the user's options, defaults if there are none yet.
    pub fn load_options() -> DesignerResult<Self> {
        match Self::options_file() {
            Some(options_file) => Self::load_from(&options_file),
            None => Ok(Options::default()),
        }
    }

    pub fn store_options(&self) -> DesignerResult<()> {
        if let Some(options_file) = Self::options_file() {
            self.store_to(&options_file)?;
        }
        Ok(())
    }

    pub fn load_from(options_file: &Path) -> DesignerResult<Self> {
        if !options_file.exists() {
            return Ok(Options::default());
        }
        let content = fs::read_to_string(options_file)?;
        let options: Options = toml::from_str(&content)?;
        Ok(options)
    }

    /// Writes to a `.new` file next to `options_file`, then moves it in place.
    pub fn store_to(&self, options_file: &Path) -> DesignerResult<()> {
        let mut write_name = options_file.to_path_buf();
        write_name.set_extension("new");

        if let Some(parent) = options_file.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&write_name, toml_string)?;
        fs::rename(&write_name, options_file)?;
        Ok(())
    }

    /// Path given on the command line, else the last one used, else the default.
    pub fn charset_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.last_charset.clone()).unwrap_or_else(|| PathBuf::from(DEFAULT_CHARSET_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotmatrix_engine::{Color, Marker};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options::load_from(&dir.path().join("options.toml")).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!((options.rows, options.columns), (12, 5));
    }

    #[test]
    fn test_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config").join("options.toml");
        let mut options = Options::default();
        options.rows = 7;
        options.render.marker = Marker::Rectangle;
        options.render.foreground = Color::new(0, 0, 0xFF);
        options.last_charset = Some(PathBuf::from("fonts/5x7.json"));

        options.store_to(&file).unwrap();

        assert_eq!(Options::load_from(&file).unwrap(), options);
        assert!(!file.with_extension("new").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("options.toml");
        fs::write(&file, "columns = 8\n\n[render]\nmarker = \"rectangle\"\n").unwrap();

        let options = Options::load_from(&file).unwrap();

        assert_eq!(options.rows, 12);
        assert_eq!(options.columns, 8);
        assert_eq!(options.render.marker, Marker::Rectangle);
        assert_eq!(options.render.scale_factor, 1);
    }

    #[test]
    fn test_charset_path_precedence() {
        let mut options = Options::default();
        assert_eq!(options.charset_path(None), PathBuf::from(DEFAULT_CHARSET_FILE));
        options.last_charset = Some(PathBuf::from("last.json"));
        assert_eq!(options.charset_path(None), PathBuf::from("last.json"));
        assert_eq!(options.charset_path(Some(PathBuf::from("arg.json"))), PathBuf::from("arg.json"));
    }
}
