// src/settings_store.rs

use crate::config::{DEFAULT_EXTENSIONS, DEFAULT_ROOT_VIDEO_PATH};
use crate::error::AppError;
use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The persisted settings: the video library root and the recognised extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Top-level directory of the video library.
    pub root_path: PathBuf,
    /// Lowercase extensions including the leading dot, e.g. `.mkv`.
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            root_path: default_root_path(),
            extensions: default_extensions(),
        }
    }
}

impl Settings {
    /// Extensions formatted for display and editing, e.g. `.mp4, .mkv`.
    pub fn extensions_display(&self) -> String {
        self.extensions.join(", ")
    }
}

pub fn default_root_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_ROOT_VIDEO_PATH).into_owned())
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

/// Splits a comma separated extension list, trimming and lowercasing each
/// token and dropping empty ones. Order and duplicates are kept.
pub fn parse_extensions(text: &str) -> Vec<String> {
    text.split(',')
        .map(|ext| ext.trim().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Loads the settings from `config_path`.
///
/// Never fails: a missing or unreadable file, an empty first line or an
/// extension line with no usable entries all fall back to the defaults.
/// Read errors other than `NotFound` are logged as warnings.
pub fn load_settings(config_path: &Path) -> Settings {
    let bytes = match fs::read(config_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Could not read config file at '{}' (Error: {}). Using defaults.",
                    config_path.display(),
                    e
                );
            }
            Vec::new()
        }
    };

    // Notepad saves with a BOM; stray bytes from a legacy code page must not lose the whole file.
    let content = String::from_utf8_lossy(&bytes);
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let mut lines = content.lines();

    let root_path = match lines.next().map(str::trim) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => default_root_path(),
    };

    let extensions = match lines.next().map(parse_extensions) {
        Some(exts) if !exts.is_empty() => exts,
        _ => default_extensions(),
    };

    Settings {
        root_path,
        extensions,
    }
}

/// Writes `settings` to `config_path` as two lines, overwriting the file.
///
/// Values are written as they are; callers normalise them beforehand.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<(), AppError> {
    let write = || -> std::io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(config_path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", settings.root_path.display())?;
        writeln!(writer, "{}", settings.extensions.join(","))?;
        writer.flush()
    };
    write().map_err(|e| AppError::io(config_path, e))?;
    log::info!("Saved settings to '{}'", config_path.display());
    Ok(())
}
