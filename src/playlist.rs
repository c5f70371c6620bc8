// src/playlist.rs

use crate::config::{LINE_ENDING, PLAYLIST_ENTRY_SEPARATOR, PLAYLIST_HEADER};
use crate::error::AppError;
use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Renders `files` in the PotPlayer `.dpl` format:
///
/// ```text
/// DAUMPLAYLIST
/// 1*file*/videos/a.mp4
/// 2*file*/videos/b.mkv
/// ```
///
/// Indices start at 1 and follow the order of `files`. Every line is terminated.
pub fn render_playlist(files: &[PathBuf]) -> String {
    let mut content = String::new();
    content.push_str(PLAYLIST_HEADER);
    content.push_str(LINE_ENDING);
    for (index, file) in files.iter().enumerate() {
        content.push_str(&format!(
            "{}{}{}{}",
            index + 1, // PotPlayer counts entries from 1.
            PLAYLIST_ENTRY_SEPARATOR,
            file.display(),
            LINE_ENDING
        ));
    }
    content
}

/// Writes the playlist for `files` to `dest` as UTF-8 without a byte-order
/// mark, replacing any existing file. Returns `dest` for convenience.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_playlist(files: &[PathBuf], dest: &Path) -> Result<PathBuf, AppError> {
    let write = || -> io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(dest)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(render_playlist(files).as_bytes())?;
        writer.flush()
    };
    write().map_err(|e| AppError::io(dest, e))?;
    log::info!("Wrote {} entries to '{}'", files.len(), dest.display());
    Ok(dest.to_path_buf())
}

/// Best-effort removal of a generated playlist. A missing file or any other
/// failure is ignored and only logged at debug level.
pub fn remove_playlist(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("Removed playlist '{}'", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {} // Nothing was generated this session.
        Err(e) => log::debug!("Ignoring failure to remove '{}': {}", path.display(), e),
    }
}
