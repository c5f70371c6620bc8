// src/session.rs

use crate::error::AppError;
use crate::file_utils::{find_video_files, list_subfolders, FolderListing};
use crate::launcher::{launch_playlist, DefaultAppLauncher};
use crate::playlist::{remove_playlist, write_playlist};
use crate::settings_store::{load_settings, parse_extensions, save_settings, Settings};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Lets the user choose a directory, starting from `initial` when given.
/// `Ok(None)` means the user cancelled.
pub trait FolderPicker {
    fn pick_folder(&self, initial: Option<&Path>) -> io::Result<Option<PathBuf>>;
}

/// What a generate request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The playlist was written and handed to the player.
    Launched { count: usize, playlist: PathBuf },
    /// The folder holds no file with a recognised extension; nothing was written.
    NoVideos,
}

/// State of one interactive session: the settings in effect, where they are
/// persisted, where the playlist goes and the current folder listing.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    config_path: PathBuf,
    playlist_path: PathBuf,
    folders: FolderListing,
    closed: bool,
}

impl Session {
    /// Loads the settings from `config_path`. The folder list starts empty;
    /// call [`Session::refresh_folders`] to populate it.
    pub fn open(config_path: PathBuf, playlist_path: PathBuf) -> Self {
        let settings = load_settings(&config_path);
        log::info!(
            "Loaded settings: root '{}', extensions [{}]",
            settings.root_path.display(),
            settings.extensions_display()
        );
        Session {
            settings,
            config_path,
            playlist_path,
            folders: FolderListing::Folders(Vec::new()),
            closed: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn folders(&self) -> &FolderListing {
        &self.folders
    }

    /// Re-lists the sub-folders of the configured root. On failure the list is cleared.
    pub fn refresh_folders(&mut self) -> Result<&FolderListing, AppError> {
        self.folders = FolderListing::Folders(Vec::new()); // Stale entries must not survive a failed listing.
        self.folders = list_subfolders(&self.settings.root_path)?;
        Ok(&self.folders)
    }

    /// Scans `folder_name` under the root, writes the playlist and opens it.
    pub fn generate(
        &self,
        folder_name: &str,
        launcher: &dyn DefaultAppLauncher,
    ) -> Result<GenerateOutcome, AppError> {
        let folder = self.settings.root_path.join(folder_name);
        let files = find_video_files(&folder, &self.settings.extensions)?;
        if files.is_empty() {
            log::info!("No video files found in '{}'", folder.display());
            return Ok(GenerateOutcome::NoVideos);
        }

        let playlist = write_playlist(&files, &self.playlist_path)?;
        launch_playlist(launcher, &playlist)?;
        Ok(GenerateOutcome::Launched {
            count: files.len(),
            playlist,
        })
    }

    /// Validates and persists new settings. The caller refreshes the folder
    /// list afterwards so a listing failure is not mistaken for a failed save.
    ///
    /// The root must be an existing directory and the extension list must
    /// contain at least one entry. Nothing changes, in memory or on disk,
    /// unless both checks pass and the file was written.
    pub fn save_settings(&mut self, root_text: &str, extensions_text: &str) -> Result<(), AppError> {
        let root_path = PathBuf::from(root_text.trim());
        if root_path.as_os_str().is_empty() || !root_path.is_dir() {
            return Err(AppError::Validation(
                "The path you entered is not a valid folder. Please enter or browse to another one."
                    .to_string(),
            ));
        }

        let extensions = parse_extensions(extensions_text);
        if extensions.is_empty() {
            return Err(AppError::Validation(
                "The extension list cannot be empty.".to_string(),
            ));
        }

        let new_settings = Settings {
            root_path,
            extensions,
        };
        save_settings(&self.config_path, &new_settings)?;
        self.settings = new_settings; // Only after the file was written.
        Ok(())
    }

    /// Deletes the generated playlist, ignoring every error. Runs at most once
    /// and is also triggered when the session is dropped.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            remove_playlist(&self.playlist_path);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
