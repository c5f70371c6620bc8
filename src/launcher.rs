// src/launcher.rs

use crate::error::AppError;
use std::{io, path::Path};

/// Opens a file with whatever application the OS associates with its type.
pub trait DefaultAppLauncher {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Launches through the system's file associations without waiting for the
/// spawned player to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl DefaultAppLauncher for SystemLauncher {
    fn open(&self, path: &Path) -> io::Result<()> {
        open::that_detached(path) // Returns once the handler is spawned.
    }
}

// ERROR_FILE_NOT_FOUND, SE_ERR_NOASSOC, ERROR_NO_ASSOCIATION
#[cfg(windows)]
const NO_ASSOCIATION_OS_ERRORS: &[i32] = &[2, 31, 1155];

/// Returns true if `err` means no handler is registered for the file type
/// (or the handler itself could not be found).
fn is_missing_association(err: &io::Error) -> bool {
    #[cfg(windows)]
    {
        if let Some(code) = err.raw_os_error() {
            if NO_ASSOCIATION_OS_ERRORS.contains(&code) {
                return true;
            }
        }
    }
    err.kind() == io::ErrorKind::NotFound
}

/// Opens `playlist_path` with its associated player.
///
/// # Errors
///
/// * [`AppError::NoAssociation`] when no application handles the file type.
/// * [`AppError::Launch`] for any other failure, carrying the cause.
pub fn launch_playlist(launcher: &dyn DefaultAppLauncher, playlist_path: &Path) -> Result<(), AppError> {
    match launcher.open(playlist_path) {
        Ok(()) => {
            log::info!(
                "Opened '{}' with the default system player.",
                playlist_path.display()
            );
            Ok(())
        }
        Err(e) if is_missing_association(&e) => {
            log::warn!("No handler for '{}': {}", playlist_path.display(), e);
            Err(AppError::NoAssociation(playlist_path.to_path_buf()))
        }
        Err(e) => Err(AppError::Launch {
            path: playlist_path.to_path_buf(),
            source: e,
        }),
    }
}
