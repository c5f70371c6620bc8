// src/file_utils.rs

use crate::config::{APP_NAME, CONFIG_FILE_NAME, PLAYLIST_FILE_NAME};
use crate::error::AppError;
use std::{
    env, fs,
    io::{Error as IoError, ErrorKind as IoErrorKind},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Result of listing the library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderListing {
    /// The root is empty or not an existing directory; the user should reconfigure it.
    InvalidRoot,
    /// Names of the immediate sub-directories, in filesystem enumeration order.
    Folders(Vec<String>),
}

/// Returns the full path to the settings file.
///
/// The file lives next to the executable. If that directory cannot be
/// determined, the user's config directory is used instead (created if needed).
///
/// # Errors
///
/// Returns an error if neither location can be determined or created.
pub fn get_config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return Ok(exe_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir_base = dirs::config_dir().ok_or_else(|| {
        IoError::new(
            IoErrorKind::NotFound,
            "Failed to determine the system's config directory.",
        )
    })?;
    let app_config_dir = config_dir_base.join(APP_NAME);
    fs::create_dir_all(&app_config_dir)?;

    Ok(app_config_dir.join(CONFIG_FILE_NAME))
}

/// Returns the well-known playlist location inside the system temporary directory.
pub fn get_playlist_path() -> PathBuf {
    env::temp_dir().join(PLAYLIST_FILE_NAME)
}

/// Lists the names of the immediate sub-directories of `root`.
///
/// An empty or non-existent root is not an error: it yields
/// [`FolderListing::InvalidRoot`] so the caller can ask for a new root.
/// No sorting is applied.
///
/// # Errors
///
/// Returns an error if reading the directory or any of its entries fails.
/// Nothing is returned partially in that case.
pub fn list_subfolders(root: &Path) -> Result<FolderListing, AppError> {
    if root.as_os_str().is_empty() || !root.is_dir() {
        return Ok(FolderListing::InvalidRoot);
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| AppError::io(root, e))? {
        let entry = entry.map_err(|e| AppError::io(root, e))?; // One bad entry fails the whole listing.
        let path = entry.path(); // is_dir() below follows symlinks, so linked folders are listed too.
        if path.is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(FolderListing::Folders(folders))
}

/// Returns true if the lowercased extension of `path`, with its leading dot,
/// is one of `extensions`.
///
/// The extension is everything from the last `.` of the file name, so a file
/// named just `.mp4` has the extension `.mp4`. Names without a dot, or ending
/// in one, never match.
pub fn has_video_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => {
            let dotted = file_name[dot..].to_lowercase();
            extensions.iter().any(|known| *known == dotted)
        }
        _ => false,
    }
}

/// Recursively scans `folder_path` for files whose extension is in `extensions`.
///
/// `extensions` must already be lowercase and include the leading dot.
/// Paths are returned absolute, in walk order. No match yields an empty `Vec`.
/// Files whose path is not valid UTF-8 are skipped with a warning, since the
/// playlist could only carry a mangled copy of their name.
///
/// # Errors
///
/// Returns an error if:
/// * `folder_path` is not a valid directory.
/// * An issue occurs while accessing files or directories during the scan.
pub fn find_video_files(folder_path: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, AppError> {
    if !folder_path.is_dir() {
        return Err(AppError::NotADirectory(folder_path.to_path_buf()));
    }
    let folder_path = std::path::absolute(folder_path).map_err(|e| AppError::io(folder_path, e))?;

    let mut video_files = Vec::new();
    for entry_result in WalkDir::new(&folder_path).min_depth(1) {
        let entry = entry_result?; // Propagate errors encountered during directory walking.
        let path = entry.path();

        if !path.is_file() || !has_video_extension(path, extensions) {
            continue;
        }
        if path.to_str().is_none() {
            log::warn!("Skipping file with a non UTF-8 path: '{}'", path.display());
            continue;
        }
        video_files.push(path.to_path_buf());
    }
    log::debug!(
        "Found {} video file(s) under '{}'",
        video_files.len(),
        folder_path.display()
    );
    Ok(video_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_list_subfolders_invalid_root() {
        assert_eq!(list_subfolders(Path::new("")).unwrap(), FolderListing::InvalidRoot);

        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(list_subfolders(&missing).unwrap(), FolderListing::InvalidRoot);

        let file = dir.path().join("file.txt");
        touch(&file);
        assert_eq!(list_subfolders(&file).unwrap(), FolderListing::InvalidRoot);
    }

    #[test]
    fn test_list_subfolders_returns_only_immediate_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Anime").join("Season 1")).unwrap();
        fs::create_dir(dir.path().join("Movies")).unwrap();
        touch(&dir.path().join("loose.mp4"));

        let folders = match list_subfolders(dir.path()).unwrap() {
            FolderListing::Folders(f) => f,
            FolderListing::InvalidRoot => panic!("root should be valid"),
        };
        // Enumeration order is unspecified.
        let names: HashSet<_> = folders.into_iter().collect();
        assert_eq!(names, HashSet::from(["Anime".to_string(), "Movies".to_string()]));
    }

    #[test]
    fn test_list_subfolders_empty_root() {
        let dir = tempdir().unwrap();
        assert_eq!(
            list_subfolders(dir.path()).unwrap(),
            FolderListing::Folders(Vec::new())
        );
    }

    #[test]
    fn test_has_video_extension_is_case_insensitive_and_exact() {
        let e = exts(&[".mp4", ".mkv"]);
        assert!(has_video_extension(Path::new("a/EP01.MP4"), &e));
        assert!(has_video_extension(Path::new("a/ep01.Mkv"), &e));
        assert!(!has_video_extension(Path::new("a/ep01.mp4.part"), &e));
        assert!(!has_video_extension(Path::new("a/ep01.mp"), &e));
        assert!(!has_video_extension(Path::new("a/README"), &e));
        assert!(!has_video_extension(Path::new("a/trailing."), &e));
    }

    #[test]
    fn test_has_video_extension_dot_only_name() {
        let e = exts(&[".mp4"]);
        assert!(has_video_extension(Path::new("clips/.MP4"), &e));
        assert!(!has_video_extension(Path::new("clips/.mp4x"), &e));
    }

    #[test]
    fn test_find_video_files_recursive_filter() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("one.MP4"));
        touch(&root.join("deep/er/two.mkv"));
        touch(&root.join("deep/three.Avi"));
        touch(&root.join("notes.txt"));
        touch(&root.join("deep/cover.jpg"));

        let found = find_video_files(root, &exts(&[".mp4", ".mkv"])).unwrap();
        let names: HashSet<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, HashSet::from(["one.MP4".to_string(), "two.mkv".to_string()]));
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_find_video_files_no_match_is_empty() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        let found = find_video_files(dir.path(), &exts(&[".mp4"])).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_find_video_files_missing_folder_is_error() {
        let dir = tempdir().unwrap();
        let result = find_video_files(&dir.path().join("gone"), &exts(&[".mp4"]));
        assert!(matches!(result, Err(AppError::NotADirectory(_))));
    }

    #[test]
    fn test_find_video_files_includes_dot_only_name() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("sub/.mkv"));
        let found = find_video_files(dir.path(), &exts(&[".mkv"])).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("sub/.mkv"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_video_files_skips_non_utf8_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        touch(&dir.path().join("good.mp4"));
        let bad_dir = dir.path().join(OsStr::from_bytes(b"bad\xa5\xd8"));
        if fs::create_dir(&bad_dir).is_err() {
            return; // Filesystem refuses non UTF-8 names.
        }
        touch(&bad_dir.join("clip.mp4"));

        let found = find_video_files(dir.path(), &exts(&[".mp4"])).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("good.mp4"));
    }

    /// Removes all permissions from `dir`. Returns false when the lock has no
    /// effect, e.g. when the tests run as root.
    #[cfg(unix)]
    fn lock_dir(dir: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
        fs::read_dir(dir).is_err()
    }

    #[cfg(unix)]
    fn unlock_dir(dir: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_list_subfolders_unreadable_root_is_io_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("library");
        fs::create_dir_all(root.join("Movies")).unwrap();

        if !lock_dir(&root) {
            unlock_dir(&root);
            return;
        }
        let result = list_subfolders(&root);
        unlock_dir(&root);

        assert!(matches!(result, Err(AppError::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_video_files_unreadable_subfolder_is_walk_error() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("open/a.mp4"));
        let locked = dir.path().join("locked");
        touch(&locked.join("b.mp4"));

        if !lock_dir(&locked) {
            unlock_dir(&locked);
            return;
        }
        let result = find_video_files(dir.path(), &exts(&[".mp4"]));
        unlock_dir(&locked);

        assert!(matches!(result, Err(AppError::Walk(_))));
    }

    #[test]
    fn test_playlist_path_is_in_temp_dir() {
        let path = get_playlist_path();
        assert_eq!(path.parent().unwrap(), env::temp_dir().as_path());
        assert_eq!(path.file_name().unwrap(), PLAYLIST_FILE_NAME);
    }
}
