// src/config.rs

/// The application name, used for the fallback configuration directory.
pub const APP_NAME: &str = "potplayer_playlist";
/// The settings file, stored next to the executable.
pub const CONFIG_FILE_NAME: &str = "config.txt";
/// The playlist file written into the system temporary directory.
pub const PLAYLIST_FILE_NAME: &str = "potplayer_playlist.dpl";

/// First line of every `.dpl` playlist.
pub const PLAYLIST_HEADER: &str = "DAUMPLAYLIST";
/// Separator between an entry's index and its path.
pub const PLAYLIST_ENTRY_SEPARATOR: &str = "*file*";

/// Extensions used when the config file does not provide any (lowercase, with dot).
pub const DEFAULT_EXTENSIONS: &[&str] = &[".mp4", ".mkv", ".avi", ".wmv", ".mov", ".flv", ".webm"];

/// The library root used when the config file has none.
#[cfg(windows)]
pub const DEFAULT_ROOT_VIDEO_PATH: &str = r"D:\Downloads";
#[cfg(not(windows))]
pub const DEFAULT_ROOT_VIDEO_PATH: &str = "~/Downloads";

/// Line terminator for generated playlists.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
