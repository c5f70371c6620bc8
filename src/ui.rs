// src/ui.rs

use crate::error::AppError;
use crate::file_utils::FolderListing;
use crate::launcher::DefaultAppLauncher;
use crate::session::{FolderPicker, GenerateOutcome, Session};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Asks for a folder path on the terminal, pre-filled with the current one.
pub struct TerminalFolderPicker<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> TerminalFolderPicker<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        TerminalFolderPicker { theme }
    }
}

impl FolderPicker for TerminalFolderPicker<'_> {
    fn pick_folder(&self, initial: Option<&Path>) -> io::Result<Option<PathBuf>> {
        let mut input = Input::<String>::with_theme(self.theme)
            .with_prompt("Select the root folder of your videos (empty to cancel)")
            .allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial.display().to_string());
        }
        let text = input.interact_text()?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(expand_user_path(&text))))
    }
}

/// Expands `~` and environment variables in a path typed by the user.
/// Text that cannot be expanded is returned trimmed but otherwise unchanged.
pub fn expand_user_path(text: &str) -> String {
    let trimmed = text.trim();
    shellexpand::full(trimmed)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| trimmed.to_string())
}

/// Runs the interactive menu until the user closes it, then cleans up the playlist.
///
/// # Errors
///
/// Returns an error only if terminal interaction itself fails; failures of
/// individual actions are reported and the menu continues.
pub fn run(
    session: &mut Session,
    launcher: &dyn DefaultAppLauncher,
    picker: &dyn FolderPicker,
    theme: &ColorfulTheme,
) -> Result<(), Box<dyn std::error::Error>> {
    refresh_and_report(session);

    loop {
        let action = Select::with_theme(theme)
            .with_prompt(format!(
                "Video root: {}",
                session.settings().root_path.display()
            ))
            .items(&["Generate playlist", "Settings", "Refresh folder list", "Close"])
            .default(0)
            .interact_opt()?;

        match action {
            Some(0) => pick_and_generate(session, launcher, theme)?,
            Some(1) => settings_panel(session, picker, theme)?,
            Some(2) => refresh_and_report(session),
            _ => break, // "Close" or Esc.
        }
    }

    session.close();
    println!("Goodbye!");
    Ok(())
}

fn refresh_and_report(session: &mut Session) {
    match session.refresh_folders() {
        Ok(FolderListing::InvalidRoot) => println!(
            "The current video root folder is invalid. Please set a valid folder under Settings."
        ),
        Ok(FolderListing::Folders(folders)) => {
            println!("{} folder(s) available.", folders.len())
        }
        Err(e) => eprintln!("Error while reading the folder list: {}", e),
    }
}

fn pick_and_generate(
    session: &Session,
    launcher: &dyn DefaultAppLauncher,
    theme: &ColorfulTheme,
) -> Result<(), Box<dyn std::error::Error>> {
    let folders = match session.folders() {
        FolderListing::Folders(folders) if !folders.is_empty() => folders.clone(),
        FolderListing::Folders(_) => {
            println!("There are no folders to choose from.");
            return Ok(());
        }
        FolderListing::InvalidRoot => {
            println!("Please set a valid video root folder under Settings first.");
            return Ok(());
        }
    };

    let selection = Select::with_theme(theme)
        .with_prompt("Choose a folder (Esc to go back)")
        .items(&folders)
        .default(0)
        .interact_opt()?;
    let Some(index) = selection else {
        return Ok(());
    };

    match session.generate(&folders[index], launcher) {
        Ok(GenerateOutcome::Launched { count, playlist }) => println!(
            "Opened a playlist of {} video(s): {}",
            count,
            playlist.display()
        ),
        Ok(GenerateOutcome::NoVideos) => println!(
            "No supported video files were found in the selected folder or its subfolders."
        ),
        Err(AppError::NoAssociation(_)) => eprintln!(
            "Could not start PotPlayer. Make sure PotPlayer is installed and .dpl files are associated with it."
        ),
        Err(e) => eprintln!("Error while playing: {}", e),
    }
    Ok(())
}

/// Edits a draft of the settings; only "Save settings" touches the session.
fn settings_panel(
    session: &mut Session,
    picker: &dyn FolderPicker,
    theme: &ColorfulTheme,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut draft_root = session.settings().root_path.display().to_string();
    let mut draft_extensions = session.settings().extensions_display();

    loop {
        let items = [
            format!("Root folder: {}", draft_root),
            format!("Extensions: {}", draft_extensions),
            "Browse for root folder...".to_string(),
            "Save settings".to_string(),
            "Back".to_string(),
        ];
        let choice = Select::with_theme(theme)
            .with_prompt("Settings")
            .items(&items)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => {
                let text = Input::<String>::with_theme(theme)
                    .with_prompt("Video root folder")
                    .with_initial_text(draft_root.clone())
                    .allow_empty(true)
                    .interact_text()?;
                draft_root = expand_user_path(&text);
            }
            Some(1) => {
                draft_extensions = Input::<String>::with_theme(theme)
                    .with_prompt("Extensions (comma separated)")
                    .with_initial_text(draft_extensions.clone())
                    .allow_empty(true)
                    .interact_text()?;
            }
            Some(2) => {
                let current = Path::new(&draft_root);
                let initial = current.is_dir().then_some(current);
                if let Some(folder) = picker.pick_folder(initial)? {
                    draft_root = folder.display().to_string(); // Applied on "Save settings".
                }
            }
            Some(3) => match session.save_settings(&draft_root, &draft_extensions) {
                Ok(()) => {
                    refresh_and_report(session);
                    println!("Settings saved and updated.");
                    return Ok(());
                }
                Err(AppError::Validation(message)) => println!("{}", message),
                Err(e) => eprintln!("Error while saving settings: {}", e),
            },
            _ => return Ok(()),
        }
    }
}
