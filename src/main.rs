// src/main.rs

use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use std::process;

// Module declarations
mod cli;
mod config;
mod error;
mod file_utils;
mod launcher;
mod playlist;
mod session;
mod settings_store;
mod ui;

use crate::cli::Cli;
use crate::file_utils::{get_config_path, get_playlist_path};
use crate::launcher::SystemLauncher;
use crate::session::Session;
use crate::ui::TerminalFolderPicker;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("\nApplication Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _cli_args = Cli::parse();

    let config_path = get_config_path()?;
    log::debug!("Using config file '{}'", config_path.display());

    let theme = ColorfulTheme::default();
    let picker = TerminalFolderPicker::new(&theme);
    let mut session = Session::open(config_path, get_playlist_path());

    ui::run(&mut session, &SystemLauncher, &picker, &theme)
}
