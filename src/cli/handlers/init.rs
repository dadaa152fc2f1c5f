use crate::config::{CONFIG_FILE_NAME, RosterConfig};
use crate::error::RosterError;
use crate::storage::Database;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

pub fn handle_init(database: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        let path = config_path.display().to_string();
        return Err(RosterError::AlreadyInitialized(path).into());
    }

    let mut config = RosterConfig::default();
    if let Some(path) = database {
        config.database.path = path.to_string_lossy().to_string();
    }

    // Opening creates the file and its tables.
    let db_path = config.database_path(&cwd);
    Database::open_at(&db_path)
        .with_context(|| format!("Failed to create database at {}", db_path.display()))?;

    config.save(&config_path)?;

    println!(
        "{} roster project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    println!("  Database: {}", db_path.display());

    Ok(())
}
