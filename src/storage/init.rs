//! Storage initialization
//!
//! Handles first-run setup: the data directory, an empty expense store and a
//! settings file with defaults.

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerError;

use super::expenses::ExpenseStore;

/// Initialize storage for a fresh installation
///
/// Existing data and settings are never overwritten.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    ExpenseStore::new(paths.store_file()).ensure_initialized()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    Ok(())
}
