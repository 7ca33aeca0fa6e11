use crate::errors::StoreError;
use crate::event_log::EventLog;
use log::{error, warn};
use std::fs;
use std::path::Path;

fn copy_bytes(source: &Path, dest: &Path) -> Result<(), StoreError> {
    // Raw bytes, not a string read: backups must survive binary content.
    let content = fs::read(source).map_err(|e| StoreError::from_io(source, e))?;
    fs::write(dest, content).map_err(|e| StoreError::Io {
        path: dest.to_path_buf(),
        source: e,
    })
}

/// Byte-for-byte copy of a data file, fully overwriting any existing
/// destination. Logs a "Backup created" event naming both paths on success.
pub fn backup_data_files(source: &Path, dest: &Path, log: &EventLog) -> bool {
    match copy_bytes(source, dest) {
        Ok(()) => {
            log.append(
                "Backup created",
                &format!("Backed up {} to {}", source.display(), dest.display()),
            );
            true
        }
        Err(StoreError::NotFound { path }) => {
            warn!("Source file not found: {}", path.display());
            false
        }
        Err(err) => {
            error!("Error creating backup: {}", err);
            false
        }
    }
}
