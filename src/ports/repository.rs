//! Repository port for Q-table persistence.
//!
//! This module defines the trait boundary between the learning core and the
//! storage of learned values.

use std::path::Path;

use crate::{Result, q_learning::QTable};

/// Port for persisting and loading Q-table snapshots.
///
/// A snapshot is always written and read as a whole; saving overwrites
/// whatever was stored at the path before.
///
/// # Examples
///
/// ```no_run
/// use qtictactoe::ports::TableRepository;
/// use qtictactoe::q_learning::QTable;
/// use std::path::Path;
///
/// fn save_table<R: TableRepository>(
///     repo: &R,
///     table: &QTable,
///     path: &Path,
/// ) -> qtictactoe::Result<()> {
///     repo.save(table, path)
/// }
/// ```
pub trait TableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    fn save(&self, table: &QTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The snapshot does not exist or cannot be read
    /// - The snapshot is corrupted
    fn load(&self, path: &Path) -> Result<QTable>;

    /// Whether a snapshot is stored at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Load a snapshot, treating a missing one as "nothing learned yet".
    ///
    /// # Errors
    ///
    /// Any failure other than absence (corrupt data, permission denied) is
    /// returned so the caller can abort with a diagnostic.
    fn load_if_exists(&self, path: &Path) -> Result<Option<QTable>> {
        if !self.exists(path) {
            return Ok(None);
        }
        match self.load(path) {
            Ok(table) => Ok(Some(table)),
            // removed between the existence check and the read
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
