//! MessagePack implementation of the table repository.
//!
//! This adapter implements the TableRepository port using rmp_serde for
//! compact binary serialization.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    Result,
    error::Error,
    ports::TableRepository,
    q_learning::{QTable, serialization},
};

/// MessagePack-based table repository.
///
/// # Examples
///
/// ```no_run
/// use qtictactoe::adapters::MsgPackRepository;
/// use qtictactoe::ports::TableRepository;
/// use qtictactoe::q_learning::QTable;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// repo.save(&QTable::new(), Path::new("qtable.msgpack"))?;
/// let loaded = repo.load(Path::new("qtable.msgpack"))?;
/// # Ok::<(), qtictactoe::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl TableRepository for MsgPackRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serialization::write_msgpack(&mut writer, table)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;

        log::debug!("wrote {} states to {}", table.len(), path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table = serialization::read_msgpack(BufReader::new(file))?;
        log::debug!("read {} states from {}", table.len(), path.display());
        Ok(table)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
