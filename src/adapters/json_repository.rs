//! JSON implementation of the table repository.
//!
//! Larger than MessagePack but readable, which is handy when inspecting what
//! the agent learned.

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

/// JSON-based table repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl TableRepository for JsonRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serialization::write_json(&mut writer, table)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        serialization::read_json(BufReader::new(file))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
