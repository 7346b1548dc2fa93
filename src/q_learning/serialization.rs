//! Reading and writing Q-table snapshots.
//!
//! A snapshot is the table itself: a map from state key to its nine
//! estimates. There is no envelope or version field, so every snapshot is
//! read and written as a whole. Decoding rejects malformed state keys and
//! any estimate that is not a finite number.

use std::io::{Read, Write};

use crate::{Error, Result, q_learning::q_table::QTable};

/// Encode a table as MessagePack.
pub fn write_msgpack<W: Write + ?Sized>(writer: &mut W, table: &QTable) -> Result<()> {
    rmp_serde::encode::write(writer, table).map_err(|e| Error::SerializationContext {
        operation: "serialize Q-table to MessagePack".to_string(),
        message: e.to_string(),
    })
}

/// Decode a MessagePack table.
pub fn read_msgpack<R: Read>(reader: R) -> Result<QTable> {
    let table = rmp_serde::decode::from_read(reader).map_err(|e| Error::SerializationContext {
        operation: "deserialize Q-table from MessagePack".to_string(),
        message: e.to_string(),
    })?;
    ensure_finite(table, "MessagePack")
}

/// Encode a table as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, table: &QTable) -> Result<()> {
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}

/// Decode a JSON table.
pub fn read_json<R: Read>(reader: R) -> Result<QTable> {
    ensure_finite(serde_json::from_reader(reader)?, "JSON")
}

fn ensure_finite(table: QTable, format: &str) -> Result<QTable> {
    let bad = table
        .iter()
        .find(|(_, values)| values.iter().any(|value| !value.is_finite()));
    if let Some((state, values)) = bad {
        return Err(Error::SerializationContext {
            operation: format!("deserialize Q-table from {format}"),
            message: format!("non-finite estimate for state {state}: {values:?}"),
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateKey;

    fn sample_table() -> QTable {
        let mut table = QTable::new();
        let values = table.values_for(&StateKey::parse("X...O....").unwrap());
        values[2] = 0.3;
        values[8] = -0.51;
        table.values_for(&StateKey::parse(".........").unwrap())[4] = 0.125;
        table
    }

    #[test]
    fn test_msgpack_roundtrip() -> Result<()> {
        let table = sample_table();
        let mut bytes = Vec::new();
        write_msgpack(&mut bytes, &table)?;
        let restored = read_msgpack(bytes.as_slice())?;
        assert_eq!(restored, table);
        Ok(())
    }

    #[test]
    fn test_json_is_plain_map() -> Result<()> {
        let table = sample_table();
        let mut bytes = Vec::new();
        write_json(&mut bytes, &table)?;

        let parsed: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert_eq!(parsed["X...O...."][2], 0.3);
        assert_eq!(parsed["........."].as_array().map(Vec::len), Some(9));

        assert_eq!(read_json(bytes.as_slice())?, table);
        Ok(())
    }

    #[test]
    fn test_non_finite_msgpack_is_error() -> Result<()> {
        let mut table = sample_table();
        table.values_for(&StateKey::parse(".........").unwrap())[3] = f64::NAN;
        let mut bytes = Vec::new();
        write_msgpack(&mut bytes, &table)?;

        let result = read_msgpack(bytes.as_slice());
        assert!(matches!(result, Err(Error::SerializationContext { .. })));
        Ok(())
    }

    #[test]
    fn test_bad_key_json_is_error() {
        let zeros = "[0, 0, 0, 0, 0, 0, 0, 0, 0]";
        let text = format!(r#"{{"hello world": {zeros}, "XX": {zeros}}}"#);
        assert!(read_json(text.as_bytes()).is_err());
    }

    #[test]
    fn test_corrupt_msgpack_is_error() {
        let result = read_msgpack(&[0xc1, 0x00, 0x13][..]);
        assert!(matches!(result, Err(Error::SerializationContext { .. })));
    }
}
