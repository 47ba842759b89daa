use anyhow::anyhow;
use rusqlite::types::Type;
use serde::de::DeserializeOwned;

use crate::errors::decode_context;

/// Decodes a text column through `parse`, surfacing bad values as row errors.
pub fn decode_text<T>(
    idx: usize,
    column: &str,
    value: String,
    parse: impl Fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    parse(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            anyhow!(decode_context(column, &value)).into(),
        )
    })
}

/// Decodes a JSON array column.
pub fn decode_json<T: DeserializeOwned>(idx: usize, value: String) -> rusqlite::Result<T> {
    serde_json::from_str(&value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn encode_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}
