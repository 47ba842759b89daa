use anyhow::anyhow;

/// Error for a record that should exist but does not.
pub fn not_found(entity: &str, id: impl std::fmt::Display) -> anyhow::Error {
    anyhow!("{} {} not found", entity, id)
}

/// Context message for a failed store operation
pub fn store_context(operation: &str, entity: &str) -> String {
    format!("Failed to {} {}", operation, entity)
}

/// Context message for a value that could not be decoded from a stored row
pub fn decode_context(column: &str, value: &str) -> String {
    format!("Invalid {} value in database: '{}'", column, value)
}
