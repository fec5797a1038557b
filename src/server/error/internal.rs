use thiserror::Error;

/// Internal issues with stored data or the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column holds a value that doesn't match the shape the API serves.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode {column} for {table} {id}: {source}")]
    InvalidStoredJson {
        /// Table the row was read from
        table: &'static str,
        /// Column holding the malformed JSON
        column: &'static str,
        /// Primary key of the row
        id: i32,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The rate limiter could not be built from the configured window and maximum.
    #[error("Invalid rate limit configuration: {max} requests per {window_ms}ms")]
    InvalidRateLimit { window_ms: u64, max: u32 },
}
