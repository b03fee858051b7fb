use thiserror::Error;

/// Errors surfaced by a [`Table`](crate::Table).
///
/// Layout itself never fails; every value normalizes to some text and every
/// configuration degrades to defined output. The only failure is writing the
/// rendered table to an output mirror.
#[derive(Debug, Error)]
pub enum TableError {
    /// Writing to the configured output mirror failed.
    ///
    /// The rendered table is carried along so callers can still use it.
    #[error("failed to write table to output mirror: {source}")]
    Mirror {
        /// The fully rendered table.
        output: String,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

impl TableError {
    /// Returns the rendered output the failed operation produced.
    pub fn output(&self) -> &str {
        match self {
            TableError::Mirror { output, .. } => output,
        }
    }
}

/// Result alias for table operations.
pub type TableResult<T> = Result<T, TableError>;
