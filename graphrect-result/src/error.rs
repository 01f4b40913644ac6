use arrow::datatypes::DataType;
use thiserror::Error;

/// Unified error type for all graphrect operations.
///
/// Each variant carries enough context to diagnose the failing input without
/// re-running the operation: the column involved and, for per-value failures,
/// the row index and the offending value.
///
/// `Error` is `Send` and `Sync`, so tables can be rectified on worker threads
/// and the failure handed back to a coordinating thread.
#[derive(Error, Debug)]
pub enum Error {
    /// Arrow library error while assembling the output table.
    ///
    /// Rectification only rebuilds batches from columns of matching length, so
    /// this usually indicates a malformed input batch (for example, a
    /// `LargeUtf8` column whose offsets cannot be narrowed).
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// The column name argument was empty or consisted only of whitespace.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// No column in the table matches the requested name.
    ///
    /// Matching is exact and case-sensitive.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// A value cannot be converted to the target type without losing information.
    ///
    /// Raised for text that is not an integer literal, fractional or non-finite
    /// floats, and integers outside the target range. `row` is the first
    /// offending row; `value` is its rendering in the source column.
    #[error("column '{column}' row {row}: value {value} is not representable as {target}")]
    UnrepresentableValue {
        column: String,
        row: usize,
        value: String,
        target: DataType,
    },

    /// A null slot was found in an identifier column while nulls are rejected.
    #[error("column '{column}' row {row}: null identifier")]
    NullIdentifier { column: String, row: usize },

    /// The source column's type has no conversion rule to the target type.
    #[error("column '{column}': no conversion from {from} to {to}")]
    UnsupportedConversion {
        column: String,
        from: DataType,
        to: DataType,
    },

    /// Invalid caller input that does not fit a more specific variant.
    ///
    /// The message describes what was invalid, e.g. a column listed twice in a
    /// multi-column rectification.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state, such as an array
    /// whose concrete type disagrees with its declared data type.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create a [`Error::ColumnNotFound`] for `column`.
    #[inline]
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create a [`Error::UnrepresentableValue`] from the failing row's context.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrow::datatypes::DataType;
    /// use graphrect_result::Error;
    ///
    /// let err = Error::unrepresentable("letters", 0, "\"A\"", DataType::Int32);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "column 'letters' row 0: value \"A\" is not representable as Int32"
    /// );
    /// ```
    #[inline]
    pub fn unrepresentable(
        column: impl Into<String>,
        row: usize,
        value: impl Into<String>,
        target: DataType,
    ) -> Self {
        Error::UnrepresentableValue {
            column: column.into(),
            row,
            value: value.into(),
            target,
        }
    }

    /// Create an invalid argument error from any displayable value.
    #[inline]
    pub fn invalid_argument<E: std::fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }
}
