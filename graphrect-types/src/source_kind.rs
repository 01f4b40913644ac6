use arrow::datatypes::{DECIMAL256_MAX_PRECISION, DataType};

/// Conversion rule family for a source column.
///
/// Several Arrow types share one rule: every signed integer width widens the
/// same way, and all string encodings are parsed the same way. Dictionary
/// columns take the rule of their value type. Types with no rule (dates,
/// lists, fractional decimals, ...) have no `SourceKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `Int8` through `Int64`.
    Signed,
    /// `UInt8` through `UInt64`.
    Unsigned,
    /// `Float16`, `Float32`, `Float64`; only finite integral values convert.
    Float,
    /// `Decimal128` and `Decimal256` with scale 0.
    Decimal,
    /// `Utf8`, `LargeUtf8`, `Utf8View`, and dictionaries of those; parsed as
    /// base-10 integer literals.
    Text,
    /// `false` is 0, `true` is 1.
    Boolean,
    /// Arrow's `Null` type; every slot is null.
    Null,
}

impl SourceKind {
    /// Classify an Arrow type, or return `None` when no conversion rule applies.
    pub fn classify(data_type: &DataType) -> Option<Self> {
        match data_type {
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
                Some(SourceKind::Signed)
            }
            DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
                Some(SourceKind::Unsigned)
            }
            DataType::Float16 | DataType::Float32 | DataType::Float64 => Some(SourceKind::Float),
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => Some(SourceKind::Text),
            DataType::Decimal128(_, 0) | DataType::Decimal256(_, 0) => Some(SourceKind::Decimal),
            DataType::Dictionary(_, values) => match SourceKind::classify(values) {
                Some(SourceKind::Null) | None => None,
                kind => kind,
            },
            DataType::Boolean => Some(SourceKind::Boolean),
            DataType::Null => Some(SourceKind::Null),
            _ => None,
        }
    }

    /// The Arrow type columns of this kind are widened to before conversion.
    ///
    /// Widening is lossless for every type [`SourceKind::classify`] accepts.
    pub fn widened_type(self) -> DataType {
        match self {
            SourceKind::Signed => DataType::Int64,
            SourceKind::Unsigned => DataType::UInt64,
            SourceKind::Float => DataType::Float64,
            SourceKind::Decimal => DataType::Decimal256(DECIMAL256_MAX_PRECISION, 0),
            SourceKind::Text => DataType::Utf8,
            SourceKind::Boolean => DataType::Boolean,
            SourceKind::Null => DataType::Null,
        }
    }
}
