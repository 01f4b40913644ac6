use std::fmt;

use arrow::datatypes::DataType;

/// Fixed-width integer type an identifier column can be rectified into.
///
/// This is a simple, C-like enum that is cheap to copy. Its only purpose is
/// to label the target of a rectification; the Arrow type it stands for is
/// available through [`IdType::to_arrow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

/// The single representation used for node IDs and edge endpoint references.
pub const CANONICAL_ID_TYPE: IdType = IdType::Int32;

impl IdType {
    /// Every supported target, narrowest signed first.
    pub const ALL: [IdType; 8] = [
        IdType::Int8,
        IdType::Int16,
        IdType::Int32,
        IdType::Int64,
        IdType::UInt8,
        IdType::UInt16,
        IdType::UInt32,
        IdType::UInt64,
    ];

    /// Arrow data type corresponding to this tag.
    #[inline]
    pub fn to_arrow(self) -> DataType {
        match self {
            IdType::Int8 => DataType::Int8,
            IdType::Int16 => DataType::Int16,
            IdType::Int32 => DataType::Int32,
            IdType::Int64 => DataType::Int64,
            IdType::UInt8 => DataType::UInt8,
            IdType::UInt16 => DataType::UInt16,
            IdType::UInt32 => DataType::UInt32,
            IdType::UInt64 => DataType::UInt64,
        }
    }

    /// Tag for an Arrow integer type, or `None` for anything else.
    pub fn from_arrow(data_type: &DataType) -> Option<Self> {
        Some(match data_type {
            DataType::Int8 => IdType::Int8,
            DataType::Int16 => IdType::Int16,
            DataType::Int32 => IdType::Int32,
            DataType::Int64 => IdType::Int64,
            DataType::UInt8 => IdType::UInt8,
            DataType::UInt16 => IdType::UInt16,
            DataType::UInt32 => IdType::UInt32,
            DataType::UInt64 => IdType::UInt64,
            _ => return None,
        })
    }

    #[inline]
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IdType::Int8 | IdType::Int16 | IdType::Int32 | IdType::Int64
        )
    }

    #[inline]
    pub fn bit_width(self) -> u32 {
        match self {
            IdType::Int8 | IdType::UInt8 => 8,
            IdType::Int16 | IdType::UInt16 => 16,
            IdType::Int32 | IdType::UInt32 => 32,
            IdType::Int64 | IdType::UInt64 => 64,
        }
    }

    /// Inclusive value range of the type, widened to `i128`.
    pub fn range(self) -> (i128, i128) {
        match self {
            IdType::Int8 => (i8::MIN.into(), i8::MAX.into()),
            IdType::Int16 => (i16::MIN.into(), i16::MAX.into()),
            IdType::Int32 => (i32::MIN.into(), i32::MAX.into()),
            IdType::Int64 => (i64::MIN.into(), i64::MAX.into()),
            IdType::UInt8 => (0, u8::MAX.into()),
            IdType::UInt16 => (0, u16::MAX.into()),
            IdType::UInt32 => (0, u32::MAX.into()),
            IdType::UInt64 => (0, u64::MAX.into()),
        }
    }

    /// Whether `value` fits in this type.
    #[inline]
    pub fn contains(self, value: i128) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }
}

impl Default for IdType {
    fn default() -> Self {
        CANONICAL_ID_TYPE
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_arrow(), f)
    }
}

impl From<IdType> for DataType {
    fn from(value: IdType) -> Self {
        value.to_arrow()
    }
}
