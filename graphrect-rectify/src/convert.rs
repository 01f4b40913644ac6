//! Per-kind conversion rules from a widened source array to `i128` candidates.
//!
//! Each slot of the source yields `None` for null, `Some(Ok(v))` for a value
//! that is an exact integer, or `Some(Err(rendered))` for a value with no exact
//! integer form. Range checking against the target happens later, in one place.

use std::iter;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Decimal256Array, Float64Array, Int64Array, StringArray,
    UInt64Array,
};
use arrow::datatypes::i256;
use graphrect_result::{Error, Result};
use graphrect_types::SourceKind;

pub(crate) type Candidate = std::result::Result<i128, String>;

pub(crate) type Candidates<'a> = Box<dyn Iterator<Item = Option<Candidate>> + 'a>;

/// 2^64: every finite integral float below this magnitude fits in `i128`
/// exactly, and nothing at or above it fits any supported target.
const F64_TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Iterate the candidates of `array`, which must already be widened to
/// `kind.widened_type()`.
pub(crate) fn candidates(
    array: &ArrayRef,
    kind: SourceKind,
    trim_text: bool,
) -> Result<Candidates<'_>> {
    let out: Candidates<'_> = match kind {
        SourceKind::Signed => Box::new(
            downcast::<Int64Array>(array)?
                .iter()
                .map(|v| v.map(|v| Ok(i128::from(v)))),
        ),
        SourceKind::Unsigned => Box::new(
            downcast::<UInt64Array>(array)?
                .iter()
                .map(|v| v.map(|v| Ok(i128::from(v)))),
        ),
        SourceKind::Float => Box::new(
            downcast::<Float64Array>(array)?
                .iter()
                .map(|v| v.map(float_candidate)),
        ),
        SourceKind::Decimal => Box::new(
            downcast::<Decimal256Array>(array)?
                .iter()
                .map(|v| v.map(decimal_candidate)),
        ),
        SourceKind::Text => Box::new(
            downcast::<StringArray>(array)?
                .iter()
                .map(move |v| v.map(|s| parse_integer_literal(s, trim_text))),
        ),
        SourceKind::Boolean => Box::new(
            downcast::<BooleanArray>(array)?
                .iter()
                .map(|v| v.map(|b| Ok(i128::from(b)))),
        ),
        SourceKind::Null => Box::new(iter::repeat_n(None, array.len())),
    };
    Ok(out)
}

fn downcast<T: Array + 'static>(array: &ArrayRef) -> Result<&T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        Error::Internal(format!(
            "widened array of type {} failed to downcast",
            array.data_type()
        ))
    })
}

fn float_candidate(v: f64) -> Candidate {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < F64_TWO_POW_64 {
        Ok(v as i128)
    } else {
        Err(v.to_string())
    }
}

/// Scale-0 decimals are integers already; only the width can fail.
fn decimal_candidate(v: i256) -> Candidate {
    v.to_i128().ok_or_else(|| v.to_string())
}

/// Parse a base-10 integer literal with an optional leading sign.
///
/// On failure the error carries the original text, quoted.
pub(crate) fn parse_integer_literal(s: &str, trim: bool) -> Candidate {
    let literal = if trim { s.trim_ascii() } else { s };
    literal.parse::<i128>().map_err(|_| format!("{s:?}"))
}
