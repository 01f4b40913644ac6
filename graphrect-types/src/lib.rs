//! Type tags shared across graphrect crates.
//!
//! Column types are represented as closed enums rather than inferred at
//! runtime: [`IdType`] enumerates the integer types an identifier column may
//! be rectified into, and [`SourceKind`] groups the Arrow types a column may
//! be rectified *from* by the conversion rule that applies to them.

pub mod id_type;
pub mod source_kind;

pub use id_type::*;
pub use source_kind::*;
